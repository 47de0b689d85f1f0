use crate::segmenting::types::{ChunkError, Fragment};
use crate::utils::char_len;

/// Cut `text` into `count` contiguous fragments, in order.
///
/// Layout:
/// - When `count` exceeds the character count, every character becomes its
///   own fragment, so fewer than `count` fragments come back.
/// - Every fragment holds `ceil(len / count)` characters and the last one
///   takes the remainder, whenever that fills exactly `count` fragments.
/// - Otherwise (e.g. 5 chars into 4) the remainder is spread one character
///   at a time over the leading fragments, so sizes differ by at most one
///   and no fragment is empty.
///
/// Sizes are counted in `char`s, so a fragment never ends inside a
/// multi-byte character. Envelopes are ASCII, where chars and bytes agree.
pub fn split(text: &str, count: u32) -> Result<Vec<Fragment>, ChunkError> {
    if count == 0 {
        return Err(ChunkError::ZeroCount);
    }
    if text.is_empty() {
        return Err(ChunkError::EmptyInput);
    }

    let len = char_len(text);
    let n = (count as usize).min(len);

    // Byte offset of every char start, plus the end of the string.
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut fragments = Vec::with_capacity(n);
    let mut start_char = 0usize;
    for (i, size) in fragment_sizes(len, n).into_iter().enumerate() {
        let end_char = start_char + size;
        fragments.push(Fragment::new(
            i as u32,
            &text[boundaries[start_char]..boundaries[end_char]],
        ));
        start_char = end_char;
    }

    debug_assert_eq!(start_char, len);
    Ok(fragments)
}

/// Character count of each fragment. Requires `1 <= n <= len`.
fn fragment_sizes(len: usize, n: usize) -> Vec<usize> {
    let per = len.div_ceil(n);
    if len.div_ceil(per) == n {
        let mut sizes = vec![per; n - 1];
        sizes.push(len - per * (n - 1));
        return sizes;
    }

    let base = len / n;
    let extra = len % n;
    (0..n).map(|i| if i < extra { base + 1 } else { base }).collect()
}
