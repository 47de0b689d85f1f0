use crate::segmenting::types::{ChunkError, Fragment};

/// Concatenate fragment texts in the order given.
///
/// Exact left inverse of `split`: `join(split(s, n)) == s`.
pub fn join<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments.into_iter().fold(String::new(), |mut acc, f| {
        acc.push_str(f.as_ref());
        acc
    })
}

/// Concatenate numbered fragments in sequence order.
///
/// Fragments may arrive in any order but must cover `0..n` exactly once.
pub fn join_fragments(fragments: &[Fragment]) -> Result<String, ChunkError> {
    let mut ordered: Vec<&Fragment> = fragments.iter().collect();
    ordered.sort_by_key(|f| f.sequence_index);

    for (expected, fragment) in ordered.iter().enumerate() {
        if fragment.sequence_index != expected as u32 {
            return Err(ChunkError::SequenceGap {
                expected: expected as u32,
                found: fragment.sequence_index,
            });
        }
    }

    Ok(join(ordered.iter().map(|f| f.text.as_str())))
}
