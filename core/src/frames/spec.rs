//! Frame spec grammar: `1,4,6-9,12`.
//!
//! ```text
//! spec  := token ("," token)*
//! token := ws* (int | int ws* "-" ws* int)? ws*
//! ```
//!
//! Blank tokens are skipped. Ranges are inclusive and direction-agnostic.

use std::collections::BTreeSet;

use crate::constants::MAX_RANGE_SPAN;
use crate::frames::types::FrameSpecError;
use crate::types::SlotId;

/// Parse a frame spec into ascending, unique slot ids.
pub fn parse(spec: &str) -> Result<Vec<SlotId>, FrameSpecError> {
    let mut frames = BTreeSet::new();

    for part in spec.split(',') {
        let token = part.trim();
        if token.is_empty() {
            continue;
        }

        match token.split_once('-') {
            Some((a, b)) => {
                let malformed = || FrameSpecError::MalformedRange { token: token.to_owned() };
                let a: SlotId = a.trim().parse().map_err(|_| malformed())?;
                let b: SlotId = b.trim().parse().map_err(|_| malformed())?;
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

                let span = u64::from(hi) - u64::from(lo) + 1;
                if span > MAX_RANGE_SPAN {
                    return Err(FrameSpecError::RangeTooLarge {
                        start: a,
                        end: b,
                        span,
                        max: MAX_RANGE_SPAN,
                    });
                }
                frames.extend(lo..=hi);
            }
            None => {
                let n: SlotId = token
                    .parse()
                    .map_err(|_| FrameSpecError::InvalidToken { token: token.to_owned() })?;
                frames.insert(n);
            }
        }
    }

    Ok(frames.into_iter().collect())
}

/// Render slot ids as a list literal, e.g. `[1, 4, 6, 7, 8]`.
///
/// Order is kept as given; this is the plaintext sealed into the index
/// channel.
pub fn format(indices: &[SlotId]) -> String {
    let body = indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", body)
}

/// Render slot ids in the compact spec grammar, e.g. `1,4,6-8`.
///
/// Input is sorted and deduplicated first, so `parse(&to_range_spec(x))`
/// returns the canonical form of `x`.
pub fn to_range_spec(indices: &[SlotId]) -> String {
    let sorted: BTreeSet<SlotId> = indices.iter().copied().collect();
    let mut parts = Vec::new();
    let mut iter = sorted.into_iter();

    let Some(mut start) = iter.next() else {
        return String::new();
    };
    let mut end = start;

    for n in iter {
        if end.checked_add(1) == Some(n) {
            end = n;
            continue;
        }
        parts.push(render_run(start, end));
        start = n;
        end = n;
    }
    parts.push(render_run(start, end));

    parts.join(",")
}

fn render_run(start: SlotId, end: SlotId) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}
