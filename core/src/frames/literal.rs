//! Strict parser for integer list literals such as `[1, 4, 6, 7, 8]`.
//!
//! ```text
//! list := ws* "[" ws* (int (ws* "," ws* int)* (ws* ",")?)? ws* "]" ws*
//! int  := [0-9]+
//! ```
//!
//! No expression evaluation of any kind; anything outside this grammar is
//! rejected with `None`.

use crate::types::SlotId;

/// Parse a list literal, keeping element order and duplicates.
pub fn parse_list_literal(text: &str) -> Option<Vec<SlotId>> {
    let inner = text.trim().strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.is_empty() {
        return Some(Vec::new());
    }

    // One trailing comma is allowed: "[1, 2,]".
    let inner = match inner.strip_suffix(',') {
        Some(rest) => rest.trim_end(),
        None => inner,
    };

    inner
        .split(',')
        .map(|item| {
            let item = item.trim();
            if item.is_empty() || !item.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            item.parse::<SlotId>().ok()
        })
        .collect()
}
