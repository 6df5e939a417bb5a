//! Per-source compactors.
//!
//! Each submodule reduces raw candidates of one source into compact output
//! records. Shared rules live here: truncation appends a single ellipsis
//! character, and every compactor sorts its output newest-first before any
//! downstream cap is applied.

pub mod artifact;
pub mod conversation;
pub mod life;
pub mod memory;

pub use artifact::compact_artifacts;
pub use conversation::compact_conversations;
pub use life::compact_life;
pub use memory::compact_memory;

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Hard cap on preview/summary text. With the ellipsis a truncated string is
/// at most 161 characters.
pub const PREVIEW_MAX_CHARS: usize = 160;

/// Fallback cap for raw reference strings that failed to parse.
pub const REF_MAX_CHARS: usize = 48;

/// At most this many tags survive on an artifact.
pub const MAX_TAGS: usize = 3;

/// Truncate to `max_chars` characters, appending an ellipsis when anything
/// was cut. Char-based so multi-byte text never splits.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Newest-first ordering over optional timestamps: entries without a
/// timestamp sort last, ties break on id for determinism.
pub(crate) fn newest_first(
    a: (Option<DateTime<Utc>>, &str),
    b: (Option<DateTime<Utc>>, &str),
) -> Ordering {
    match (a.0, b.0) {
        (Some(ts_a), Some(ts_b)) => ts_b.cmp(&ts_a).then_with(|| a.1.cmp(b.1)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.1.cmp(b.1),
    }
}
