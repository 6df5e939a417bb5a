//! User-memory compactor: durable facts extracted by the memory pipeline.

use serde_json::Value;

use crate::models::{MemoryEntry, RawCandidate};

use super::{newest_first, truncate_text, PREVIEW_MAX_CHARS};

/// Reduce memory-fact candidates to id + truncated text, carrying the theme
/// key and strength score through when the store recorded them.
pub fn compact_memory(candidates: &[&RawCandidate]) -> Vec<MemoryEntry> {
    let mut kept: Vec<&RawCandidate> = candidates
        .iter()
        .copied()
        .filter(|c| c.usable_preview().is_some())
        .collect();

    kept.sort_by(|a, b| {
        newest_first(
            (fact_timestamp(a), a.id.as_str()),
            (fact_timestamp(b), b.id.as_str()),
        )
    });

    kept.into_iter()
        .map(|c| MemoryEntry {
            id: c.id.clone(),
            text: truncate_text(c.usable_preview().unwrap_or_default(), PREVIEW_MAX_CHARS),
            theme: theme_key(c),
            strength: c.meta_f64("strength"),
        })
        .collect()
}

/// Theme from the structured fact value, falling back to the raw
/// memory-type tag.
fn theme_key(candidate: &RawCandidate) -> Option<String> {
    let structured = candidate
        .metadata
        .get("value")
        .and_then(Value::as_object)
        .and_then(|value| value.get("theme"))
        .and_then(Value::as_str);

    structured
        .or_else(|| candidate.meta_str("memoryType"))
        .map(str::to_string)
}

fn fact_timestamp(candidate: &RawCandidate) -> Option<chrono::DateTime<chrono::Utc>> {
    candidate
        .feature_timestamp()
        .or_else(|| candidate.meta_timestamp("createdAt"))
}
