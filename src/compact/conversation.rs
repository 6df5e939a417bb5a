//! Conversation-summary compactor.
//!
//! Covers both conversation-source candidates and artifact candidates the
//! summarizer stored with a session-summary type; the assembler routes both
//! here.

use chrono::{DateTime, Utc};

use crate::models::{ConversationEntry, RawCandidate};

use super::{newest_first, truncate_text, PREVIEW_MAX_CHARS};

/// Reduce conversation summaries to id + timestamp + truncated text.
/// Entries with neither a timestamp nor any summary text are dropped.
pub fn compact_conversations(candidates: &[&RawCandidate]) -> Vec<ConversationEntry> {
    let mut kept: Vec<(&RawCandidate, Option<DateTime<Utc>>)> = candidates
        .iter()
        .copied()
        .map(|c| (c, conversation_timestamp(c)))
        .filter(|(c, ts)| ts.is_some() || c.usable_preview().is_some())
        .collect();

    kept.sort_by(|a, b| newest_first((a.1, a.0.id.as_str()), (b.1, b.0.id.as_str())));

    kept.into_iter()
        .map(|(c, timestamp)| ConversationEntry {
            id: c.id.clone(),
            timestamp,
            summary: c
                .usable_preview()
                .map(|p| truncate_text(p, PREVIEW_MAX_CHARS)),
        })
        .collect()
}

/// First of: fetch-layer recency timestamp, createdAt, endedAt.
fn conversation_timestamp(candidate: &RawCandidate) -> Option<DateTime<Utc>> {
    candidate
        .feature_timestamp()
        .or_else(|| candidate.meta_timestamp("createdAt"))
        .or_else(|| candidate.meta_timestamp("endedAt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateSource;
    use serde_json::json;

    fn conversation(id: &str) -> RawCandidate {
        RawCandidate::new(id, CandidateSource::Conversation)
    }

    #[test]
    fn falls_back_through_timestamp_sources() {
        let mut a = conversation("conv-1");
        a.metadata
            .insert("endedAt".into(), json!("2026-03-01T10:00:00Z"));
        a.preview = Some("Talked about forgiveness".to_string());

        let entries = compact_conversations(&[&a]);
        assert_eq!(
            entries[0].timestamp.map(|t| t.to_rfc3339()),
            Some("2026-03-01T10:00:00+00:00".to_string())
        );
    }

    #[test]
    fn drops_entries_with_no_timestamp_and_no_text() {
        let a = conversation("conv-1");
        assert!(compact_conversations(&[&a]).is_empty());
    }

    #[test]
    fn sorts_newest_first() {
        let mut a = conversation("conv-1");
        a.metadata
            .insert("createdAt".into(), json!("2026-03-01T10:00:00Z"));
        a.preview = Some("older".to_string());

        let mut b = conversation("conv-2");
        b.metadata
            .insert("createdAt".into(), json!("2026-03-02T10:00:00Z"));
        b.preview = Some("newer".to_string());

        let entries = compact_conversations(&[&a, &b]);
        assert_eq!(entries[0].id, "conv-2");
    }
}
