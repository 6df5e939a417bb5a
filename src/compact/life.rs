//! Life-context compactor: free-text statements about the user's situation.

use crate::models::{LifeEntry, RawCandidate};

use super::{newest_first, truncate_text, PREVIEW_MAX_CHARS};

/// Reduce life-context candidates to id + truncated statement text.
/// Candidates with no usable preview are dropped.
pub fn compact_life(candidates: &[&RawCandidate]) -> Vec<LifeEntry> {
    let mut kept: Vec<&RawCandidate> = candidates
        .iter()
        .copied()
        .filter(|c| c.usable_preview().is_some())
        .collect();

    kept.sort_by(|a, b| {
        newest_first(
            (statement_timestamp(a), a.id.as_str()),
            (statement_timestamp(b), b.id.as_str()),
        )
    });

    kept.into_iter()
        .map(|c| LifeEntry {
            id: c.id.clone(),
            text: truncate_text(c.usable_preview().unwrap_or_default(), PREVIEW_MAX_CHARS),
        })
        .collect()
}

fn statement_timestamp(candidate: &RawCandidate) -> Option<chrono::DateTime<chrono::Utc>> {
    candidate
        .feature_timestamp()
        .or_else(|| candidate.meta_timestamp("createdAt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateSource;

    fn life(id: &str, preview: Option<&str>) -> RawCandidate {
        let mut candidate = RawCandidate::new(id, CandidateSource::LifeContext);
        candidate.preview = preview.map(str::to_string);
        candidate
    }

    #[test]
    fn drops_candidates_without_preview() {
        let a = life("life-1", Some("Started a new job this month"));
        let b = life("life-2", None);
        let c = life("life-3", Some("   "));

        let entries = compact_life(&[&a, &b, &c]);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "life-1");
    }

    #[test]
    fn truncates_long_statements() {
        let text = "a".repeat(400);
        let a = life("life-1", Some(&text));

        let entries = compact_life(&[&a]);
        assert_eq!(entries[0].text.chars().count(), PREVIEW_MAX_CHARS + 1);
    }
}
