//! Note/highlight compactor.

use chrono::{DateTime, Utc};

use crate::models::{ArtifactKind, RawCandidate, SupportArtifact};
use crate::scripture;

use super::{newest_first, truncate_text, MAX_TAGS, PREVIEW_MAX_CHARS, REF_MAX_CHARS};

const ENABLE_LOGS: bool = false;
use crate::log_warn;

/// Reduce note/highlight candidates into support artifacts: parsed and
/// reformatted reference (raw string truncated to 48 chars when parsing
/// fails), timestamp, optional summary, up to 3 tags. Entries with neither a
/// timestamp nor a reference/summary are dropped.
pub fn compact_artifacts(candidates: &[&RawCandidate]) -> Vec<SupportArtifact> {
    let mut artifacts: Vec<SupportArtifact> = candidates
        .iter()
        .copied()
        .filter_map(compact_one)
        .collect();

    artifacts.sort_by(|a, b| {
        newest_first((a.timestamp, a.id.as_str()), (b.timestamp, b.id.as_str()))
    });

    artifacts
}

/// Artifact kind from the `artifactType` metadata tag. Session summaries and
/// unknown types yield None; the assembler routes them elsewhere or drops
/// them.
pub fn artifact_kind(candidate: &RawCandidate) -> Option<ArtifactKind> {
    match candidate.meta_str("artifactType") {
        Some("note") => Some(ArtifactKind::Note),
        Some("highlight") => Some(ArtifactKind::Highlight),
        _ => None,
    }
}

/// Whether an artifact candidate is a stored conversation summary.
pub fn is_session_summary(candidate: &RawCandidate) -> bool {
    matches!(
        candidate.meta_str("artifactType"),
        Some("session_summary") | Some("sessionSummary") | Some("session-summary")
    )
}

fn compact_one(candidate: &RawCandidate) -> Option<SupportArtifact> {
    let kind = match artifact_kind(candidate) {
        Some(kind) => kind,
        None => {
            log_warn!(
                "dropping artifact {} with unrecognized type {:?}",
                candidate.id,
                candidate.meta_str("artifactType")
            );
            return None;
        }
    };

    let reference = reference_text(candidate);
    let timestamp = artifact_timestamp(candidate);
    let summary = candidate
        .usable_preview()
        .map(|p| truncate_text(p, PREVIEW_MAX_CHARS));

    if timestamp.is_none() && reference.is_none() && summary.is_none() {
        return None;
    }

    let tags: Vec<String> = candidate
        .metadata
        .get("tags")
        .and_then(serde_json::Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(|t| t.as_str())
                .map(str::to_string)
                .take(MAX_TAGS)
                .collect()
        })
        .unwrap_or_default();

    Some(SupportArtifact {
        id: candidate.id.clone(),
        kind,
        reference,
        timestamp,
        summary,
        tags: if tags.is_empty() { None } else { Some(tags) },
    })
}

/// Canonical reference when it parses, 48-char-truncated raw text otherwise.
fn reference_text(candidate: &RawCandidate) -> Option<String> {
    let raw = candidate
        .meta_str("reference")
        .or_else(|| candidate.meta_str("ref"))?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    match scripture::parse_reference(raw) {
        Some(parsed) => Some(parsed.format()),
        None => Some(truncate_text(raw, REF_MAX_CHARS)),
    }
}

fn artifact_timestamp(candidate: &RawCandidate) -> Option<DateTime<Utc>> {
    candidate
        .feature_timestamp()
        .or_else(|| candidate.meta_timestamp("createdAt"))
}
