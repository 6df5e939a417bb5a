//! Supporting-evidence assigner.
//!
//! Notes and highlights ride along with the primary anchor whose scripture
//! reference overlaps theirs. Each artifact lands on exactly one anchor (its
//! highest-scoring match); per-anchor and global caps keep the pack bounded.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::models::{ArtifactKind, SupportArtifact};
use crate::scripture::{self, ParsedReference};

use super::config::PackConfig;
use super::scoring::{duration_bonus, recency_bucket, ScoredAnchor};

const ENABLE_LOGS: bool = false;
use crate::log_info;

const NOTE_WEIGHT: f64 = 1.2;
const HIGHLIGHT_WEIGHT: f64 = 0.9;
const SUMMARY_BONUS: f64 = 0.4;
const TAG_BONUS: f64 = 0.1;
const VERSE_OVERLAP_BONUS: f64 = 0.15;

#[derive(Debug, Clone)]
struct Assignment {
    artifact: SupportArtifact,
    anchor_index: usize,
    score: f64,
}

/// Match artifacts to primary anchors by reference overlap and keep the
/// capped best per anchor, then globally. Returns the supporting set in
/// score order; artifacts with no matching anchor are dropped from it.
pub fn assign_support(
    artifacts: &[SupportArtifact],
    primaries: &[ScoredAnchor],
    now: DateTime<Utc>,
    config: &PackConfig,
) -> Vec<SupportArtifact> {
    if primaries.is_empty() || artifacts.is_empty() {
        return Vec::new();
    }

    // Parse each primary's reference once; anchors whose reference does not
    // parse can never attract support.
    let anchor_refs: Vec<Option<ParsedReference>> = primaries
        .iter()
        .map(|p| {
            p.anchor
                .reference
                .as_deref()
                .and_then(scripture::parse_reference)
        })
        .collect();

    let mut assignments: Vec<Assignment> = Vec::new();

    for artifact in artifacts {
        let Some(artifact_ref) = artifact
            .reference
            .as_deref()
            .and_then(scripture::parse_reference)
        else {
            continue;
        };

        let best = primaries
            .iter()
            .enumerate()
            .filter_map(|(index, primary)| {
                let anchor_ref = anchor_refs[index].as_ref()?;
                if !scripture::references_match(&artifact_ref, anchor_ref) {
                    return None;
                }
                let score =
                    match_score(artifact, &artifact_ref, primary, anchor_ref, now);
                Some((index, score))
            })
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal).then_with(|| {
                    // Ties go to the lower anchor id.
                    primaries[b.0].anchor.id.cmp(&primaries[a.0].anchor.id)
                })
            });

        match best {
            Some((anchor_index, score)) => assignments.push(Assignment {
                artifact: artifact.clone(),
                anchor_index,
                score,
            }),
            None => {
                log_info!("artifact {} matched no primary anchor", artifact.id);
            }
        }
    }

    // Per-anchor cap, best first.
    sort_assignments(&mut assignments);
    let mut per_anchor_counts = vec![0usize; primaries.len()];
    let mut kept: Vec<Assignment> = Vec::new();
    for assignment in assignments {
        let count = &mut per_anchor_counts[assignment.anchor_index];
        if *count < config.max_support_per_anchor {
            *count += 1;
            kept.push(assignment);
        }
    }

    // Global cap: anchors + assigned artifacts never exceed the pack
    // ceiling.
    let budget = config
        .max_pack_entries
        .saturating_sub(primaries.len())
        .min(config.max_support_total);
    sort_assignments(&mut kept);
    kept.truncate(budget);

    kept.into_iter().map(|a| a.artifact).collect()
}

/// `anchor_base + support_weight + overlap_bonus` for one artifact/anchor
/// pairing.
fn match_score(
    artifact: &SupportArtifact,
    artifact_ref: &ParsedReference,
    primary: &ScoredAnchor,
    anchor_ref: &ParsedReference,
    now: DateTime<Utc>,
) -> f64 {
    let anchor_base =
        1.0 + primary.recency + duration_bonus(primary.anchor.duration_seconds);

    let kind_weight = match artifact.kind {
        ArtifactKind::Note => NOTE_WEIGHT,
        ArtifactKind::Highlight => HIGHLIGHT_WEIGHT,
    };
    let mut support_weight = kind_weight + recency_bucket(artifact.timestamp, now);
    if artifact.summary.is_some() {
        support_weight += SUMMARY_BONUS;
    }
    if artifact.tags.as_ref().is_some_and(|tags| !tags.is_empty()) {
        support_weight += TAG_BONUS;
    }

    let overlap_bonus = if artifact_ref.has_verses() && anchor_ref.has_verses() {
        VERSE_OVERLAP_BONUS
    } else {
        0.0
    };

    anchor_base + support_weight + overlap_bonus
}

/// Score descending, recency then id as tiebreaks.
fn sort_assignments(assignments: &mut [Assignment]) {
    assignments.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.artifact.timestamp.cmp(&a.artifact.timestamp))
            .then_with(|| a.artifact.id.cmp(&b.artifact.id))
    });
}
