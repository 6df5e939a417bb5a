//! Primary anchor scoring and selection.
//!
//! `score = type_weight + recency + duration_bonus`. The recency component
//! is kept alongside the total because the support assigner reuses it when
//! pricing anchor/artifact matches.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::models::Anchor;

use super::config::PackConfig;

/// Sessions at least this long count as substantial reads.
const SUBSTANTIAL_READ_SECS: i64 = 300;

/// Duration saturates here for bonus purposes.
const DURATION_CEILING_SECS: i64 = 900;

const DURATION_BONUS_WEIGHT: f64 = 0.35;

/// An anchor with its selection score attached.
#[derive(Debug, Clone)]
pub struct ScoredAnchor {
    pub anchor: Anchor,
    pub score: f64,
    pub recency: f64,
}

/// Score all candidate anchors and keep the top-K primary subset, ordered
/// best-first. Ties break on more recent timestamp, then id, so identical
/// input always yields identical output.
pub fn select_primary_anchors(
    candidates: Vec<Anchor>,
    now: DateTime<Utc>,
    config: &PackConfig,
) -> Vec<ScoredAnchor> {
    let mut scored: Vec<ScoredAnchor> = candidates
        .into_iter()
        .map(|anchor| {
            let recency = anchor_recency(&anchor, now);
            let score = type_weight(&anchor)
                + recency
                + duration_bonus(anchor.duration_seconds);
            ScoredAnchor {
                anchor,
                score,
                recency,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.anchor.timestamp.cmp(&a.anchor.timestamp))
            .then_with(|| a.anchor.id.cmp(&b.anchor.id))
    });
    scored.truncate(config.max_primary_anchors);

    scored
}

/// 1.4 for reads the user is still in the middle of, 1.1 for substantial
/// completed reads, 0.9 otherwise.
fn type_weight(anchor: &Anchor) -> f64 {
    if let Some(status) = &anchor.status {
        let status = status.to_lowercase();
        if status.contains("in progress")
            || status.contains("in_progress")
            || status.contains("continue")
            || status.contains("resume")
        {
            return 1.4;
        }
    }

    match anchor.duration_seconds {
        Some(duration) if duration >= SUBSTANTIAL_READ_SECS => 1.1,
        _ => 0.9,
    }
}

/// The anchor's stored recency score when the fetch layer provided one,
/// otherwise a bucketed function of age.
pub fn anchor_recency(anchor: &Anchor, now: DateTime<Utc>) -> f64 {
    match anchor.score {
        Some(stored) => stored,
        None => recency_bucket(anchor.timestamp, now),
    }
}

/// Bucketed age score; unknown timestamps land in the oldest bucket.
pub fn recency_bucket(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    let Some(timestamp) = timestamp else {
        return 0.3;
    };

    let age_days = (now - timestamp).num_days();
    if age_days < 1 {
        1.0
    } else if age_days < 7 {
        0.9
    } else if age_days < 30 {
        0.7
    } else if age_days < 90 {
        0.5
    } else {
        0.3
    }
}

/// `min(duration, 900) / 900 * 0.35`; 0 when duration is unknown.
pub fn duration_bonus(duration_secs: Option<i64>) -> f64 {
    match duration_secs {
        Some(duration) => {
            let capped = duration.clamp(0, DURATION_CEILING_SECS) as f64;
            capped / DURATION_CEILING_SECS as f64 * DURATION_BONUS_WEIGHT
        }
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> DateTime<Utc> {
        raw.parse().unwrap()
    }

    fn anchor(id: &str, timestamp: &str, duration: i64) -> Anchor {
        Anchor {
            id: id.to_string(),
            reference: Some("JHN 3".to_string()),
            duration_seconds: Some(duration),
            status: None,
            timestamp: Some(ts(timestamp)),
            score: None,
        }
    }

    #[test]
    fn in_progress_outranks_long_completed_reads() {
        let now = ts("2026-03-05T12:00:00Z");
        let mut resumed = anchor("rs-1", "2026-03-05T09:00:00Z", 60);
        resumed.status = Some("in_progress".to_string());
        let long_read = anchor("rs-2", "2026-03-05T09:00:00Z", 400);

        let primaries =
            select_primary_anchors(vec![long_read, resumed], now, &PackConfig::default());
        assert_eq!(primaries[0].anchor.id, "rs-1");
    }

    #[test]
    fn recency_buckets_step_down_with_age() {
        let now = ts("2026-03-05T12:00:00Z");
        assert_eq!(recency_bucket(Some(ts("2026-03-05T09:00:00Z")), now), 1.0);
        assert_eq!(recency_bucket(Some(ts("2026-03-01T12:00:00Z")), now), 0.9);
        assert_eq!(recency_bucket(Some(ts("2026-02-10T12:00:00Z")), now), 0.7);
        assert_eq!(recency_bucket(Some(ts("2025-12-20T12:00:00Z")), now), 0.5);
        assert_eq!(recency_bucket(Some(ts("2025-06-01T12:00:00Z")), now), 0.3);
        assert_eq!(recency_bucket(None, now), 0.3);
    }

    #[test]
    fn stored_score_overrides_age_bucket() {
        let now = ts("2026-03-05T12:00:00Z");
        let mut stale_but_scored = anchor("rs-1", "2025-01-01T09:00:00Z", 60);
        stale_but_scored.score = Some(0.95);

        assert_eq!(anchor_recency(&stale_but_scored, now), 0.95);
    }

    #[test]
    fn duration_bonus_saturates() {
        assert_eq!(duration_bonus(None), 0.0);
        assert!((duration_bonus(Some(450)) - 0.175).abs() < 1e-9);
        assert!((duration_bonus(Some(900)) - 0.35).abs() < 1e-9);
        assert!((duration_bonus(Some(5000)) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn keeps_top_nine_with_deterministic_ties() {
        let now = ts("2026-03-05T12:00:00Z");
        let candidates: Vec<Anchor> = (0..12)
            .map(|i| anchor(&format!("rs-{i:02}"), "2026-03-05T09:00:00Z", 60))
            .collect();

        let primaries = select_primary_anchors(candidates, now, &PackConfig::default());
        assert_eq!(primaries.len(), 9);
        // All scores equal; ids decide.
        assert_eq!(primaries[0].anchor.id, "rs-00");
        assert_eq!(primaries[8].anchor.id, "rs-08");
    }
}
