//! Time-window session clusterer.
//!
//! Multiple short visits to the same passage in one sitting (scroll jitter,
//! app switches) land as separate session rows upstream. Sessions on the
//! same (book, chapter, day) whose end timestamps fall within a 10-minute
//! window collapse into one cluster, and each cluster is reduced to at most
//! two representative anchors: the most recent and the longest.

use std::collections::BTreeMap;

use crate::compact::newest_first;
use crate::models::Anchor;

use super::config::PackConfig;
use super::session::ReadingSession;

/// Cluster sessions and return the capped, newest-first list of candidate
/// anchors handed to the primary selector.
pub fn cluster_sessions(sessions: Vec<ReadingSession>, config: &PackConfig) -> Vec<Anchor> {
    let mut anchors: Vec<Anchor> = Vec::new();

    for (_, group) in group_by_passage_day(sessions) {
        for cluster in partition_clusters(group, config.cluster_window_secs) {
            for representative in cluster_representatives(&cluster) {
                anchors.push(to_anchor(representative));
            }
        }
    }

    anchors.sort_by(|a, b| {
        newest_first((a.timestamp, a.id.as_str()), (b.timestamp, b.id.as_str()))
    });
    anchors.truncate(config.max_anchor_candidates);

    anchors
}

/// Group by (book, chapter, local date). BTreeMap keeps group iteration
/// deterministic.
fn group_by_passage_day(
    sessions: Vec<ReadingSession>,
) -> BTreeMap<(String, u32, String), Vec<ReadingSession>> {
    let mut groups: BTreeMap<(String, u32, String), Vec<ReadingSession>> = BTreeMap::new();

    for session in sessions {
        let key = (
            session.book.clone(),
            session.chapter,
            session.local_date.clone(),
        );
        groups.entry(key).or_default().push(session);
    }

    groups
}

/// Sort a group newest-first, then greedily partition: a session joins the
/// current cluster when its end timestamp is within `window_secs` of the
/// cluster anchor (the first, most recent member). Sessions without an end
/// timestamp each stand alone.
fn partition_clusters(
    mut group: Vec<ReadingSession>,
    window_secs: i64,
) -> Vec<Vec<ReadingSession>> {
    group.sort_by(|a, b| {
        newest_first((a.ended_at, a.id.as_str()), (b.ended_at, b.id.as_str()))
    });

    let mut clusters: Vec<Vec<ReadingSession>> = Vec::new();

    for session in group {
        let joins = match clusters.last() {
            Some(cluster) => match (cluster[0].ended_at, session.ended_at) {
                (Some(anchor_end), Some(end)) => {
                    (anchor_end - end).num_seconds() <= window_secs
                }
                _ => false,
            },
            None => false,
        };

        if joins {
            clusters.last_mut().unwrap().push(session);
        } else {
            clusters.push(vec![session]);
        }
    }

    clusters
}

/// At most two representatives per cluster: the most recent session and the
/// longest one, deduplicated when they are the same record.
fn cluster_representatives(cluster: &[ReadingSession]) -> Vec<&ReadingSession> {
    let most_recent = &cluster[0];

    let longest = cluster
        .iter()
        .max_by(|a, b| {
            a.duration_secs
                .cmp(&b.duration_secs)
                .then_with(|| a.ended_at.cmp(&b.ended_at))
                .then_with(|| b.id.cmp(&a.id))
        })
        .unwrap_or(most_recent);

    if longest.id == most_recent.id {
        vec![most_recent]
    } else {
        vec![most_recent, longest]
    }
}

fn to_anchor(session: &ReadingSession) -> Anchor {
    let reference = match &session.verse_ranges {
        Some(ranges) => format!("{} {}", session.book, ranges.join(",")),
        None => format!("{} {}", session.book, session.chapter),
    };

    Anchor {
        id: session.id.clone(),
        reference: Some(reference),
        duration_seconds: Some(session.duration_secs),
        status: session.status.clone(),
        timestamp: session.ended_at,
        score: session.recency_score,
    }
}
