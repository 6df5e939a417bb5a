//! Reading-session extraction from raw candidates.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::models::RawCandidate;
use crate::scripture;

use super::config::PackConfig;

const ENABLE_LOGS: bool = false;
use crate::log_info;

/// A reading session resolved from a raw candidate's metadata, the unit the
/// clusterer works on.
#[derive(Debug, Clone)]
pub struct ReadingSession {
    pub id: String,
    pub book: String,
    pub chapter: u32,
    pub verse_ranges: Option<Vec<String>>,
    /// Local calendar date ("YYYY-MM-DD"); falls back to the date portion of
    /// the end timestamp, then the literal "unknown".
    pub local_date: String,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_secs: i64,
    pub status: Option<String>,
    /// Precomputed recency score carried from the fetch layer.
    pub recency_score: Option<f64>,
}

/// Resolve reading-session candidates, discarding records that lack a
/// passage or ran shorter than the noise threshold.
pub fn extract_sessions(
    candidates: &[&RawCandidate],
    config: &PackConfig,
) -> Vec<ReadingSession> {
    let mut sessions = Vec::new();

    for candidate in candidates {
        let Some(session) = resolve_session(candidate) else {
            log_info!("skipping session {} with no resolvable passage", candidate.id);
            continue;
        };

        if session.duration_secs < config.min_session_duration_secs {
            log_info!(
                "dropping session {} as noise ({}s)",
                session.id,
                session.duration_secs
            );
            continue;
        }

        sessions.push(session);
    }

    sessions
}

fn resolve_session(candidate: &RawCandidate) -> Option<ReadingSession> {
    let raw_book = candidate
        .meta_str("bookId")
        .or_else(|| candidate.meta_str("book"))?
        .trim();
    if raw_book.is_empty() {
        return None;
    }

    // Canonicalize known names and aliases so "John" and "JHN" sessions
    // group together and anchor refs come out in compact form. Ids the
    // table does not know pass through untouched.
    let book = match scripture::book_code(raw_book) {
        Some(code) => code.to_string(),
        None => raw_book.to_string(),
    };

    let chapter = candidate
        .meta_f64("chapter")
        .filter(|c| *c >= 1.0 && c.fract() == 0.0)? as u32;

    let ended_at = candidate
        .meta_timestamp("endedAt")
        .or_else(|| candidate.feature_timestamp());

    let local_date = candidate
        .meta_str("localDate")
        .map(str::to_string)
        .or_else(|| ended_at.map(|ts| ts.date_naive().to_string()))
        .unwrap_or_else(|| "unknown".to_string());

    let verse_ranges = candidate
        .metadata
        .get("verseRanges")
        .and_then(Value::as_array)
        .map(|ranges| {
            ranges
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|ranges| !ranges.is_empty());

    Some(ReadingSession {
        id: candidate.id.clone(),
        book,
        chapter,
        verse_ranges,
        local_date,
        ended_at,
        duration_secs: candidate
            .meta_f64("durationSeconds")
            .map(|d| d as i64)
            .unwrap_or(0),
        status: candidate.meta_str("status").map(str::to_string),
        recency_score: candidate.features.as_ref().and_then(|f| f.recency_score),
    })
}
