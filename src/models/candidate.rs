//! Raw candidate data model.
//!
//! Represents one per-user record handed to the engine by the fetch layer,
//! normalized into a common envelope before compaction. Source-specific data
//! rides in the `metadata` bag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Which upstream store a candidate came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    LifeContext,
    UserMemory,
    BibleReadingSession,
    Artifact,
    Conversation,
}

impl CandidateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateSource::LifeContext => "life_context",
            CandidateSource::UserMemory => "user_memory",
            CandidateSource::BibleReadingSession => "bible_reading_session",
            CandidateSource::Artifact => "artifact",
            CandidateSource::Conversation => "conversation",
        }
    }
}

/// Note vs highlight. Session-summary artifacts are routed to the
/// conversation compactor instead and never become a `SupportArtifact`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Note,
    Highlight,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Note => "note",
            ArtifactKind::Highlight => "highlight",
        }
    }
}

/// Ranking signals attached by the fetch layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFeatures {
    /// Precomputed recency score in [0, 1], when the fetch query scored it.
    pub recency_score: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// One raw input record to be compacted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCandidate {
    pub id: String,
    pub source: CandidateSource,
    pub preview: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub features: Option<CandidateFeatures>,
}

impl RawCandidate {
    pub fn new(id: impl Into<String>, source: CandidateSource) -> Self {
        Self {
            id: id.into(),
            source,
            preview: None,
            metadata: Map::new(),
            features: None,
        }
    }

    /// A candidate missing its id carries no citable evidence and is dropped
    /// before any compaction stage sees it.
    pub fn is_valid(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Preview text with surrounding whitespace stripped, None when unusable.
    pub fn usable_preview(&self) -> Option<&str> {
        self.preview
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// String-valued metadata field.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }

    /// Numeric metadata field.
    pub fn meta_f64(&self, key: &str) -> Option<f64> {
        self.metadata.get(key).and_then(Value::as_f64)
    }

    /// Timestamp metadata field, parsed from an ISO 8601 / RFC 3339 string.
    pub fn meta_timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.meta_str(key)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Timestamp from the fetch layer's features, when present.
    pub fn feature_timestamp(&self) -> Option<DateTime<Utc>> {
        self.features.as_ref().and_then(|f| f.created_at)
    }
}
