//! Context pack data models.
//!
//! The pack is the engine's only output: a strictly size-bounded set of
//! compacted evidence records. Every list field is omitted from the wire
//! shape when empty so the downstream generator never sees empty sections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::candidate::ArtifactKind;

/// Response-mode hints passed through from the caller untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_length: Option<String>,
}

/// A compacted life-context statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeEntry {
    pub id: String,
    pub text: String,
}

/// A compacted user-memory fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryEntry {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
}

/// A compacted conversation summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A primary reading-session evidence item, either a single session or the
/// reduced representative of a same-passage/same-day cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anchor {
    pub id: String,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// A note or highlight riding along with an anchor whose scripture
/// reference overlaps its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportArtifact {
    pub id: String,
    pub kind: ArtifactKind,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// The final bounded output consumed by the downstream generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextPack {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanHints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub life: Option<Vec<LifeEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<Vec<MemoryEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchors: Option<Vec<Anchor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<SupportArtifact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversations: Option<Vec<ConversationEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_actions: Option<Vec<String>>,
}

impl ContextPack {
    /// Every evidence id surfaced by this pack, in section order. Downstream
    /// validation rejects generator output citing anything outside this set.
    pub fn evidence_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        if let Some(life) = &self.life {
            ids.extend(life.iter().map(|e| e.id.clone()));
        }
        if let Some(memory) = &self.memory {
            ids.extend(memory.iter().map(|e| e.id.clone()));
        }
        if let Some(anchors) = &self.anchors {
            ids.extend(anchors.iter().map(|a| a.id.clone()));
        }
        if let Some(artifacts) = &self.artifacts {
            ids.extend(artifacts.iter().map(|a| a.id.clone()));
        }
        if let Some(conversations) = &self.conversations {
            ids.extend(conversations.iter().map(|c| c.id.clone()));
        }
        ids
    }
}
