//! Pack assembly.
//!
//! Runs the full pipeline (partition, compact, cluster, score, assign) and
//! merges the sections into the final bounded `ContextPack`. Also home
//! to the extraction helpers downstream validation uses to reject generator
//! output citing unknown evidence.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashSet;

use crate::anchors::{
    assign_support, cluster_sessions, extract_sessions, select_primary_anchors, PackConfig,
};
use crate::compact::{
    artifact::is_session_summary, compact_artifacts, compact_conversations, compact_life,
    compact_memory,
};
use crate::models::{Anchor, CandidateSource, ContextPack, PlanHints, RawCandidate};

const ENABLE_LOGS: bool = false;
use crate::log_info;

/// Caller-supplied knobs for one pack build.
#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    /// Reference time for recency buckets. Defaults to `Utc::now()`; pass a
    /// fixed value for reproducible output.
    pub now: Option<DateTime<Utc>>,
    pub plan: Option<PlanHints>,
    /// Enabled action types, embedded as the pack's allow-list.
    pub allowed_actions: Vec<String>,
    pub config: PackConfig,
}

/// Build a context pack from raw candidates. Pure and total: malformed
/// candidates are dropped, never surfaced as errors, and an empty pack is a
/// valid output.
pub fn build_context_pack(candidates: &[RawCandidate], options: &PackOptions) -> ContextPack {
    let now = options.now.unwrap_or_else(Utc::now);
    let config = &options.config;

    let mut life_candidates = Vec::new();
    let mut memory_candidates = Vec::new();
    let mut session_candidates = Vec::new();
    let mut artifact_candidates = Vec::new();
    let mut conversation_candidates = Vec::new();

    for candidate in candidates {
        if !candidate.is_valid() {
            log_info!("dropping candidate with empty id (source {})", candidate.source.as_str());
            continue;
        }

        match candidate.source {
            CandidateSource::LifeContext => life_candidates.push(candidate),
            CandidateSource::UserMemory => memory_candidates.push(candidate),
            CandidateSource::BibleReadingSession => session_candidates.push(candidate),
            CandidateSource::Conversation => conversation_candidates.push(candidate),
            CandidateSource::Artifact => {
                // The summarizer stores conversation summaries as artifacts.
                if is_session_summary(candidate) {
                    conversation_candidates.push(candidate);
                } else {
                    artifact_candidates.push(candidate);
                }
            }
        }
    }

    let life = compact_life(&life_candidates);
    let memory = compact_memory(&memory_candidates);
    let mut artifacts = compact_artifacts(&artifact_candidates);
    artifacts.truncate(config.max_artifacts);
    let mut conversations = compact_conversations(&conversation_candidates);
    conversations.truncate(config.max_conversations);

    let sessions = extract_sessions(&session_candidates, config);
    let anchor_candidates = cluster_sessions(sessions, config);
    let primaries = select_primary_anchors(anchor_candidates, now, config);
    let assigned = assign_support(&artifacts, &primaries, now, config);

    let anchors: Vec<Anchor> = primaries
        .into_iter()
        .map(|scored| {
            let mut anchor = scored.anchor;
            anchor.score = Some(scored.score);
            anchor
        })
        .collect();

    ContextPack {
        plan: options.plan.clone(),
        life: non_empty(life),
        memory: non_empty(memory),
        anchors: non_empty(anchors),
        artifacts: non_empty(assigned),
        conversations: non_empty(conversations),
        allowed_actions: non_empty(dedup_actions(
            &options.allowed_actions,
            config.max_allowed_actions,
        )),
    }
}

/// A list field is omitted entirely, never emitted empty.
fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn dedup_actions(actions: &[String], cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    actions
        .iter()
        .filter(|action| !action.trim().is_empty())
        .filter(|action| seen.insert(action.as_str()))
        .take(cap)
        .cloned()
        .collect()
}

/// Sections whose entries carry evidence ids.
const EVIDENCE_FIELDS: &[&str] = &["life", "memory", "anchors", "artifacts", "conversations"];

/// Every evidence id appearing in any list field of a serialized pack.
/// Defensive: foreign or malformed shapes yield an empty set, never an
/// error.
pub fn allowed_evidence_ids(pack: &Value) -> Vec<String> {
    let Some(object) = pack.as_object() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for field in EVIDENCE_FIELDS {
        let Some(Value::Array(entries)) = object.get(*field) else {
            continue;
        };
        for entry in entries {
            if let Some(id) = entry.get("id").and_then(Value::as_str) {
                if !id.is_empty() && seen.insert(id.to_string()) {
                    ids.push(id.to_string());
                }
            }
        }
    }

    ids
}

/// The pack's action allow-list, when one was embedded. Foreign shapes
/// yield None.
pub fn allowed_action_types(pack: &Value) -> Option<Vec<String>> {
    let entries = pack.as_object()?.get("allowedActions")?.as_array()?;
    Some(
        entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}
