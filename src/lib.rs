//! Evidence compaction and ranking engine.
//!
//! Turns a heterogeneous set of per-user records (reading sessions, text
//! highlights, notes, life-context statements, conversation summaries)
//! into a small, strictly size-bounded context pack for the downstream
//! recommendation generator. The generator must cite evidence ids for every
//! claim; this crate guarantees every id it emits traces to a real input
//! record, ranks what fits when not everything does, and never exceeds the
//! pack's hard caps.
//!
//! The whole pipeline is a pure, synchronous function of its inputs: no
//! I/O, no persistence, no shared state. Pass a fixed `now` through
//! [`PackOptions`] for byte-identical reruns.
//!
//! ```rust
//! use manna_context::{build_context_pack, CandidateSource, PackOptions, RawCandidate};
//!
//! let mut session = RawCandidate::new("rs-1", CandidateSource::BibleReadingSession);
//! session.metadata.insert("bookId".into(), "JHN".into());
//! session.metadata.insert("chapter".into(), 3.into());
//! session.metadata.insert("durationSeconds".into(), 400.into());
//! session.metadata.insert("endedAt".into(), "2026-03-05T09:30:00Z".into());
//!
//! let pack = build_context_pack(&[session], &PackOptions::default());
//! assert_eq!(pack.anchors.unwrap().len(), 1);
//! ```

pub mod anchors;
pub mod compact;
pub mod models;
pub mod pack;
pub mod scripture;
pub mod utils;

pub use anchors::{PackConfig, ReadingSession};
pub use models::{
    Anchor, ArtifactKind, CandidateFeatures, CandidateSource, ContextPack, ConversationEntry,
    LifeEntry, MemoryEntry, PlanHints, RawCandidate, SupportArtifact,
};
pub use pack::{allowed_action_types, allowed_evidence_ids, build_context_pack, PackOptions};
pub use scripture::{parse_reference, references_match, ParsedReference};
