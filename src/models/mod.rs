pub mod candidate;
pub mod pack;

pub use candidate::{ArtifactKind, CandidateFeatures, CandidateSource, RawCandidate};
pub use pack::{
    Anchor, ContextPack, ConversationEntry, LifeEntry, MemoryEntry, PlanHints, SupportArtifact,
};
