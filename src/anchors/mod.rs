pub mod cluster;
pub mod config;
pub mod scoring;
pub mod session;
pub mod support;

pub use cluster::cluster_sessions;
pub use config::PackConfig;
pub use scoring::{select_primary_anchors, ScoredAnchor};
pub use session::{extract_sessions, ReadingSession};
pub use support::assign_support;
