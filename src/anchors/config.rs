/// Configuration for the compaction pipeline with tunable thresholds.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Sessions shorter than this are instrumentation noise and dropped.
    pub min_session_duration_secs: i64,

    /// Sessions on the same passage/day whose end timestamps fall within
    /// this window of the cluster anchor join that cluster.
    pub cluster_window_secs: i64,

    /// Cap on anchor candidates kept before scoring.
    pub max_anchor_candidates: usize,

    /// Cap on compacted artifacts kept as assignment candidates; the
    /// compactors sort newest-first, so this keeps the most recent.
    pub max_artifacts: usize,

    /// Primary anchors surviving selection.
    pub max_primary_anchors: usize,

    /// Hard ceiling on anchors + assigned artifacts in one pack.
    pub max_pack_entries: usize,

    /// Supporting artifacts attached to a single anchor.
    pub max_support_per_anchor: usize,

    /// Supporting artifacts across the whole pack (further limited by
    /// `max_pack_entries` minus the anchor count).
    pub max_support_total: usize,

    pub max_conversations: usize,
    pub max_allowed_actions: usize,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            min_session_duration_secs: 15,
            cluster_window_secs: 600,
            max_anchor_candidates: 24,
            max_artifacts: 24,
            max_primary_anchors: 9,
            max_pack_entries: 12,
            max_support_per_anchor: 2,
            max_support_total: 6,
            max_conversations: 10,
            max_allowed_actions: 32,
        }
    }
}
