/// Edit-distance radius used by [`SearchEngine::search_default`](crate::SearchEngine::search_default).
pub const DEFAULT_MAX_DISTANCE: usize = 2;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Stale BK-tree terms tolerated before `maintenance_compact` rebuilds the tree.
    pub rebuild_threshold: usize,
    pub default_max_distance: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rebuild_threshold: 100,
            default_max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}
