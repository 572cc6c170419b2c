use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOP_N, DEFAULT_WORKER_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Engine settings for a [`PairingSystem`](super::PairingSystem).
pub struct PairingConfig {
    /// Fail with [`PairingError::NoEligibleProviders`](super::PairingError) instead of
    /// returning an empty list when filtering leaves nothing. Default: `false`.
    pub strict_mode: bool,
    /// Provider count at or above which a stage runs on the worker pool. Default: `50`.
    pub parallel_threshold: usize,
    /// Worker threads per parallel stage. Default: `10`.
    pub worker_count: usize,
    /// Maximum providers returned. Default: `5`.
    pub top_n: usize,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            worker_count: DEFAULT_WORKER_COUNT,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl PairingConfig {
    pub fn strict() -> Self {
        Self::default().with_strict_mode(true)
    }

    pub fn with_strict_mode(mut self, strict_mode: bool) -> Self {
        self.strict_mode = strict_mode;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_worker_count(mut self, workers: usize) -> Self {
        self.worker_count = workers;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
