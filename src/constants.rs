//! Cross-cutting, shared constants.
//!
//! Strategy names double as keys in [`ConsumerPolicy::weights`](crate::model::ConsumerPolicy)
//! and in every [`ScoreBreakdown`](crate::model::ScoreBreakdown), so they are kept here rather
//! than next to each implementation.

/// Maximum number of providers returned by a pairing request.
pub const DEFAULT_TOP_N: usize = 5;

/// Provider count at or above which a stage fans out to the worker pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 50;

/// Fixed size of the worker pool used by the parallel stages.
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// Tolerance used when checking that supplied weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Score assigned by the location scorer when the location does not match.
pub const LOCATION_MISMATCH_SCORE: f64 = 0.5;

pub const LOCATION_FILTER: &str = "LocationFilter";
pub const FEATURE_FILTER: &str = "FeatureFilter";
pub const STAKE_FILTER: &str = "StakeFilter";

pub const STAKE_SCORE: &str = "StakeScore";
pub const FEATURE_SCORE: &str = "FeatureScore";
pub const LOCATION_SCORE: &str = "LocationScore";
pub const FEE_SCORE: &str = "FeeScore";
