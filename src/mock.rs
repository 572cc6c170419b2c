//! Reference provider pool and consumer policy.
//!
//! Used by the CLI when no data files are configured, and by tests as a known-answer fixture.

use std::sync::Arc;

use crate::constants::{FEATURE_SCORE, LOCATION_SCORE, STAKE_SCORE};
use crate::model::{ConsumerPolicy, Provider};

/// Eight providers spread over three regions.
pub fn providers() -> Vec<Arc<Provider>> {
    vec![
        Provider::new("1", "provider1", 1000, "US-West", &["featA", "featB", "featC"], 3.0),
        Provider::new("2", "provider2", 2000, "US-East", &["featA", "featB"], 0.015),
        Provider::new("3", "provider3", 1500, "EU-Central", &["featA", "featC", "featD"], 4.5),
        Provider::new("4", "provider4", 500, "US-West", &["featB"], 0.005),
        Provider::new(
            "5",
            "provider5",
            2500,
            "US-West",
            &["featA", "featB", "featC", "featExtra"],
            0.8,
        ),
        Provider::new("6", "provider6", 1200, "EU-Central", &["featA", "featD", "featE"], 1.7),
        Provider::new(
            "7",
            "provider7",
            800,
            "US-East",
            &["featA", "featB", "featC", "featX"],
            2.0,
        ),
        Provider::new(
            "8",
            "provider8",
            3000,
            "US-West",
            &["featA", "featB", "featC", "featY", "featZ"],
            2.5,
        ),
    ]
    .into_iter()
    .map(Provider::shared)
    .collect()
}

/// US-West policy requiring `featA` and `featB` with a 1000 minimum stake.
///
/// The fee scorer is deliberately left out of the weights, so it contributes nothing to the
/// final score.
pub fn consumer_policy() -> ConsumerPolicy {
    ConsumerPolicy::new("US-West", &["featA", "featB"], 1000).with_weights([
        (STAKE_SCORE, 0.5),
        (FEATURE_SCORE, 0.3),
        (LOCATION_SCORE, 0.2),
    ])
}
