use std::sync::Arc;

use pairing::model::{ConsumerPolicy, PairingScore, Provider};
use pairing::pairing::{PairingConfig, PairingSystem};

pub const LOCATIONS: [&str; 3] = ["US-West", "US-East", "EU-Central"];
pub const FEATURES: [&str; 5] = ["featA", "featB", "featC", "featD", "featE"];

pub fn ids(providers: &[Arc<Provider>]) -> Vec<String> {
    providers.iter().map(|p| p.id.clone()).collect()
}

pub fn score_ids(scores: &[PairingScore]) -> Vec<String> {
    scores.iter().map(|s| s.provider.id.clone()).collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Engine that never fans out.
pub fn sequential(config: PairingConfig) -> PairingSystem {
    PairingSystem::with_defaults(config.with_parallel_threshold(usize::MAX))
}

/// Engine that fans out for every non-empty stage.
pub fn parallel(config: PairingConfig) -> PairingSystem {
    PairingSystem::with_defaults(config.with_parallel_threshold(0).with_worker_count(4))
}

/// Deterministic pool of `count` providers cycling through locations, features and fees.
pub fn synthetic_pool(count: usize) -> Vec<Arc<Provider>> {
    (0..count)
        .map(|i| {
            let features: Vec<&str> = FEATURES
                .iter()
                .enumerate()
                .filter(|(bit, _)| (i >> bit) & 1 == 1 || *bit == 0)
                .map(|(_, f)| *f)
                .collect();

            Provider::new(
                format!("p{i}"),
                format!("addr{i}"),
                ((i * 37) % 5000) as u64,
                LOCATIONS[i % LOCATIONS.len()],
                &features,
                ((i * 13) % 97) as f64 / 10.0,
            )
            .shared()
        })
        .collect()
}

/// US-West policy over the synthetic pool, weighted toward stake.
pub fn synthetic_policy() -> ConsumerPolicy {
    ConsumerPolicy::new("US-West", &["featA"], 500).with_weights([
        ("StakeScore", 0.4),
        ("FeatureScore", 0.2),
        ("LocationScore", 0.1),
        ("FeeScore", 0.3),
    ])
}
