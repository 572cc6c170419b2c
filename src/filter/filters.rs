use std::sync::Arc;

use super::ProviderFilter;
use crate::constants::{FEATURE_FILTER, LOCATION_FILTER, STAKE_FILTER};
use crate::model::{ConsumerPolicy, Provider};

#[derive(Debug, Clone, Copy, Default)]
/// Keeps providers located in the policy's required location (case-insensitive).
pub struct LocationFilter;

impl ProviderFilter for LocationFilter {
    fn name(&self) -> &'static str {
        LOCATION_FILTER
    }

    fn matches(&self, provider: &Provider, policy: &ConsumerPolicy) -> bool {
        provider.is_located_in(&policy.required_location)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Keeps providers offering every required feature.
pub struct FeatureFilter;

impl FeatureFilter {
    fn covers(provider: &Provider, required: &[&str]) -> bool {
        let offered = provider.distinct_features();
        required.iter().all(|feature| offered.contains(feature))
    }
}

impl ProviderFilter for FeatureFilter {
    fn name(&self) -> &'static str {
        FEATURE_FILTER
    }

    fn matches(&self, provider: &Provider, policy: &ConsumerPolicy) -> bool {
        let required: Vec<&str> = policy.distinct_required_features().into_iter().collect();
        Self::covers(provider, &required)
    }

    // Builds the required set once per batch instead of once per provider.
    fn apply(&self, providers: &[Arc<Provider>], policy: &ConsumerPolicy) -> Vec<Arc<Provider>> {
        let required: Vec<&str> = policy.distinct_required_features().into_iter().collect();
        providers
            .iter()
            .filter(|p| Self::covers(p, &required))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Keeps providers whose stake is at least the policy minimum.
pub struct StakeFilter;

impl ProviderFilter for StakeFilter {
    fn name(&self) -> &'static str {
        STAKE_FILTER
    }

    fn matches(&self, provider: &Provider, policy: &ConsumerPolicy) -> bool {
        provider.stake >= policy.min_stake
    }
}
