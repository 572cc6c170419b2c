use super::NormalizationContext;
use crate::constants::{
    FEATURE_SCORE, FEE_SCORE, LOCATION_MISMATCH_SCORE, LOCATION_SCORE, STAKE_SCORE,
};
use crate::model::{ConsumerPolicy, Provider};

/// A `[0, 1]`-valued desirability function.
///
/// Implementations must be pure given the context. Names must be unique within one engine
/// because they key both the breakdown and the policy weights.
pub trait ProviderScorer: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(
        &self,
        provider: &Provider,
        policy: &ConsumerPolicy,
        context: &NormalizationContext,
    ) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
/// Stake relative to the pool's largest stake.
pub struct StakeScorer;

impl ProviderScorer for StakeScorer {
    fn name(&self) -> &'static str {
        STAKE_SCORE
    }

    fn score(
        &self,
        provider: &Provider,
        _: &ConsumerPolicy,
        context: &NormalizationContext,
    ) -> f64 {
        (provider.stake as f64 / context.max_stake() as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Share of the provider's distinct features that go beyond the policy's requirements.
///
/// A provider offering exactly the required set scores zero.
pub struct FeatureScorer;

impl ProviderScorer for FeatureScorer {
    fn name(&self) -> &'static str {
        FEATURE_SCORE
    }

    fn score(
        &self,
        provider: &Provider,
        policy: &ConsumerPolicy,
        _: &NormalizationContext,
    ) -> f64 {
        let offered = provider.distinct_features();
        if offered.is_empty() {
            return 0.0;
        }

        let required = policy.distinct_required_features();
        let extra = offered.difference(&required).count();
        extra as f64 / offered.len() as f64
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// `1.0` on a case-insensitive location match, [`LOCATION_MISMATCH_SCORE`] otherwise.
pub struct LocationScorer;

impl ProviderScorer for LocationScorer {
    fn name(&self) -> &'static str {
        LOCATION_SCORE
    }

    fn score(
        &self,
        provider: &Provider,
        policy: &ConsumerPolicy,
        _: &NormalizationContext,
    ) -> f64 {
        if provider.is_located_in(&policy.required_location) {
            1.0
        } else {
            LOCATION_MISMATCH_SCORE
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Inverted pool-relative fee: the cheapest provider scores highest.
pub struct FeeScorer;

impl ProviderScorer for FeeScorer {
    fn name(&self) -> &'static str {
        FEE_SCORE
    }

    fn score(
        &self,
        provider: &Provider,
        _: &ConsumerPolicy,
        context: &NormalizationContext,
    ) -> f64 {
        match context.normalized_fee(&provider.id) {
            Some(fee) => (1.0 - fee).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}
