//! Multi-criteria provider scoring.
//!
//! Scoring runs in three steps, all request-scoped:
//!
//! 1. [`NormalizationContext::build`] derives pool-wide statistics from the *filtered* pool.
//!    It runs to completion before any provider is scored.
//! 2. Every [`ProviderScorer`] maps a provider to a value in `[0, 1]` against that shared
//!    context. Outputs are kept per scorer name in a [`ScoreBreakdown`].
//! 3. [`CombineMode`] folds the breakdown into one final score: the arithmetic mean when the
//!    policy carries no weights, otherwise the weighted sum over scorers present in the mapping.
//!
//! # Weighted Mode
//!
//! Weights are trusted as given. A scorer absent from a non-empty mapping contributes exactly
//! zero and the remaining weights are *not* renormalized, so the final score can fall short of
//! the nominal total. Validation belongs upstream (see [`crate::validation`]).

mod combiner;
mod context;
mod scorer;


use std::sync::Arc;

use crate::model::{ConsumerPolicy, PairingScore, Provider, ScoreBreakdown};

pub use combiner::CombineMode;
pub use context::NormalizationContext;
pub use scorer::{FeatureScorer, FeeScorer, LocationScorer, ProviderScorer, StakeScorer};

/// Stake, feature, location and fee scorers, in that order.
pub fn default_scorers() -> Vec<Box<dyn ProviderScorer>> {
    vec![
        Box::new(StakeScorer),
        Box::new(FeatureScorer),
        Box::new(LocationScorer),
        Box::new(FeeScorer),
    ]
}

/// Runs every scorer against `provider` and combines the outputs.
pub fn score_provider(
    provider: &Arc<Provider>,
    policy: &ConsumerPolicy,
    context: &NormalizationContext,
    scorers: &[Box<dyn ProviderScorer>],
    mode: CombineMode<'_>,
) -> PairingScore {
    let components: ScoreBreakdown = scorers
        .iter()
        .map(|scorer| (scorer.name(), scorer.score(provider, policy, context)))
        .collect();

    let score = mode.combine(&components);
    PairingScore::new(Arc::clone(provider), score, components)
}
