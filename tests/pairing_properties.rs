//! Property tests for filtering, scoring and selection.

mod common;

use std::sync::Arc;

use common::fixtures::{FEATURES, LOCATIONS, approx_eq, score_ids};
use pairing::filter::default_filters;
use pairing::model::{ConsumerPolicy, Provider};
use pairing::pairing::{PairingConfig, PairingSystem};
use pairing::scoring::{CombineMode, NormalizationContext, default_scorers, score_provider};
use proptest::prelude::*;

fn feature_subset() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(FEATURES.to_vec(), 0..=FEATURES.len())
}

fn location() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LOCATIONS.to_vec())
}

fn provider_pool() -> impl Strategy<Value = Vec<Arc<Provider>>> {
    prop::collection::vec(
        (location(), feature_subset(), 0u64..5_000, 0.0f64..10.0),
        0..80,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (location, features, stake, fee))| {
                Provider::new(format!("p{i}"), format!("addr{i}"), stake, location, &features, fee)
                    .shared()
            })
            .collect()
    })
}

fn policy() -> impl Strategy<Value = ConsumerPolicy> {
    (location(), prop::sample::subsequence(FEATURES.to_vec(), 0..=2), 0u64..3_000)
        .prop_map(|(location, features, min_stake)| {
            ConsumerPolicy::new(location, &features, min_stake)
        })
}

/// Normalized weights over the four default scorer names, some possibly omitted.
fn weights() -> impl Strategy<Value = Vec<(&'static str, f64)>> {
    prop::collection::vec(0.0f64..1.0, 4).prop_map(|raw| {
        let names = ["StakeScore", "FeatureScore", "LocationScore", "FeeScore"];
        let total: f64 = raw.iter().sum();
        if total == 0.0 {
            return vec![("StakeScore", 1.0)];
        }
        let kept: Vec<(&'static str, f64)> = names
            .into_iter()
            .zip(raw)
            .filter(|(_, w)| *w > 0.1)
            .map(|(name, w)| (name, w / total))
            .collect();
        if kept.is_empty() {
            vec![("FeeScore", 1.0)]
        } else {
            kept
        }
    })
}

fn satisfies(provider: &Provider, policy: &ConsumerPolicy) -> bool {
    provider.is_located_in(&policy.required_location)
        && provider.stake >= policy.min_stake
        && policy
            .required_features
            .iter()
            .all(|f| provider.features.contains(f))
}

proptest! {
    #[test]
    fn filtering_is_conjunctive_and_order_preserving(
        providers in provider_pool(),
        policy in policy(),
    ) {
        let system = PairingSystem::with_defaults(PairingConfig::default());
        let filtered = system.filter_providers(&providers, &policy);

        let expected: Vec<&str> = providers
            .iter()
            .filter(|p| satisfies(p, &policy))
            .map(|p| p.id.as_str())
            .collect();
        let actual: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn parallel_filtering_matches_sequential(
        providers in provider_pool(),
        policy in policy(),
    ) {
        let sequential = PairingSystem::with_defaults(
            PairingConfig::default().with_parallel_threshold(usize::MAX),
        );
        let parallel = PairingSystem::with_defaults(
            PairingConfig::default().with_parallel_threshold(0).with_worker_count(3),
        );

        let a = sequential.filter_providers(&providers, &policy);
        let b = parallel.filter_providers(&providers, &policy);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn component_scores_are_bounded(
        providers in provider_pool(),
        policy in policy(),
    ) {
        let context = NormalizationContext::build(&providers);
        let scorers = default_scorers();

        for provider in &providers {
            for scorer in &scorers {
                let score = scorer.score(provider, &policy, &context);
                prop_assert!((0.0..=1.0).contains(&score), "{} = {}", scorer.name(), score);
            }
        }
    }

    #[test]
    fn average_mode_is_mean_of_components(
        providers in provider_pool(),
        policy in policy(),
    ) {
        let context = NormalizationContext::build(&providers);
        let scorers = default_scorers();

        for provider in &providers {
            let record = score_provider(provider, &policy, &context, &scorers, CombineMode::Average);
            let mean = record.components.values().sum::<f64>() / scorers.len() as f64;

            prop_assert!(approx_eq(record.score, mean));
            prop_assert!((0.0..=1.0).contains(&record.score));
        }
    }

    #[test]
    fn weighted_mode_sums_named_components_only(
        providers in provider_pool(),
        policy in policy(),
        weights in weights(),
    ) {
        let policy = policy.with_weights(weights.clone());
        let context = NormalizationContext::build(&providers);
        let scorers = default_scorers();
        let mode = CombineMode::for_policy(&policy);

        for provider in &providers {
            let record = score_provider(provider, &policy, &context, &scorers, mode);
            let expected: f64 = weights
                .iter()
                .map(|(name, weight)| record.component(name).unwrap_or(0.0) * weight)
                .sum();

            prop_assert!(approx_eq(record.score, expected));
            prop_assert!(record.score >= 0.0 && record.score <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn selection_is_truncated_and_descending(
        providers in provider_pool(),
        policy in policy(),
        top_n in 1usize..8,
    ) {
        let system = PairingSystem::with_defaults(PairingConfig::default().with_top_n(top_n));
        let eligible = providers.iter().filter(|p| satisfies(p, &policy)).count();

        let selected = system.get_pairing_scores(&providers, &policy)?;

        prop_assert_eq!(selected.len(), eligible.min(top_n));
        for pair in selected.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn strict_mode_fails_exactly_when_lenient_is_empty(
        providers in provider_pool(),
        policy in policy(),
    ) {
        let lenient = PairingSystem::with_defaults(PairingConfig::default());
        let strict = PairingSystem::with_defaults(PairingConfig::strict());

        let lenient_result = lenient.get_pairing_scores(&providers, &policy)?;
        match strict.get_pairing_scores(&providers, &policy) {
            Ok(strict_result) => {
                prop_assert!(!lenient_result.is_empty());
                prop_assert_eq!(score_ids(&strict_result), score_ids(&lenient_result));
            }
            Err(_) => prop_assert!(lenient_result.is_empty()),
        }
    }
}

#[test]
fn default_filter_order() {
    let names: Vec<_> = default_filters().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["LocationFilter", "FeatureFilter", "StakeFilter"]);
}
