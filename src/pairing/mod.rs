//! Pairing orchestrator: filter, normalize, score, combine, sort, truncate.
//!
//! [`PairingSystem`] owns an ordered set of [`ProviderFilter`]s and [`ProviderScorer`]s and
//! drives one request through them:
//!
//! ```text
//! providers ─▶ filter ─┬─▶ (empty) ─▶ strict: NoEligibleProviders / lenient: []
//!                      └─▶ normalize ─▶ score ─▶ combine ─▶ sort ─▶ top-N
//! ```
//!
//! Each stage independently runs in-line below [`PairingConfig::parallel_threshold`] providers
//! and on a [`WorkerPool`] at or above it. The filter stage restores input order after the
//! pool drains, so its output is always a subsequence of the input. Scoring results come back
//! in arrival order; the final ranking is by score, with ties kept in filtered order, so the
//! returned list does not depend on worker timing.
//!
//! Providers, the policy and the normalization context are shared read-only across workers.

mod config;
mod error;
pub mod events;
pub mod pool;


use std::cmp::Ordering;
use std::sync::Arc;

use crate::filter::{ProviderFilter, default_filters};
use crate::model::{ConsumerPolicy, PairingScore, Provider};
use crate::scoring::{
    CombineMode, NormalizationContext, ProviderScorer, default_scorers, score_provider,
};

pub use config::PairingConfig;
pub use error::{PairingError, PairingResult};
pub use events::{EventSink, ExecutionMode, NoopSink, PairingEvent, Stage, TracingSink};
pub use pool::WorkerPool;

/// Selects the best-matching providers for a consumer policy.
pub struct PairingSystem {
    filters: Vec<Box<dyn ProviderFilter>>,
    scorers: Vec<Box<dyn ProviderScorer>>,
    sink: Arc<dyn EventSink>,
    pool: WorkerPool,
    config: PairingConfig,
}

impl std::fmt::Debug for PairingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<_> = self.filters.iter().map(|f| f.name()).collect();
        let scorers: Vec<_> = self.scorers.iter().map(|s| s.name()).collect();
        f.debug_struct("PairingSystem")
            .field("filters", &filters)
            .field("scorers", &scorers)
            .field("pool", &self.pool)
            .field("config", &self.config)
            .finish()
    }
}

impl PairingSystem {
    /// Creates an engine with the given strategies and a [`NoopSink`].
    pub fn new(
        filters: Vec<Box<dyn ProviderFilter>>,
        scorers: Vec<Box<dyn ProviderScorer>>,
        config: PairingConfig,
    ) -> Self {
        Self {
            filters,
            scorers,
            sink: Arc::new(NoopSink),
            pool: WorkerPool::new(config.worker_count),
            config,
        }
    }

    /// Creates an engine with [`default_filters`] and [`default_scorers`].
    pub fn with_defaults(config: PairingConfig) -> Self {
        Self::new(default_filters(), default_scorers(), config)
    }

    /// Replaces the event sink.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &PairingConfig {
        &self.config
    }

    pub fn filters(&self) -> &[Box<dyn ProviderFilter>] {
        &self.filters
    }

    pub fn scorers(&self) -> &[Box<dyn ProviderScorer>] {
        &self.scorers
    }

    /// Execution strategy for a stage over `provider_count` providers.
    pub fn execution_mode(&self, provider_count: usize) -> ExecutionMode {
        if provider_count < self.config.parallel_threshold {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Parallel {
                workers: self.pool.workers(),
            }
        }
    }

    /// Returns the providers that pass every filter, in input order.
    pub fn filter_providers(
        &self,
        providers: &[Arc<Provider>],
        policy: &ConsumerPolicy,
    ) -> Vec<Arc<Provider>> {
        let mode = self.execution_mode(providers.len());
        self.emit(PairingEvent::StageStarted {
            stage: Stage::Filter,
            provider_count: providers.len(),
            mode,
        });

        let filtered = if providers.is_empty() {
            Vec::new()
        } else if mode.is_parallel() {
            self.filter_parallel(providers, policy)
        } else {
            self.filter_sequential(providers, policy)
        };

        self.emit(PairingEvent::StageFinished {
            stage: Stage::Filter,
            provider_count: filtered.len(),
            mode,
        });
        filtered
    }

    /// Scores every provider. Records are in arrival order, not ranked.
    pub fn rank_providers(
        &self,
        providers: &[Arc<Provider>],
        policy: &ConsumerPolicy,
    ) -> Vec<PairingScore> {
        self.score_indexed(providers, policy)
            .into_iter()
            .map(|(_, score)| score)
            .collect()
    }

    /// Returns up to `top_n` providers, best first.
    ///
    /// # Errors
    ///
    /// [`PairingError::NoEligibleProviders`] when strict mode is on and no provider passes
    /// the filters. In lenient mode the same input yields an empty list.
    pub fn get_pairing_list(
        &self,
        providers: &[Arc<Provider>],
        policy: &ConsumerPolicy,
    ) -> PairingResult<Vec<Arc<Provider>>> {
        let selected = self.get_pairing_scores(providers, policy)?;
        Ok(selected.into_iter().map(|s| s.provider).collect())
    }

    /// Like [`get_pairing_list`](Self::get_pairing_list), but keeps the score records.
    pub fn get_pairing_scores(
        &self,
        providers: &[Arc<Provider>],
        policy: &ConsumerPolicy,
    ) -> PairingResult<Vec<PairingScore>> {
        self.emit(PairingEvent::PairingStarted {
            provider_count: providers.len(),
        });

        let filtered = self.filter_providers(providers, policy);
        if filtered.is_empty() {
            self.emit(PairingEvent::NoEligibleProviders {
                strict: self.config.strict_mode,
            });

            if self.config.strict_mode {
                return Err(PairingError::NoEligibleProviders {
                    initial_count: providers.len(),
                });
            }

            self.emit(PairingEvent::PairingFinished { selected_count: 0 });
            return Ok(Vec::new());
        }

        let mut scored = self.score_indexed(&filtered, policy);
        scored.sort_by(|(pos_a, a), (pos_b, b)| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(pos_a.cmp(pos_b))
        });
        scored.truncate(self.config.top_n);

        let selected: Vec<PairingScore> = scored.into_iter().map(|(_, score)| score).collect();
        for (rank, record) in selected.iter().enumerate() {
            self.emit(PairingEvent::ProviderSelected {
                rank: rank + 1,
                provider_id: &record.provider.id,
                address: &record.provider.address,
                score: record.score,
                components: &record.components,
            });
        }

        self.emit(PairingEvent::PairingFinished {
            selected_count: selected.len(),
        });
        Ok(selected)
    }

    fn filter_sequential(
        &self,
        providers: &[Arc<Provider>],
        policy: &ConsumerPolicy,
    ) -> Vec<Arc<Provider>> {
        let mut filtered = providers.to_vec();
        for filter in &self.filters {
            let count_before = filtered.len();
            filtered = filter.apply(&filtered, policy);
            self.emit(PairingEvent::FilterApplied {
                filter: filter.name(),
                count_before,
                count_after: filtered.len(),
            });
        }
        filtered
    }

    fn filter_parallel(
        &self,
        providers: &[Arc<Provider>],
        policy: &ConsumerPolicy,
    ) -> Vec<Arc<Provider>> {
        let filters = &self.filters;
        let items: Vec<(usize, Arc<Provider>)> = providers.iter().cloned().enumerate().collect();

        // Workers report the first rejecting filter, which is enough to reproduce the
        // per-filter counts of the sequential path.
        let mut verdicts = self.pool.run(items, |_, (position, provider)| {
            let rejected_by = filters.iter().position(|f| !f.matches(&provider, policy));
            (position, provider, rejected_by)
        });
        verdicts.sort_unstable_by_key(|(position, _, _)| *position);

        let mut rejections = vec![0usize; filters.len()];
        let mut survivors = Vec::with_capacity(verdicts.len());
        for (_, provider, rejected_by) in verdicts {
            match rejected_by {
                Some(index) => rejections[index] += 1,
                None => survivors.push(provider),
            }
        }

        let mut remaining = providers.len();
        for (filter, rejected) in filters.iter().zip(rejections) {
            self.emit(PairingEvent::FilterApplied {
                filter: filter.name(),
                count_before: remaining,
                count_after: remaining - rejected,
            });
            remaining -= rejected;
        }

        survivors
    }

    /// Scores providers, tagging each record with its position in `providers`.
    fn score_indexed(
        &self,
        providers: &[Arc<Provider>],
        policy: &ConsumerPolicy,
    ) -> Vec<(usize, PairingScore)> {
        let mode = self.execution_mode(providers.len());
        self.emit(PairingEvent::StageStarted {
            stage: Stage::Score,
            provider_count: providers.len(),
            mode,
        });

        if providers.is_empty() {
            self.emit(PairingEvent::StageFinished {
                stage: Stage::Score,
                provider_count: 0,
                mode,
            });
            return Vec::new();
        }

        let context = NormalizationContext::build(providers);
        self.emit(PairingEvent::ContextBuilt {
            max_stake: context.max_stake(),
            max_fee: context.max_fee(),
        });

        let combine = CombineMode::for_policy(policy);
        let scored: Vec<(usize, PairingScore)> = if mode.is_parallel() {
            let items: Vec<(usize, Arc<Provider>)> =
                providers.iter().cloned().enumerate().collect();
            self.pool.run(items, |worker, (position, provider)| {
                let record = self.score_one(&provider, policy, &context, combine, Some(worker));
                (position, record)
            })
        } else {
            providers
                .iter()
                .enumerate()
                .map(|(position, provider)| {
                    let record = self.score_one(provider, policy, &context, combine, None);
                    (position, record)
                })
                .collect()
        };

        self.emit(PairingEvent::StageFinished {
            stage: Stage::Score,
            provider_count: scored.len(),
            mode,
        });
        scored
    }

    fn score_one(
        &self,
        provider: &Arc<Provider>,
        policy: &ConsumerPolicy,
        context: &NormalizationContext,
        combine: CombineMode<'_>,
        worker: Option<usize>,
    ) -> PairingScore {
        let record = score_provider(provider, policy, context, &self.scorers, combine);
        self.emit(PairingEvent::ProviderScored {
            provider_id: &provider.id,
            score: record.score,
            components: &record.components,
            combine: combine.label(),
            worker,
        });
        record
    }

    fn emit(&self, event: PairingEvent<'_>) {
        self.sink.emit(&event);
    }
}
