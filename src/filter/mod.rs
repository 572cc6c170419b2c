//! Eligibility filters.
//!
//! A filter is a pure predicate over `(provider, policy)`. The pairing engine applies every
//! configured filter conjunctively: a provider survives only if all of them accept it.
//!
//! [`ProviderFilter::apply`] and [`ProviderFilter::matches`] must agree: `apply` over a slice
//! returns exactly the subsequence for which `matches` is `true`, in input order. The
//! sequential stage uses `apply` filter by filter; the worker pool uses `matches` per provider.

mod filters;


use std::sync::Arc;

use crate::model::{ConsumerPolicy, Provider};

pub use filters::{FeatureFilter, LocationFilter, StakeFilter};

/// A binary eligibility predicate.
pub trait ProviderFilter: Send + Sync {
    /// Stable name used in events and logs.
    fn name(&self) -> &'static str;

    /// Returns `true` if `provider` satisfies this filter's policy dimension.
    fn matches(&self, provider: &Provider, policy: &ConsumerPolicy) -> bool;

    /// Returns the providers accepted by [`matches`](Self::matches), preserving input order.
    fn apply(&self, providers: &[Arc<Provider>], policy: &ConsumerPolicy) -> Vec<Arc<Provider>> {
        providers
            .iter()
            .filter(|p| self.matches(p, policy))
            .cloned()
            .collect()
    }
}

/// Location, feature and stake filters, in that order.
pub fn default_filters() -> Vec<Box<dyn ProviderFilter>> {
    vec![
        Box::new(LocationFilter),
        Box::new(FeatureFilter),
        Box::new(StakeFilter),
    ]
}
