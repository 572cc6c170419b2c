use std::collections::HashMap;
use std::sync::Arc;

use crate::model::Provider;

#[derive(Debug, Clone, PartialEq)]
/// Pool-wide statistics shared by every scorer in one request.
///
/// Both maxima are floored to `1` when the pool maximum is zero, so scorers can divide
/// unconditionally.
pub struct NormalizationContext {
    max_stake: u64,
    max_fee: f64,
    normalized_fees: HashMap<String, f64>,
}

impl NormalizationContext {
    /// Computes the context from the filtered provider pool.
    pub fn build(providers: &[Arc<Provider>]) -> Self {
        let max_stake = match providers.iter().map(|p| p.stake).max() {
            Some(0) | None => 1,
            Some(max) => max,
        };

        let max_fee = providers.iter().map(|p| p.fee).fold(0.0_f64, f64::max);
        let max_fee = if max_fee > 0.0 { max_fee } else { 1.0 };

        let normalized_fees = providers
            .iter()
            .map(|p| (p.id.clone(), p.fee / max_fee))
            .collect();

        Self {
            max_stake,
            max_fee,
            normalized_fees,
        }
    }

    /// Largest stake in the pool (`1` if every stake is zero or the pool is empty).
    pub fn max_stake(&self) -> u64 {
        self.max_stake
    }

    /// Largest fee in the pool (`1.0` if every fee is zero or the pool is empty).
    pub fn max_fee(&self) -> f64 {
        self.max_fee
    }

    /// Fee of `provider_id` divided by the pool's max fee.
    pub fn normalized_fee(&self, provider_id: &str) -> Option<f64> {
        self.normalized_fees.get(provider_id).copied()
    }

    pub fn len(&self) -> usize {
        self.normalized_fees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_fees.is_empty()
    }
}
