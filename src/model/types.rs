use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Scorer name to weight. Supplied weights are expected to sum to `1.0`.
pub type Weights = HashMap<String, f64>;

/// Scorer name to that scorer's raw output for one provider.
pub type ScoreBreakdown = BTreeMap<&'static str, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A candidate RPC endpoint.
pub struct Provider {
    /// Unique identifier.
    pub id: String,
    /// Network address the consumer would pair with.
    pub address: String,
    /// Staked amount.
    pub stake: u64,
    /// Free-text region, compared case-insensitively.
    pub location: String,
    /// Supported features. May contain duplicates.
    #[serde(default)]
    pub features: Vec<String>,
    /// Fee charged per request.
    pub fee: f64,
}

impl Provider {
    pub fn new(
        id: impl Into<String>,
        address: impl Into<String>,
        stake: u64,
        location: impl Into<String>,
        features: &[&str],
        fee: f64,
    ) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            stake,
            location: location.into(),
            features: features.iter().map(|f| f.to_string()).collect(),
            fee,
        }
    }

    /// Wraps the provider for sharing across a request.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Returns the feature set with duplicates collapsed.
    pub fn distinct_features(&self) -> BTreeSet<&str> {
        self.features.iter().map(String::as_str).collect()
    }

    /// Returns `true` if the provider's location equals `location`, ignoring case.
    pub fn is_located_in(&self, location: &str) -> bool {
        self.location.eq_ignore_ascii_case(location)
            || self.location.to_lowercase() == location.to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// A consumer's eligibility requirements and scoring preferences.
pub struct ConsumerPolicy {
    pub required_location: String,
    #[serde(default)]
    pub required_features: Vec<String>,
    /// Inclusive lower bound on provider stake.
    #[serde(default)]
    pub min_stake: u64,
    /// Optional per-scorer weights. Empty and absent both select averaging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Weights>,
}

impl ConsumerPolicy {
    pub fn new(
        required_location: impl Into<String>,
        required_features: &[&str],
        min_stake: u64,
    ) -> Self {
        Self {
            required_location: required_location.into(),
            required_features: required_features.iter().map(|f| f.to_string()).collect(),
            min_stake,
            weights: None,
        }
    }

    pub fn with_weights<I, K>(mut self, weights: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        self.weights = Some(weights.into_iter().map(|(k, w)| (k.into(), w)).collect());
        self
    }

    /// Returns the weight mapping only when it is present and non-empty.
    pub fn weights(&self) -> Option<&Weights> {
        self.weights.as_ref().filter(|w| !w.is_empty())
    }

    /// Returns the required features with duplicates collapsed.
    pub fn distinct_required_features(&self) -> BTreeSet<&str> {
        self.required_features.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Clone)]
/// Combined score for one provider, plus the per-scorer outputs it came from.
pub struct PairingScore {
    pub provider: Arc<Provider>,
    pub score: f64,
    pub components: ScoreBreakdown,
}

impl PairingScore {
    pub fn new(provider: Arc<Provider>, score: f64, components: ScoreBreakdown) -> Self {
        Self {
            provider,
            score,
            components,
        }
    }

    /// Returns the raw output of the named scorer, if it ran.
    pub fn component(&self, name: &str) -> Option<f64> {
        self.components.get(name).copied()
    }
}
