//! Consumer-policy validation.
//!
//! This runs *before* a policy reaches the pairing engine. The engine itself trusts whatever
//! weights it is handed and never calls into this module.

pub mod error;

pub use error::ValidationError;

use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::model::{ConsumerPolicy, Weights};

/// Checks a weight mapping.
///
/// An absent or empty mapping is valid (the engine falls back to averaging). Otherwise every
/// weight must be finite and within `[0, 1]`, and the weights must sum to `1.0`. Scorers may
/// be omitted; they then carry no weight.
pub fn validate_weights(weights: Option<&Weights>) -> Result<(), ValidationError> {
    let Some(weights) = weights.filter(|w| !w.is_empty()) else {
        return Ok(());
    };

    if let Some((name, weight)) = weights
        .iter()
        .find(|(_, w)| !w.is_finite() || !(0.0..=1.0).contains(*w))
    {
        return Err(ValidationError::MalformedWeights {
            reason: format!("weight for '{name}' must be within [0, 1], got {weight}"),
        });
    }

    let total: f64 = weights.values().sum();
    if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ValidationError::MalformedWeights {
            reason: format!("weights must sum to 1, got {total:.4}"),
        });
    }

    Ok(())
}

/// Validates the policy's weights.
pub fn validate_policy(policy: &ConsumerPolicy) -> Result<(), ValidationError> {
    validate_weights(policy.weights.as_ref())
}
