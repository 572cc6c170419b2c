use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// Strict mode is on and no provider passed every filter.
    #[error("strict mode: no providers matched the filter criteria ({initial_count} considered)")]
    NoEligibleProviders { initial_count: usize },
}

pub type PairingResult<T> = Result<T, PairingError>;
