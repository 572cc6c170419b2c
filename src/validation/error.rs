use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("malformed weights: {reason}")]
    MalformedWeights { reason: String },
}
