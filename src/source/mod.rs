//! JSON-backed provider and policy sources.
//!
//! The engine only consumes materialized data; this module is one way to obtain it.

pub mod error;


pub use error::SourceError;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{ConsumerPolicy, Provider};

/// Reads a JSON array of providers.
pub fn load_providers(path: &Path) -> Result<Vec<Arc<Provider>>, SourceError> {
    let providers: Vec<Provider> = read_json(path)?;
    debug!(path = %path.display(), count = providers.len(), "Loaded providers");
    Ok(providers.into_iter().map(Provider::shared).collect())
}

/// Reads a JSON consumer policy.
pub fn load_policy(path: &Path) -> Result<ConsumerPolicy, SourceError> {
    let policy: ConsumerPolicy = read_json(path)?;
    debug!(
        path = %path.display(),
        location = %policy.required_location,
        "Loaded consumer policy"
    );
    Ok(policy)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let raw = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
