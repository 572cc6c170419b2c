//! Environment-backed configuration for the `pairing` binary.
//!
//! Every setting has a default. Override with `PAIRING_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_TOP_N, DEFAULT_WORKER_COUNT};
use crate::pairing::PairingConfig;

/// Binary configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `PAIRING_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fail when no provider matches the policy. Default: `true`.
    pub strict_mode: bool,

    /// Provider count at which stages switch to the worker pool. Default: `50`.
    pub parallel_threshold: usize,

    /// Worker threads per parallel stage. Default: `10`.
    pub worker_count: usize,

    /// Maximum providers returned. Default: `5`.
    pub top_n: usize,

    /// JSON file with the provider pool. Built-in reference pool when unset.
    pub providers_path: Option<PathBuf>,

    /// JSON file with the consumer policy. Built-in reference policy when unset.
    pub policy_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_mode: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            worker_count: DEFAULT_WORKER_COUNT,
            top_n: DEFAULT_TOP_N,
            providers_path: None,
            policy_path: None,
        }
    }
}

impl Config {
    const ENV_STRICT_MODE: &'static str = "PAIRING_STRICT_MODE";
    const ENV_PARALLEL_THRESHOLD: &'static str = "PAIRING_PARALLEL_THRESHOLD";
    const ENV_WORKER_COUNT: &'static str = "PAIRING_WORKER_COUNT";
    const ENV_TOP_N: &'static str = "PAIRING_TOP_N";
    const ENV_PROVIDERS_PATH: &'static str = "PAIRING_PROVIDERS_PATH";
    const ENV_POLICY_PATH: &'static str = "PAIRING_POLICY_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let strict_mode = Self::parse_bool_from_env(Self::ENV_STRICT_MODE, defaults.strict_mode)?;
        let parallel_threshold =
            Self::parse_usize_from_env(Self::ENV_PARALLEL_THRESHOLD, defaults.parallel_threshold)?;
        let worker_count =
            Self::parse_usize_from_env(Self::ENV_WORKER_COUNT, defaults.worker_count)?;
        let top_n = Self::parse_usize_from_env(Self::ENV_TOP_N, defaults.top_n)?;
        let providers_path = Self::parse_optional_path_from_env(Self::ENV_PROVIDERS_PATH);
        let policy_path = Self::parse_optional_path_from_env(Self::ENV_POLICY_PATH);

        Ok(Self {
            strict_mode,
            parallel_threshold,
            worker_count,
            top_n,
            providers_path,
            policy_path,
        })
    }

    /// Validates counts and data paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count == 0 {
            return Err(ConfigError::ZeroWorkers);
        }

        if self.top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }

        for path in [&self.providers_path, &self.policy_path].into_iter().flatten() {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Engine settings derived from this configuration.
    pub fn pairing_config(&self) -> PairingConfig {
        PairingConfig::default()
            .with_strict_mode(self.strict_mode)
            .with_parallel_threshold(self.parallel_threshold)
            .with_worker_count(self.worker_count)
            .with_top_n(self.top_n)
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool { name, value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidNumber {
                    name,
                    value,
                    source,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
