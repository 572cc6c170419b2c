//! Provider pairing engine for a decentralized RPC marketplace (used by the CLI and integration tests).
//!
//! Given a pool of [`Provider`]s and a [`ConsumerPolicy`], a [`PairingSystem`] filters the
//! pool, scores the survivors against pool-wide maxima and returns the best few.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Provider`], [`ConsumerPolicy`], [`PairingScore`] - Data model
//! - [`PairingSystem`], [`PairingConfig`], [`PairingError`] - Engine
//!
//! ## Strategies
//! - [`ProviderFilter`] with [`LocationFilter`], [`FeatureFilter`], [`StakeFilter`]
//! - [`ProviderScorer`] with [`StakeScorer`], [`FeatureScorer`], [`LocationScorer`], [`FeeScorer`]
//! - [`NormalizationContext`], [`CombineMode`] - Normalization and combination
//!
//! ## Observability
//! - [`EventSink`], [`PairingEvent`] - Structured engine events
//! - [`TracingSink`] forwards to `tracing`; [`NoopSink`] is the default
//!
//! ## Utilities
//! - [`validate_weights`], [`validate_policy`] - Optional policy checks before pairing
//! - [`load_providers`], [`load_policy`] - JSON sources
//! - [`mock`] - Reference provider pool and policy
//! - [`Config`] - Environment configuration for the binary

pub mod config;
pub mod constants;
pub mod filter;
pub mod mock;
pub mod model;
pub mod pairing;
pub mod scoring;
pub mod source;
pub mod validation;

pub use config::{Config, ConfigError};
pub use filter::{FeatureFilter, LocationFilter, ProviderFilter, StakeFilter, default_filters};
pub use model::{ConsumerPolicy, PairingScore, Provider, ScoreBreakdown, Weights};
pub use pairing::{
    EventSink, ExecutionMode, NoopSink, PairingConfig, PairingError, PairingEvent,
    PairingResult, PairingSystem, Stage, TracingSink, WorkerPool,
};
pub use scoring::{
    CombineMode, FeatureScorer, FeeScorer, LocationScorer, NormalizationContext, ProviderScorer,
    StakeScorer, default_scorers, score_provider,
};
pub use source::{SourceError, load_policy, load_providers};
pub use validation::{ValidationError, validate_policy, validate_weights};
