//! Request-scoped data model: providers, consumer policies and score records.
//!
//! Everything here is immutable for the duration of a pairing request. Providers travel
//! through the engine as `Arc<Provider>` so every worker shares the same allocation.

mod types;


pub use types::{ConsumerPolicy, PairingScore, Provider, ScoreBreakdown, Weights};
