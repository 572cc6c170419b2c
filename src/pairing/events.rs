//! Observability events emitted by the pairing engine.
//!
//! The engine reports to an [`EventSink`] instead of a logger so embedders choose the
//! transport. [`NoopSink`] is the default; [`TracingSink`] forwards to `tracing`.

use std::fmt;

use tracing::{debug, info, warn};

use crate::model::ScoreBreakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Filter,
    Score,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Filter => write!(f, "filter"),
            Stage::Score => write!(f, "score"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a stage was executed, chosen from the provider count alone.
pub enum ExecutionMode {
    Sequential,
    Parallel { workers: usize },
}

impl ExecutionMode {
    pub fn is_parallel(&self) -> bool {
        matches!(self, ExecutionMode::Parallel { .. })
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
            ExecutionMode::Parallel { workers } => write!(f, "parallel({workers})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A discrete, borrowed observation from one pairing request.
pub enum PairingEvent<'a> {
    PairingStarted {
        provider_count: usize,
    },
    StageStarted {
        stage: Stage,
        provider_count: usize,
        mode: ExecutionMode,
    },
    /// Provider counts on either side of one filter. Emitted in filter order for both
    /// execution modes.
    FilterApplied {
        filter: &'static str,
        count_before: usize,
        count_after: usize,
    },
    StageFinished {
        stage: Stage,
        provider_count: usize,
        mode: ExecutionMode,
    },
    ContextBuilt {
        max_stake: u64,
        max_fee: f64,
    },
    ProviderScored {
        provider_id: &'a str,
        score: f64,
        components: &'a ScoreBreakdown,
        combine: &'static str,
        worker: Option<usize>,
    },
    NoEligibleProviders {
        strict: bool,
    },
    ProviderSelected {
        rank: usize,
        provider_id: &'a str,
        address: &'a str,
        score: f64,
        components: &'a ScoreBreakdown,
    },
    PairingFinished {
        selected_count: usize,
    },
}

impl PairingEvent<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            PairingEvent::PairingStarted { .. } => "pairing_started",
            PairingEvent::StageStarted { .. } => "stage_started",
            PairingEvent::FilterApplied { .. } => "filter_applied",
            PairingEvent::StageFinished { .. } => "stage_finished",
            PairingEvent::ContextBuilt { .. } => "context_built",
            PairingEvent::ProviderScored { .. } => "provider_scored",
            PairingEvent::NoEligibleProviders { .. } => "no_eligible_providers",
            PairingEvent::ProviderSelected { .. } => "provider_selected",
            PairingEvent::PairingFinished { .. } => "pairing_finished",
        }
    }
}

/// Receives pairing events. Called from worker threads during parallel stages.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &PairingEvent<'_>);
}

#[derive(Debug, Clone, Copy, Default)]
/// Discards every event.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _: &PairingEvent<'_>) {}
}

#[derive(Debug, Clone, Copy, Default)]
/// Forwards events to `tracing` as structured records.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &PairingEvent<'_>) {
        match *event {
            PairingEvent::PairingStarted { provider_count } => {
                info!(provider_count, "Starting pairing");
            }
            PairingEvent::StageStarted {
                stage,
                provider_count,
                mode,
            } => {
                debug!(%stage, provider_count, %mode, "Stage started");
            }
            PairingEvent::FilterApplied {
                filter,
                count_before,
                count_after,
            } => {
                debug!(filter, count_before, count_after, "Filter applied");
            }
            PairingEvent::StageFinished {
                stage,
                provider_count,
                mode,
            } => {
                debug!(%stage, provider_count, %mode, "Stage finished");
            }
            PairingEvent::ContextBuilt { max_stake, max_fee } => {
                debug!(max_stake, max_fee, "Normalization context built");
            }
            PairingEvent::ProviderScored {
                provider_id,
                score,
                components,
                combine,
                worker,
            } => {
                debug!(
                    provider_id,
                    score,
                    ?components,
                    combine,
                    ?worker,
                    "Provider scored"
                );
            }
            PairingEvent::NoEligibleProviders { strict } => {
                warn!(strict, "No providers matched the filter criteria");
            }
            PairingEvent::ProviderSelected {
                rank,
                provider_id,
                address,
                score,
                components,
            } => {
                info!(
                    rank,
                    provider_id,
                    address,
                    score,
                    ?components,
                    "Selected provider"
                );
            }
            PairingEvent::PairingFinished { selected_count } => {
                info!(selected_count, "Finished pairing");
            }
        }
    }
}
