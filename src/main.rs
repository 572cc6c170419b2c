//! Pairing CLI: ranks a provider pool against a consumer policy and prints the result.

use std::sync::Arc;

use anyhow::Context;
use mimalloc::MiMalloc;

use pairing::config::Config;
use pairing::mock;
use pairing::pairing::{PairingSystem, TracingSink};
use pairing::source::{load_policy, load_providers};
use pairing::validation::validate_policy;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        strict_mode = config.strict_mode,
        parallel_threshold = config.parallel_threshold,
        worker_count = config.worker_count,
        top_n = config.top_n,
        "Pairing starting"
    );

    let providers = match &config.providers_path {
        Some(path) => load_providers(path)?,
        None => {
            tracing::info!("No PAIRING_PROVIDERS_PATH configured, using reference providers");
            mock::providers()
        }
    };

    let policy = match &config.policy_path {
        Some(path) => load_policy(path)?,
        None => {
            tracing::info!("No PAIRING_POLICY_PATH configured, using reference policy");
            mock::consumer_policy()
        }
    };

    validate_policy(&policy).context("consumer policy rejected")?;

    let system =
        PairingSystem::with_defaults(config.pairing_config()).with_sink(Arc::new(TracingSink));

    let selected = system
        .get_pairing_scores(&providers, &policy)
        .context("pairing failed")?;

    if selected.is_empty() {
        println!("No providers matched the consumer policy.");
        return Ok(());
    }

    println!("Selected providers:");
    for (rank, record) in selected.iter().enumerate() {
        println!(
            "{:>2}. id={} address={} score={:.4}",
            rank + 1,
            record.provider.id,
            record.provider.address,
            record.score
        );
    }

    Ok(())
}
