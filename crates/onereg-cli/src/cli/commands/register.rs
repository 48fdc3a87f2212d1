//! `onereg register` – load the index and run the chunked registration driver.

use anyhow::Result;
use onereg_core::batch;
use onereg_core::config::OneregConfig;
use onereg_core::index;
use onereg_core::register::ProviderParams;

pub async fn run_register(
    params: &ProviderParams,
    cfg: &OneregConfig,
    index_url: &str,
    logging_frequency: Option<u64>,
) -> Result<()> {
    if cfg.insecure_skip_verify {
        tracing::warn!("TLS certificate verification is disabled (insecure_skip_verify = true)");
    }

    // Index fetch and parse failures are fatal; no registration is attempted.
    let records = index::load_index(index_url).await?;
    tracing::info!(
        "loaded {} record(s) from {}; registering at {}",
        records.len(),
        index_url,
        params.host
    );

    // Per-record failures are logged by the driver and do not fail the run.
    batch::register_all(&records, params, cfg, logging_frequency).await?;

    tracing::info!("registration run for {} finished", params.host);
    Ok(())
}
