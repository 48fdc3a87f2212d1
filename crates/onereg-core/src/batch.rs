//! Chunked concurrent registration driver.
//!
//! The record sequence is split into fixed-size contiguous chunks; all
//! registrations in a chunk run concurrently and the driver blocks until the
//! whole chunk is done before advancing. Chunks execute strictly in sequence;
//! completion order within a chunk is unconstrained. There is no cancellation:
//! a hung request holds its chunk until the per-request timeout fires.

use anyhow::Result;
use std::sync::Arc;

use crate::config::OneregConfig;
use crate::index::IndexRecord;
use crate::register::{register_one, ProviderParams};

/// Registrations issued concurrently per chunk.
pub const CHUNK_SIZE: usize = 100;

/// Contiguous `[start, end)` ranges covering `total` records, `chunk_size` at
/// a time. Empty when `total` is 0; a zero chunk size is treated as 1.
pub fn chunk_ranges(total: usize, chunk_size: usize) -> Vec<(usize, usize)> {
    let chunk_size = chunk_size.max(1);
    let mut ranges = Vec::with_capacity((total + chunk_size - 1) / chunk_size);
    let mut start = 0;
    while start < total {
        let end = (start + chunk_size).min(total);
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Progress line printed to stdout before each chunk is dispatched.
pub fn progress_line(start: usize, end: usize, total: usize) -> String {
    format!("Registering files {}:{} of {}...", start, end, total)
}

/// Register all records with the default chunk size.
pub async fn register_all(
    records: &[IndexRecord],
    params: &ProviderParams,
    cfg: &OneregConfig,
    logging_frequency: Option<u64>,
) -> Result<()> {
    register_in_chunks(records, params, cfg, CHUNK_SIZE, logging_frequency).await
}

/// Register all records, `chunk_size` concurrent requests at a time.
///
/// Each registration runs as a blocking task (curl Easy) on the runtime's
/// blocking pool; the `JoinSet` drain is the per-chunk join barrier.
/// Per-record failures are logged inside `register_one` and never propagate;
/// a panicked task surfaces as a join error and is logged too. When
/// `logging_frequency` is set, a summary is logged every time the attempted
/// count crosses a multiple of it.
pub async fn register_in_chunks(
    records: &[IndexRecord],
    params: &ProviderParams,
    cfg: &OneregConfig,
    chunk_size: usize,
    logging_frequency: Option<u64>,
) -> Result<()> {
    let total = records.len();
    let params = Arc::new(params.clone());
    let cfg = Arc::new(cfg.clone());

    for (start, end) in chunk_ranges(total, chunk_size) {
        println!("{}", progress_line(start, end, total));

        let mut join_set = tokio::task::JoinSet::new();
        for record in &records[start..end] {
            let record = record.clone();
            let params = Arc::clone(&params);
            let cfg = Arc::clone(&cfg);
            join_set.spawn_blocking(move || register_one(&record, &params, &cfg));
        }
        while let Some(res) = join_set.join_next().await {
            if let Err(e) = res {
                tracing::error!("registration task join: {}", e);
            }
        }

        if let Some(freq) = logging_frequency {
            if freq > 0 && (end as u64 / freq) > (start as u64 / freq) {
                tracing::info!("attempted {} of {} registrations", end, total);
            }
        }
    }

    Ok(())
}
