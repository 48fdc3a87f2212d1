//! Single-record registration POST (one short-lived curl Easy handle per call).

use anyhow::{Context, Result};
use std::time::Duration;

use crate::config::OneregConfig;
use crate::index::IndexRecord;

use super::{register_endpoint, ProviderParams, RegistrationRequest};

/// Register one record with the provider.
///
/// Never returns an error: any transport failure is logged with the record's
/// synthesized path and the run continues. The response status code is not
/// used to distinguish success from failure; it is only logged at debug level.
pub fn register_one(record: &IndexRecord, params: &ProviderParams, cfg: &OneregConfig) {
    if let Err(e) = try_register(record, params, cfg) {
        tracing::error!("registration of {} failed: {:#}", record.path, e);
    }
}

fn try_register(record: &IndexRecord, params: &ProviderParams, cfg: &OneregConfig) -> Result<()> {
    let endpoint = register_endpoint(&params.host);
    let body = serde_json::to_vec(&RegistrationRequest::from_record(params, record))
        .context("encode registration body")?;

    let mut easy = curl::easy::Easy::new();
    easy.url(&endpoint).context("invalid endpoint URL")?;
    easy.post(true)?;
    easy.post_fields_copy(&body)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.request_timeout_secs))?;
    if cfg.insecure_skip_verify {
        easy.ssl_verify_peer(false)?;
        easy.ssl_verify_host(false)?;
    }

    let mut list = curl::easy::List::new();
    list.append(&format!("X-Auth-Token: {}", params.token))?;
    list.append("Content-Type: application/json")?;
    easy.http_headers(list)?;

    // Response body is not parsed; discard it instead of letting curl write to stdout.
    easy.write_function(|data| Ok(data.len()))?;

    easy.perform()
        .with_context(|| format!("POST {}", endpoint))?;

    if let Ok(code) = easy.response_code() {
        tracing::debug!("registration POST for {} returned HTTP {}", record.path, code);
    }

    Ok(())
}
