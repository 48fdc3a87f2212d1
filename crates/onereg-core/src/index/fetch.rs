//! Index fetching over HTTP(S) with curl.
//!
//! The index is fetched in full before parsing; any failure here aborts the
//! run (there is no per-record salvage for a broken index source).

use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

use super::{parse_index, IndexRecord};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetch the raw index body as text. Follows redirects; requires a 2xx response.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn fetch_index_text(url: &str) -> Result<String> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(FETCH_TIMEOUT)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .with_context(|| format!("index fetch from {} failed", url))?;
    }

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    String::from_utf8(body).context("index is not valid UTF-8")
}

/// Validate the index URL, fetch its content and parse it into records.
pub async fn load_index(url: &str) -> Result<Vec<IndexRecord>> {
    Url::parse(url).with_context(|| format!("invalid index URL {}", url))?;

    let owned = url.to_string();
    let text = tokio::task::spawn_blocking(move || fetch_index_text(&owned))
        .await
        .map_err(|e| anyhow::anyhow!("index fetch task join: {}", e))??;

    let records = parse_index(&text)?;
    Ok(records)
}
