//! `onereg checksum` – print a ready-to-append index line for a local file.

use anyhow::{Context, Result};
use onereg_core::checksum;
use std::path::Path;

pub async fn run_checksum(path: &Path) -> Result<()> {
    let digest = checksum::adler32_path(path)?;
    let size = std::fs::metadata(path)
        .with_context(|| format!("stat {}", path.display()))?
        .len();
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("cannot derive a file name from {}", path.display()))?;
    println!("{} {} {}", name, size, digest);
    Ok(())
}
