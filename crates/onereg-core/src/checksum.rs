//! Adler-32 checksums for index line generation.
//!
//! The register path never interprets checksums (whatever string the index
//! carries is forwarded verbatim); this module only backs the `checksum`
//! command that produces new index lines.

use adler32::RollingAdler32;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute the adler-32 of a file and return it as 8-digit lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
pub fn adler32_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = RollingAdler32::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update_buffer(&buf[..n]);
    }
    Ok(format!("{:08x}", hasher.hash()))
}
