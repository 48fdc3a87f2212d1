//! Index model and parsing.
//!
//! An index file lists files already present on storage, one record per line,
//! fields separated by a single space: `<name> <size> <adler32-checksum>`.
//! A malformed line fails the whole parse; there is no per-line recovery.

mod fetch;

pub use fetch::{fetch_index_text, load_index};

use thiserror::Error;

/// Namespace segment prefixed to every raw file name from the index.
pub const STORAGE_PREFIX: &str = "TSTRAW";

/// One parsed index line. Immutable once parsed; `path` is the synthesized
/// storage-level identifier, not the raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub path: String,
    pub size: u64,
    pub checksum: String,
}

/// Synthesize the storage path for a raw file name: `/TSTRAW/<name>`.
pub fn storage_path(name: &str) -> String {
    format!("/{}/{}", STORAGE_PREFIX, name)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexParseError {
    #[error("index line {line}: expected 3 space-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("index line {line}: invalid size `{value}`")]
    InvalidSize { line: usize, value: String },
}

/// Parse index text into records, in source line order.
///
/// Empty lines are skipped. Every other line must contain exactly three
/// fields separated by single spaces, with an integer size.
pub fn parse_index(text: &str) -> Result<Vec<IndexRecord>, IndexParseError> {
    let mut records = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() != 3 {
            return Err(IndexParseError::FieldCount {
                line: i + 1,
                found: fields.len(),
            });
        }
        let size = fields[1]
            .parse::<u64>()
            .map_err(|_| IndexParseError::InvalidSize {
                line: i + 1,
                value: fields[1].to_string(),
            })?;
        records.push(IndexRecord {
            path: storage_path(fields[0]),
            size,
            checksum: fields[2].to_string(),
        });
    }
    Ok(records)
}
