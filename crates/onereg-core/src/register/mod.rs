//! Registration request model and endpoint synthesis.
//!
//! A `RegistrationRequest` is derived 1:1 from an `IndexRecord` plus the
//! static run parameters, serialized to JSON and discarded after the call.

mod client;

pub use client::register_one;

use serde::Serialize;

use crate::index::IndexRecord;

/// Fixed POSIX mode reported for every registered file.
pub const FILE_MODE: &str = "664";
/// Fixed label for the checksum carried in the index.
pub const CHECKSUM_ALGORITHM: &str = "adler-32";

const REGISTER_PATH: &str = "/api/v3/oneprovider/data/register";

/// Static run parameters needed to register a record (from CLI flags).
#[derive(Debug, Clone)]
pub struct ProviderParams {
    pub host: String,
    pub space_id: String,
    pub storage_id: String,
    pub token: String,
}

/// JSON body of a registration POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub space_id: String,
    pub storage_id: String,
    pub storage_file_id: String,
    pub destination_path: String,
    pub size: u64,
    pub mode: String,
    pub auto_detect_attributes: bool,
    pub xattrs: RegistrationXattrs,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationXattrs {
    pub checksum: String,
    #[serde(rename = "checksum-algorithm")]
    pub checksum_algorithm: String,
}

impl RegistrationRequest {
    /// Build the request body for one record. The synthesized path serves as
    /// both the storage-level file id and the destination path.
    pub fn from_record(params: &ProviderParams, record: &IndexRecord) -> Self {
        Self {
            space_id: params.space_id.clone(),
            storage_id: params.storage_id.clone(),
            storage_file_id: record.path.clone(),
            destination_path: record.path.clone(),
            size: record.size,
            mode: FILE_MODE.to_string(),
            auto_detect_attributes: false,
            xattrs: RegistrationXattrs {
                checksum: record.checksum.clone(),
                checksum_algorithm: CHECKSUM_ALGORITHM.to_string(),
            },
        }
    }
}

/// Registration endpoint for a provider host.
///
/// A bare host gets the fixed `https://` scheme; a host that already carries
/// a scheme is used verbatim (integration tests point this at a local
/// plain-HTTP server).
pub fn register_endpoint(host: &str) -> String {
    if host.contains("://") {
        format!("{}{}", host.trim_end_matches('/'), REGISTER_PATH)
    } else {
        format!("https://{}{}", host, REGISTER_PATH)
    }
}
