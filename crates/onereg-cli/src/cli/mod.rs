//! CLI for the onereg bulk file registration tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use onereg_core::config;
use onereg_core::register::ProviderParams;
use std::path::Path;

use commands::{run_checksum, run_inspect, run_register};

/// Top-level CLI for onereg.
#[derive(Debug, Parser)]
#[command(name = "onereg")]
#[command(about = "onereg: bulk file registration for Onedata spaces", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Register every file listed in an index file against a Oneprovider.
    Register {
        /// Oneprovider host, without scheme.
        #[arg(long)]
        host: String,

        /// Id of the space in which the files will be registered.
        #[arg(long)]
        space_id: String,

        /// Id of the storage on which the files are located. The storage must
        /// be created as an `imported` storage with canonical path type.
        #[arg(long)]
        storage_id: String,

        /// Onedata access token.
        #[arg(long)]
        token: String,

        /// URL of the index file (one `<name> <size> <checksum>` per line).
        #[arg(long)]
        index_url: String,

        /// Log a summary after every N attempted registrations.
        #[arg(long, value_name = "N")]
        logging_frequency: Option<u64>,
    },

    /// Fetch and parse an index file and print its records without registering.
    Inspect {
        /// URL of the index file.
        #[arg(long)]
        index_url: String,
    },

    /// Print an index line (name, size, adler-32 checksum) for a local file.
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Register {
                host,
                space_id,
                storage_id,
                token,
                index_url,
                logging_frequency,
            } => {
                let params = ProviderParams {
                    host,
                    space_id,
                    storage_id,
                    token,
                };
                run_register(&params, &cfg, &index_url, logging_frequency).await?
            }
            CliCommand::Inspect { index_url } => run_inspect(&index_url).await?,
            CliCommand::Checksum { path } => run_checksum(Path::new(&path)).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
