//! CLI for hostbucket.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hostbucket_core::config;
use std::path::PathBuf;

use commands::{run_check, run_generate, run_sources, run_stats, GenerateArgs};

/// Top-level CLI for hostbucket.
#[derive(Debug, Parser)]
#[command(name = "hostbucket")]
#[command(
    about = "Build length-bucketed domain blocklists for small DNS sinkholes",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the enabled sources and write the hosts_<len> files.
    Generate {
        /// Output directory (default: `output_dir` from config).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Per-source request timeout in seconds (default: `timeout_secs` from config).
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
        /// Print the run summary as JSON instead of progress text.
        #[arg(long)]
        json: bool,
    },

    /// List known sources and whether they are enabled.
    Sources,

    /// Check whether a domain (or one of its parents) is in the generated files.
    Check {
        /// Domain to look up.
        domain: String,
        /// Directory holding the hosts_<len> files (default: `output_dir` from config).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },

    /// Show size statistics for already generated files.
    Stats {
        /// Directory holding the hosts_<len> files (default: `output_dir` from config).
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Generate { out, timeout, json } => {
                run_generate(&cfg, GenerateArgs { out, timeout, json })?
            }
            CliCommand::Sources => run_sources()?,
            CliCommand::Check { domain, out } => {
                let dir = out.unwrap_or_else(|| cfg.output_dir.clone());
                run_check(&dir, &domain)?;
            }
            CliCommand::Stats { out } => {
                let dir = out.unwrap_or_else(|| cfg.output_dir.clone());
                run_stats(&dir, cfg.storage_budget_bytes)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
