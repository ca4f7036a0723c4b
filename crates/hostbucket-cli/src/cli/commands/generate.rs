//! `hostbucket generate` – fetch sources and write bucket files.

use anyhow::Result;
use hostbucket_core::aggregate::{Progress, SourceOutcome};
use hostbucket_core::config::HostbucketConfig;
use hostbucket_core::fetch::CurlFetcher;
use hostbucket_core::pipeline::{self, Event};
use hostbucket_core::sources;
use std::path::PathBuf;
use std::time::Duration;

use super::print_write_summary;

/// Per-run overrides from the command line.
#[derive(Debug, Default)]
pub struct GenerateArgs {
    pub out: Option<PathBuf>,
    pub timeout: Option<u64>,
    pub json: bool,
}

pub fn run_generate(cfg: &HostbucketConfig, args: GenerateArgs) -> Result<()> {
    let out_dir = args.out.unwrap_or_else(|| cfg.output_dir.clone());
    let fetcher = build_fetcher(cfg, args.timeout);

    let enabled = sources::enabled_sources();
    tracing::info!(sources = enabled.len(), out = %out_dir.display(), "generate started");

    let quiet = args.json;
    let summary = pipeline::generate(
        &enabled,
        &fetcher,
        &out_dir,
        cfg.storage_budget_bytes,
        |event| {
            if !quiet {
                print_event(event);
            }
        },
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_write_summary(&summary.output);
    let failed = summary.failed_sources();
    if failed > 0 {
        println!("{} of {} source(s) failed; see log for details.", failed, summary.sources.len());
    }
    println!("Done. Blocklists saved to {}", out_dir.display());
    Ok(())
}

/// Fetcher from config, with the `--timeout` override applied.
pub(crate) fn build_fetcher(cfg: &HostbucketConfig, timeout_secs: Option<u64>) -> CurlFetcher {
    let mut fetcher = CurlFetcher::from_config(cfg);
    if let Some(secs) = timeout_secs {
        fetcher.timeout = Duration::from_secs(secs);
    }
    fetcher
}

fn print_event(event: Event<'_>) {
    match event {
        Event::Source(Progress::Fetching(source)) => {
            println!("Downloading {} ({})...", source.id, source.description);
        }
        Event::Source(Progress::Done(report)) => match &report.outcome {
            SourceOutcome::Ok {
                accepted,
                before,
                after,
                ..
            } => println!(
                "  {}: {} valid domains, total {} -> {} (+{})",
                report.id,
                accepted,
                before,
                after,
                report.added()
            ),
            SourceOutcome::Failed { error } => {
                println!("  {}: skipped ({})", report.id, error);
            }
        },
        Event::FileWritten(file) => {
            println!(
                "  {}: {} domains, {} bytes",
                file.path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                file.domains,
                file.bytes
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_override_replaces_config_value() {
        let cfg = HostbucketConfig::default();
        let f = build_fetcher(&cfg, Some(5));
        assert_eq!(f.timeout, Duration::from_secs(5));
        assert_eq!(f.connect_timeout, cfg.connect_timeout());
    }

    #[test]
    fn no_override_keeps_config_timeout() {
        let cfg = HostbucketConfig {
            timeout_secs: 12,
            ..HostbucketConfig::default()
        };
        assert_eq!(build_fetcher(&cfg, None).timeout, Duration::from_secs(12));
    }
}
