//! One generation run: aggregate all sources, bucket by length, write files.

use crate::aggregate::{aggregate, DomainSet, Progress, SourceOutcome, SourceReport};
use crate::bucket::bucketize;
use crate::fetch::Fetch;
use crate::sources::Source;
use crate::writer::{write_buckets, FileReport, WriteSummary};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Everything a run produced, for printing or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub sources: Vec<SourceReport>,
    pub output: WriteSummary,
}

impl RunSummary {
    pub fn failed_sources(&self) -> usize {
        self.sources
            .iter()
            .filter(|r| matches!(r.outcome, SourceOutcome::Failed { .. }))
            .count()
    }
}

/// Progress events from a run, in the order they happen.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    Source(Progress<'a>),
    FileWritten(&'a FileReport),
}

/// Runs the whole pipeline. Fetch failures are recorded per source and never abort
/// the run; failing to create `out_dir` or write a file does.
pub fn generate<F, E>(
    sources: &[&Source],
    fetcher: &F,
    out_dir: &Path,
    storage_budget_bytes: u64,
    mut on_event: E,
) -> Result<RunSummary>
where
    F: Fetch + ?Sized,
    E: FnMut(Event<'_>),
{
    let mut set = DomainSet::new();
    let reports = aggregate(sources, fetcher, &mut set, |p| on_event(Event::Source(p)));
    tracing::info!(domains = set.len(), sources = reports.len(), "aggregation finished");

    let buckets = bucketize(&set);
    let output = write_buckets(out_dir, &buckets, storage_budget_bytes, |f| {
        on_event(Event::FileWritten(f))
    })
    .context("writing bucket files")?;

    Ok(RunSummary {
        sources: reports,
        output,
    })
}
