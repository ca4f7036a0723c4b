//! Collects validated domains from every enabled source into one deduplicated set.

use crate::fetch::Fetch;
use crate::normalize::normalize;
use crate::parse::extract_domain;
use crate::sources::Source;
use serde::Serialize;
use std::collections::BTreeSet;

/// Deduplicated, ordered set of validated domains.
pub type DomainSet = BTreeSet<String>;

/// Outcome of processing one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SourceOutcome {
    Ok {
        lines: usize,
        accepted: usize,
        before: usize,
        after: usize,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub id: &'static str,
    #[serde(flatten)]
    pub outcome: SourceOutcome,
}

impl SourceReport {
    /// Domains this source added that no earlier source had.
    pub fn added(&self) -> usize {
        match self.outcome {
            SourceOutcome::Ok { before, after, .. } => after - before,
            SourceOutcome::Failed { .. } => 0,
        }
    }
}

/// Lines read and domains accepted from one body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestCounts {
    pub lines: usize,
    pub accepted: usize,
}

/// Parses and validates every line of `body`, inserting accepted domains into `set`.
pub fn ingest(body: &str, set: &mut DomainSet) -> IngestCounts {
    let mut counts = IngestCounts::default();
    for line in body.lines() {
        counts.lines += 1;
        if let Some(domain) = extract_domain(line).and_then(normalize) {
            counts.accepted += 1;
            set.insert(domain);
        }
    }
    counts
}

/// Progress notifications emitted while sources are processed.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Fetching(&'a Source),
    Done(&'a SourceReport),
}

/// Fetches each source in order and ingests it into `set`. A source that fails to
/// fetch is logged and skipped; the set is left as it was.
pub fn aggregate<F, P>(
    sources: &[&Source],
    fetcher: &F,
    set: &mut DomainSet,
    mut progress: P,
) -> Vec<SourceReport>
where
    F: Fetch + ?Sized,
    P: FnMut(Progress<'_>),
{
    let mut reports = Vec::with_capacity(sources.len());
    for &source in sources {
        progress(Progress::Fetching(source));
        let outcome = match fetcher.fetch(source.url) {
            Ok(body) => {
                let before = set.len();
                let counts = ingest(&body, set);
                let after = set.len();
                tracing::info!(
                    source = source.id,
                    lines = counts.lines,
                    accepted = counts.accepted,
                    before,
                    after,
                    "source ingested"
                );
                SourceOutcome::Ok {
                    lines: counts.lines,
                    accepted: counts.accepted,
                    before,
                    after,
                }
            }
            Err(e) => {
                tracing::warn!(
                    source = source.id,
                    url = source.url,
                    timeout = e.is_timeout(),
                    "fetch failed, skipping source: {}",
                    e
                );
                SourceOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };
        let report = SourceReport {
            id: source.id,
            outcome,
        };
        progress(Progress::Done(&report));
        reports.push(report);
    }
    reports
}
