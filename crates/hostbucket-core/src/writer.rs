//! Bucket file format and writer.
//!
//! Each bucket becomes `hosts_<len>` holding `,d1,d2,...,dn,@@@\n`. The device
//! searches a file for `,domain,` and stops at the `@@@` sentinel.

use crate::bucket::Buckets;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const FILE_PREFIX: &str = "hosts_";
pub const SENTINEL: &str = "@@@";

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File name for the bucket of domains with `length` characters.
pub fn bucket_file_name(length: usize) -> String {
    format!("{FILE_PREFIX}{length}")
}

/// Serializes one bucket: each domain prefixed by a comma, then `,@@@` and a newline.
pub fn format_bucket(domains: &[String]) -> String {
    let size = domains.iter().map(|d| d.len() + 1).sum::<usize>() + SENTINEL.len() + 2;
    let mut out = String::with_capacity(size);
    for domain in domains {
        out.push(',');
        out.push_str(domain);
    }
    out.push(',');
    out.push_str(SENTINEL);
    out.push('\n');
    out
}

/// One written bucket file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub length: usize,
    pub path: PathBuf,
    pub domains: usize,
    pub bytes: u64,
}

/// Totals across all bucket files, measured against the device storage budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteSummary {
    pub files: Vec<FileReport>,
    pub file_count: usize,
    pub domain_count: usize,
    pub total_bytes: u64,
    pub storage_budget_bytes: u64,
    pub budget_percent: f64,
}

impl WriteSummary {
    pub fn from_files(files: Vec<FileReport>, storage_budget_bytes: u64) -> Self {
        let domain_count = files.iter().map(|f| f.domains).sum();
        let total_bytes = files.iter().map(|f| f.bytes).sum();
        Self {
            file_count: files.len(),
            domain_count,
            total_bytes,
            storage_budget_bytes,
            budget_percent: budget_percent(total_bytes, storage_budget_bytes),
            files,
        }
    }

    pub fn over_budget(&self) -> bool {
        self.total_bytes > self.storage_budget_bytes
    }
}

pub fn budget_percent(bytes: u64, budget: u64) -> f64 {
    if budget == 0 {
        return 0.0;
    }
    bytes as f64 / budget as f64 * 100.0
}

/// Creates `dir` if needed, then writes one file per bucket in ascending length
/// order, overwriting existing files. Stops at the first I/O failure; files already
/// written stay in place.
pub fn write_buckets<F>(
    dir: &Path,
    buckets: &Buckets,
    storage_budget_bytes: u64,
    mut on_file: F,
) -> Result<WriteSummary, WriteError>
where
    F: FnMut(&FileReport),
{
    fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::with_capacity(buckets.len());
    for (&length, domains) in buckets {
        let path = dir.join(bucket_file_name(length));
        let content = format_bucket(domains);
        fs::write(&path, content.as_bytes()).map_err(|source| WriteError::WriteFile {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), domains = domains.len(), bytes = content.len(), "wrote bucket");
        let report = FileReport {
            length,
            path,
            domains: domains.len(),
            bytes: content.len() as u64,
        };
        on_file(&report);
        files.push(report);
    }

    let summary = WriteSummary::from_files(files, storage_budget_bytes);
    tracing::info!(
        files = summary.file_count,
        domains = summary.domain_count,
        bytes = summary.total_bytes,
        "bucket files written to {}",
        dir.display()
    );
    Ok(summary)
}
