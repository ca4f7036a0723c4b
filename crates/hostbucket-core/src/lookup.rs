//! Reads generated bucket files back, and answers lookups the way the device does.
//!
//! A domain is blocked when `,domain,` occurs before the sentinel in the file for
//! its length. Otherwise each parent domain is tried in turn, dropping the leftmost
//! label, so `adclick.g.doubleclick.net` matches a `doubleclick.net` entry.

use crate::writer::{bucket_file_name, FileReport, WriteSummary, FILE_PREFIX, SENTINEL};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Splits file content back into its domains. Returns `None` if the content does
/// not follow the `,d1,...,dn,@@@` layout.
pub fn parse_bucket(content: &str) -> Option<Vec<String>> {
    let body = content.trim_end_matches(['\n', '\r']);
    let body = body.strip_suffix(SENTINEL)?.strip_prefix(',')?;
    if body.is_empty() {
        return Some(Vec::new());
    }
    let body = body.strip_suffix(',')?;
    Some(body.split(',').map(str::to_string).collect())
}

/// Whether `domain` appears in the bucket `content`, searching only up to the sentinel.
pub fn bucket_contains(content: &str, domain: &str) -> bool {
    let end = content.find(SENTINEL).unwrap_or(content.len());
    let needle = format!(",{domain},");
    content[..end].contains(&needle)
}

/// Result of checking one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Found; `matched` is the entry that hit (the domain itself or a parent).
    Blocked { matched: String },
    Allowed,
}

/// Lowercases and drops surrounding whitespace and a trailing root dot.
pub fn query_key(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_lowercase()
}

/// Looks `domain` up in the bucket files under `dir`: exact match first, then
/// each parent domain. Missing bucket files count as "not found".
pub fn check(dir: &Path, domain: &str) -> Result<Verdict> {
    let domain = query_key(domain);
    let mut current = domain.as_str();
    loop {
        if in_bucket_file(dir, current)? {
            return Ok(Verdict::Blocked {
                matched: current.to_string(),
            });
        }
        match current.split_once('.') {
            Some((_, parent)) => current = parent,
            None => return Ok(Verdict::Allowed),
        }
    }
}

fn in_bucket_file(dir: &Path, domain: &str) -> Result<bool> {
    let path = dir.join(bucket_file_name(domain.len()));
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e).with_context(|| format!("read bucket {}", path.display())),
    };
    Ok(bucket_contains(&content, domain))
}

/// Rebuilds statistics from the bucket files already in `dir`, sorted by length.
/// Files whose name is not `hosts_<number>` are ignored.
pub fn scan(dir: &Path, storage_budget_bytes: u64) -> Result<WriteSummary> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read output directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("list {}", dir.display()))?;
        let name = entry.file_name();
        let Some(length) = name
            .to_str()
            .and_then(|n| n.strip_prefix(FILE_PREFIX))
            .and_then(|n| n.parse::<usize>().ok())
        else {
            continue;
        };
        let path = entry.path();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("read bucket {}", path.display()))?;
        let domains = match parse_bucket(&content) {
            Some(d) => d.len(),
            None => {
                tracing::warn!(path = %path.display(), "bucket file is malformed");
                0
            }
        };
        files.push(FileReport {
            length,
            path,
            domains,
            bytes: content.len() as u64,
        });
    }
    files.sort_by_key(|f| f.length);
    Ok(WriteSummary::from_files(files, storage_budget_bytes))
}
