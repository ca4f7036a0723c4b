//! `hostbucket stats` – size report for existing bucket files.

use anyhow::Result;
use hostbucket_core::lookup;
use std::path::Path;

use super::print_write_summary;

pub fn run_stats(dir: &Path, storage_budget_bytes: u64) -> Result<()> {
    let summary = lookup::scan(dir, storage_budget_bytes)?;
    if summary.file_count == 0 {
        println!("No bucket files in {}.", dir.display());
        return Ok(());
    }
    println!("{:<6} {:<10} {}", "LEN", "DOMAINS", "BYTES");
    for f in &summary.files {
        println!("{:<6} {:<10} {}", f.length, f.domains, f.bytes);
    }
    print_write_summary(&summary);
    Ok(())
}
