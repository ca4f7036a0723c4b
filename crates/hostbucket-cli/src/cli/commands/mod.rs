//! CLI command handlers, one file per command.

mod check;
mod generate;
mod sources;
mod stats;

pub use check::run_check;
pub use generate::{run_generate, GenerateArgs};
pub use sources::run_sources;
pub use stats::run_stats;

use hostbucket_core::writer::WriteSummary;

/// Per-file lines followed by the totals block. Shared by `generate` and `stats`.
pub(crate) fn print_write_summary(summary: &WriteSummary) {
    println!();
    println!("Files:       {}", summary.file_count);
    println!("Domains:     {}", summary.domain_count);
    println!(
        "Total size:  {} bytes ({:.1} KiB)",
        summary.total_bytes,
        summary.total_bytes as f64 / 1024.0
    );
    println!(
        "Storage use: {:.1}% of {} KiB budget",
        summary.budget_percent,
        summary.storage_budget_bytes / 1024
    );
    if summary.over_budget() {
        println!("Warning: output exceeds the storage budget.");
    }
}
