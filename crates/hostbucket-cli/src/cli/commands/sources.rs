//! `hostbucket sources` – list the source registry.

use anyhow::Result;
use hostbucket_core::sources::{self, REGISTRY};

pub fn run_sources() -> Result<()> {
    println!("{:<14} {:<8} {:<36} {}", "ID", "ENABLED", "HOST", "DESCRIPTION");
    for s in REGISTRY {
        let enabled = if sources::is_enabled(s.id) { "yes" } else { "no" };
        println!("{:<14} {:<8} {:<36} {}", s.id, enabled, s.host()?, s.description);
    }
    Ok(())
}
