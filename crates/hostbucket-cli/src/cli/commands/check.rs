//! `hostbucket check` – look a domain up in the generated files.

use anyhow::Result;
use hostbucket_core::lookup::{self, Verdict};
use std::path::Path;

pub fn run_check(dir: &Path, domain: &str) -> Result<()> {
    match lookup::check(dir, domain)? {
        Verdict::Blocked { matched } if matched == lookup::query_key(domain) => {
            println!("{domain}: blocked");
        }
        Verdict::Blocked { matched } => println!("{domain}: blocked (parent: {matched})"),
        Verdict::Allowed => println!("{domain}: allowed"),
    }
    Ok(())
}
