//! Tests for the generate subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_generate_defaults() {
    match parse(&["hostbucket", "generate"]) {
        CliCommand::Generate { out, timeout, json } => {
            assert!(out.is_none());
            assert!(timeout.is_none());
            assert!(!json);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_overrides() {
    match parse(&[
        "hostbucket",
        "generate",
        "--out",
        "/tmp/data",
        "--timeout",
        "5",
        "--json",
    ]) {
        CliCommand::Generate { out, timeout, json } => {
            assert_eq!(out.as_deref(), Some(Path::new("/tmp/data")));
            assert_eq!(timeout, Some(5));
            assert!(json);
        }
        _ => panic!("expected Generate with overrides"),
    }
}

#[test]
fn cli_parse_generate_rejects_bad_timeout() {
    assert!(Cli::try_parse_from(["hostbucket", "generate", "--timeout", "soon"]).is_err());
}

#[test]
fn cli_parse_generate_rejects_zero_timeout() {
    assert!(Cli::try_parse_from(["hostbucket", "generate", "--timeout", "0"]).is_err());
}
