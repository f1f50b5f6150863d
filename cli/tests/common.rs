//! # zippack Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each test
//! file declares `mod common;` and runs the compiled `zippack` binary through
//! `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// # Get zippack Command (`zippack_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `zippack` binary, with
/// `RUST_LOG` and `ZIPPACK_QUIET` cleared so the host environment cannot
/// change what the tests observe.
///
/// ## Panics
/// Panics if the `zippack` binary cannot be found via `Command::cargo_bin`.
pub fn zippack_cmd() -> Command {
    let mut cmd =
        Command::cargo_bin("zippack").expect("Failed to find zippack binary for testing");
    cmd.env_remove("RUST_LOG").env_remove("ZIPPACK_QUIET");
    cmd
}

/// Reads every entry of the archive at `path`, in archive order, as
/// `(name, contents)` pairs.
pub fn read_archive(path: &Path) -> Vec<(String, Vec<u8>)> {
    let file = File::open(path).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to parse archive");
    let mut entries = Vec::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).expect("Failed to read entry");
        let mut contents = Vec::new();
        entry
            .read_to_end(&mut contents)
            .expect("Failed to decompress entry");
        entries.push((entry.name().to_string(), contents));
    }
    entries
}

/// Entry names of the archive at `path`, sorted.
pub fn sorted_names(path: &Path) -> Vec<String> {
    let mut names: Vec<String> = read_archive(path)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    names.sort();
    names
}

/// Converts a path to the `&str` form used in flags.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("Test paths are UTF-8")
}
