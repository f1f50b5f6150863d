//! # zippack UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal output that belongs to the program's contract rather than to its
//! diagnostics. Today that is one thing: the per-entry progress line
//!
//! ```text
//! <source path> => <archive-relative name>
//! ```
//!
//! printed to stdout for every archived file unless `--quiet` is set.
//! Diagnostics go through `tracing` on stderr instead, so scripts can parse
//! stdout without filtering log noise.
//!
use std::io::{self, Write};

/// Writes progress lines to a sink, or nowhere when quiet.
pub struct ProgressReporter {
    out: Option<Box<dyn Write>>,
}

impl ProgressReporter {
    /// Reports to standard output.
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Reports nothing.
    pub fn quiet() -> Self {
        Self { out: None }
    }

    /// Reports to an arbitrary writer.
    pub fn with_writer(out: Box<dyn Write>) -> Self {
        Self { out: Some(out) }
    }

    /// Picks `quiet()` or `stdout()` for the `--quiet` flag.
    pub fn for_quiet_flag(quiet: bool) -> Self {
        if quiet {
            Self::quiet()
        } else {
            Self::stdout()
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.out.is_none()
    }

    /// Emits `<source> => <name>`.
    pub fn report(&mut self, source: &str, name: &str) -> io::Result<()> {
        match self.out.as_mut() {
            Some(out) => writeln!(out, "{} => {}", source, name),
            None => Ok(()),
        }
    }
}
