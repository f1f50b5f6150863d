//! # zippack Request Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module turns the raw command-line flags into the immutable
//! `ArchiveRequest` that drives a packing run. It owns the only validation
//! rules of the tool:
//!
//! - No flags at all means "show usage", not an error.
//! - `--output` is required.
//! - Exactly one of `--dir` and `--input-file` must be given.
//! - `--base-dir` defaults to `--dir` and always ends with one path separator.
//!
//! Resolution performs no I/O. Nothing is opened, created, or checked for
//! existence here; those failures surface later in the pipeline.
//!
//! ## Examples
//!
//! ```rust
//! let args = PackArgs {
//!     dir: Some("/tmp/src".into()),
//!     output: Some("/tmp/out.zip".into()),
//!     ..Default::default()
//! };
//! let request = config::resolve_request(&args)?.expect("flags were given");
//! assert_eq!(request.base_dir, "/tmp/src/");
//! ```
//!
use crate::core::error::{Result, ZippackError};
use clap::Args;
use std::path::{self, PathBuf};
use tracing::debug;

/// # Pack Arguments (`PackArgs`)
///
/// The flags accepted by `zippack`. Every flag is individually optional;
/// `resolve_request` enforces how they combine. Empty strings are treated
/// the same as an absent flag.
#[derive(Args, Debug, Default, Clone)]
pub struct PackArgs {
    /// Base directory used to compute entry names inside the archive.
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<String>,

    /// Directory to archive recursively. Conflicts with `--input-file`.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,

    /// File containing a list of files to archive, one per line.
    /// Conflicts with `--dir`.
    #[arg(long, value_name = "FILE")]
    pub input_file: Option<String>,

    /// Output archive file name.
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,

    /// Do not print a line for each archived file.
    #[arg(long, env = "ZIPPACK_QUIET")]
    pub quiet: bool,
}

/// Where the files to archive come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Walk this directory recursively. Kept as the user typed it, since the
    /// same string is the base for entry names in this mode.
    Directory(String),
    /// Read paths from this newline-delimited list.
    FileList(PathBuf),
}

/// # Archive Request (`ArchiveRequest`)
///
/// The validated, immutable configuration for one packing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRequest {
    pub source: InputSource,
    /// Always ends with exactly one path separator.
    pub base_dir: String,
    pub output: PathBuf,
    pub quiet: bool,
}

/// Treats `Some("")` like `None`.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Appends the platform separator unless `dir` already ends with a separator.
/// On Windows both `\` and `/` count as separators, so `C:/x/` is left as is.
pub fn with_trailing_separator(dir: &str) -> String {
    if dir.chars().next_back().is_some_and(path::is_separator) {
        dir.to_string()
    } else {
        format!("{}{}", dir, path::MAIN_SEPARATOR)
    }
}

/// # Resolve Request (`resolve_request`)
///
/// Validates `args` and builds the `ArchiveRequest`.
///
/// ## Returns
///
/// * `Ok(None)` - No flags were given; the caller should print usage and exit successfully.
/// * `Ok(Some(request))` - A valid request.
///
/// ## Errors
///
/// Returns `ZippackError::InvalidArguments` when `--output` is missing, when
/// neither input source is given, or when both are.
pub fn resolve_request(args: &PackArgs) -> Result<Option<ArchiveRequest>> {
    let dir = non_empty(&args.dir);
    let input_file = non_empty(&args.input_file);
    let base_dir = non_empty(&args.base_dir);
    let output = non_empty(&args.output);

    if dir.is_none() && input_file.is_none() && base_dir.is_none() && output.is_none() {
        debug!("No arguments given");
        return Ok(None);
    }

    let output = output.ok_or_else(|| {
        ZippackError::InvalidArguments("output file name is required".to_string())
    })?;

    let source = match (dir, input_file) {
        (None, None) => anyhow::bail!(ZippackError::InvalidArguments(
            "file and path can't both be empty".to_string()
        )),
        (Some(_), Some(_)) => anyhow::bail!(ZippackError::InvalidArguments(
            "file and path are mutually exclusive".to_string()
        )),
        (Some(dir), None) => InputSource::Directory(dir.to_string()),
        (None, Some(list)) => InputSource::FileList(PathBuf::from(list)),
    };

    let base_dir = with_trailing_separator(base_dir.or(dir).unwrap_or_default());

    let request = ArchiveRequest {
        source,
        base_dir,
        output: PathBuf::from(output),
        quiet: args.quiet,
    };
    debug!("Resolved archive request: {:?}", request);
    Ok(Some(request))
}
