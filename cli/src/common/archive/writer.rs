//! # zippack Zip Archive Writer (`common::archive::writer`)
//!
//! File: cli/src/common/archive/writer.rs
//!
//! ## Overview
//!
//! This module writes the output archive. It leverages the `zip` crate for the
//! container structure and deflate compression.
//!
//! - `ArchiveWriter::create` creates (or truncates) the output file.
//! - `ArchiveWriter::add_file` appends one source file. File contents are
//!   streamed into the deflate encoder with `io::copy`, never read whole.
//! - `ArchiveWriter::finish` writes the central directory.
//! - `entry_name` derives the name stored in the archive from the source path
//!   and the base directory.
//!
//! If a run fails partway and the writer is dropped without `finish`, the zip
//! crate still writes a central directory for the entries written so far and
//! the file handle is closed. The partial archive is left on disk.
//!
//! ## Entry names
//!
//! The name is the source path with the first `base.len()` bytes removed, plus
//! one more byte when `base` does not end with a separator (the separator
//! between base and relative part). Every `\` is then rewritten to `/`, on
//! every platform.
//!
//! ```rust
//! assert_eq!(entry_name("/tmp/src/sub/b.txt", "/tmp/src")?, "sub/b.txt");
//! assert_eq!(entry_name("/tmp/a.txt", "/tmp/")?, "a.txt");
//! ```
//!
//! ## Usage
//!
//! ```rust
//! let files = walk::collect_files(Path::new("/tmp/src"))?;
//! let count = writer::write_archive(
//!     Path::new("/tmp/out.zip"),
//!     &files,
//!     "/tmp/src",
//!     ProgressReporter::stdout(),
//! )?;
//! ```
//!
use crate::common::ui::ProgressReporter;
use crate::core::error::{Result, ZippackError};
use anyhow::Context;
use chrono::{Datelike, Local, Timelike};
use std::fs::{File, Metadata};
use std::io::{self, BufWriter, Write};
use std::path::{self, Path, PathBuf};
use tracing::{debug, info, warn};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime as ZipDateTime, ZipWriter};

/// Entries this large need zip64 headers.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// # Entry Name (`entry_name`)
///
/// Computes the archive-relative name of `source` against `base`.
/// A trailing separator is anything `std::path::is_separator` accepts, which
/// on Windows includes `/` as well as `\`.
///
/// ## Errors
///
/// Returns `ZippackError::OutsideBase` if the strip length runs past the end
/// of `source`, cuts a multi-byte character, or leaves nothing.
pub fn entry_name(source: &str, base: &str) -> Result<String> {
    let mut strip = base.len();
    if !base.chars().next_back().is_some_and(path::is_separator) {
        strip += 1;
    }

    let relative = source
        .get(strip..)
        .filter(|rest| !rest.is_empty())
        .ok_or_else(|| ZippackError::OutsideBase {
            path: source.to_string(),
            base: base.to_string(),
        })?;

    if !source.starts_with(base) {
        warn!(
            "Source {:?} does not start with base {:?}; name may be truncated",
            source, base
        );
    }

    Ok(relative.replace('\\', "/"))
}

/// Converts the file's modification time to a zip timestamp in local time.
/// Times the zip format cannot represent fall back to 1980-01-01 00:00.
fn modified_time(metadata: &Metadata) -> ZipDateTime {
    metadata
        .modified()
        .ok()
        .map(chrono::DateTime::<Local>::from)
        .and_then(|t| {
            ZipDateTime::from_date_and_time(
                u16::try_from(t.year()).ok()?,
                t.month() as u8,
                t.day() as u8,
                t.hour() as u8,
                t.minute() as u8,
                t.second() as u8,
            )
            .ok()
        })
        .unwrap_or_default()
}

fn entry_options(metadata: &Metadata) -> FileOptions {
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(modified_time(metadata))
        .large_file(metadata.len() >= ZIP64_THRESHOLD);

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    options
}

/// # Archive Writer (`ArchiveWriter`)
///
/// An open output archive. Entries are appended one at a time with
/// `add_file`; `finish` must be called to complete the archive.
pub struct ArchiveWriter {
    zip: ZipWriter<BufWriter<File>>,
    output: PathBuf,
    progress: ProgressReporter,
    entries: usize,
}

impl ArchiveWriter {
    /// Creates `output`, truncating any existing file.
    pub fn create(output: &Path, progress: ProgressReporter) -> Result<Self> {
        let file = File::create(output)
            .with_context(|| format!("Failed to create archive {:?}", output))?;
        debug!("Created archive file {:?}", output);
        Ok(Self {
            zip: ZipWriter::new(BufWriter::new(file)),
            output: output.to_path_buf(),
            progress,
            entries: 0,
        })
    }

    /// Number of entries written so far.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// # Add File (`add_file`)
    ///
    /// Appends `source` as a deflate entry named by `entry_name(source, base)`,
    /// carrying the source's size, modification time, and permission bits.
    /// The progress line is emitted before the entry is written.
    ///
    /// ## Errors
    ///
    /// Returns an `Err` if the source cannot be opened, stat'ed, or read, is
    /// not a regular file, has a non UTF-8 path, yields no valid entry name,
    /// or if writing to the archive fails.
    pub fn add_file(&mut self, source: &Path, base: &str) -> Result<()> {
        let source_str = source.to_str().ok_or_else(|| {
            ZippackError::FileSystem(format!("Path is not valid UTF-8: {:?}", source))
        })?;

        let mut file = File::open(source)
            .with_context(|| format!("Failed to open source file {:?}", source))?;
        let metadata = file
            .metadata()
            .with_context(|| format!("Failed to read metadata of {:?}", source))?;
        if !metadata.is_file() {
            anyhow::bail!(ZippackError::FileSystem(format!(
                "Not a regular file: {:?}",
                source
            )));
        }

        let name = entry_name(source_str, base)?;
        let options = entry_options(&metadata);

        self.progress
            .report(source_str, &name)
            .context("Failed to write progress output")?;

        self.zip
            .start_file(name.as_str(), options)
            .map_err(ZippackError::from)
            .with_context(|| format!("Failed to add entry '{}' to {:?}", name, self.output))?;
        let written = io::copy(&mut file, &mut self.zip)
            .with_context(|| format!("Failed to write {:?} into {:?}", source, self.output))?;

        debug!("Added '{}' ({} bytes)", name, written);
        self.entries += 1;
        Ok(())
    }

    /// Writes the central directory and flushes the output. Returns the
    /// number of entries in the archive.
    pub fn finish(mut self) -> Result<usize> {
        let mut out = self
            .zip
            .finish()
            .map_err(ZippackError::from)
            .with_context(|| format!("Failed to finalize archive {:?}", self.output))?;
        out.flush()
            .with_context(|| format!("Failed to flush archive {:?}", self.output))?;
        info!("Wrote {} entries to {:?}", self.entries(), self.output);
        Ok(self.entries())
    }
}

/// # Write Archive (`write_archive`)
///
/// Creates `output` and adds every path in `sources` against `base`, in order.
/// Stops at the first failure; the partial archive stays on disk.
pub fn write_archive(
    output: &Path,
    sources: &[PathBuf],
    base: &str,
    progress: ProgressReporter,
) -> Result<usize> {
    let mut archive = ArchiveWriter::create(output, progress)?;
    for source in sources {
        archive.add_file(source, base)?;
    }
    archive.finish()
}
