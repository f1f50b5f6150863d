//! # zippack File-List Reader
//!
//! File: cli/src/common/fs/list.rs
//!
//! ## Overview
//!
//! Reads the `--input-file` list: one path per line, in file order. Blank
//! lines are skipped. Apart from removing the line ending (`\n` or `\r\n`)
//! nothing is trimmed, and duplicates are kept.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reads the newline-delimited path list at `path`.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be opened or a read fails partway
/// (including invalid UTF-8). The partial list is discarded.
pub fn read_file_list(path: &Path) -> Result<Vec<PathBuf>> {
    let file = File::open(path).with_context(|| format!("Failed to open file list {:?}", path))?;

    let mut entries = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line =
            line.with_context(|| format!("Failed to read line {} of {:?}", index + 1, path))?;
        if line.is_empty() {
            debug!("Skipping blank line {} of {:?}", index + 1, path);
            continue;
        }
        entries.push(PathBuf::from(line));
    }

    info!("Read {} path(s) from {:?}", entries.len(), path);
    Ok(entries)
}
