//! # zippack Directory Walker
//!
//! File: cli/src/common/fs/walk.rs
//!
//! ## Overview
//!
//! Collects the non-directory entries under a root directory for `--dir` mode.
//!
//! - Traversal is depth-first and uses `walkdir` with its default options, so
//!   entries come back in the order the host filesystem lists them. Nothing is
//!   sorted.
//! - Each returned path is the root joined with the entry's relative path, so
//!   stripping the root string later yields the archive-relative name.
//! - Directories are never returned.
//! - Symbolic links are not followed during traversal and are never filtered
//!   out. Every non-directory entry is returned as-is, so a link to a regular
//!   file is archived with its target's bytes, while a dangling link or a link
//!   to a directory makes the archive writer fail on that entry.
//!
//! The whole list is materialized before any archive output is created. A
//! listing failure anywhere in the tree fails the walk and no partial list is
//! returned.
//!
use crate::core::error::{Result, ZippackError};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// # Collect Files (`collect_files`)
///
/// Recursively lists every non-directory entry under `root`.
///
/// ## Errors
///
/// Returns an `Err` if:
/// - `root` does not exist or is not a directory.
/// - Any directory in the tree cannot be read (e.g., permissions).
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Walking directory {:?}", root);
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry
            .map_err(ZippackError::from)
            .with_context(|| format!("Failed to list directory {:?}", root))?;
        let file_type = entry.file_type();

        if entry.depth() == 0 {
            if !file_type.is_dir() {
                anyhow::bail!(ZippackError::FileSystem(format!(
                    "Not a directory: {:?}",
                    root
                )));
            }
            continue;
        }

        if file_type.is_dir() {
            continue;
        }

        if !file_type.is_file() {
            debug!("Keeping non-regular entry {:?}", entry.path());
        }
        files.push(entry.into_path());
    }

    info!("Found {} file(s) under {:?}", files.len(), root);
    Ok(files)
}
