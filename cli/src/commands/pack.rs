//! # zippack Pack Command
//!
//! File: cli/src/commands/pack.rs
//!
//! ## Overview
//!
//! Runs one packing job for a validated `ArchiveRequest`. There are two
//! branches and no intermediate states:
//!
//! 1. **Directory mode** (`--dir`): walk the root with `common::fs::walk`, then
//!    write every file using the root string itself as the base. `--base-dir`
//!    is not consulted in this mode.
//! 2. **List mode** (`--input-file`): read the list with `common::fs::list`,
//!    then write every listed path using the resolved `--base-dir`.
//!
//! Input discovery finishes before the output file is created. Any error is
//! returned to `main` unchanged.
//!
//! ## Examples
//!
//! ```bash
//! # Archive a tree; entries are named relative to /tmp/src
//! zippack --dir=/tmp/src --output=/tmp/out.zip
//!
//! # Archive listed files; entries are named relative to /tmp
//! zippack --input-file=list.txt --base-dir=/tmp --output=/tmp/out.zip
//! ```
//!
use crate::common::archive::writer;
use crate::common::fs::{list, walk};
use crate::common::ui::ProgressReporter;
use crate::core::config::{ArchiveRequest, InputSource};
use crate::core::error::Result;
use std::path::Path;
use tracing::{debug, info};

/// # Handle Pack (`handle_pack`)
///
/// Runs `request`, printing progress lines to stdout unless it is quiet.
/// Returns the number of archived files.
pub fn handle_pack(request: &ArchiveRequest) -> Result<usize> {
    pack(request, ProgressReporter::for_quiet_flag(request.quiet))
}

/// Runs `request` with an explicit progress sink.
pub fn pack(request: &ArchiveRequest, progress: ProgressReporter) -> Result<usize> {
    if progress.is_quiet() {
        debug!("Progress output disabled");
    }
    match &request.source {
        InputSource::Directory(root) => {
            info!("Archiving directory {:?} into {:?}", root, request.output);
            let files = walk::collect_files(Path::new(root))?;
            writer::write_archive(&request.output, &files, root, progress)
        }
        InputSource::FileList(list_path) => {
            info!(
                "Archiving files listed in {:?} into {:?}",
                list_path, request.output
            );
            let files = list::read_file_list(list_path)?;
            writer::write_archive(&request.output, &files, &request.base_dir, progress)
        }
    }
}
