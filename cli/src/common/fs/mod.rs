//! # zippack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! The two ways zippack discovers its input files:
//!
//! - **`walk`**: Recursively lists the regular files under a directory (`--dir` mode).
//! - **`list`**: Reads a newline-delimited list of paths (`--input-file` mode).
//!
//! ```rust
//! use crate::common::fs::{list, walk};
//!
//! # fn run_example() -> Result<()> {
//! let from_tree = walk::collect_files(Path::new("./src"))?;
//! let from_list = list::read_file_list(Path::new("./files.txt"))?;
//! # Ok(())
//! # }
//! ```
//!

/// Reads newline-delimited path lists (`read_file_list`).
pub mod list;
/// Recursive directory traversal (`collect_files`).
pub mod walk;
