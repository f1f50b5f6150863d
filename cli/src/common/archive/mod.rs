//! # zippack Archive Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! Archive output for zippack. The only format is zip with deflate-compressed
//! entries, written by the `writer` submodule.
//!
//! - **`writer`**: `ArchiveWriter` (create, add entries, finish), the
//!   `write_archive` convenience wrapper, and `entry_name` for computing
//!   archive-relative names.
//!

pub mod writer;
