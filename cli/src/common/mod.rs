//! # zippack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared building blocks used by the `pack` command. Keeps input discovery,
//! archive output, and terminal output apart from the flag handling in
//! `core` and the orchestration in `commands`.
//!
//! - **`archive`**: Zip archive writing and entry-name computation.
//! - **`fs`**: Input discovery: directory walking and file-list reading.
//! - **`ui`**: Per-entry progress lines on stdout.
//!

/// Zip archive writing.
pub mod archive;
/// Directory walking and file-list reading.
pub mod fs;
/// Progress output.
pub mod ui;
