//! # zippack Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! zippack has a single operation, so there is no subcommand enum; `main.rs`
//! resolves the flags and calls `pack::handle_pack` directly.
//!

/// Packs a directory or a file list into a zip archive.
pub mod pack;
