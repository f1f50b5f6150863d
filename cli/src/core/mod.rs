//! # zippack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by the rest of the crate:
//! - `config`: Command-line flags and their validation into an `ArchiveRequest`
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust
//! use crate::core::config::{self, ArchiveRequest, PackArgs};
//! use crate::core::error::{Result, ZippackError};
//! ```
//!
pub mod config;
pub mod error;
