//! # zippack Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout zippack. Every failure
//! in this tool is fatal, so the goal is not recovery but a clear message at
//! the single exit point in `main.rs`.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ZippackError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Invalid flag combinations (reported together with the usage text)
//! - Filesystem errors (open, stat, read, list)
//! - Entry names that cannot be derived from the base directory
//! - Directory walk and zip writer failures
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! anyhow::bail!(ZippackError::InvalidArguments("output file name is required".into()));
//!
//! // Add context to errors using anyhow
//! let file = File::open(&path)
//!     .with_context(|| format!("Failed to open source file {:?}", path))?;
//!
//! // Pick the exit path in main
//! match err.downcast_ref::<ZippackError>() {
//!     Some(ZippackError::InvalidArguments(_)) => { /* usage + exit 2 */ }
//!     _ => { /* exit 1 */ }
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for zippack.
#[derive(Error, Debug)]
pub enum ZippackError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Path '{path}' is not inside base directory '{base}'")]
    OutsideBase { path: String, base: String },

    #[error("Directory walk failed: {source}")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    #[error("Zip archive error: {source}")]
    Archive {
        #[from]
        source: zip::result::ZipError,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
