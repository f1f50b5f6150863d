//! # zippack Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the zippack CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Resolving the flags into an `ArchiveRequest` and running the pack command
//! - Turning errors into exit statuses
//!
//! ## Exit statuses
//!
//! - `0`: archive written, or no flags given (usage printed to stdout)
//! - `1`: filesystem or archive failure
//! - `2`: invalid flag combination (usage and the error printed to stderr)
//!
//! ## Examples
//!
//! ```bash
//! zippack --dir=./build --output=app.zip
//! zippack --input-file=files.txt --base-dir=/srv/app --output=app.zip --quiet
//! zippack -vv --dir=./build --output=app.zip   # debug logs on stderr
//! ```
//!
use clap::{CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // The pack command (mode dispatch)
mod common; // Input discovery, archive writing, progress output
mod core; // Flag validation and error types

use crate::core::config::{self, PackArgs};
use crate::core::error::{Result, ZippackError};

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "zippack",
    about = "Pack a directory or a list of files into a zip archive",
    long_about = "Pack a directory (--dir) or the files named in a list (--input-file) into a\n\
                  deflate-compressed zip archive. Entry names are the source paths relative\n\
                  to --base-dir, with forward slashes.",
    version
)]
struct Cli {
    #[command(flatten)]
    pack: PackArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Resolves the flags and packs. With no flags, prints usage instead.
fn run(args: &PackArgs) -> Result<()> {
    match config::resolve_request(args)? {
        None => Cli::command().print_help()?,
        Some(request) => {
            let entries = commands::pack::handle_pack(&request)?;
            tracing::info!("Packed {} file(s) into {:?}", entries, request.output);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(&cli.pack) {
        if let Some(ZippackError::InvalidArguments(_)) = e.downcast_ref::<ZippackError>() {
            eprintln!("{}", Cli::command().render_help());
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
        tracing::error!("Packing failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
