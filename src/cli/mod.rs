//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// Matrixsort - deterministic execution order for build matrices
///
/// Reads a matrix manifest and prints its configurations in the order the
/// configured sorter chooses.
#[derive(Parser, Debug)]
#[command(name = "matrixsort")]
#[command(author, version, about, long_about = None)]
#[command(long_version = long_version())]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors and results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run()
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

/// Version string with build metadata, when the build script recorded it
fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let mut version = env!("CARGO_PKG_VERSION").to_string();
        if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
            version.push_str(&format!("\ncommit: {sha}"));
        }
        if let Some(target) = option_env!("VERGEN_CARGO_TARGET_TRIPLE") {
            version.push_str(&format!("\ntarget: {target}"));
        }
        if let Some(rustc) = option_env!("VERGEN_RUSTC_SEMVER") {
            version.push_str(&format!("\nrustc: {rustc}"));
        }
        if let Some(built) = option_env!("VERGEN_BUILD_TIMESTAMP") {
            version.push_str(&format!("\nbuilt: {built}"));
        }
        version
    })
}
