//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod order;
pub mod sorters;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::defaults::{MANIFEST_ENV, MANIFEST_FILE};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print configurations in execution order
    Order {
        /// Path to the matrix manifest
        #[arg(short, long, env = MANIFEST_ENV)]
        manifest: Option<PathBuf>,
    },

    /// Validate the manifest and its sorter
    Check {
        /// Path to the matrix manifest
        #[arg(short, long, env = MANIFEST_ENV)]
        manifest: Option<PathBuf>,
    },

    /// List available sorters
    Sorters,
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Self::Order { manifest } => order::execute(&resolve_manifest(manifest)?),
            Self::Check { manifest } => check::execute(&resolve_manifest(manifest)?),
            Self::Sorters => sorters::execute(),
        }
    }
}

/// Use the given manifest path, or `matrix.toml` in the working directory
fn resolve_manifest(manifest: Option<PathBuf>) -> Result<PathBuf> {
    match manifest {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?.join(MANIFEST_FILE)),
    }
}
