//! Order command implementation
//!
//! Implements `matrixsort order`: prints the configurations of the matrix in
//! execution order, one combination per line.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::{print_json, print_status, status, OutputConfig};
use crate::core::manifest::Manifest;
use crate::core::sorter;

/// Execute the order command
pub fn execute(manifest_path: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;

    let project = manifest
        .to_project()
        .context("Manifest does not describe a valid matrix")?;
    let strategy = manifest.sorter.build();

    tracing::info!(
        "Ordering {} configurations of '{}' by {}",
        project.configurations().len(),
        project.name(),
        strategy.descriptor().display_name
    );

    let ordered = sorter::order(&project, strategy.as_ref())
        .context("Sorter is not applicable to this matrix")?;

    if OutputConfig::current().json {
        return print_json(&ordered);
    }

    for configuration in &ordered {
        println!("{configuration}");
    }
    print_status(
        status::SUCCESS,
        &format!(
            "{} configurations ordered by {}",
            ordered.len(),
            strategy.descriptor().display_name
        ),
    );
    Ok(())
}
