//! Check command implementation
//!
//! Implements `matrixsort check` to validate a manifest without ordering.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::cli::output::{print_json, status, OutputConfig};
use crate::core::check;
use crate::core::manifest::Manifest;

/// Execute the check command
pub fn execute(manifest_path: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_path)
        .with_context(|| format!("Failed to load manifest {}", manifest_path.display()))?;

    tracing::info!("Checking project: {}", manifest.project.name);

    let result = check::check(&manifest);

    if OutputConfig::current().json {
        print_json(&serde_json::json!({
            "project": manifest.project.name,
            "valid": result.is_valid(),
            "sorter": result.sorter,
            "configurations": result.configuration_count,
            "errors": result.errors,
            "warnings": result.warnings,
        }))?;
    } else {
        println!("Checking matrix configuration...\n");

        let line = |ok: bool, good: &str, bad: &str| {
            if ok {
                println!("{} {good}", status::SUCCESS);
            } else {
                println!("{} {bad}", status::ERROR);
            }
        };
        line(result.axes_valid, "Axes are valid", "Axis declarations have errors");
        line(
            result.durations_valid,
            "Duration estimates match the matrix",
            "Duration estimates refer to unknown combinations",
        );
        line(
            result.sorter_valid,
            "Sorter is applicable",
            "Sorter is not applicable to this matrix",
        );

        if !result.errors.is_empty() {
            println!("\nErrors:");
            for error in &result.errors {
                println!("  {} {error}", status::ERROR);
            }
        }

        if !result.warnings.is_empty() {
            println!("\nWarnings:");
            for warning in &result.warnings {
                println!("  {} {warning}", status::WARNING);
            }
        }

        println!("\nSorter: {}", result.sorter.display_name);
        println!("Configurations: {}", result.configuration_count);
        println!();
    }

    if result.is_valid() {
        if !OutputConfig::current().json {
            println!("{} Check passed", status::SUCCESS);
        }
        Ok(())
    } else {
        bail!("Check failed - please fix the issues above");
    }
}
