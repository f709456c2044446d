//! Sorters command implementation
//!
//! Implements `matrixsort sorters` to list the registered sorter kinds.

use anyhow::Result;

use crate::cli::output::{print_json, OutputConfig};
use crate::core::sorter::descriptors;

/// Execute the sorters command
pub fn execute() -> Result<()> {
    if OutputConfig::current().json {
        return print_json(descriptors());
    }

    for descriptor in descriptors() {
        let parameters = if descriptor.parameters.is_empty() {
            "(no parameters)".to_string()
        } else {
            descriptor.parameters.join(", ")
        };
        println!(
            "{:<20} {:<28} {parameters}",
            descriptor.kind, descriptor.display_name
        );
    }
    Ok(())
}
