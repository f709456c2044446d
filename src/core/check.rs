//! Check command logic
//!
//! Validates a manifest: axes, duration keys and sorter applicability.
//! Problems that would make ordering impossible are errors; suspicious but
//! harmless settings are warnings.

use crate::core::manifest::{Manifest, SorterConfig};
use crate::core::sorter::heads_tails::split_names;
use crate::core::sorter::{ConfigurationSorter, SorterDescriptor};

/// Result of the check operation
#[derive(Debug)]
pub struct CheckResult {
    /// Whether the axes form a valid matrix
    pub axes_valid: bool,
    /// Whether every duration key names a combination of the matrix
    pub durations_valid: bool,
    /// Whether the sorter is applicable to the project
    pub sorter_valid: bool,
    /// Selected sorter
    pub sorter: &'static SorterDescriptor,
    /// Number of configurations the matrix produces
    pub configuration_count: usize,
    /// Errors that block ordering
    pub errors: Vec<String>,
    /// Warnings encountered during check
    pub warnings: Vec<String>,
}

impl CheckResult {
    fn new(sorter: &'static SorterDescriptor) -> Self {
        Self {
            axes_valid: true,
            durations_valid: true,
            sorter_valid: true,
            sorter,
            configuration_count: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if all validations passed
    pub fn is_valid(&self) -> bool {
        self.axes_valid && self.durations_valid && self.sorter_valid
    }
}

/// Validate `manifest` without ordering anything
pub fn check(manifest: &Manifest) -> CheckResult {
    let sorter = manifest.sorter.build();
    let mut result = CheckResult::new(sorter.descriptor());

    let axes = match manifest.axis_list() {
        Ok(axes) => axes,
        Err(e) => {
            result.axes_valid = false;
            result.errors.push(e.to_string());
            return result;
        }
    };

    if axes.is_empty() {
        result
            .warnings
            .push("No axes declared; the matrix has no configurations".to_string());
    }

    if let Err(e) = manifest.duration_estimates(&axes) {
        result.durations_valid = false;
        result.errors.push(e.to_string());
    }

    match manifest.to_project() {
        Ok(project) => {
            result.configuration_count = project.configurations().len();
            if let Err(e) = sorter.validate(&project) {
                result.sorter_valid = false;
                result.errors.push(e.to_string());
            }
        }
        Err(_) if !result.durations_valid => {}
        Err(e) => {
            result.errors.push(e.to_string());
        }
    }

    match &manifest.sorter {
        SorterConfig::HeadsAndTails { axis, heads, tails } if result.sorter_valid => {
            if let Some(declared) = axes.find(axis) {
                for (list, source) in [("heads", heads), ("tails", tails)] {
                    for name in split_names(source.as_deref()) {
                        if !declared.allows(name) {
                            result.warnings.push(format!(
                                "{list} entry '{name}' is not a value of axis '{axis}'"
                            ));
                        }
                    }
                }
            }
        }
        SorterConfig::EstimatedDuration { .. } if manifest.durations.is_empty() => {
            result.warnings.push(
                "No duration estimates recorded; configurations will run in canonical order"
                    .to_string(),
            );
        }
        _ => {}
    }

    result
}
