//! Matrix projects
//!
//! A [`MatrixProject`] owns the declared axes of a matrix and one
//! [`Configuration`] per combination. Sorters validate against it.

use std::collections::HashMap;
use std::time::Duration;

use crate::core::axis::AxisList;
use crate::core::combination::Combination;
use crate::core::configuration::Configuration;
use crate::error::AxisError;

/// A build matrix with its configurations
#[derive(Debug, Clone)]
pub struct MatrixProject {
    name: String,
    axes: AxisList,
    configurations: Vec<Configuration>,
}

impl MatrixProject {
    /// Create a project whose configurations carry no duration estimates
    pub fn new(name: impl Into<String>, axes: AxisList) -> Self {
        let configurations = axes
            .combinations()
            .into_iter()
            .map(Configuration::new)
            .collect();
        Self {
            name: name.into(),
            axes,
            configurations,
        }
    }

    /// Create a project and attach duration estimates by combination.
    ///
    /// Every key must name a combination of the matrix.
    pub fn with_durations(
        name: impl Into<String>,
        axes: AxisList,
        durations: &HashMap<Combination, Duration>,
    ) -> Result<Self, AxisError> {
        for combination in durations.keys() {
            axes.check_combination(combination)?;
        }

        let mut project = Self::new(name, axes);
        for config in &mut project.configurations {
            if let Some(duration) = durations.get(config.combination()) {
                *config = Configuration::new(config.combination().clone())
                    .with_estimated_duration(*duration);
            }
        }
        Ok(project)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared axes
    pub fn axes(&self) -> &AxisList {
        &self.axes
    }

    /// Configurations in enumeration order (not sorted)
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }
}
