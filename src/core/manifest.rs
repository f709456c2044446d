//! Manifest (matrix.toml) parsing
//!
//! The manifest declares the matrix axes, the sorter and optional duration
//! estimates. String values support environment variable substitution using
//! `${VAR}` syntax.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Duration;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::core::axis::{Axis, AxisList};
use crate::core::combination::Combination;
use crate::core::project::MatrixProject;
use crate::core::sorter::{
    CanonicalSorter, ConfigurationSorter, EstimatedDurationSorter, HeadsAndTailsSorter,
};
use crate::error::{ManifestError, MatrixsortError};

/// The matrix manifest (matrix.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Project configuration
    #[serde(default)]
    pub project: ProjectConfig,

    /// Matrix axes in declaration order
    #[serde(default, rename = "axis")]
    pub axes: Vec<Axis>,

    /// Sorter selection and parameters
    #[serde(default)]
    pub sorter: SorterConfig,

    /// Duration estimates in milliseconds, keyed by combination string
    #[serde(default)]
    pub durations: BTreeMap<String, u64>,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectConfig {
    /// Project name
    #[serde(default = "default_name")]
    pub name: String,

    /// Project description
    #[serde(default)]
    pub description: Option<String>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
        }
    }
}

/// Sorter section of the manifest, tagged by `kind`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SorterConfig {
    /// Canonical combination order
    #[default]
    Canonical,

    /// Priority lists on one axis
    HeadsAndTails {
        /// Axis whose values are ranked
        axis: String,

        /// Space-separated names to run first
        #[serde(default)]
        heads: Option<String>,

        /// Space-separated names to run last
        #[serde(default)]
        tails: Option<String>,
    },

    /// Estimated duration
    EstimatedDuration {
        /// Longest first instead of shortest first
        #[serde(default)]
        reversed: bool,
    },
}

impl SorterConfig {
    /// Construct the configured sorter
    pub fn build(&self) -> Box<dyn ConfigurationSorter> {
        match self {
            Self::Canonical => Box::new(CanonicalSorter),
            Self::HeadsAndTails { axis, heads, tails } => Box::new(HeadsAndTailsSorter::new(
                axis.clone(),
                heads.clone(),
                tails.clone(),
            )),
            Self::EstimatedDuration { reversed } => {
                Box::new(EstimatedDurationSorter::new(*reversed))
            }
        }
    }
}

/// Substitute environment variables in a string using ${VAR} syntax.
///
/// Unset variables are replaced with an empty string.
///
/// # Examples
/// ```
/// use matrixsort::core::manifest::substitute_env_vars;
///
/// std::env::set_var("MATRIXSORT_DOC_VAR", "linux");
/// let result = substitute_env_vars("os-${MATRIXSORT_DOC_VAR}").unwrap();
/// assert_eq!(result, "os-linux");
/// std::env::remove_var("MATRIXSORT_DOC_VAR");
/// ```
pub fn substitute_env_vars(input: &str) -> Result<String, String> {
    let re =
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| format!("Invalid regex: {e}"))?;

    Ok(re
        .replace_all(input, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        })
        .into_owned())
}

/// Recursively substitute environment variables in a TOML value
fn substitute_in_value(value: &mut toml::Value) -> Result<(), String> {
    match value {
        toml::Value::String(s) => {
            *s = substitute_env_vars(s)?;
        }
        toml::Value::Array(arr) => {
            for item in arr.iter_mut() {
                substitute_in_value(item)?;
            }
        }
        toml::Value::Table(table) => {
            for (_, v) in table.iter_mut() {
                substitute_in_value(v)?;
            }
        }
        _ => {}
    }
    Ok(())
}

impl Manifest {
    /// Load a manifest from file, substituting environment variables
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        tracing::debug!("Loaded manifest from {}", path.display());
        Self::from_toml_with_env(&content)
    }

    /// Parse a manifest from TOML after `${VAR}` substitution
    pub fn from_toml_with_env(content: &str) -> Result<Self, ManifestError> {
        let mut value: toml::Value = toml::from_str(content)?;
        substitute_in_value(&mut value).map_err(ManifestError::Substitution)?;
        Ok(value.try_into()?)
    }

    /// Parse a manifest from TOML as written
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize manifest to TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validated axis list
    pub fn axis_list(&self) -> Result<AxisList, MatrixsortError> {
        Ok(AxisList::new(self.axes.clone())?)
    }

    /// Parse the duration table against `axes`
    pub fn duration_estimates(
        &self,
        axes: &AxisList,
    ) -> Result<HashMap<Combination, Duration>, ManifestError> {
        self.durations
            .iter()
            .map(|(key, millis)| {
                let combination = key
                    .parse::<Combination>()
                    .and_then(|c| axes.check_combination(&c).map(|()| c))
                    .map_err(|e| ManifestError::UnknownDurationKey {
                        combination: key.clone(),
                        reason: e.to_string(),
                    })?;
                Ok((combination, Duration::from_millis(*millis)))
            })
            .collect()
    }

    /// Build the matrix project described by this manifest
    pub fn to_project(&self) -> Result<MatrixProject, MatrixsortError> {
        let axes = self.axis_list()?;
        let durations = self.duration_estimates(&axes)?;
        Ok(MatrixProject::with_durations(
            self.project.name.clone(),
            axes,
            &durations,
        )?)
    }
}
