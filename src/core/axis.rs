//! Matrix axes
//!
//! An [`Axis`] is a named dimension of the build matrix with an ordered list
//! of legal values. An [`AxisList`] holds the axes of one matrix and
//! enumerates its combinations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::combination::Combination;
use crate::error::AxisError;

/// A named matrix dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    /// Axis name, unique within a matrix
    pub name: String,

    /// Legal values in declaration order
    pub values: Vec<String>,
}

impl Axis {
    /// Create an axis from a name and its values
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `value` is legal on this axis
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    fn validate(&self) -> Result<(), AxisError> {
        if self.name.is_empty() {
            return Err(AxisError::EmptyName);
        }
        if self.values.is_empty() {
            return Err(AxisError::NoValues {
                name: self.name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for value in &self.values {
            if !seen.insert(value.as_str()) {
                return Err(AxisError::DuplicateValue {
                    name: self.name.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// The validated axes of one matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisList {
    axes: Vec<Axis>,
}

impl AxisList {
    /// Build an axis list, rejecting duplicate names and empty axes
    pub fn new(axes: Vec<Axis>) -> Result<Self, AxisError> {
        let mut names = HashSet::new();
        for axis in &axes {
            axis.validate()?;
            if !names.insert(axis.name.as_str()) {
                return Err(AxisError::DuplicateAxis {
                    name: axis.name.clone(),
                });
            }
        }
        Ok(Self { axes })
    }

    /// Whether an axis named `name` is declared
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Look up an axis by name
    pub fn find(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == name)
    }

    /// Iterate axes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Enumerate every combination of axis values.
    ///
    /// The first declared axis varies slowest. An empty axis list yields no
    /// combinations.
    pub fn combinations(&self) -> Vec<Combination> {
        if self.axes.is_empty() {
            return Vec::new();
        }

        let mut partial: Vec<Vec<(&str, &str)>> = vec![Vec::new()];
        for axis in &self.axes {
            partial = partial
                .into_iter()
                .flat_map(|prefix| {
                    axis.values.iter().map(move |value| {
                        let mut next = prefix.clone();
                        next.push((axis.name.as_str(), value.as_str()));
                        next
                    })
                })
                .collect();
        }

        partial.into_iter().map(Combination::new).collect()
    }

    /// Check that `combination` assigns exactly the declared axes legal values
    pub fn check_combination(&self, combination: &Combination) -> Result<(), AxisError> {
        for (name, value) in combination.iter() {
            let axis = self.find(name).ok_or_else(|| AxisError::UnknownAxis {
                name: name.to_string(),
            })?;
            if !axis.allows(value) {
                return Err(AxisError::UnknownValue {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }
        for axis in &self.axes {
            if combination.get(&axis.name).is_none() {
                return Err(AxisError::MissingAxis {
                    combination: combination.to_string(),
                    name: axis.name.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a AxisList {
    type Item = &'a Axis;
    type IntoIter = std::slice::Iter<'a, Axis>;

    fn into_iter(self) -> Self::IntoIter {
        self.axes.iter()
    }
}
