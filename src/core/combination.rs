//! Matrix combinations
//!
//! A [`Combination`] assigns one value to every axis of a matrix and
//! identifies a single build configuration. Combinations have a canonical
//! total order and a canonical string form (`name=value,name=value`, pairs
//! sorted by axis name) which also serves as their manifest key.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::AxisError;

/// An immutable mapping from axis name to value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Combination {
    values: BTreeMap<String, String>,
}

impl Combination {
    /// Create a combination from `(axis, value)` pairs
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value assigned to `axis`, if the combination covers it
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    /// Number of axes assigned
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no axis is assigned
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(axis, value)` pairs in canonical (axis name) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Ord for Combination {
    /// Canonical order: fewer entries first, then pair by pair in axis
    /// name order, comparing the name and then the value.
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.len().cmp(&other.values.len()).then_with(|| {
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| va.cmp(vb)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Combination {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (axis, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{axis}={value}")?;
        }
        Ok(())
    }
}

impl FromStr for Combination {
    type Err = AxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        let mut values = BTreeMap::new();
        for pair in s.split(',') {
            let (axis, value) = pair.split_once('=').ok_or_else(|| {
                AxisError::MalformedCombination {
                    input: s.to_string(),
                    reason: format!("'{pair}' is not of the form name=value"),
                }
            })?;
            if axis.is_empty() {
                return Err(AxisError::MalformedCombination {
                    input: s.to_string(),
                    reason: "empty axis name".to_string(),
                });
            }
            if values.insert(axis.to_string(), value.to_string()).is_some() {
                return Err(AxisError::MalformedCombination {
                    input: s.to_string(),
                    reason: format!("axis '{axis}' assigned twice"),
                });
            }
        }

        Ok(Self { values })
    }
}

impl Serialize for Combination {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
