//! Build configurations
//!
//! One [`Configuration`] exists per matrix combination. Besides its
//! combination it carries an optional duration estimate, which the
//! estimated-duration sorter consults.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::core::combination::Combination;

/// A build unit bound to one combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    combination: Combination,
    #[serde(rename = "estimated_duration_ms", serialize_with = "serialize_millis")]
    estimated_duration: Option<Duration>,
}

fn serialize_millis<S: serde::Serializer>(
    value: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(d) => serializer.serialize_some(&u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
        None => serializer.serialize_none(),
    }
}

impl Configuration {
    /// Create a configuration with no duration estimate
    pub fn new(combination: Combination) -> Self {
        Self {
            combination,
            estimated_duration: None,
        }
    }

    /// Attach a duration estimate
    #[must_use]
    pub fn with_estimated_duration(mut self, duration: Duration) -> Self {
        self.estimated_duration = Some(duration);
        self
    }

    pub fn combination(&self) -> &Combination {
        &self.combination
    }

    /// Duration estimate, zero when none is known
    pub fn estimated_duration(&self) -> Duration {
        self.estimated_duration.unwrap_or_default()
    }

    /// Whether a duration estimate was recorded
    pub fn has_estimate(&self) -> bool {
        self.estimated_duration.is_some()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.combination.fmt(f)
    }
}

impl From<Combination> for Configuration {
    fn from(combination: Combination) -> Self {
        Self::new(combination)
    }
}
