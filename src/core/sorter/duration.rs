//! Estimated-duration ordering
//!
//! Orders configurations by their duration estimate, shortest first, or
//! longest first when reversed. Configurations without an estimate count as
//! zero.

use std::cmp::Ordering;

use crate::core::configuration::Configuration;
use crate::core::sorter::{ConfigurationSorter, SorterDescriptor};

pub const DESCRIPTOR: SorterDescriptor = SorterDescriptor {
    kind: "estimated-duration",
    display_name: "Estimated duration",
    parameters: &["reversed"],
};

/// Sorter by estimated duration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimatedDurationSorter {
    reversed: bool,
}

impl EstimatedDurationSorter {
    pub fn new(reversed: bool) -> Self {
        Self { reversed }
    }

    /// Whether the longest configurations run first
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

impl ConfigurationSorter for EstimatedDurationSorter {
    fn compare_domain(&self, a: &Configuration, b: &Configuration) -> Ordering {
        let ord = a.estimated_duration().cmp(&b.estimated_duration());
        if self.reversed {
            ord.reverse()
        } else {
            ord
        }
    }

    fn descriptor(&self) -> &'static SorterDescriptor {
        &DESCRIPTOR
    }
}
