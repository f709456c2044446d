//! Canonical ordering
//!
//! The default sorter: it never expresses a preference, so configurations
//! run in the canonical order of their combinations.

use std::cmp::Ordering;

use crate::core::configuration::Configuration;
use crate::core::sorter::{ConfigurationSorter, SorterDescriptor};

pub const DESCRIPTOR: SorterDescriptor = SorterDescriptor {
    kind: "canonical",
    display_name: "Canonical (no reordering)",
    parameters: &[],
};

/// Sorter with no domain rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanonicalSorter;

impl ConfigurationSorter for CanonicalSorter {
    fn compare_domain(&self, _a: &Configuration, _b: &Configuration) -> Ordering {
        Ordering::Equal
    }

    fn descriptor(&self) -> &'static SorterDescriptor {
        &DESCRIPTOR
    }
}
