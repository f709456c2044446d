//! Strictly ordered configuration sets
//!
//! [`OrderedConfigurations`] keeps configurations sorted by a sorter and,
//! like a tree set, refuses an element that compares equal to one already
//! present. Because sorters break ties canonically, only configurations with
//! identical combinations collide.

use crate::core::configuration::Configuration;
use crate::core::sorter::ConfigurationSorter;

/// A sorted set of configurations keyed by a sorter
#[derive(Debug)]
pub struct OrderedConfigurations<'s> {
    sorter: &'s dyn ConfigurationSorter,
    items: Vec<Configuration>,
}

impl<'s> OrderedConfigurations<'s> {
    pub fn new(sorter: &'s dyn ConfigurationSorter) -> Self {
        Self {
            sorter,
            items: Vec::new(),
        }
    }

    /// Insert a configuration; returns `false` if an equal one is present
    pub fn insert(&mut self, configuration: Configuration) -> bool {
        let position = self
            .items
            .binary_search_by(|probe| self.sorter.compare(probe, &configuration));
        match position {
            Ok(_) => false,
            Err(index) => {
                self.items.insert(index, configuration);
                true
            }
        }
    }

    pub fn contains(&self, configuration: &Configuration) -> bool {
        self.items
            .binary_search_by(|probe| self.sorter.compare(probe, configuration))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in order
    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Configuration> {
        self.items
    }
}

impl Extend<Configuration> for OrderedConfigurations<'_> {
    fn extend<I: IntoIterator<Item = Configuration>>(&mut self, iter: I) {
        for configuration in iter {
            self.insert(configuration);
        }
    }
}
