//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use std::collections::HashMap;
    use std::time::Duration;

    use proptest::prelude::*;

    use crate::core::axis::{Axis, AxisList};
    use crate::core::manifest::SorterConfig;
    use crate::core::project::MatrixProject;

    /// Generate an axis name (lowercase alphanumeric)
    pub fn axis_name() -> impl Strategy<Value = String> {
        "[a-z0-9]{1,6}"
    }

    /// Generate an axis value; short so that values collide with name lists
    pub fn axis_value() -> impl Strategy<Value = String> {
        "[a-z]{1,2}"
    }

    /// Generate a valid axis list with 1-3 axes of 1-3 values each
    pub fn axis_list() -> impl Strategy<Value = AxisList> {
        prop::collection::btree_map(
            axis_name(),
            prop::collection::btree_set(axis_value(), 1..4),
            1..4,
        )
        .prop_map(|axes| {
            AxisList::new(
                axes.into_iter()
                    .map(|(name, values)| Axis::new(name, values))
                    .collect(),
            )
            .expect("generated axes are unique and non-empty")
        })
    }

    /// Generate an optional space-separated name list
    pub fn name_list() -> impl Strategy<Value = Option<String>> {
        prop::option::of(prop::collection::vec(axis_value(), 0..5).prop_map(|v| v.join(" ")))
    }

    /// Generate a project with sparse, tie-prone duration estimates together
    /// with a sorter configuration that applies to it
    pub fn project_with_sorter() -> impl Strategy<Value = (MatrixProject, SorterConfig)> {
        axis_list()
            .prop_flat_map(|axes| {
                let names: Vec<String> = axes.iter().map(|a| a.name.clone()).collect();
                let count = axes.combinations().len();
                (
                    Just(axes),
                    prop::sample::select(names),
                    name_list(),
                    name_list(),
                    any::<bool>(),
                    prop::collection::vec(prop::option::of(0u64..4), count),
                    0u8..3,
                )
            })
            .prop_map(|(axes, axis, heads, tails, reversed, estimates, kind)| {
                let durations: HashMap<_, _> = axes
                    .combinations()
                    .into_iter()
                    .zip(estimates)
                    .filter_map(|(c, ms)| ms.map(|ms| (c, Duration::from_millis(ms))))
                    .collect();
                let project = MatrixProject::with_durations("generated", axes, &durations)
                    .expect("durations are keyed by generated combinations");
                let sorter = match kind {
                    0 => SorterConfig::Canonical,
                    1 => SorterConfig::HeadsAndTails { axis, heads, tails },
                    _ => SorterConfig::EstimatedDuration { reversed },
                };
                (project, sorter)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::sorter::ConfigurationSorter;
    use crate::config::defaults::MIN_PROPTEST_ITERATIONS;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(MIN_PROPTEST_ITERATIONS))]

        #[test]
        fn test_axis_list_generator(axes in axis_list()) {
            prop_assert!(!axes.is_empty());
            prop_assert!(axes.iter().all(|a| !a.values.is_empty()));
        }

        #[test]
        fn test_project_generator_sorter_applies((project, sorter) in project_with_sorter()) {
            prop_assert!(sorter.build().validate(&project).is_ok());
            prop_assert_eq!(
                project.configurations().len(),
                project.axes().combinations().len()
            );
        }
    }
}
