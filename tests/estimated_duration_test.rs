//! Estimated-duration ordering over whole matrices
//!
//! Each duration becomes a unique axis value by appending a letter per
//! occurrence (`3A`, `1A`, `1B`, ...), so equal durations still form
//! distinct configurations.

use std::collections::HashMap;
use std::time::Duration;

use matrixsort::core::axis::{Axis, AxisList};
use matrixsort::core::combination::Combination;
use matrixsort::core::ordered::OrderedConfigurations;
use matrixsort::core::project::MatrixProject;
use matrixsort::core::sorter::{sort_configurations, EstimatedDurationSorter};

const AXIS: &str = "estimatedDuration";

/// Label each duration with its occurrence letter
fn unique_labels(durations: &[u64]) -> Vec<String> {
    let mut seen: HashMap<u64, u8> = HashMap::new();
    durations
        .iter()
        .map(|d| {
            let count = seen.entry(*d).or_insert(0);
            let label = format!("{d}{}", char::from(b'A' + *count));
            *count += 1;
            label
        })
        .collect()
}

fn project(durations: &[u64]) -> MatrixProject {
    let labels = unique_labels(durations);
    let axes = AxisList::new(vec![Axis::new(AXIS, labels.clone())]).unwrap();
    let estimates: HashMap<Combination, Duration> = labels
        .iter()
        .zip(durations)
        .map(|(label, ms)| {
            (
                Combination::new([(AXIS, label.as_str())]),
                Duration::from_millis(*ms),
            )
        })
        .collect();
    MatrixProject::with_durations("durations", axes, &estimates).unwrap()
}

fn ordered(durations: &[u64], reversed: bool) -> Vec<String> {
    let project = project(durations);
    let sorter = EstimatedDurationSorter::new(reversed);
    let mut set = OrderedConfigurations::new(&sorter);
    set.extend(project.configurations().iter().cloned());
    assert_eq!(set.len(), durations.len(), "no configuration may collapse");
    set.iter().map(ToString::to_string).collect()
}

fn expected(durations: &[u64], reversed: bool) -> Vec<String> {
    let mut sorted = durations.to_vec();
    sorted.sort_unstable();
    if reversed {
        sorted.reverse();
    }
    unique_labels(&sorted)
        .into_iter()
        .map(|label| format!("{AXIS}={label}"))
        .collect()
}

#[test]
fn test_ascending() {
    let durations = [3, 4, 6, 1, 2, 5];
    assert_eq!(ordered(&durations, false), expected(&durations, false));
}

#[test]
fn test_descending() {
    let durations = [3, 4, 6, 1, 2, 5];
    assert_eq!(ordered(&durations, true), expected(&durations, true));
}

#[test]
fn test_ascending_with_duplicate() {
    let durations = [3, 4, 6, 1, 2, 5, 1];
    assert_eq!(ordered(&durations, false), expected(&durations, false));
}

#[test]
fn test_all_equal_falls_back_to_canonical() {
    let durations = [1, 1, 1, 1, 1];
    assert_eq!(ordered(&durations, false), expected(&durations, false));
}

#[test]
fn test_descending_ties_keep_canonical_order() {
    let actual = ordered(&[2, 1, 2], true);
    assert_eq!(
        actual,
        [
            "estimatedDuration=2A",
            "estimatedDuration=2B",
            "estimatedDuration=1A",
        ]
    );
}

#[test]
fn test_missing_estimates_sort_as_zero() {
    let axes = AxisList::new(vec![Axis::new("suite", ["e2e", "lint", "unit"])]).unwrap();
    let mut estimates = HashMap::new();
    estimates.insert(
        Combination::new([("suite", "e2e")]),
        Duration::from_secs(600),
    );
    estimates.insert(
        Combination::new([("suite", "unit")]),
        Duration::from_secs(30),
    );
    let project = MatrixProject::with_durations("p", axes, &estimates).unwrap();

    let mut configs = project.configurations().to_vec();
    sort_configurations(&mut configs, &EstimatedDurationSorter::new(false));
    let names: Vec<String> = configs.iter().map(ToString::to_string).collect();
    assert_eq!(names, ["suite=lint", "suite=unit", "suite=e2e"]);
}

#[test]
fn test_sorting_sorted_sequence_is_stable() {
    let project = project(&[5, 3, 3, 9]);
    let sorter = EstimatedDurationSorter::new(true);
    let mut once = project.configurations().to_vec();
    sort_configurations(&mut once, &sorter);
    let mut twice = once.clone();
    sort_configurations(&mut twice, &sorter);
    assert_eq!(once, twice);
}
