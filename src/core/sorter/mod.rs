//! Configuration sorters
//!
//! A sorter decides the sequence in which the configurations of a matrix
//! run. Every sorter supplies a domain rule ([`ConfigurationSorter::compare_domain`])
//! which may report no preference; [`consistent`] turns such a rule into a
//! strict total order by falling back to the canonical order of the
//! configurations' combinations.
//!
//! # Sorters
//!
//! - [`canonical`] - canonical combination order only
//! - [`heads_tails`] - priority lists on one axis
//! - [`duration`] - estimated duration, ascending or descending

pub mod canonical;
pub mod duration;
pub mod heads_tails;

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::core::configuration::Configuration;
use crate::core::project::MatrixProject;
use crate::error::SorterError;

pub use canonical::CanonicalSorter;
pub use duration::EstimatedDurationSorter;
pub use heads_tails::HeadsAndTailsSorter;

/// An ordering policy over the configurations of a matrix.
///
/// Implementations hold only their construction parameters (plus derived,
/// immutable caches) and can be reused across any number of sorts.
pub trait ConfigurationSorter: fmt::Debug + Send + Sync {
    /// Strategy-specific comparison. May return [`Ordering::Equal`] for
    /// distinct configurations; must be antisymmetric and transitive.
    fn compare_domain(&self, a: &Configuration, b: &Configuration) -> Ordering;

    /// Full comparison: the domain rule, then the canonical tie-break.
    ///
    /// Returns [`Ordering::Equal`] only for configurations with identical
    /// combinations.
    fn compare(&self, a: &Configuration, b: &Configuration) -> Ordering {
        consistent(|x, y| self.compare_domain(x, y))(a, b)
    }

    /// Check that the sorter is applicable to `project`
    fn validate(&self, _project: &MatrixProject) -> Result<(), SorterError> {
        Ok(())
    }

    /// Registration metadata for this sorter kind
    fn descriptor(&self) -> &'static SorterDescriptor;
}

/// Wrap a domain comparator so that ties fall back to canonical
/// combination order.
pub fn consistent<F>(domain: F) -> impl Fn(&Configuration, &Configuration) -> Ordering
where
    F: Fn(&Configuration, &Configuration) -> Ordering,
{
    move |a: &Configuration, b: &Configuration| {
        domain(a, b).then_with(|| a.combination().cmp(b.combination()))
    }
}

/// Sort configurations in place
pub fn sort_configurations(
    configurations: &mut [Configuration],
    sorter: &dyn ConfigurationSorter,
) {
    configurations.sort_by(|a, b| sorter.compare(a, b));
}

/// Validate `sorter` against `project` and return its configurations in
/// execution order
pub fn order(
    project: &MatrixProject,
    sorter: &dyn ConfigurationSorter,
) -> Result<Vec<Configuration>, SorterError> {
    sorter.validate(project)?;

    let mut configurations = project.configurations().to_vec();
    sort_configurations(&mut configurations, sorter);

    tracing::debug!(
        project = project.name(),
        sorter = sorter.descriptor().kind,
        count = configurations.len(),
        "Ordered configurations"
    );
    Ok(configurations)
}

/// Registration metadata describing one sorter kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SorterDescriptor {
    /// Manifest `kind` value
    pub kind: &'static str,
    /// Human-readable name
    pub display_name: &'static str,
    /// Construction parameters accepted in the manifest
    pub parameters: &'static [&'static str],
}

/// All registered sorter kinds
pub fn descriptors() -> &'static [SorterDescriptor] {
    const ALL: &[SorterDescriptor] = &[
        canonical::DESCRIPTOR,
        heads_tails::DESCRIPTOR,
        duration::DESCRIPTOR,
    ];
    ALL
}

/// Look up a sorter kind by its manifest name
pub fn find_descriptor(kind: &str) -> Option<&'static SorterDescriptor> {
    descriptors().iter().find(|d| d.kind == kind)
}
