//! Heads-and-tails ordering
//!
//! Orders configurations by the value they take on one designated axis.
//! Two space-separated name lists configure the order: values listed in
//! `heads` run first, in list order; values listed in `tails` run last, in
//! list order; everything else runs in between. Values of equal rank are
//! ordered by name.
//!
//! Ranks are derived once per sorter and cached:
//!
//! | value                          | rank            |
//! |--------------------------------|-----------------|
//! | `heads[p]` of `n` heads        | `-(n - p)`      |
//! | unlisted                       | `0`             |
//! | `tails[p]`                     | `p + 1`         |
//!
//! A name repeated within one list keeps the rank of its last occurrence. A
//! name present in both lists takes its tails rank.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::configuration::Configuration;
use crate::core::project::MatrixProject;
use crate::core::sorter::{ConfigurationSorter, SorterDescriptor};
use crate::error::SorterError;

pub const DESCRIPTOR: SorterDescriptor = SorterDescriptor {
    kind: "heads-and-tails",
    display_name: "Heads and tails",
    parameters: &["axis", "heads", "tails"],
};

/// Sorter ranking one axis by two priority lists
#[derive(Debug, Clone)]
pub struct HeadsAndTailsSorter {
    axis: String,
    heads: Option<String>,
    tails: Option<String>,
    ranks: OnceLock<HashMap<String, i64>>,
}

impl HeadsAndTailsSorter {
    /// Create a sorter for `axis`.
    ///
    /// `heads` and `tails` are single-space separated names; `None` is an
    /// empty list. The axis is not checked here, see
    /// [`ConfigurationSorter::validate`].
    pub fn new(axis: impl Into<String>, heads: Option<String>, tails: Option<String>) -> Self {
        Self {
            axis: axis.into(),
            heads,
            tails,
            ranks: OnceLock::new(),
        }
    }

    pub fn axis(&self) -> &str {
        &self.axis
    }

    pub fn heads(&self) -> Option<&str> {
        self.heads.as_deref()
    }

    pub fn tails(&self) -> Option<&str> {
        self.tails.as_deref()
    }

    /// Rank of an axis value; unlisted values rank 0
    pub fn rank(&self, value: &str) -> i64 {
        self.ranks().get(value).copied().unwrap_or(0)
    }

    /// Compare two axis values by rank, then by name
    pub fn compare_values(&self, a: &str, b: &str) -> Ordering {
        self.compare_names(Some(a), Some(b))
    }

    fn compare_names(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        let rank = |v: Option<&str>| v.map_or(0, |v| self.rank(v));
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(&b))
    }

    fn ranks(&self) -> &HashMap<String, i64> {
        self.ranks.get_or_init(|| {
            let table = rank_table(
                &split_names(self.heads.as_deref()),
                &split_names(self.tails.as_deref()),
            );
            tracing::debug!(
                axis = %self.axis,
                entries = table.len(),
                "Built heads/tails rank table"
            );
            table
        })
    }
}

impl ConfigurationSorter for HeadsAndTailsSorter {
    fn compare_domain(&self, a: &Configuration, b: &Configuration) -> Ordering {
        self.compare_names(
            a.combination().get(&self.axis),
            b.combination().get(&self.axis),
        )
    }

    fn validate(&self, project: &MatrixProject) -> Result<(), SorterError> {
        if project.axes().contains(&self.axis) {
            Ok(())
        } else {
            Err(SorterError::AxisUndefined {
                axis: self.axis.clone(),
            })
        }
    }

    fn descriptor(&self) -> &'static SorterDescriptor {
        &DESCRIPTOR
    }
}

/// Split a name list on single spaces.
///
/// No trimming and no collapsing of repeated spaces; trailing empty entries
/// are dropped, so an empty source is an empty list.
pub(crate) fn split_names(source: Option<&str>) -> Vec<&str> {
    let mut names: Vec<&str> = source.map(|s| s.split(' ').collect()).unwrap_or_default();
    while names.last().is_some_and(|name| name.is_empty()) {
        names.pop();
    }
    names
}

fn rank_table(heads: &[&str], tails: &[&str]) -> HashMap<String, i64> {
    let mut ranks = HashMap::with_capacity(heads.len() + tails.len());
    let n = heads.len();
    for (p, name) in heads.iter().enumerate() {
        ranks.insert((*name).to_string(), -position_rank(n - p));
    }
    for (p, name) in tails.iter().enumerate() {
        ranks.insert((*name).to_string(), position_rank(p + 1));
    }
    ranks
}

fn position_rank(position: usize) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}
