use std::cmp::Ordering;

use log::trace;
use ordered_float::OrderedFloat;

use super::NodeComparator;
use crate::distance::euclidean;
use crate::error::{check_dimensions, Error, Result};
use crate::key::SpatialKey;
use crate::node::Node;

/// The point of a key used as its representative by [`DistanceNodeComparator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CenterMode {
    /// The midpoint of every bound.
    #[default]
    Midpoint,
    /// The upper end of every bound, `min + (max - min)`.
    ///
    /// Kept for trees whose shape must match indexes built with that rule.
    UpperBound,
}

impl CenterMode {
    fn center_of(self, key: &SpatialKey) -> Vec<f64> {
        match self {
            CenterMode::Midpoint => key.center(),
            CenterMode::UpperBound => key.upper_corner(),
        }
    }
}

/// Ranks candidates by the euclidean distance between their centre and the
/// centre of the node to insert.
///
/// Candidates at the same distance are ordered by their keys, so only
/// candidates with equal keys compare as equal.
#[derive(Clone, Debug, Default)]
pub struct DistanceNodeComparator {
    mode: CenterMode,
    center: Option<Vec<f64>>,
}

impl DistanceNodeComparator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_center_mode(mode: CenterMode) -> Self {
        DistanceNodeComparator { mode, center: None }
    }

    #[must_use]
    pub fn center_mode(&self) -> CenterMode {
        self.mode
    }

    fn distance(&self, center: &[f64], node: &SpatialKey) -> Result<f64> {
        check_dimensions(center.len(), node.dimensions())?;
        Ok(euclidean(center, &self.mode.center_of(node)))
    }
}

impl<T> NodeComparator<T> for DistanceNodeComparator {
    fn set_node_to_insert(&mut self, node: &Node<T>) {
        let center = self.mode.center_of(node.spatial_key());
        trace!("distance comparator primed at {center:?}");
        self.center = Some(center);
    }

    fn is_primed(&self) -> bool {
        self.center.is_some()
    }

    fn compare(&self, a: &Node<T>, b: &Node<T>) -> Result<Ordering> {
        let center = self.center.as_deref().ok_or(Error::NotPrimed)?;
        let (a, b) = (a.spatial_key(), b.spatial_key());
        let distance_a = OrderedFloat(self.distance(center, a)?);
        let distance_b = OrderedFloat(self.distance(center, b)?);
        Ok(distance_a.cmp(&distance_b).then_with(|| a.cmp(b)))
    }
}
