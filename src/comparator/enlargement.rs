use std::cmp::Ordering;

use log::trace;
use ordered_float::OrderedFloat;

use super::NodeComparator;
use crate::error::{Error, Result};
use crate::key::SpatialKey;
use crate::node::Node;

/// Ranks candidates by the volume they would gain by absorbing the node to
/// insert, then by their own volume, then by key.
#[derive(Clone, Debug, Default)]
pub struct EnlargementNodeComparator {
    key: Option<SpatialKey>,
}

impl EnlargementNodeComparator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn enlargement(inserted: &SpatialKey, candidate: &SpatialKey) -> Result<f64> {
        let grown = candidate.union_with(inserted)?;
        Ok(grown.volume() - candidate.volume())
    }
}

impl<T> NodeComparator<T> for EnlargementNodeComparator {
    fn set_node_to_insert(&mut self, node: &Node<T>) {
        trace!("enlargement comparator primed with {}", node.spatial_key());
        self.key = Some(node.spatial_key().clone());
    }

    fn is_primed(&self) -> bool {
        self.key.is_some()
    }

    /// Fails with [`Error::IncompatibleDimension`] when a candidate's
    /// dimensionality differs from the primed node's.
    fn compare(&self, a: &Node<T>, b: &Node<T>) -> Result<Ordering> {
        let inserted = self.key.as_ref().ok_or(Error::NotPrimed)?;
        let (a, b) = (a.spatial_key(), b.spatial_key());
        let growth_a = OrderedFloat(Self::enlargement(inserted, a)?);
        let growth_b = OrderedFloat(Self::enlargement(inserted, b)?);
        Ok(growth_a
            .cmp(&growth_b)
            .then_with(|| OrderedFloat(a.volume()).cmp(&OrderedFloat(b.volume())))
            .then_with(|| a.cmp(b)))
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::EnlargementNodeComparator;
    use crate::{choose_subtree, Error, Node, NodeComparator, SpatialKey};

    fn node(min: &[f64], max: &[f64]) -> Node<u8> {
        Node::entry(0, SpatialKey::from_corners(min, max).unwrap())
    }

    #[test]
    fn enlargement() {
        let mut comparator = EnlargementNodeComparator::new();
        let a = node(&[0.0, 0.0], &[4.0, 4.0]);
        let b = node(&[5.0, 0.0], &[6.0, 1.0]);
        assert_eq!(comparator.compare(&a, &b), Err(Error::NotPrimed));

        // Fits in a without growing it, b would have to grow
        comparator.set_node_to_insert(&node(&[1.0, 1.0], &[2.0, 2.0]));
        assert_eq!(comparator.compare(&a, &b), Ok(Ordering::Less));

        // Both contain the point, the smaller one wins
        let c = node(&[0.0, 0.0], &[2.0, 2.0]);
        comparator.set_node_to_insert(&node(&[1.0, 1.0], &[1.0, 1.0]));
        assert_eq!(comparator.compare(&a, &c), Ok(Ordering::Greater));
        assert_eq!(choose_subtree(&comparator, [&a, &b, &c]), Ok(Some(2)));
    }

    #[test]
    fn mismatched_dimensions() {
        let mut comparator = EnlargementNodeComparator::new();
        comparator.set_node_to_insert(&node(&[0.0], &[1.0]));
        let a = node(&[0.0, 0.0], &[1.0, 1.0]);
        assert_eq!(
            comparator.compare(&a, &a),
            Err(Error::IncompatibleDimension {
                expected: 2,
                found: 1
            })
        );
    }
}
