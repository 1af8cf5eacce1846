//! Strategies ranking candidate subtrees for an insertion.
//!
//! A comparator is primed with the node about to be inserted and then orders
//! candidates by how well they would accommodate it; the least candidate is
//! the preferred insertion path. Comparing before priming is an error.

mod distance;
mod enlargement;

pub use distance::{CenterMode, DistanceNodeComparator};
pub use enlargement::EnlargementNodeComparator;

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::node::Node;

pub trait NodeComparator<T> {
    /// Captures the node about to be inserted.
    fn set_node_to_insert(&mut self, node: &Node<T>);

    fn is_primed(&self) -> bool;

    /// Orders `a` before `b` when `a` is the better insertion path.
    ///
    /// Fails with [`Error::NotPrimed`] until a node to insert was set.
    fn compare(&self, a: &Node<T>, b: &Node<T>) -> Result<Ordering>;
}

/// Index of the candidate `comparator` ranks first.
///
/// Candidates that compare equal keep their order, so the earliest of them
/// wins. Returns `None` when there is no candidate.
pub fn choose_subtree<'a, T, C, I>(comparator: &C, candidates: I) -> Result<Option<usize>>
where
    T: 'a,
    C: NodeComparator<T> + ?Sized,
    I: IntoIterator<Item = &'a Node<T>>,
{
    if !comparator.is_primed() {
        return Err(Error::NotPrimed);
    }

    let mut best: Option<(usize, &Node<T>)> = None;
    for (index, candidate) in candidates.into_iter().enumerate() {
        best = match best {
            Some((_, current)) if comparator.compare(candidate, current)? != Ordering::Less => best,
            _ => Some((index, candidate)),
        };
    }
    Ok(best.map(|(index, _)| index))
}

#[cfg(test)]
mod tests {
    use super::{choose_subtree, DistanceNodeComparator, NodeComparator};
    use crate::{Error, Node, SpatialKey};

    fn entry(id: usize, x: f64) -> Node<usize> {
        Node::entry(id, SpatialKey::from_corners(&[x, 0.0], &[x + 1.0, 1.0]).unwrap())
    }

    #[test]
    fn choose() {
        let candidates = vec![entry(0, 10.0), entry(1, 2.0), entry(2, -2.0), entry(3, 2.0)];
        let mut comparator = DistanceNodeComparator::new();
        assert_eq!(
            choose_subtree(&comparator, &candidates),
            Err(Error::NotPrimed)
        );

        comparator.set_node_to_insert(&entry(4, 1.5));
        // The tie between 1 and 3 goes to the earlier candidate
        assert_eq!(choose_subtree(&comparator, &candidates), Ok(Some(1)));

        let none: Vec<Node<usize>> = Vec::new();
        assert_eq!(choose_subtree(&comparator, &none), Ok(None));
    }
}
