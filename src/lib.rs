//! Building blocks of an R-tree family spatial index.
//!
//! [`SpatialKey`] is the bounding-box arithmetic, [`TreeNode`] keeps its key
//! enclosing every child, a [`Divider`] partitions the children of an
//! overflowing node into coverage-preserving groups, and a
//! [`NodeComparator`] ranks candidate subtrees for an insertion.
//!
//! ```
//! use rsplit::{
//!     DistanceNodeComparator, Fanout, Node, NodeComparator, SpatialKey, TreeNode, VarianceDivider,
//! };
//!
//! let fanout = Fanout::new(4).unwrap();
//! let mut node = TreeNode::with_key(SpatialKey::centered_cube(2, 20.0).unwrap());
//! for i in 0..5 {
//!     let x = f64::from(i) * 2.0;
//!     let key = SpatialKey::from_corners(&[x, 0.0], &[x + 1.0, 1.0]).unwrap();
//!     node.add_sub_node(Node::entry(i, key)).unwrap();
//! }
//! assert!(node.is_overflowing(&fanout));
//!
//! let nodes = node.split(&fanout, &VarianceDivider::new).unwrap();
//! assert_eq!(nodes.len(), 2);
//!
//! let mut comparator = DistanceNodeComparator::new();
//! let to_insert = Node::entry(5, SpatialKey::point(&[9.0, 0.5]).unwrap());
//! comparator.set_node_to_insert(&to_insert);
//! let candidates = nodes.into_iter().map(Node::from).collect::<Vec<_>>();
//! assert_eq!(rsplit::choose_subtree(&comparator, &candidates), Ok(Some(1)));
//! ```

mod comparator;
mod distance;
mod divider;
mod error;
mod fanout;
mod key;
mod node;

pub use comparator::{
    choose_subtree, CenterMode, DistanceNodeComparator, EnlargementNodeComparator, NodeComparator,
};
pub use divider::{Divider, DividerFactory, Division, Group, UniformDivider, VarianceDivider};
pub use error::{Error, Result};
pub use fanout::Fanout;
pub use key::{Bound, SpatialKey};
pub use node::{LeafEntry, Node, TreeNode};
