use log::debug;

use crate::comparator::NodeComparator;
use crate::divider::{Divider, DividerFactory, Division};
use crate::error::{check_dimensions, Result};
use crate::fanout::Fanout;
use crate::key::SpatialKey;

/// A member of a tree: either a stored object or an internal node.
#[derive(Debug)]
pub enum Node<T> {
    Entry(LeafEntry<T>),
    Tree(TreeNode<T>),
}

impl<T> Node<T> {
    #[must_use]
    pub fn entry(item: T, key: SpatialKey) -> Node<T> {
        Node::Entry(LeafEntry::new(item, key))
    }

    #[must_use]
    pub fn spatial_key(&self) -> &SpatialKey {
        match self {
            Node::Entry(entry) => entry.key(),
            Node::Tree(tree) => tree.spatial_key(),
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.spatial_key().dimensions()
    }

    #[must_use]
    pub fn is_entry(&self) -> bool {
        matches!(self, Node::Entry(_))
    }

    /// Zero for entries, one more than the tallest child for tree nodes.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Node::Entry(_) => 0,
            Node::Tree(tree) => tree.height(),
        }
    }
}

impl<T> From<LeafEntry<T>> for Node<T> {
    fn from(entry: LeafEntry<T>) -> Self {
        Node::Entry(entry)
    }
}

impl<T> From<TreeNode<T>> for Node<T> {
    fn from(tree: TreeNode<T>) -> Self {
        Node::Tree(tree)
    }
}

/// A caller-supplied object together with the key describing its extent.
#[derive(Debug, Clone)]
pub struct LeafEntry<T> {
    item: T,
    key: SpatialKey,
}

impl<T> LeafEntry<T> {
    #[must_use]
    pub fn new(item: T, key: SpatialKey) -> LeafEntry<T> {
        LeafEntry { item, key }
    }

    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    #[must_use]
    pub fn key(&self) -> &SpatialKey {
        &self.key
    }

    #[must_use]
    pub fn into_item(self) -> T {
        self.item
    }
}

/// An internal node owning its children.
///
/// The key of a tree node always encloses the key of every child. Children
/// are kept in insertion order; there is no removal, a node is restructured
/// by moving all of its children out at once (see [`TreeNode::divide`]).
#[derive(Debug)]
pub struct TreeNode<T> {
    key: SpatialKey,
    children: Vec<Node<T>>,
}

impl<T> TreeNode<T> {
    /// Creates a childless node covering `key`.
    #[must_use]
    pub fn with_key(key: SpatialKey) -> TreeNode<T> {
        TreeNode {
            key,
            children: Vec::new(),
        }
    }

    /// Creates a node whose key is the union of its children's keys.
    pub fn from_children(children: Vec<Node<T>>) -> Result<TreeNode<T>> {
        let key = SpatialKey::union(children.iter().map(Node::spatial_key))?;
        Ok(TreeNode { key, children })
    }

    #[must_use]
    pub fn spatial_key(&self) -> &SpatialKey {
        &self.key
    }

    /// Appends `node` and grows this node's key to enclose it.
    pub fn add_sub_node(&mut self, node: impl Into<Node<T>>) -> Result<()> {
        let node = node.into();
        check_dimensions(self.key.dimensions(), node.dimensions())?;
        if !self.key.contains(node.spatial_key()) {
            self.key = self.key.union_with(node.spatial_key())?;
        }
        self.children.push(node);
        Ok(())
    }

    /// Direct children in insertion order.
    pub fn sub_nodes(&self) -> std::slice::Iter<'_, Node<T>> {
        self.children.iter()
    }

    #[must_use]
    pub fn into_sub_nodes(self) -> Vec<Node<T>> {
        self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .fold(0, |max, child| max.max(child.height()))
            + 1
    }

    #[must_use]
    pub fn is_overflowing(&self, fanout: &Fanout) -> bool {
        fanout.is_overflowing(self.len())
    }

    /// Index of the child that `comparator` ranks first, if any.
    pub fn choose_subtree<C>(&self, comparator: &C) -> Result<Option<usize>>
    where
        C: NodeComparator<T>,
    {
        crate::comparator::choose_subtree(comparator, self.children.iter())
    }

    /// Asks the divider `factory` builds over the children's keys for
    /// `target` groups.
    ///
    /// The division is checked to be a partition of the children, so a
    /// misbehaving divider is reported as [`crate::Error::InvalidDivision`].
    pub fn division<F>(&self, factory: &F, target: usize) -> Result<Division>
    where
        F: DividerFactory,
    {
        let keys = self.children.iter().map(|c| c.spatial_key().clone()).collect();
        let division = factory.create(keys)?.divide(target)?;
        division.check_partition(self.len())?;
        Ok(division)
    }

    /// Moves the children into one new node per group of a division.
    ///
    /// On success this node is left without children and should be
    /// discarded. On error nothing is moved, so the caller may retry, for
    /// instance with a smaller target.
    pub fn divide<F>(&mut self, factory: &F, target: usize) -> Result<Vec<TreeNode<T>>>
    where
        F: DividerFactory,
    {
        let division = self.division(factory, target)?;

        // Compute every key before moving any child
        let keys = division
            .groups()
            .iter()
            .map(|group| {
                SpatialKey::union(group.members().iter().map(|&m| self.children[m].spatial_key()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut slots = std::mem::take(&mut self.children)
            .into_iter()
            .map(Some)
            .collect::<Vec<_>>();
        let nodes = division
            .groups()
            .iter()
            .zip(keys)
            .map(|(group, key)| TreeNode {
                key,
                children: group
                    .members()
                    .iter()
                    .filter_map(|&member| slots[member].take())
                    .collect(),
            })
            .collect::<Vec<_>>();
        debug!(
            "divided node of {} children into {} nodes (target {target})",
            slots.len(),
            nodes.len()
        );
        Ok(nodes)
    }

    /// Splits an overflowing node into the number of groups `fanout` asks for.
    pub fn split<F>(&mut self, fanout: &Fanout, factory: &F) -> Result<Vec<TreeNode<T>>>
    where
        F: DividerFactory,
    {
        let target = fanout.split_target(self.len());
        self.divide(factory, target)
    }
}
