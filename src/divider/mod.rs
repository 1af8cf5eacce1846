//! Strategies that partition the children of an overflowing node.
//!
//! A [`Divider`] is built once over a fixed set of keys and may then be asked
//! for any number of divisions. Every division must
//!
//! - place each input key in exactly one group,
//! - cover exactly the space the input keys cover,
//! - return approximately the requested number of groups.
//!
//! The count is approximate by contract: callers read it from
//! [`Division::len`] rather than assuming the target was met.

mod uniform;
mod variance;

pub use uniform::UniformDivider;
pub use variance::VarianceDivider;

use log::debug;

use crate::error::{check_dimensions, Error, Result};
use crate::key::SpatialKey;

pub trait Divider {
    /// The keys this divider partitions, in the order they were supplied.
    fn keys(&self) -> &[SpatialKey];

    /// Partitions the keys into approximately `target` groups.
    fn divide(&self, target: usize) -> Result<Division>;
}

/// Builds a [`Divider`] over a set of keys.
///
/// Any `Fn(Vec<SpatialKey>) -> Result<D>` is a factory, so a divider's
/// constructor can be passed directly:
///
/// ```
/// use rsplit::{Divider, DividerFactory, SpatialKey, UniformDivider};
///
/// let keys = vec![
///     SpatialKey::from_corners(&[0.0], &[1.0]).unwrap(),
///     SpatialKey::from_corners(&[2.0], &[3.0]).unwrap(),
/// ];
/// let factory = UniformDivider::new;
/// let division = factory.create(keys).unwrap().divide(2).unwrap();
/// assert_eq!(division.len(), 2);
/// ```
pub trait DividerFactory {
    type Divider: Divider;

    fn create(&self, keys: Vec<SpatialKey>) -> Result<Self::Divider>;
}

impl<F, D> DividerFactory for F
where
    F: Fn(Vec<SpatialKey>) -> Result<D>,
    D: Divider,
{
    type Divider = D;

    fn create(&self, keys: Vec<SpatialKey>) -> Result<D> {
        self(keys)
    }
}

/// One group of a division: its bounding key and the indices of its members.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    key: SpatialKey,
    members: Vec<usize>,
}

impl Group {
    #[must_use]
    pub fn key(&self) -> &SpatialKey {
        &self.key
    }

    /// Indices into the divider's input keys.
    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }
}

/// The outcome of [`Divider::divide`].
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    groups: Vec<Group>,
}

impl Division {
    /// Builds the groups from member indices into `keys`; each group's key is
    /// the union of its members' keys.
    pub(crate) fn from_members(keys: &[SpatialKey], members: Vec<Vec<usize>>) -> Result<Division> {
        let groups = members
            .into_iter()
            .map(|members| {
                let key = SpatialKey::union(members.iter().map(|&i| &keys[i]))?;
                Ok(Group { key, members })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Division { groups })
    }

    /// Actual number of groups, which may differ from the requested target.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn keys(&self) -> impl Iterator<Item = &SpatialKey> {
        self.groups.iter().map(Group::key)
    }

    #[must_use]
    pub fn into_keys(self) -> Vec<SpatialKey> {
        self.groups.into_iter().map(|group| group.key).collect()
    }

    /// Union of every group key.
    pub fn coverage(&self) -> Result<SpatialKey> {
        SpatialKey::union(self.keys())
    }

    /// Checks that the groups are non-empty and together hold every index
    /// in `0..keys` exactly once.
    pub fn check_partition(&self, keys: usize) -> Result<()> {
        let mut seen = vec![false; keys];
        for group in &self.groups {
            if group.members.is_empty() {
                return Err(Error::InvalidDivision { keys });
            }
            for &member in &group.members {
                match seen.get_mut(member) {
                    Some(slot) if !*slot => *slot = true,
                    _ => return Err(Error::InvalidDivision { keys }),
                }
            }
        }
        if seen.iter().all(|&taken| taken) {
            Ok(())
        } else {
            Err(Error::InvalidDivision { keys })
        }
    }
}

/// Rejects empty key sets and keys of mixed dimensionality.
pub(crate) fn check_keys(keys: &[SpatialKey]) -> Result<()> {
    let first = keys.first().ok_or(Error::EmptyInput)?;
    for key in keys {
        check_dimensions(first.dimensions(), key.dimensions())?;
    }
    Ok(())
}

pub(crate) fn check_target(target: usize, available: usize) -> Result<()> {
    if target == 0 || target > available {
        debug!("rejected division of {available} keys into {target} groups");
        return Err(Error::InvalidTarget { target, available });
    }
    Ok(())
}
