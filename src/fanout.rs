use crate::error::{Error, Result};

/// Bounds on the number of children a tree node may hold.
///
/// The minimum fanout is half of the maximum. Fanouts below 4 are rejected,
/// since a split of such a node could not leave both halves at the minimum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fanout {
    min: usize,
    max: usize,
}

impl Fanout {
    pub fn new(max: usize) -> Result<Self> {
        if max < 4 {
            return Err(Error::InvalidFanout(max));
        }
        Ok(Fanout { min: max / 2, max })
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }

    #[must_use]
    pub fn is_overflowing(&self, len: usize) -> bool {
        len > self.max
    }

    #[must_use]
    pub fn is_underflowing(&self, len: usize) -> bool {
        len < self.min
    }

    /// Number of groups to ask a divider for when splitting `len` children.
    #[must_use]
    pub fn split_target(&self, len: usize) -> usize {
        ((len + self.max - 1) / self.max).max(2)
    }
}

impl Default for Fanout {
    fn default() -> Self {
        Fanout { min: 5, max: 10 }
    }
}
