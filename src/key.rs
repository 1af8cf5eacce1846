use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{check_dimensions, Error, Result};

/// A closed interval `[min, max]` along one axis.
#[derive(Clone, Copy, Debug)]
pub struct Bound {
    min: f64,
    max: f64,
}

impl Bound {
    /// Creates a bound, rejecting NaN ends and `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Bound> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(Error::InvalidBound { min, max });
        }
        Ok(Bound { min, max })
    }

    #[must_use]
    pub fn point(value: f64) -> Bound {
        Bound {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    /// Geometric midpoint of the interval.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.min + self.extent() / 2.0
    }

    #[must_use]
    pub fn union(&self, other: &Bound) -> Bound {
        Bound {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[must_use]
    pub fn contains(&self, other: &Bound) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    fn total_cmp(&self, other: &Bound) -> Ordering {
        self.min
            .total_cmp(&other.min)
            .then(self.max.total_cmp(&other.max))
    }
}

/// An axis-aligned box in n-dimensional space, one [`Bound`] per dimension.
///
/// Keys are immutable values: every combining operation returns a new key.
/// Equality, hashing and ordering are defined on the bound values, so two
/// nodes covering the same box carry equal keys.
///
/// ```
/// use rsplit::SpatialKey;
///
/// let cube = SpatialKey::centered_cube(3, 20.0).unwrap();
/// assert_eq!(cube.volume(), 8000.0);
/// ```
#[derive(Clone, Debug)]
pub struct SpatialKey {
    bounds: Vec<Bound>,
}

impl SpatialKey {
    /// Creates a key from its per-dimension bounds.
    ///
    /// Fails with [`Error::EmptyInput`] when no bound is given.
    pub fn new(bounds: Vec<Bound>) -> Result<SpatialKey> {
        if bounds.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(SpatialKey { bounds })
    }

    /// Creates a key spanning the lower corner `min` to the upper corner `max`.
    pub fn from_corners(min: &[f64], max: &[f64]) -> Result<SpatialKey> {
        check_dimensions(min.len(), max.len())?;
        let bounds = min
            .iter()
            .zip(max)
            .map(|(&lo, &hi)| Bound::new(lo, hi))
            .collect::<Result<Vec<_>>>()?;
        SpatialKey::new(bounds)
    }

    /// Creates a degenerate key (zero volume) located at `coords`.
    pub fn point(coords: &[f64]) -> Result<SpatialKey> {
        SpatialKey::from_corners(coords, coords)
    }

    /// Cube of the given side length centred on the origin.
    ///
    /// A side of NaN is rejected like any other invalid bound.
    pub fn centered_cube(dimensions: usize, side: f64) -> Result<SpatialKey> {
        let half = side.abs() / 2.0;
        let bound = Bound::new(-half, half)?;
        SpatialKey::new(vec![bound; dimensions])
    }

    #[must_use]
    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    /// Product of the extents; zero when the key is flat in any dimension.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.bounds.iter().map(Bound::extent).product()
    }

    /// Midpoint of the key in every dimension.
    #[must_use]
    pub fn center(&self) -> Vec<f64> {
        self.bounds.iter().map(Bound::center).collect()
    }

    /// The `max` end of every bound.
    #[must_use]
    pub fn upper_corner(&self) -> Vec<f64> {
        self.bounds.iter().map(Bound::max).collect()
    }

    #[must_use]
    pub fn contains(&self, other: &SpatialKey) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .bounds
                .iter()
                .zip(&other.bounds)
                .all(|(outer, inner)| outer.contains(inner))
    }

    pub fn union_with(&self, other: &SpatialKey) -> Result<SpatialKey> {
        check_dimensions(self.dimensions(), other.dimensions())?;
        let bounds = self
            .bounds
            .iter()
            .zip(&other.bounds)
            .map(|(a, b)| a.union(b))
            .collect();
        Ok(SpatialKey { bounds })
    }

    /// The tightest key enclosing every key of `keys`.
    ///
    /// The result does not depend on the order of the input. Fails with
    /// [`Error::EmptyInput`] when `keys` is empty and with
    /// [`Error::IncompatibleDimension`] when the keys disagree on their
    /// dimensionality.
    pub fn union<'a, I>(keys: I) -> Result<SpatialKey>
    where
        I: IntoIterator<Item = &'a SpatialKey>,
    {
        let mut keys = keys.into_iter();
        let first = keys.next().ok_or(Error::EmptyInput)?;
        let mut bounds = first.bounds.clone();
        for key in keys {
            check_dimensions(bounds.len(), key.dimensions())?;
            for (bound, other) in bounds.iter_mut().zip(&key.bounds) {
                *bound = bound.union(other);
            }
        }
        Ok(SpatialKey { bounds })
    }
}

impl PartialEq for SpatialKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SpatialKey {}

impl PartialOrd for SpatialKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SpatialKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bounds
            .iter()
            .zip(&other.bounds)
            .map(|(a, b)| a.total_cmp(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.dimensions().cmp(&other.dimensions()))
    }
}

impl Hash for SpatialKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for bound in &self.bounds {
            bound.min.to_bits().hash(state);
            bound.max.to_bits().hash(state);
        }
    }
}

impl fmt::Display for SpatialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bound) in self.bounds.iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "[{}, {}]", bound.min, bound.max)?;
        }
        Ok(())
    }
}
