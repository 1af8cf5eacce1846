use log::debug;

use super::{check_keys, check_target, Division, Divider};
use crate::error::Result;
use crate::key::SpatialKey;

/// Distributes the keys over the groups in input order, ignoring geometry.
///
/// Group sizes differ by at most one and the number of groups always equals
/// the target. The groups can overlap heavily, which makes this divider a
/// baseline rather than a good split.
#[derive(Clone, Debug)]
pub struct UniformDivider {
    keys: Vec<SpatialKey>,
}

impl UniformDivider {
    pub fn new(keys: Vec<SpatialKey>) -> Result<Self> {
        check_keys(&keys)?;
        Ok(UniformDivider { keys })
    }
}

impl Divider for UniformDivider {
    fn keys(&self) -> &[SpatialKey] {
        &self.keys
    }

    fn divide(&self, target: usize) -> Result<Division> {
        let len = self.keys.len();
        check_target(target, len)?;

        let members = (0..target)
            .map(|group| (group * len / target..(group + 1) * len / target).collect())
            .collect();
        let division = Division::from_members(&self.keys, members)?;
        debug!(
            "uniform division of {len} keys into {} groups (target {target})",
            division.len()
        );
        Ok(division)
    }
}

#[cfg(test)]
mod tests {
    use super::UniformDivider;
    use crate::{Divider, Error, SpatialKey};

    fn keys(n: usize) -> Vec<SpatialKey> {
        (0..n)
            .map(|i| {
                let x = i as f64;
                SpatialKey::from_corners(&[x, 0.0], &[x + 1.0, 1.0]).unwrap()
            })
            .collect()
    }

    #[test]
    fn divide() {
        let divider = UniformDivider::new(keys(11)).unwrap();
        let division = divider.divide(4).unwrap();
        assert_eq!(division.len(), 4);

        let sizes = division
            .groups()
            .iter()
            .map(|group| group.members().len())
            .collect::<Vec<_>>();
        assert_eq!(sizes, vec![2, 3, 3, 3]);
        assert_eq!(division.groups()[0].members(), &[0, 1]);
        assert_eq!(
            division.groups()[0].key(),
            &SpatialKey::from_corners(&[0.0, 0.0], &[2.0, 1.0]).unwrap()
        );
    }

    #[test]
    fn repeated_divisions() {
        let divider = UniformDivider::new(keys(10)).unwrap();
        let expected = SpatialKey::union(divider.keys()).unwrap();
        for target in 1..=10 {
            let division = divider.divide(target).unwrap();
            assert_eq!(division.len(), target);
            assert_eq!(division.coverage().unwrap(), expected);
        }
        // Dividing again gives the same answer
        assert_eq!(divider.divide(3).unwrap(), divider.divide(3).unwrap());
    }

    #[test]
    fn invalid_input() {
        assert_eq!(UniformDivider::new(Vec::new()).unwrap_err(), Error::EmptyInput);

        let divider = UniformDivider::new(keys(3)).unwrap();
        assert_eq!(
            divider.divide(0).unwrap_err(),
            Error::InvalidTarget {
                target: 0,
                available: 3
            }
        );
        assert!(divider.divide(4).is_err());
    }
}
