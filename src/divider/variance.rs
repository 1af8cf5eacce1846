use conv::ValueFrom;
use log::{debug, trace};
use ordered_float::OrderedFloat;

use super::{check_keys, check_target, Division, Divider};
use crate::error::Result;
use crate::key::SpatialKey;

/// Recursively bisects the keys along the dimension of greatest spread.
///
/// Each step sorts the members by the centre coordinate of the dimension in
/// which the centres vary most, and cuts them in proportion to the number of
/// groups each half still has to produce. Groups therefore hold spatially
/// close keys, and the number of groups always equals the target.
#[derive(Clone, Debug)]
pub struct VarianceDivider {
    keys: Vec<SpatialKey>,
    centers: Vec<Vec<f64>>,
}

impl VarianceDivider {
    pub fn new(keys: Vec<SpatialKey>) -> Result<Self> {
        check_keys(&keys)?;
        let centers = keys.iter().map(SpatialKey::center).collect();
        Ok(VarianceDivider { keys, centers })
    }

    fn bisect(&self, mut members: Vec<usize>, target: usize, groups: &mut Vec<Vec<usize>>) {
        if target <= 1 {
            groups.push(members);
            return;
        }

        // Sort the members along the split dimension
        let dimension = self.split_dimension(&members);
        members.sort_by(|&a, &b| {
            self.centers[a][dimension]
                .total_cmp(&self.centers[b][dimension])
                .then(a.cmp(&b))
        });

        // Each half gets at least as many members as it has groups to fill
        let left_target = target / 2;
        let right_target = target - left_target;
        let split_at = (members.len() * left_target / target)
            .clamp(left_target, members.len() - right_target);
        trace!(
            "bisecting {} members along dimension {dimension} at {split_at}",
            members.len()
        );

        let right = members.split_off(split_at);
        self.bisect(members, left_target, groups);
        self.bisect(right, right_target, groups);
    }

    fn split_dimension(&self, members: &[usize]) -> usize {
        // Calculate the variance at each dimension
        let variance = self.calculate_variance(members);

        // Find the dimension with the maximum variance
        variance
            .iter()
            .enumerate()
            .max_by_key(|(_, &variance)| OrderedFloat(variance))
            .map_or(0, |(i, _)| i)
    }

    fn calculate_variance(&self, members: &[usize]) -> Vec<f64> {
        let dimensions = self.keys[0].dimensions();
        let weight = f64::value_from(members.len()).unwrap_or(f64::MAX);

        let mut mean = vec![0.0; dimensions];
        for &member in members {
            for (m, x) in mean.iter_mut().zip(&self.centers[member]) {
                *m += x;
            }
        }
        for m in &mut mean {
            *m /= weight;
        }

        let mut variance = vec![0.0; dimensions];
        for &member in members {
            for (i, x) in self.centers[member].iter().enumerate() {
                variance[i] += (x - mean[i]).powi(2);
            }
        }
        for v in &mut variance {
            *v /= weight;
        }
        variance
    }
}

impl Divider for VarianceDivider {
    fn keys(&self) -> &[SpatialKey] {
        &self.keys
    }

    fn divide(&self, target: usize) -> Result<Division> {
        let len = self.keys.len();
        check_target(target, len)?;

        let mut members = Vec::with_capacity(target);
        self.bisect((0..len).collect(), target, &mut members);
        let division = Division::from_members(&self.keys, members)?;
        debug!(
            "variance division of {len} keys into {} groups (target {target})",
            division.len()
        );
        Ok(division)
    }
}

#[cfg(test)]
mod tests {
    use super::VarianceDivider;
    use crate::{Divider, Error, SpatialKey};

    fn point(x: f64, y: f64) -> SpatialKey {
        SpatialKey::point(&[x, y]).unwrap()
    }

    #[test]
    fn split_dimension() {
        // The points are spread along the x axis
        let keys = vec![
            point(0.0, 0.0),
            point(0.0, 2.0),
            point(1.0, 1.0),
            point(10.0, 1.0),
            point(11.0, 2.0),
        ];
        let divider = VarianceDivider::new(keys).unwrap();
        assert_eq!(divider.split_dimension(&[0, 1, 2, 3, 4]), 0);
        assert_eq!(divider.split_dimension(&[0, 1]), 1);
    }

    #[test]
    fn divide() {
        // Two clusters, interleaved in the input order
        let keys = vec![
            point(0.0, 0.0),
            point(10.0, 1.0),
            point(0.0, 2.0),
            point(11.0, 1.0),
            point(1.0, 1.0),
            point(10.0, 2.0),
            point(2.0, 0.0),
            point(11.0, 2.0),
        ];
        let divider = VarianceDivider::new(keys).unwrap();
        let division = divider.divide(2).unwrap();
        assert_eq!(division.len(), 2);

        let mut left = division.groups()[0].members().to_vec();
        let mut right = division.groups()[1].members().to_vec();
        left.sort_unstable();
        right.sort_unstable();
        assert_eq!(left, vec![0, 2, 4, 6]);
        assert_eq!(right, vec![1, 3, 5, 7]);
        assert_eq!(
            division.groups()[0].key(),
            &SpatialKey::from_corners(&[0.0, 0.0], &[2.0, 2.0]).unwrap()
        );
    }

    #[test]
    fn uneven_targets() {
        let keys = (0..7).map(|i| point(f64::from(i), 0.0)).collect();
        let divider = VarianceDivider::new(keys).unwrap();
        for target in 1..=7 {
            let division = divider.divide(target).unwrap();
            assert_eq!(division.len(), target);
            assert!(division.groups().iter().all(|g| !g.members().is_empty()));
            let total: usize = division.groups().iter().map(|g| g.members().len()).sum();
            assert_eq!(total, 7);
        }
    }

    #[test]
    fn invalid_input() {
        assert_eq!(VarianceDivider::new(Vec::new()).unwrap_err(), Error::EmptyInput);
        let divider = VarianceDivider::new(vec![point(0.0, 0.0)]).unwrap();
        assert!(divider.divide(1).is_ok());
        assert_eq!(
            divider.divide(2).unwrap_err(),
            Error::InvalidTarget {
                target: 2,
                available: 1
            }
        );
    }
}
