//! Per-axis coordinate tables for array generation.

use std::cmp::Ordering;
use std::ops::Range;

use lattice_utils::math::floor;

use crate::{Axis, NoiseError};

/// Exclusive upper bound on the length of a generated axis.
///
/// The coordinate tables live in fixed-size arrays so that filling an
/// array does not touch the heap.
pub const MAX_SIZE: usize = 512;

/// Lowest coordinate whose floor is representable as an `i32`.
const LATTICE_MIN: f32 = i32::MIN as f32;
/// Range ends above this would floor to a saturated `i32`.
const LATTICE_MAX: f32 = i32::MAX as f32;

/// Floor, fraction and run-length tables for one axis of an output array.
///
/// Sample `i` sits at `start + i * (end - start) / size` (accumulated, not
/// recomputed), which splits into `floor()[i] + frac()[i]`. Ranges must lie
/// within the `i32` lattice so that every floor is exact. Consecutive samples
/// sharing a floor value form a run; `runs()` holds the run lengths in order.
pub struct FloorFracTable {
    floor: [i32; MAX_SIZE],
    frac: [f32; MAX_SIZE],
    runs: [usize; MAX_SIZE],
    len: usize,
    num_runs: usize,
}

impl FloorFracTable {
    /// Build the tables for `size` samples spanning `range`.
    ///
    /// Fails under the same conditions as [`FloorFracTable::validate`].
    pub fn new(axis: Axis, size: usize, range: Range<f32>) -> Result<Self, NoiseError> {
        Self::validate(axis, size, &range)?;

        let mut table = Self {
            floor: [0; MAX_SIZE],
            frac: [0.0; MAX_SIZE],
            runs: [0; MAX_SIZE],
            len: size,
            num_runs: 0,
        };

        let step = (range.end - range.start) / size as f32;
        let mut val = range.start;
        for i in 0..size {
            let f = floor(val);
            table.floor[i] = f;
            table.frac[i] = val - f as f32;
            val += step;
        }

        let mut run_start = 0;
        for i in 1..size {
            if table.floor[i] != table.floor[run_start] {
                table.runs[table.num_runs] = i - run_start;
                table.num_runs += 1;
                run_start = i;
            }
        }
        if run_start < size {
            table.runs[table.num_runs] = size - run_start;
            table.num_runs += 1;
        }

        Ok(table)
    }

    /// Check an axis request without building the tables.
    ///
    /// Fails if `range` is empty, has a NaN bound or reaches outside the `i32`
    /// lattice, or if `size` is not below [`MAX_SIZE`].
    pub fn validate(axis: Axis, size: usize, range: &Range<f32>) -> Result<(), NoiseError> {
        // NaN bounds are unordered and rejected here as well
        let ordered = range.start.partial_cmp(&range.end) == Some(Ordering::Less);
        if !ordered || range.start < LATTICE_MIN || range.end > LATTICE_MAX {
            return Err(NoiseError::InvalidRange {
                axis,
                start: range.start,
                end: range.end,
            });
        }
        if size >= MAX_SIZE {
            return Err(NoiseError::SizeTooLarge {
                axis,
                size,
                max: MAX_SIZE,
            });
        }
        Ok(())
    }

    /// Number of samples along the axis.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the axis has no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Integer floor of each sample coordinate.
    #[must_use]
    pub fn floor(&self) -> &[i32] {
        &self.floor[..self.len]
    }

    /// Fractional part of each sample coordinate, in `[0, 1)`.
    #[must_use]
    pub fn frac(&self) -> &[f32] {
        &self.frac[..self.len]
    }

    /// Lengths of the runs of equal floor values, in axis order.
    #[must_use]
    pub fn runs(&self) -> &[usize] {
        &self.runs[..self.num_runs]
    }

    /// Each run as its shared floor value and the sample indices it covers.
    pub fn groups(&self) -> impl Iterator<Item = (i32, Range<usize>)> + '_ {
        self.runs().iter().scan(0, |from, &run| {
            let range = *from..*from + run;
            *from += run;
            Some((self.floor[range.start], range))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_steps_give_one_run_per_sample() {
        let table = FloorFracTable::new(Axis::X, 4, 0.0..4.0).expect("valid table");
        assert_eq!(table.floor(), &[0, 1, 2, 3]);
        assert_eq!(table.runs(), &[1, 1, 1, 1]);
        assert!(table.frac().iter().all(|&f| f == 0.0));
    }

    #[test]
    fn half_steps_pair_up() {
        let table = FloorFracTable::new(Axis::X, 4, 0.0..2.0).expect("valid table");
        assert_eq!(table.floor(), &[0, 0, 1, 1]);
        assert_eq!(table.frac(), &[0.0, 0.5, 0.0, 0.5]);
        assert_eq!(table.runs(), &[2, 2]);

        let groups: Vec<_> = table.groups().collect();
        assert_eq!(groups, vec![(0, 0..2), (1, 2..4)]);
    }

    #[test]
    fn negative_range_floors_down() {
        let table = FloorFracTable::new(Axis::Y, 4, -1.0..1.0).expect("valid table");
        assert_eq!(table.floor(), &[-1, -1, 0, 0]);
        assert_eq!(table.frac(), &[0.0, 0.5, 0.0, 0.5]);
    }

    #[test]
    fn single_cell_is_one_run() {
        let table = FloorFracTable::new(Axis::X, 8, 3.0..3.5).expect("valid table");
        assert_eq!(table.runs(), &[8]);
        assert_eq!(table.groups().next(), Some((3, 0..8)));
    }

    #[test]
    fn empty_axis_has_no_runs() {
        let table = FloorFracTable::new(Axis::X, 0, 0.0..1.0).expect("valid table");
        assert!(table.is_empty());
        assert!(table.runs().is_empty());
        assert_eq!(table.groups().count(), 0);
    }

    #[test]
    fn rejects_inverted_and_nan_ranges() {
        assert!(matches!(
            FloorFracTable::new(Axis::X, 4, 2.0..1.0),
            Err(NoiseError::InvalidRange { axis: Axis::X, .. })
        ));
        assert!(matches!(
            FloorFracTable::new(Axis::Y, 4, 1.0..1.0),
            Err(NoiseError::InvalidRange { axis: Axis::Y, .. })
        ));
        assert!(matches!(
            FloorFracTable::new(Axis::X, 4, f32::NAN..1.0),
            Err(NoiseError::InvalidRange { .. })
        ));
    }

    #[test]
    fn rejects_ranges_outside_the_lattice() {
        assert!(matches!(
            FloorFracTable::new(Axis::X, 4, 3.0e9..3.1e9),
            Err(NoiseError::InvalidRange { axis: Axis::X, .. })
        ));
        assert!(matches!(
            FloorFracTable::new(Axis::Y, 4, -3e9..0.0),
            Err(NoiseError::InvalidRange { axis: Axis::Y, .. })
        ));
        assert!(matches!(
            FloorFracTable::new(Axis::X, 4, 0.0..f32::INFINITY),
            Err(NoiseError::InvalidRange { .. })
        ));

        // Near the edge every fraction still lands in [0, 1]
        let table =
            FloorFracTable::new(Axis::X, 8, -2.0e9..-2.0e9 + 4096.0).expect("valid table");
        assert!(table.frac().iter().all(|&f| (0.0..=1.0).contains(&f)));
    }

    #[test]
    fn rejects_oversized_axis() {
        assert!(FloorFracTable::new(Axis::X, MAX_SIZE - 1, 0.0..1.0).is_ok());
        assert_eq!(
            FloorFracTable::new(Axis::Y, MAX_SIZE, 0.0..1.0).err(),
            Some(NoiseError::SizeTooLarge {
                axis: Axis::Y,
                size: MAX_SIZE,
                max: MAX_SIZE,
            })
        );
    }
}
