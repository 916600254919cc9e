//! Cubic noise array generation.
//!
//! [`CubicNoise`] fills arrays with the same values [`NoiseField`] would give
//! point by point, but evaluates each lattice hash roughly once. Samples are
//! grouped by floor cell along each axis ([`FloorFracTable`]); a
//! [`CubicWindow`] holds the 4x4 hash neighbourhood of the current cell and
//! slides from cell to cell, so the number of hash evaluations follows the
//! number of cells spanned rather than the number of samples.

mod floor_frac;
mod window;

use std::ops::Range;

use lattice_utils::math::cubic_interpolate;
use lattice_utils::{IntegerHash, LatticeHash};

pub use floor_frac::{FloorFracTable, MAX_SIZE};
pub use window::CubicWindow;

use crate::{Axis, NoiseArray2D, NoiseError, NoiseField};

/// Seeded generator for arrays of cubic noise.
#[derive(Debug, Clone)]
pub struct CubicNoise<H = IntegerHash> {
    field: NoiseField<H>,
}

impl CubicNoise {
    /// Create a generator using the default [`IntegerHash`].
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self {
            field: NoiseField::new(seed),
        }
    }
}

impl<H: LatticeHash> CubicNoise<H> {
    /// Create a generator over an existing noise field.
    #[must_use]
    pub const fn from_field(field: NoiseField<H>) -> Self {
        Self { field }
    }

    /// The underlying point-sampling field.
    #[must_use]
    pub const fn field(&self) -> &NoiseField<H> {
        &self.field
    }

    /// Fill `out` with cubic noise sampled evenly over `x`.
    ///
    /// `out[i]` equals `field().cubic_noise_1d(x.start + i * step)` with the
    /// coordinate accumulated the same way [`FloorFracTable`] does.
    #[tracing::instrument(level = "trace", skip(self, out), fields(len = out.len()))]
    pub fn generate_1d(&self, out: &mut [f32], x: Range<f32>) -> Result<(), NoiseError> {
        let xs = FloorFracTable::new(Axis::X, out.len(), x).inspect_err(|err| {
            tracing::debug!(%err, "rejected 1D cubic noise request");
        })?;
        let Some(&first_floor) = xs.floor().first() else {
            return Ok(());
        };

        let mut floor_x = first_floor;
        let mut values = self.field.hash_run_1d(floor_x);
        let mut hash_evaluations = 4;
        for (group_floor, cols) in xs.groups() {
            if group_floor != floor_x {
                let shift = i64::from(group_floor) - i64::from(floor_x);
                values = std::array::from_fn(|i| {
                    let old = i as i64 + shift;
                    if (0..4).contains(&old) {
                        values[old as usize]
                    } else {
                        hash_evaluations += 1;
                        self.field
                            .point_hash_1d(group_floor.wrapping_add(i as i32 - 1))
                    }
                });
                floor_x = group_floor;
            }
            let [p0, p1, p2, p3] = values;
            for i in cols {
                out[i] = cubic_interpolate(p0, p1, p2, p3, xs.frac()[i]);
            }
        }

        tracing::trace!(hash_evaluations, "generated 1D cubic noise");
        Ok(())
    }

    /// Generate a `width` x `height` array of cubic noise over `x` by `y`.
    pub fn generate_2d(
        &self,
        width: usize,
        height: usize,
        x: Range<f32>,
        y: Range<f32>,
    ) -> Result<NoiseArray2D, NoiseError> {
        validate(width, height, &x, &y)?;
        let mut array = NoiseArray2D::new(width, height);
        self.generate_2d_into(&mut array, x, y)?;
        Ok(array)
    }

    /// Fill a caller-owned array with cubic noise over `x` by `y`.
    ///
    /// The value at `(i, j)` equals `field().cubic_noise_2d` at the matching
    /// sample coordinate, bit for bit. On error the array is left untouched.
    pub fn generate_2d_into(
        &self,
        array: &mut NoiseArray2D,
        x: Range<f32>,
        y: Range<f32>,
    ) -> Result<(), NoiseError> {
        let (width, height) = (array.width(), array.height());
        let values = array.as_mut_slice();
        self.generate_2d_with(width, height, x, y, |idx, value| values[idx] = value)?;
        Ok(())
    }

    /// Fill a caller-owned row-major slice of `width * height` values.
    pub fn generate_2d_slice(
        &self,
        out: &mut [f32],
        width: usize,
        height: usize,
        x: Range<f32>,
        y: Range<f32>,
    ) -> Result<(), NoiseError> {
        validate(width, height, &x, &y)?;
        // Both axes are below MAX_SIZE, so this cannot overflow
        let expected = width * height;
        if out.len() < expected {
            return Err(NoiseError::BufferTooSmall {
                expected,
                actual: out.len(),
            });
        }
        self.generate_2d_with(width, height, x, y, |idx, value| out[idx] = value)?;
        Ok(())
    }

    /// Drive the window over every floor cell and hand each value to `write`.
    ///
    /// Cells are visited band by band along Y and cell by cell along X. Inside
    /// a cell, each output column is interpolated along X once and then along
    /// Y for every row of the band. Returns the number of hash evaluations.
    #[tracing::instrument(level = "trace", skip(self, write))]
    fn generate_2d_with(
        &self,
        width: usize,
        height: usize,
        x: Range<f32>,
        y: Range<f32>,
        mut write: impl FnMut(usize, f32),
    ) -> Result<usize, NoiseError> {
        validate(width, height, &x, &y)?;
        let (xs, ys) = (
            FloorFracTable::new(Axis::X, width, x)?,
            FloorFracTable::new(Axis::Y, height, y)?,
        );
        let (Some(&first_x), Some(&first_y)) = (xs.floor().first(), ys.floor().first()) else {
            return Ok(0);
        };

        let mut window = CubicWindow::new(&self.field, first_x, first_y);
        let mut bands = ys.groups().peekable();
        while let Some((floor_y, rows)) = bands.next() {
            let mut cells = xs.groups().peekable();
            while let Some((_, cols)) = cells.next() {
                for col in cols {
                    let [r0, r1, r2, r3] = window.column(xs.frac()[col]);
                    for row in rows.clone() {
                        write(
                            row * width + col,
                            cubic_interpolate(r0, r1, r2, r3, ys.frac()[row]),
                        );
                    }
                }
                if let Some(&(next_x, _)) = cells.peek() {
                    window.move_to(next_x, floor_y);
                }
            }
            if let Some(&(next_y, _)) = bands.peek() {
                window.move_to(first_x, next_y);
            }
        }

        let hash_evaluations = window.hash_evaluations();
        tracing::trace!(hash_evaluations, "generated 2D cubic noise");
        Ok(hash_evaluations)
    }
}

/// Check a 2D request before anything is multiplied, allocated or written.
fn validate(
    width: usize,
    height: usize,
    x: &Range<f32>,
    y: &Range<f32>,
) -> Result<(), NoiseError> {
    FloorFracTable::validate(Axis::X, width, x)
        .and_then(|()| FloorFracTable::validate(Axis::Y, height, y))
        .inspect_err(|err| {
            tracing::debug!(%err, width, height, "rejected 2D cubic noise request");
        })
}
