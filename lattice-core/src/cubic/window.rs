//! Sliding 4x4 cache of lattice hashes for bicubic sampling.

use lattice_utils::LatticeHash;
use lattice_utils::math::cubic_interpolate;

use crate::NoiseField;

/// Hash values indexed `[x][y]`.
type Workspace = [[f32; 4]; 4];

/// The 4x4 lattice neighbourhood of one floor cell.
///
/// Entry `[i][j]` holds the hash of lattice point
/// `(floor_x + i - 1, floor_y + j - 1)`. Moving to a nearby cell copies every
/// entry still covered by the new neighbourhood and only hashes the rest.
/// Two workspaces are kept so a move reads the old state while writing the
/// new one; switching between them is a flag flip, never a copy.
pub struct CubicWindow<'a, H: LatticeHash> {
    field: &'a NoiseField<H>,
    workspaces: [Workspace; 2],
    /// Index of the workspace holding the current state.
    active: usize,
    floor_x: i32,
    floor_y: i32,
    hash_evaluations: usize,
}

impl<'a, H: LatticeHash> CubicWindow<'a, H> {
    /// Create a window populated for the cell at `(floor_x, floor_y)`.
    #[must_use]
    pub fn new(field: &'a NoiseField<H>, floor_x: i32, floor_y: i32) -> Self {
        let mut window = Self {
            field,
            workspaces: [[[0.0; 4]; 4]; 2],
            active: 0,
            floor_x,
            floor_y,
            hash_evaluations: 0,
        };
        window.init(floor_x, floor_y);
        window
    }

    /// Recompute the whole active workspace for the cell at `(floor_x, floor_y)`.
    pub fn init(&mut self, floor_x: i32, floor_y: i32) {
        let field = self.field;
        let work = &mut self.workspaces[self.active];
        for (i, column) in work.iter_mut().enumerate() {
            let cx = floor_x.wrapping_add(i as i32 - 1);
            for (j, value) in column.iter_mut().enumerate() {
                let cy = floor_y.wrapping_add(j as i32 - 1);
                *value = field.point_hash_2d(cx, cy);
            }
        }
        self.floor_x = floor_x;
        self.floor_y = floor_y;
        self.hash_evaluations += 16;
    }

    /// Shift the window to the cell at `(new_floor_x, new_floor_y)`.
    ///
    /// Entries whose lattice point is in both neighbourhoods are reused. Any
    /// distance is accepted; a shift of 4 or more along either axis simply
    /// recomputes all 16 entries.
    pub fn move_to(&mut self, new_floor_x: i32, new_floor_y: i32) {
        let field = self.field;
        let diff_x = i64::from(self.floor_x) - i64::from(new_floor_x);
        let diff_y = i64::from(self.floor_y) - i64::from(new_floor_y);

        let [first, second] = &mut self.workspaces;
        let (old, new) = if self.active == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        let mut computed = 0;
        for (i, column) in new.iter_mut().enumerate() {
            let cx = new_floor_x.wrapping_add(i as i32 - 1);
            let old_i = i as i64 - diff_x;
            for (j, value) in column.iter_mut().enumerate() {
                let old_j = j as i64 - diff_y;
                *value = if (0..4).contains(&old_i) && (0..4).contains(&old_j) {
                    old[old_i as usize][old_j as usize]
                } else {
                    computed += 1;
                    field.point_hash_2d(cx, new_floor_y.wrapping_add(j as i32 - 1))
                };
            }
        }

        self.active ^= 1;
        self.floor_x = new_floor_x;
        self.floor_y = new_floor_y;
        self.hash_evaluations += computed;
    }

    /// The floor cell the window currently covers.
    #[must_use]
    pub const fn floor(&self) -> (i32, i32) {
        (self.floor_x, self.floor_y)
    }

    /// Cached hash for lattice point `(floor_x + i - 1, floor_y + j - 1)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is 4 or more.
    #[must_use]
    pub fn value(&self, i: usize, j: usize) -> f32 {
        self.workspaces[self.active][i][j]
    }

    /// Total lattice hashes computed since the window was created.
    #[must_use]
    pub const fn hash_evaluations(&self) -> usize {
        self.hash_evaluations
    }

    /// Interpolate each of the four rows along X at `frac_x`.
    ///
    /// The result is the column of intermediate values that a subsequent
    /// interpolation along Y turns into a sample. Callers filling many rows
    /// at one X position compute this once and reuse it.
    #[inline]
    #[must_use]
    pub fn column(&self, frac_x: f32) -> [f32; 4] {
        let work = &self.workspaces[self.active];
        std::array::from_fn(|j| {
            cubic_interpolate(work[0][j], work[1][j], work[2][j], work[3][j], frac_x)
        })
    }

    /// Bicubic sample at `(frac_x, frac_y)` within the current cell.
    #[inline]
    #[must_use]
    pub fn sample(&self, frac_x: f32, frac_y: f32) -> f32 {
        let [r0, r1, r2, r3] = self.column(frac_x);
        cubic_interpolate(r0, r1, r2, r3, frac_y)
    }
}
