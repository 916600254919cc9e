//! Seeded point-sampling noise.
//!
//! A [`NoiseField`] pairs an immutable seed with a [`LatticeHash`] and turns
//! lattice hash values into continuous noise by interpolation. These are the
//! brute-force paths: each call evaluates every lattice point it needs. Use
//! [`CubicNoise`](crate::CubicNoise) to fill whole arrays.

use lattice_utils::math::{cosine_interpolate, cubic_interpolate, floor, linear_interpolate};
use lattice_utils::{HASH_SCALE, IntegerHash, LatticeHash};

/// Seeded lattice noise.
///
/// Immutable after construction, so a single field can be shared by any
/// number of threads.
#[derive(Debug, Clone)]
pub struct NoiseField<H = IntegerHash> {
    seed: i32,
    hash: H,
}

impl NoiseField {
    /// Create a field using the default [`IntegerHash`].
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self {
            seed,
            hash: IntegerHash,
        }
    }
}

impl<H: LatticeHash> NoiseField<H> {
    /// Create a field backed by a custom lattice hash.
    #[must_use]
    pub const fn with_hash(seed: i32, hash: H) -> Self {
        Self { seed, hash }
    }

    /// The seed this field was built with.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    /// Hash value of a 1D lattice point, in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn point_hash_1d(&self, x: i32) -> f32 {
        self.hash.hash_1d(self.seed, x) as f32 * HASH_SCALE
    }

    /// Hash value of a 2D lattice point, in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn point_hash_2d(&self, x: i32, y: i32) -> f32 {
        self.hash.hash_2d(self.seed, x, y) as f32 * HASH_SCALE
    }

    /// Hash value of a 3D lattice point, in `[-1, 1]`.
    #[inline]
    #[must_use]
    pub fn point_hash_3d(&self, x: i32, y: i32, z: i32) -> f32 {
        self.hash.hash_3d(self.seed, x, y, z) as f32 * HASH_SCALE
    }

    /// 1D noise, linearly interpolated between the two enclosing lattice points.
    #[must_use]
    pub fn linear_noise_1d(&self, x: f32) -> f32 {
        let base_x = floor(x);
        let frac_x = x - base_x as f32;
        linear_interpolate(
            self.point_hash_1d(base_x),
            self.point_hash_1d(base_x.wrapping_add(1)),
            frac_x,
        )
    }

    /// 1D noise, cosine interpolated between the two enclosing lattice points.
    #[must_use]
    pub fn cosine_noise_1d(&self, x: f32) -> f32 {
        let base_x = floor(x);
        let frac_x = x - base_x as f32;
        cosine_interpolate(
            self.point_hash_1d(base_x),
            self.point_hash_1d(base_x.wrapping_add(1)),
            frac_x,
        )
    }

    /// 1D noise, cubically interpolated over lattice points `floor(x) - 1 ..= floor(x) + 2`.
    #[must_use]
    pub fn cubic_noise_1d(&self, x: f32) -> f32 {
        let base_x = floor(x);
        let frac_x = x - base_x as f32;
        let [p0, p1, p2, p3] = self.hash_run_1d(base_x);
        cubic_interpolate(p0, p1, p2, p3, frac_x)
    }

    /// Blend of a lattice point with its two neighbours, weighted `1/2, 1/4, 1/4`.
    ///
    /// The blend is done on the raw integer hashes with truncating division
    /// and scaled afterwards, so it carries the small bias toward zero of
    /// fixed-point smoothing rather than being an exact average.
    #[must_use]
    pub fn smooth_noise_1d(&self, x: i32) -> f32 {
        let hash = |x| self.hash.hash_1d(self.seed, x);
        let blended = hash(x) / 2 + hash(x.wrapping_sub(1)) / 4 + hash(x.wrapping_add(1)) / 4;
        blended as f32 * HASH_SCALE
    }

    /// Bicubic 2D noise over the 4x4 lattice neighbourhood of `(x, y)`.
    ///
    /// Interpolates each of the four rows along X, then the results along Y.
    #[must_use]
    pub fn cubic_noise_2d(&self, x: f32, y: f32) -> f32 {
        let base_x = floor(x);
        let base_y = floor(y);
        let frac_x = x - base_x as f32;
        let frac_y = y - base_y as f32;

        let mut rows = [0.0; 4];
        for (j, row) in rows.iter_mut().enumerate() {
            let cy = base_y.wrapping_add(j as i32 - 1);
            let [p0, p1, p2, p3] = self.hash_run_2d(base_x, cy);
            *row = cubic_interpolate(p0, p1, p2, p3, frac_x);
        }

        cubic_interpolate(rows[0], rows[1], rows[2], rows[3], frac_y)
    }

    /// Tricubic 3D noise over the 4x4x4 lattice neighbourhood of `(x, y, z)`.
    ///
    /// For each Z slice, interpolates the rows along X and then along Y;
    /// the four slice values are finally interpolated along Z.
    #[must_use]
    pub fn cubic_noise_3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let base_x = floor(x);
        let base_y = floor(y);
        let base_z = floor(z);
        let frac_x = x - base_x as f32;
        let frac_y = y - base_y as f32;
        let frac_z = z - base_z as f32;

        let mut slices = [0.0; 4];
        for (k, slice) in slices.iter_mut().enumerate() {
            let cz = base_z.wrapping_add(k as i32 - 1);
            let mut rows = [0.0; 4];
            for (j, row) in rows.iter_mut().enumerate() {
                let cy = base_y.wrapping_add(j as i32 - 1);
                let [p0, p1, p2, p3] = self.hash_run_3d(base_x, cy, cz);
                *row = cubic_interpolate(p0, p1, p2, p3, frac_x);
            }
            *slice = cubic_interpolate(rows[0], rows[1], rows[2], rows[3], frac_y);
        }

        cubic_interpolate(slices[0], slices[1], slices[2], slices[3], frac_z)
    }

    /// Hashes of the four lattice points `base_x - 1 ..= base_x + 2`.
    #[inline]
    pub(crate) fn hash_run_1d(&self, base_x: i32) -> [f32; 4] {
        std::array::from_fn(|i| self.point_hash_1d(base_x.wrapping_add(i as i32 - 1)))
    }

    #[inline]
    fn hash_run_2d(&self, base_x: i32, y: i32) -> [f32; 4] {
        std::array::from_fn(|i| self.point_hash_2d(base_x.wrapping_add(i as i32 - 1), y))
    }

    #[inline]
    fn hash_run_3d(&self, base_x: i32, y: i32, z: i32) -> [f32; 4] {
        std::array::from_fn(|i| self.point_hash_3d(base_x.wrapping_add(i as i32 - 1), y, z))
    }
}
