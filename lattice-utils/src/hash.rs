//! Deterministic hashing of integer lattice coordinates.
//!
//! Every noise function in the workspace is built on top of a [`LatticeHash`]:
//! a pure function from `(seed, coordinates)` to an integer in
//! `[-HASH_ONE, HASH_ONE]`. The same inputs give the same output on every run
//! and platform, which is what makes terrain regenerable from a seed.

/// Fixed-point unit of the hash output range.
///
/// Hash values lie in `[-HASH_ONE, HASH_ONE]`; dividing by this maps them onto `[-1, 1]`.
pub const HASH_ONE: i32 = 1 << 16;

/// Multiplier turning a hash value into a float in `[-1, 1]`.
///
/// A power of two, so the scaling is exact in `f32`.
pub const HASH_SCALE: f32 = 1.0 / HASH_ONE as f32;

/// A pure hash of integer lattice coordinates.
///
/// Implementations must not keep mutable state: equal inputs always produce equal outputs.
pub trait LatticeHash {
    /// Hash a 1D lattice point.
    fn hash_1d(&self, seed: i32, x: i32) -> i32;

    /// Hash a 2D lattice point.
    fn hash_2d(&self, seed: i32, x: i32, y: i32) -> i32;

    /// Hash a 3D lattice point.
    fn hash_3d(&self, seed: i32, x: i32, y: i32, z: i32) -> i32;
}

const X_PRIME: i32 = 1619;
const Y_PRIME: i32 = 31337;
const Z_PRIME: i32 = 6971;
const SEED_PRIME: i32 = 1013;

/// The default integer lattice hash.
///
/// Coordinates and seed are combined with wrapping prime multiplies, then run
/// through a shift-xor and a cubic polynomial scramble. The top 17 of the
/// remaining 31 bits select the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerHash;

impl IntegerHash {
    #[inline]
    const fn scramble(n: i32) -> i32 {
        let n = (n << 13) ^ n;
        let m = n
            .wrapping_mul(
                n.wrapping_mul(n)
                    .wrapping_mul(15731)
                    .wrapping_add(789_221),
            )
            .wrapping_add(1_376_312_589)
            & 0x7fff_ffff;
        HASH_ONE - (m >> 14)
    }
}

impl LatticeHash for IntegerHash {
    #[inline]
    fn hash_1d(&self, seed: i32, x: i32) -> i32 {
        Self::scramble(
            x.wrapping_mul(X_PRIME)
                .wrapping_add(seed.wrapping_mul(SEED_PRIME)),
        )
    }

    #[inline]
    fn hash_2d(&self, seed: i32, x: i32, y: i32) -> i32 {
        Self::scramble(
            x.wrapping_mul(X_PRIME)
                .wrapping_add(y.wrapping_mul(Y_PRIME))
                .wrapping_add(seed.wrapping_mul(SEED_PRIME)),
        )
    }

    #[inline]
    fn hash_3d(&self, seed: i32, x: i32, y: i32, z: i32) -> i32 {
        Self::scramble(
            x.wrapping_mul(X_PRIME)
                .wrapping_add(y.wrapping_mul(Y_PRIME))
                .wrapping_add(z.wrapping_mul(Z_PRIME))
                .wrapping_add(seed.wrapping_mul(SEED_PRIME)),
        )
    }
}
