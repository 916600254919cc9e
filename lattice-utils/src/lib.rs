//! Shared building blocks for lattice noise generation.
//!
//! - [`math`] - Floor and the scalar interpolators used by every noise path
//! - [`hash`] - Deterministic integer hashing of lattice coordinates

pub mod hash;
pub mod math;

pub use hash::{HASH_ONE, HASH_SCALE, IntegerHash, LatticeHash};
