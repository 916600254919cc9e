//! Deterministic lattice noise: point sampling and windowed array generation.
//!
//! # Key Types
//!
//! - [`NoiseField`] - Seeded 1D/2D/3D point sampling (linear, cosine, cubic, smoothed)
//! - [`CubicNoise`] - Fills 1D and 2D arrays with cubic noise, amortizing hash evaluations
//! - [`CubicWindow`] - The sliding 4x4 hash cache behind [`CubicNoise`]
//! - [`FloorFracTable`] - Per-axis floor / fraction / run-length tables
//! - [`NoiseArray2D`] - Row-major output array
//! - [`linear_interpolate_anchors`] - Integer fill-in between anchor points

mod anchor;
mod array;
pub mod cubic;
mod error;
mod field;

pub use anchor::linear_interpolate_anchors;
pub use array::NoiseArray2D;
pub use cubic::{CubicNoise, CubicWindow, FloorFracTable, MAX_SIZE};
pub use error::{Axis, NoiseError};
pub use field::NoiseField;
pub use lattice_utils::{IntegerHash, LatticeHash};
