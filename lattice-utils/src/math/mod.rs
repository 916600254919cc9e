//! This module contains math related utilities.
pub mod noise_math;

pub use noise_math::{cosine_interpolate, cubic_interpolate, floor, linear_interpolate};
