//! Scalar math shared by the point-sampling and array-filling noise paths.
//!
//! All interpolators take a fractional position `t` in `[0, 1)`. Non-finite
//! inputs are not trapped; they propagate through the arithmetic as usual.

use std::f32::consts::PI;

/// Floor of a float as an `i32`.
///
/// Truncates toward zero, then steps down by one when the value lies below
/// its truncation. Out-of-range values saturate as `as` casts do.
#[inline]
#[must_use]
pub fn floor(v: f32) -> i32 {
    let i = v as i32;
    if v < i as f32 { i - 1 } else { i }
}

/// Linear interpolation.
///
/// Formula: `a + t * (b - a)`
#[inline]
#[must_use]
pub fn linear_interpolate(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Cosine interpolation.
///
/// Remaps `t` onto `(1 - cos(t * PI)) / 2` before interpolating linearly,
/// which flattens the curve at both ends.
#[inline]
#[must_use]
pub fn cosine_interpolate(a: f32, b: f32, t: f32) -> f32 {
    let t = (1.0 - (t * PI).cos()) * 0.5;
    a + t * (b - a)
}

/// Four-point cubic interpolation.
///
/// Passes through `p1` at `t = 0` and `p2` at `t = 1`, with `p0` and `p3`
/// shaping the tangents. The coefficient layout is fixed; the array and
/// point paths depend on this exact operation order to stay bit-identical.
#[inline]
#[must_use]
pub fn cubic_interpolate(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let a0 = p3 - p2 - p0 + p1;
    let a1 = p0 - p1 - a0;
    let a2 = p2 - p0;
    let a3 = p1;
    a0 * t * t2 + a1 * t2 + a2 * t + a3
}
