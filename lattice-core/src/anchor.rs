//! Integer linear fill-in between anchor points.

use crate::NoiseError;

/// Fill the gaps of a row-major `size_x` x `size_y` array by linear interpolation.
///
/// Values must already be set at every anchor, i.e. every `(x, y)` where
/// `x % step_x == 0` and `y % step_y == 0`. Anchor columns are filled
/// vertically first, then every row horizontally between anchor columns.
/// The arithmetic is integer: `start + i * (end - start) / step`, truncating.
///
/// Only cells bracketed by two anchors are filled. When a dimension is not of
/// the form `k * step + 1`, the trailing cells past the last anchor along that
/// axis are left as they were.
pub fn linear_interpolate_anchors(
    array: &mut [i32],
    size_x: usize,
    size_y: usize,
    step_x: usize,
    step_y: usize,
) -> Result<(), NoiseError> {
    if step_x == 0 || step_y == 0 {
        return Err(NoiseError::ZeroAnchorStep { step_x, step_y });
    }
    // A product past usize::MAX cannot fit in any buffer either
    let expected = size_x.checked_mul(size_y).unwrap_or(usize::MAX);
    if array.len() < expected {
        return Err(NoiseError::BufferTooSmall {
            expected,
            actual: array.len(),
        });
    }

    // Columns through the anchors
    let last_y_cell = size_y.saturating_sub(step_y);
    for y in (0..last_y_cell).step_by(step_y) {
        for x in (0..size_x).step_by(step_x) {
            let idx = y * size_x + x;
            let start = array[idx];
            let end = array[idx + size_x * step_y];
            for cell_y in 1..step_y {
                array[idx + size_x * cell_y] = interpolate(start, end, cell_y, step_y);
            }
        }
    }

    // Rows, now that every anchor column is complete
    let last_x_cell = size_x.saturating_sub(step_x);
    for y in 0..size_y {
        let row = y * size_x;
        for x in (0..last_x_cell).step_by(step_x) {
            let idx = row + x;
            let start = array[idx];
            let end = array[idx + step_x];
            for cell_x in 1..step_x {
                array[idx + cell_x] = interpolate(start, end, cell_x, step_x);
            }
        }
    }

    Ok(())
}

/// `start + cell * (end - start) / step`, truncating toward zero.
#[inline]
fn interpolate(start: i32, end: i32, cell: usize, step: usize) -> i32 {
    let diff = i64::from(end) - i64::from(start);
    (i64::from(start) + cell as i64 * diff / step as i64) as i32
}
