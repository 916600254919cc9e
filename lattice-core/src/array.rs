//! Row-major 2D output array.

/// A `width` x `height` grid of noise values stored row by row.
///
/// The value at `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseArray2D {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl NoiseArray2D {
    /// Create a zero-filled array.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Flat index of `(x, y)`.
    #[inline]
    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) outside {}x{} array",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Value at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the array.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.index(x, y)]
    }

    /// Overwrite the value at `(x, y)`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the array.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let idx = self.index(x, y);
        self.values[idx] = value;
    }

    /// All values in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// All values in row-major order, mutably.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// One row of the array.
    #[must_use]
    pub fn row(&self, y: usize) -> &[f32] {
        &self.values[y * self.width..(y + 1) * self.width]
    }

    /// Consume the array, returning the row-major values.
    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let array = NoiseArray2D::new(5, 3);
        assert_eq!(array.index(0, 0), 0);
        assert_eq!(array.index(4, 0), 4);
        assert_eq!(array.index(0, 1), 5);
        assert_eq!(array.index(2, 2), 12);
    }

    #[test]
    fn set_and_get() {
        let mut array = NoiseArray2D::new(4, 4);
        array.set(3, 1, 0.5);
        assert!((array.get(3, 1) - 0.5).abs() < f32::EPSILON);
        assert!((array.row(1)[3] - 0.5).abs() < f32::EPSILON);
        assert!((array.as_slice()[7] - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    #[should_panic(expected = "outside")]
    #[cfg(debug_assertions)]
    fn out_of_bounds_column_is_caught() {
        // (5, 0) would alias (0, 1) without the debug check
        let array = NoiseArray2D::new(5, 2);
        let _ = array.index(5, 0);
    }
}
