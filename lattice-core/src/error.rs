//! Errors returned when a noise request breaks its preconditions.

use std::fmt;

use thiserror::Error;

/// An axis of a generated array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The X (column) axis.
    X,
    /// The Y (row) axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::Y => f.write_str("Y"),
        }
    }
}

/// A malformed noise request.
///
/// Every variant is reported before any output is written, so a failed call
/// leaves the caller's buffer untouched and nothing is allocated. Non-finite
/// coordinates given to point sampling are not errors; they propagate through
/// the arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum NoiseError {
    /// The coordinate range is empty or inverted, has a NaN bound, or reaches
    /// outside the `i32` lattice.
    #[error("{axis} range [{start}, {end}) is empty, inverted or outside the lattice")]
    InvalidRange {
        /// Axis the range belongs to.
        axis: Axis,
        /// Requested range start.
        start: f32,
        /// Requested range end.
        end: f32,
    },
    /// The axis length does not fit in the fixed per-axis workspace.
    #[error("{axis} size {size} exceeds the workspace capacity (must be below {max})")]
    SizeTooLarge {
        /// Axis that is too long.
        axis: Axis,
        /// Requested length.
        size: usize,
        /// Exclusive upper bound on the length.
        max: usize,
    },
    /// The caller's buffer cannot hold the requested dimensions.
    #[error("Buffer holds {actual} values but {expected} are required")]
    BufferTooSmall {
        /// Values needed.
        expected: usize,
        /// Values available.
        actual: usize,
    },
    /// An anchor stride of zero was given.
    #[error("Anchor steps must be at least 1, got {step_x}x{step_y}")]
    ZeroAnchorStep {
        /// Distance between anchors along X.
        step_x: usize,
        /// Distance between anchors along Y.
        step_y: usize,
    },
}
