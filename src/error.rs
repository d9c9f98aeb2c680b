//! Validation errors for rectangle construction and mutation

use thiserror::Error;

/// Invalid dimension errors
///
/// Every variant is the same kind of failure: a width, height or side
/// length was negative. The variant names which rule was violated and the
/// message is the literal rule text handed to error reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RectangleError {
    #[error("Width and height must be non-negative.")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Side length must be non-negative.")]
    InvalidSideLength { side_length: i32 },

    #[error("Width must be non-negative.")]
    InvalidWidth { width: i32 },

    #[error("Height must be non-negative.")]
    InvalidHeight { height: i32 },
}
