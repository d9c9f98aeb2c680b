//! Axis-aligned integer rectangles
//!
//! Construction with validated sizes, area, square classification and
//! intersection of any number of rectangles.

pub mod domain;
pub mod error;
pub mod report;

pub use domain::core::Rectangle;
pub use domain::query::{are_squares, bounding_box, intersect_all, intersect_two, intersection};
pub use error::RectangleError;
pub use report::{ErrorReporter, LogReporter, RecordingReporter};

