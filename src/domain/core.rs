//! Core rectangle type
//!
//! An axis-aligned rectangle on the integer plane, described by its
//! top-left corner and a non-negative width and height.

use std::fmt;

use crate::error::RectangleError;
use crate::report::ErrorReporter;

/// Axis-aligned rectangle with a non-negative size
///
/// `x` and `y` locate the top-left corner and may be any integer. The
/// width and height are never negative: every constructor and setter
/// rejects negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rectangle {
    /// Creates a new rectangle
    ///
    /// # Example
    /// ```rust
    /// use rectangles::Rectangle;
    ///
    /// let rect = Rectangle::new(1, 4, 2, 3)?;
    /// assert_eq!(rect.area(), 6);
    /// # Ok::<(), rectangles::RectangleError>(())
    /// ```
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, RectangleError> {
        if width < 0 || height < 0 {
            return Err(RectangleError::InvalidDimensions { width, height });
        }

        Ok(Self { x, y, width, height })
    }

    /// Creates a square with the given side length
    pub fn square(x: i32, y: i32, side_length: i32) -> Result<Self, RectangleError> {
        if side_length < 0 {
            return Err(RectangleError::InvalidSideLength { side_length });
        }

        Ok(Self {
            x,
            y,
            width: side_length,
            height: side_length,
        })
    }

    /// Like [`Rectangle::new`], but reports a rejected size and returns the
    /// zero rectangle instead of failing
    pub fn new_or_report(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        reporter: &mut impl ErrorReporter,
    ) -> Self {
        Self::new(x, y, width, height).unwrap_or_else(|err| {
            reporter.report(&err);
            Self::default()
        })
    }

    /// Like [`Rectangle::square`], but reports a rejected side length and
    /// returns the zero rectangle instead of failing
    pub fn square_or_report(
        x: i32,
        y: i32,
        side_length: i32,
        reporter: &mut impl ErrorReporter,
    ) -> Self {
        Self::square(x, y, side_length).unwrap_or_else(|err| {
            reporter.report(&err);
            Self::default()
        })
    }

    /// Returns a new rectangle with the same position and size as `other`
    pub fn copy_of(other: &Rectangle) -> Self {
        *other
    }

    /// Returns the x coordinate of the top-left corner
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Returns the y coordinate of the top-left corner
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the width
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the height
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Moves the left edge; any coordinate is accepted
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    /// Moves the top edge; any coordinate is accepted
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }

    /// Sets the width, keeping the old value if `width` is negative
    pub fn set_width(&mut self, width: i32) -> Result<(), RectangleError> {
        if width < 0 {
            return Err(RectangleError::InvalidWidth { width });
        }

        self.width = width;
        Ok(())
    }

    /// Sets the height, keeping the old value if `height` is negative
    pub fn set_height(&mut self, height: i32) -> Result<(), RectangleError> {
        if height < 0 {
            return Err(RectangleError::InvalidHeight { height });
        }

        self.height = height;
        Ok(())
    }

    /// Sets the width, or reports a negative value and keeps the old one
    pub fn set_width_or_report(&mut self, width: i32, reporter: &mut impl ErrorReporter) {
        if let Err(err) = self.set_width(width) {
            reporter.report(&err);
        }
    }

    /// Sets the height, or reports a negative value and keeps the old one
    pub fn set_height_or_report(&mut self, height: i32, reporter: &mut impl ErrorReporter) {
        if let Err(err) = self.set_height(height) {
            reporter.report(&err);
        }
    }

    /// Returns the right edge coordinate
    ///
    /// Widened to `i64` so that `x + width` cannot overflow.
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Returns the bottom edge coordinate
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Returns the area of the rectangle
    ///
    /// The product is taken in `i64`, which holds any product of two `i32`
    /// values, so this never overflows.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Returns true if width equals height
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Returns true if this rectangle contains the given point
    ///
    /// The left and top edges are inside, the right and bottom edges are not.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        let (px, py) = (i64::from(px), i64::from(py));
        px >= i64::from(self.x) && px < self.right() && py >= i64::from(self.y) && py < self.bottom()
    }

    /// Returns the corners as top-left, bottom-left, bottom-right, top-right
    pub fn corners(&self) -> [(i64, i64); 4] {
        let (left, top) = (i64::from(self.x), i64::from(self.y));
        let (right, bottom) = (self.right(), self.bottom());
        [(left, top), (left, bottom), (right, bottom), (right, top)]
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [tl, bl, br, tr] = self.corners();
        write!(
            f,
            "({}|{}),({}|{}),({}|{}),({}|{})",
            tl.0, tl.1, bl.0, bl.1, br.0, br.1, tr.0, tr.1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;

    #[test]
    fn rect_basic_properties() {
        let rect = Rectangle::new(10, 20, 100, 50).unwrap();
        assert_eq!(rect.x(), 10);
        assert_eq!(rect.y(), 20);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
        assert_eq!(rect.area(), 5000);
        assert!(!rect.is_square());
    }

    #[test]
    fn area_matches_product_for_valid_sizes() {
        for (w, h) in [(0, 0), (0, 7), (3, 4), (12, 12), (1000, 3)] {
            let rect = Rectangle::new(-5, 9, w, h).unwrap();
            assert_eq!(rect.area(), i64::from(w) * i64::from(h));
        }
    }

    #[test]
    fn area_does_not_overflow() {
        let rect = Rectangle::new(0, 0, i32::MAX, i32::MAX).unwrap();
        assert_eq!(rect.area(), i64::from(i32::MAX) * i64::from(i32::MAX));
    }

    #[test]
    fn negative_size_is_rejected() {
        assert_eq!(
            Rectangle::new(0, 0, -1, 5),
            Err(RectangleError::InvalidDimensions { width: -1, height: 5 })
        );
        assert_eq!(
            Rectangle::new(0, 0, 5, -1),
            Err(RectangleError::InvalidDimensions { width: 5, height: -1 })
        );
        assert!(Rectangle::new(-10, -10, 0, 0).is_ok());
    }

    #[test]
    fn square_constructor() {
        let square = Rectangle::square(3, -2, 4).unwrap();
        assert_eq!((square.width(), square.height()), (4, 4));
        assert!(square.is_square());

        assert_eq!(
            Rectangle::square(0, 0, -4),
            Err(RectangleError::InvalidSideLength { side_length: -4 })
        );
    }

    #[test]
    fn lenient_construction_reports_and_yields_zero_rect() {
        let mut reporter = RecordingReporter::new();

        let rect = Rectangle::new_or_report(7, 8, -1, 3, &mut reporter);
        assert_eq!(rect, Rectangle::default());
        assert_eq!(reporter.messages(), vec!["Width and height must be non-negative."]);

        reporter.clear();
        let square = Rectangle::square_or_report(7, 8, -2, &mut reporter);
        assert_eq!(square, Rectangle::default());
        assert_eq!(reporter.messages(), vec!["Side length must be non-negative."]);

        reporter.clear();
        let rect = Rectangle::new_or_report(7, 8, 1, 3, &mut reporter);
        assert_eq!(rect, Rectangle::new(7, 8, 1, 3).unwrap());
        assert!(reporter.is_empty());
    }

    #[test]
    fn copy_is_independent() {
        let original = Rectangle::new(1, 2, 3, 4).unwrap();
        let mut copy = Rectangle::copy_of(&original);
        assert_eq!(copy, original);

        copy.set_x(100);
        copy.set_width(50).unwrap();
        assert_eq!(original, Rectangle::new(1, 2, 3, 4).unwrap());
        assert_eq!(copy.x(), 100);
        assert_eq!(copy.width(), 50);
    }

    #[test]
    fn rejected_setters_keep_previous_value() {
        let mut rect = Rectangle::new(0, 0, 10, 20).unwrap();

        assert_eq!(rect.set_width(-1), Err(RectangleError::InvalidWidth { width: -1 }));
        assert_eq!(rect.set_height(-2), Err(RectangleError::InvalidHeight { height: -2 }));
        assert_eq!((rect.width(), rect.height()), (10, 20));

        rect.set_width(0).unwrap();
        rect.set_height(7).unwrap();
        assert_eq!((rect.width(), rect.height()), (0, 7));

        rect.set_x(-30);
        rect.set_y(i32::MIN);
        assert_eq!((rect.x(), rect.y()), (-30, i32::MIN));
    }

    #[test]
    fn reporting_setters() {
        let mut reporter = RecordingReporter::new();
        let mut rect = Rectangle::new(0, 0, 10, 20).unwrap();

        rect.set_width_or_report(-3, &mut reporter);
        rect.set_height_or_report(-4, &mut reporter);
        rect.set_height_or_report(5, &mut reporter);

        assert_eq!((rect.width(), rect.height()), (10, 5));
        assert_eq!(
            reporter.messages(),
            vec!["Width must be non-negative.", "Height must be non-negative."]
        );
    }

    #[test]
    fn rect_contains_point() {
        let rect = Rectangle::new(10, 10, 20, 20).unwrap();
        assert!(rect.contains_point(15, 15)); // Inside
        assert!(rect.contains_point(10, 10)); // Top-left corner
        assert!(!rect.contains_point(30, 30)); // Outside right-bottom
        assert!(!rect.contains_point(5, 5)); // Outside left-top
    }

    #[test]
    fn display_lists_corners_counter_clockwise_from_top_left() {
        let rect = Rectangle::new(2, 5, 1, 2).unwrap();
        assert_eq!(rect.to_string(), "(2|5),(2|7),(3|7),(3|5)");

        let rect = Rectangle::new(-3, -1, 0, 0).unwrap();
        assert_eq!(rect.to_string(), "(-3|-1),(-3|-1),(-3|-1),(-3|-1)");
    }

    #[test]
    fn display_edges_do_not_overflow() {
        let rect = Rectangle::new(i32::MAX, 0, 1, 1).unwrap();
        assert_eq!(
            rect.to_string(),
            "(2147483647|0),(2147483647|1),(2147483648|1),(2147483648|0)"
        );
    }
}
