//! Queries over groups of rectangles
//!
//! Square classification, intersection and bounding boxes for any number
//! of rectangles, passed as a slice.

use crate::domain::core::Rectangle;

/// Returns true if every rectangle is a square
///
/// An empty slice is vacuously all squares.
pub fn are_squares(rects: &[Rectangle]) -> bool {
    rects.iter().all(Rectangle::is_square)
}

/// Returns the overlap of two rectangles, or None if they don't overlap
///
/// Rectangles that only share an edge or a corner have no overlap: the
/// result always has a positive width and height.
pub fn intersect_two(a: &Rectangle, b: &Rectangle) -> Option<Rectangle> {
    let left = a.x().max(b.x());
    let top = a.y().max(b.y());
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());

    // Never above the smaller input size; below i32::MIN only when disjoint
    let width = i32::try_from(right - i64::from(left)).ok()?;
    let height = i32::try_from(bottom - i64::from(top)).ok()?;

    if width <= 0 || height <= 0 {
        return None;
    }

    Rectangle::new(left, top, width, height).ok()
}

/// Returns the region shared by all rectangles, or None if there is none
///
/// The rectangles are folded left to right and the fold stops at the first
/// empty overlap. A single rectangle is its own intersection.
///
/// # Example
/// ```rust
/// use rectangles::{intersection, Rectangle};
///
/// let a = Rectangle::new(1, 4, 2, 3)?;
/// let b = Rectangle::new(2, 5, 3, 3)?;
/// let overlap = intersection(&[a, b]).unwrap();
/// assert_eq!(overlap.to_string(), "(2|5),(2|7),(3|7),(3|5)");
/// # Ok::<(), rectangles::RectangleError>(())
/// ```
pub fn intersection(rects: &[Rectangle]) -> Option<Rectangle> {
    intersect_all(rects)
}

/// Folds an ordered sequence of rectangles into their common region
///
/// Rectangles after the first empty overlap are never pulled from `rects`.
pub fn intersect_all<'a, I>(rects: I) -> Option<Rectangle>
where
    I: IntoIterator<Item = &'a Rectangle>,
{
    let mut rects = rects.into_iter();
    let mut result = *rects.next()?;

    for (offset, rect) in rects.enumerate() {
        match intersect_two(&result, rect) {
            Some(overlap) => result = overlap,
            None => {
                log::trace!("intersection empty at rectangle {}", offset + 1);
                return None;
            }
        }
    }

    Some(result)
}

/// Returns the smallest rectangle containing all rectangles
///
/// None for an empty slice. The result is clamped to the `i32` range when
/// the combined extent does not fit.
pub fn bounding_box(rects: &[Rectangle]) -> Option<Rectangle> {
    let (first, rest) = rects.split_first()?;

    let (mut left, mut top) = (first.x(), first.y());
    let (mut right, mut bottom) = (first.right(), first.bottom());
    for rect in rest {
        left = left.min(rect.x());
        top = top.min(rect.y());
        right = right.max(rect.right());
        bottom = bottom.max(rect.bottom());
    }

    let width = clamp_to_i32(right - i64::from(left));
    let height = clamp_to_i32(bottom - i64::from(top));

    Rectangle::new(left, top, width, height).ok()
}

fn clamp_to_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
