//! Sample point type.

use num_traits::Float;

/// A single `(x, y)` sample of a curve.
///
/// Points are plain immutable values; interpolators copy them out of their
/// [`Samples`](crate::math::interpolators::Samples) on every lookup.
///
/// # Example
///
/// ```
/// use curve_interp::types::Point;
///
/// let p = Point::new(0.5, 1.0);
/// assert_eq!(p.x, 0.5);
/// assert_eq!(p, Point::from((0.5, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Float> {
    /// Abscissa
    pub x: T,
    /// Ordinate
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Float> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}
