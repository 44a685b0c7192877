//! Ordered sample sequences and the shared interval search.

use crate::types::{InterpolationError, Point};
use num_traits::Float;

/// An ordered sequence of curve samples.
///
/// Abscissas are expected to be strictly increasing. This is the caller's
/// responsibility: [`Samples::interval`] does not check it, and a sequence
/// that violates it yields meaningless brackets rather than an error. Use
/// [`InterpolatorConfig::strict`](super::InterpolatorConfig::strict) to have
/// interpolators verify the ordering at construction.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::Samples;
/// use curve_interp::types::Point;
///
/// let samples = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
/// let (p1, p2) = samples.interval(0.75);
/// assert_eq!(p1, Point::new(0.5, 1.0));
/// assert_eq!(p2, Point::new(1.0, 1.4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Samples<T: Float> {
    points: Vec<Point<T>>,
}

impl<T: Float> Samples<T> {
    /// Wrap a vector of points, assumed ordered by abscissa.
    #[inline]
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Build samples from separate abscissa and ordinate slices.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    ///
    /// # Example
    ///
    /// ```
    /// use curve_interp::math::interpolators::Samples;
    ///
    /// let samples = Samples::from_xy(&[0.0, 1.0], &[2.0, 3.0]).unwrap();
    /// assert_eq!(samples.len(), 2);
    ///
    /// assert!(Samples::from_xy(&[0.0, 1.0], &[2.0]).is_err());
    /// ```
    pub fn from_xy(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        Ok(xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point::new(x, y))
            .collect())
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The samples as a slice.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// First sample, if any.
    #[inline]
    pub fn first(&self) -> Option<&Point<T>> {
        self.points.first()
    }

    /// Last sample, if any.
    #[inline]
    pub fn last(&self) -> Option<&Point<T>> {
        self.points.last()
    }

    /// Iterator over the abscissas.
    pub fn xs(&self) -> impl Iterator<Item = T> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// Iterator over the ordinates.
    pub fn ys(&self) -> impl Iterator<Item = T> + '_ {
        self.points.iter().map(|p| p.y)
    }

    /// Find the pair of adjacent samples bracketing `x`.
    ///
    /// Queries at or left of the first abscissa return the first two
    /// samples; queries at or right of the last abscissa return the last
    /// two. Otherwise the right endpoint is the first sample whose abscissa
    /// is strictly greater than `x`, so a query landing exactly on an
    /// interior sample gets that sample as its *left* endpoint.
    ///
    /// Uses binary search, O(log n).
    ///
    /// # Panics
    ///
    /// Requires at least 2 samples. Interpolators special-case shorter
    /// sequences before calling this.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_interp::math::interpolators::Samples;
    ///
    /// let samples = Samples::from(vec![(0.0, 0.0), (0.5, 1.0), (1.0, 2.0)]);
    /// let (p1, p2) = samples.interval(0.5);
    /// assert_eq!((p1.x, p2.x), (0.5, 1.0));
    /// ```
    #[inline]
    pub fn interval(&self, x: T) -> (Point<T>, Point<T>) {
        let n = self.points.len();
        debug_assert!(n >= 2, "interval search needs at least 2 samples, got {n}");

        if x <= self.points[0].x {
            return (self.points[0], self.points[1]);
        }
        if x >= self.points[n - 1].x {
            return (self.points[n - 2], self.points[n - 1]);
        }

        // First index whose abscissa is strictly greater than x; lies in [1, n-1].
        let upper = self.points.partition_point(|p| p.x <= x);
        (self.points[upper - 1], self.points[upper])
    }

    /// Check that every coordinate is finite.
    pub(crate) fn check_finite(&self) -> Result<(), InterpolationError> {
        match self
            .points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            Some(index) => Err(InterpolationError::NonFiniteData { index }),
            None => Ok(()),
        }
    }

    /// Check that abscissas are strictly increasing.
    pub(crate) fn check_strictly_increasing(&self) -> Result<(), InterpolationError> {
        match self.points.windows(2).position(|w| w[1].x <= w[0].x) {
            Some(i) => Err(InterpolationError::NonMonotonicData { index: i + 1 }),
            None => Ok(()),
        }
    }
}

impl<T: Float> From<Vec<Point<T>>> for Samples<T> {
    fn from(points: Vec<Point<T>>) -> Self {
        Self::new(points)
    }
}

impl<T: Float> From<Vec<(T, T)>> for Samples<T> {
    fn from(pairs: Vec<(T, T)>) -> Self {
        pairs.into_iter().map(Point::from).collect()
    }
}

impl<T: Float> FromIterator<Point<T>> for Samples<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Float> AsRef<[Point<T>]> for Samples<T> {
    fn as_ref(&self) -> &[Point<T>] {
        &self.points
    }
}
