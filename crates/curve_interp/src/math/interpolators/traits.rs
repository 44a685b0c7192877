//! The interpolator capability shared by every policy.

use super::Samples;
use num_traits::Float;

/// A one-dimensional curve built from samples.
///
/// Evaluation is infallible: every check happens when the interpolator is
/// constructed. Behaviour outside the sample span (extrapolation) is
/// defined per implementation.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::{Interpolator, PiecewiseLinear, Samples};
///
/// let interp = PiecewiseLinear::new(Samples::from(vec![(0.0, 0.0), (1.0, 2.0)])).unwrap();
/// assert_eq!(interp.value(0.25), 0.5);
/// assert_eq!(interp.gradient(0.25), 2.0);
/// assert_eq!(interp.domain(), (0.0, 1.0));
/// ```
pub trait Interpolator<T: Float> {
    /// Curve value at `x`.
    fn value(&self, x: T) -> T;

    /// Derivative of [`value`](Self::value) with respect to `x`.
    fn gradient(&self, x: T) -> T;

    /// The samples the curve was built from.
    fn samples(&self) -> &Samples<T>;

    /// Abscissa range `(x_min, x_max)` spanned by the samples.
    #[inline]
    fn domain(&self) -> (T, T) {
        let points = self.samples().points();
        (points[0].x, points[points.len() - 1].x)
    }
}
