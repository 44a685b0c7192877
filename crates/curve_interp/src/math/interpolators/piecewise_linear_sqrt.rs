//! Piecewise linear interpolation in the square root of the bracket fraction.

use super::piecewise_linear::linear_blend;
use super::{InterpolationMethod, Interpolator, InterpolatorConfig, Samples};
use crate::types::InterpolationError;
use num_traits::Float;

/// Linear interpolator with respect to `sqrt(λ)` and flat extrapolation.
///
/// Within a bracket `y(x) = y1 · (1-μ) + y2 · μ` with
/// `μ = sqrt((x - x1) / (x2 - x1))`, which moves quickly away from `y1`
/// and flattens towards `y2`. Outside the sample span the boundary ordinate
/// is returned and the gradient is zero. Requires at least 2 samples.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::{Interpolator, PiecewiseLinearSqrt, Samples};
///
/// let samples = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
/// let interp = PiecewiseLinearSqrt::new(samples).unwrap();
/// assert_eq!(interp.value(1.5), 1.4);
/// assert_eq!(interp.gradient(1.5), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseLinearSqrt<T: Float> {
    samples: Samples<T>,
}

impl<T: Float> PiecewiseLinearSqrt<T> {
    /// Build a piecewise linear sqrt interpolator with the default configuration.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
    pub fn new(samples: Samples<T>) -> Result<Self, InterpolationError> {
        Self::with_config(samples, &InterpolatorConfig::default())
    }

    /// Build a piecewise linear sqrt interpolator with an explicit configuration.
    pub fn with_config(
        samples: Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<Self, InterpolationError> {
        InterpolationMethod::PiecewiseLinearSqrt.validate(&samples, config)?;
        Ok(Self { samples })
    }
}

impl<T: Float> Interpolator<T> for PiecewiseLinearSqrt<T> {
    fn value(&self, x: T) -> T {
        let (p1, p2) = self.samples.interval(x);
        if x <= p1.x {
            return p1.y;
        }
        if x >= p2.x {
            return p2.y;
        }

        let mu = ((x - p1.x) / (p2.x - p1.x)).sqrt();
        linear_blend(p1.y, p2.y, mu)
    }

    /// `dy/dx = (y2 - y1) / (2 · μ · (x2 - x1))` inside a bracket, zero
    /// outside the sample span and on the samples themselves.
    fn gradient(&self, x: T) -> T {
        let (p1, p2) = self.samples.interval(x);
        if x <= p1.x || x >= p2.x {
            return T::zero();
        }

        let h = p2.x - p1.x;
        let mu = ((x - p1.x) / h).sqrt();
        (p2.y - p1.y) / ((mu + mu) * h)
    }

    #[inline]
    fn samples(&self) -> &Samples<T> {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn linear_samples() -> Samples<f64> {
        [0.0, 0.5, 1.0, 1.5, 2.0]
            .iter()
            .map(|&x| (x, 1.2 * (x + 1.0)))
            .collect::<Vec<_>>()
            .into()
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new() {
        assert!(PiecewiseLinearSqrt::new(linear_samples()).is_ok());
    }

    #[test]
    fn test_new_empty() {
        assert!(PiecewiseLinearSqrt::<f64>::new(Samples::new(vec![])).is_err());
    }

    #[test]
    fn test_new_single_point() {
        let result = PiecewiseLinearSqrt::new(Samples::from(vec![(0.0, 1.0)]));
        assert!(matches!(
            result,
            Err(InterpolationError::InsufficientData { need: 2, got: 1, .. })
        ));
    }

    // ========================================
    // Value Tests
    // ========================================

    #[test]
    fn test_value() {
        let interp = PiecewiseLinearSqrt::new(linear_samples()).unwrap();
        let cases = [
            (-1.2, 1.2),
            (0.3, 1.2 * (0.15_f64.sqrt() + 1.0)),
            (0.7, 1.2 * (0.10_f64.sqrt() + 1.5)),
            (1.2, 1.2 * (0.10_f64.sqrt() + 2.0)),
            (1.6, 1.2 * (0.05_f64.sqrt() + 2.5)),
            (6.0, 3.6),
        ];
        for (x, expected) in cases {
            assert_relative_eq!(interp.value(x), expected, max_relative = 1e-8);
        }
    }

    #[test]
    fn test_value_at_knots() {
        let samples = linear_samples();
        let interp = PiecewiseLinearSqrt::new(samples.clone()).unwrap();
        for p in samples.points() {
            assert_eq!(interp.value(p.x), p.y);
        }
    }

    // ========================================
    // Gradient Tests
    // ========================================

    #[test]
    fn test_gradient() {
        let interp = PiecewiseLinearSqrt::new(linear_samples()).unwrap();
        let cases = [
            (-1.2, 0.0),
            (0.3, 0.5 * 1.2 * 0.5 / (0.3_f64 * 0.5).sqrt()),
            (0.7, 0.5 * 1.2 * 0.5 / (0.2_f64 * 0.5).sqrt()),
            (1.2, 0.5 * 1.2 * 0.5 / (0.2_f64 * 0.5).sqrt()),
            (1.6, 0.5 * 1.2 * 0.5 / (0.1_f64 * 0.5).sqrt()),
            (6.0, 0.0),
        ];
        for (x, expected) in cases {
            assert_abs_diff_eq!(interp.gradient(x), expected, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_gradient_zero_on_boundaries() {
        let samples = Samples::from(vec![(0.0, 1.0), (1.0, 2.0)]);
        let interp = PiecewiseLinearSqrt::new(samples).unwrap();
        assert_eq!(interp.gradient(-1.0), 0.0);
        assert_eq!(interp.gradient(0.0), 0.0);
        assert_eq!(interp.gradient(1.0), 0.0);
    }

    #[test]
    fn test_gradient_matches_finite_difference() {
        let interp = PiecewiseLinearSqrt::new(linear_samples()).unwrap();
        let h = 1e-6;
        for x in [0.2, 0.6, 1.1, 1.45, 1.8] {
            let fd = (interp.value(x + h) - interp.value(x - h)) / (2.0 * h);
            assert_relative_eq!(interp.gradient(x), fd, max_relative = 1e-5);
        }
    }
}
