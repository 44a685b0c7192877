//! Geometric interpolation implementation.

use super::{InterpolationMethod, Interpolator, InterpolatorConfig, Samples};
use crate::types::InterpolationError;
use num_traits::Float;

/// Geometric blend `y1^(1-λ) · y2^λ` of two positive ordinates.
///
/// Evaluated in log space as `exp((1-λ) · ln y1 + λ · ln y2)`.
#[inline]
pub(super) fn geometric_blend<T: Float>(y1: T, y2: T, lambda: T) -> T {
    ((T::one() - lambda) * y1.ln() + lambda * y2.ln()).exp()
}

/// Geometric interpolator.
///
/// Interpolates `ln y` linearly in `x`, i.e. `y(x) = y1^(1-λ) · y2^λ` with
/// `λ = (x - x1) / (x2 - x1)`. Outside the sample span the boundary
/// bracket's exponential is extended rather than clamped. All ordinates
/// must be at least the configured epsilon (1e-16 by default).
///
/// A single sample is accepted and yields a constant curve.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::{Geometric, Interpolator, Samples};
///
/// let samples = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
/// let interp = Geometric::new(samples).unwrap();
/// assert_eq!(format!("{:.4}", interp.value(0.75)), "1.1832");
/// ```
#[derive(Debug, Clone)]
pub struct Geometric<T: Float> {
    samples: Samples<T>,
}

impl<T: Float> Geometric<T> {
    /// Build a geometric interpolator with the default configuration.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - No samples
    /// * `Err(InterpolationError::NonPositiveOrdinate)` - An ordinate below 1e-16
    pub fn new(samples: Samples<T>) -> Result<Self, InterpolationError> {
        Self::with_config(samples, &InterpolatorConfig::default())
    }

    /// Build a geometric interpolator with an explicit configuration.
    pub fn with_config(
        samples: Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<Self, InterpolationError> {
        InterpolationMethod::Geometric.validate(&samples, config)?;
        Ok(Self { samples })
    }
}

impl<T: Float> Interpolator<T> for Geometric<T> {
    fn value(&self, x: T) -> T {
        if let [only] = self.samples.points() {
            return only.y;
        }

        let (p1, p2) = self.samples.interval(x);
        let lambda = (x - p1.x) / (p2.x - p1.x);
        geometric_blend(p1.y, p2.y, lambda)
    }

    /// `d/dx [y1^(1-λ) · y2^λ] = ln(y2 / y1) · y(x) / (x2 - x1)`
    fn gradient(&self, x: T) -> T {
        if self.samples.len() == 1 {
            return T::zero();
        }

        let (p1, p2) = self.samples.interval(x);
        (p2.y / p1.y).ln() * self.value(x) / (p2.x - p1.x)
    }

    #[inline]
    fn samples(&self) -> &Samples<T> {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Samples of `exp(x)` at 0, 0.5, 1, 1.5, 2.
    fn exp_samples() -> Samples<f64> {
        [0.0, 0.5, 1.0, 1.5, 2.0]
            .iter()
            .map(|&x: &f64| (x, x.exp()))
            .collect::<Vec<_>>()
            .into()
    }

    // ========================================
    // Construction Tests
    // ========================================

    #[test]
    fn test_new() {
        assert!(Geometric::new(exp_samples()).is_ok());
    }

    #[test]
    fn test_new_empty() {
        let result = Geometric::<f64>::new(Samples::new(vec![]));
        match result.unwrap_err() {
            InterpolationError::InsufficientData { need, got, .. } => {
                assert_eq!(need, 1);
                assert_eq!(got, 0);
            }
            other => panic!("Expected InsufficientData error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_small_ordinate() {
        let samples = Samples::from(vec![(0.0, 0.5e-16), (1.0, 1.0)]);
        match Geometric::new(samples).unwrap_err() {
            InterpolationError::NonPositiveOrdinate { index, .. } => assert_eq!(index, 0),
            other => panic!("Expected NonPositiveOrdinate error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_negative_ordinate() {
        let samples = Samples::from(vec![(0.0, 1.0), (1.0, -2.0)]);
        assert!(Geometric::new(samples).is_err());
    }

    // ========================================
    // Value Tests
    // ========================================

    #[test]
    fn test_value_reproduces_exponential() {
        let interp = Geometric::new(exp_samples()).unwrap();
        for x in [-1.0, 0.0, 0.3, 0.5, 0.7, 1.2, 1.6, 2.0, 6.0] {
            assert_relative_eq!(interp.value(x), f64::exp(x), max_relative = 1e-8);
        }
    }

    #[test]
    fn test_value_extends_past_boundaries() {
        let samples = Samples::from(vec![(0.0, 1.0), (1.0, 2.0)]);
        let interp = Geometric::new(samples).unwrap();
        assert_relative_eq!(interp.value(2.0), 4.0, max_relative = 1e-12);
        assert_relative_eq!(interp.value(-1.0), 0.5, max_relative = 1e-12);
    }

    #[test]
    fn test_value_single_point_is_constant() {
        let interp = Geometric::new(Samples::from(vec![(1.0, 3.0)])).unwrap();
        assert_eq!(interp.value(-5.0), 3.0);
        assert_eq!(interp.value(1.0), 3.0);
        assert_eq!(interp.value(42.0), 3.0);
    }

    #[test]
    fn test_value_scenario() {
        let samples = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
        let interp = Geometric::new(samples).unwrap();
        assert_relative_eq!(interp.value(0.75), 1.4_f64.sqrt(), max_relative = 1e-12);
    }

    // ========================================
    // Gradient Tests
    // ========================================

    #[test]
    fn test_gradient_of_exponential() {
        let interp = Geometric::new(exp_samples()).unwrap();
        for x in [-1.0, 0.3, 0.7, 1.2, 1.6, 6.0] {
            assert_relative_eq!(interp.gradient(x), f64::exp(x), max_relative = 1e-8);
        }
    }

    #[test]
    fn test_gradient_single_point_is_zero() {
        let interp = Geometric::new(Samples::from(vec![(1.0, 3.0)])).unwrap();
        assert_eq!(interp.gradient(0.0), 0.0);
        assert_eq!(interp.gradient(10.0), 0.0);
    }

    #[test]
    fn test_gradient_flat_data() {
        let samples = Samples::from(vec![(0.0, 2.0), (1.0, 2.0), (3.0, 2.0)]);
        let interp = Geometric::new(samples).unwrap();
        assert_eq!(interp.gradient(0.5), 0.0);
        assert_eq!(interp.gradient(5.0), 0.0);
    }
}
