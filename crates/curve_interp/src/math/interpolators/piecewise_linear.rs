//! Piecewise linear interpolation implementation.

use super::{InterpolationMethod, Interpolator, InterpolatorConfig, Samples};
use crate::types::InterpolationError;
use num_traits::Float;

/// Linear blend `y1 · (1-λ) + y2 · λ`.
#[inline]
pub(super) fn linear_blend<T: Float>(y1: T, y2: T, lambda: T) -> T {
    y1 * (T::one() - lambda) + y2 * lambda
}

/// Piecewise linear interpolator.
///
/// Connects adjacent samples with straight lines. Outside the sample span
/// the first or last segment is extended, not clamped, so the gradient
/// there is the boundary segment's slope.
///
/// A single sample is accepted and yields a constant curve.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::{Interpolator, PiecewiseLinear, Samples};
///
/// let samples: Samples<f64> = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
/// let interp = PiecewiseLinear::new(samples).unwrap();
/// assert!((interp.value(0.75) - 1.2).abs() < 1e-12);
/// assert!((interp.value(1.5) - 1.8).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseLinear<T: Float> {
    samples: Samples<T>,
}

impl<T: Float> PiecewiseLinear<T> {
    /// Build a piecewise linear interpolator with the default configuration.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - No samples
    pub fn new(samples: Samples<T>) -> Result<Self, InterpolationError> {
        Self::with_config(samples, &InterpolatorConfig::default())
    }

    /// Build a piecewise linear interpolator with an explicit configuration.
    pub fn with_config(
        samples: Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<Self, InterpolationError> {
        InterpolationMethod::PiecewiseLinear.validate(&samples, config)?;
        Ok(Self { samples })
    }
}

impl<T: Float> Interpolator<T> for PiecewiseLinear<T> {
    fn value(&self, x: T) -> T {
        if let [only] = self.samples.points() {
            return only.y;
        }

        let (p1, p2) = self.samples.interval(x);
        let lambda = (x - p1.x) / (p2.x - p1.x);
        linear_blend(p1.y, p2.y, lambda)
    }

    fn gradient(&self, x: T) -> T {
        if self.samples.len() == 1 {
            return T::zero();
        }

        let (p1, p2) = self.samples.interval(x);
        (p2.y - p1.y) / (p2.x - p1.x)
    }

    #[inline]
    fn samples(&self) -> &Samples<T> {
        &self.samples
    }
}
