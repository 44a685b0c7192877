//! Geometric interpolation in the square root of the bracket fraction.

use super::geometric::geometric_blend;
use super::{InterpolationMethod, Interpolator, InterpolatorConfig, Samples};
use crate::types::InterpolationError;
use num_traits::Float;

/// Geometric interpolator with respect to `sqrt(λ)` and flat extrapolation.
///
/// Within a bracket `y(x) = y1^(1-μ) · y2^μ` with
/// `μ = sqrt((x - x1) / (x2 - x1))`. Outside the sample span the boundary
/// ordinate is returned and the gradient is zero. All ordinates must be at
/// least the configured epsilon.
///
/// A single sample is accepted and yields a constant curve.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::{GeometricSqrt, Interpolator, Samples};
///
/// let samples = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
/// let interp = GeometricSqrt::new(samples).unwrap();
/// assert_eq!(format!("{:.4}", interp.value(0.75)), "1.2686");
/// assert_eq!(interp.value(2.0), 1.4);
/// ```
#[derive(Debug, Clone)]
pub struct GeometricSqrt<T: Float> {
    samples: Samples<T>,
}

impl<T: Float> GeometricSqrt<T> {
    /// Build a geometric sqrt interpolator with the default configuration.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - No samples
    /// * `Err(InterpolationError::NonPositiveOrdinate)` - An ordinate below 1e-16
    pub fn new(samples: Samples<T>) -> Result<Self, InterpolationError> {
        Self::with_config(samples, &InterpolatorConfig::default())
    }

    /// Build a geometric sqrt interpolator with an explicit configuration.
    pub fn with_config(
        samples: Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<Self, InterpolationError> {
        InterpolationMethod::GeometricSqrt.validate(&samples, config)?;
        Ok(Self { samples })
    }
}

impl<T: Float> Interpolator<T> for GeometricSqrt<T> {
    fn value(&self, x: T) -> T {
        if let [only] = self.samples.points() {
            return only.y;
        }

        let (p1, p2) = self.samples.interval(x);
        if x <= p1.x {
            return p1.y;
        }
        if x >= p2.x {
            return p2.y;
        }

        let mu = ((x - p1.x) / (p2.x - p1.x)).sqrt();
        geometric_blend(p1.y, p2.y, mu)
    }

    /// `dy/dx = ln(y2 / y1) · y(x) / (2 · μ · (x2 - x1))` inside a bracket,
    /// zero outside the sample span and on the samples themselves.
    fn gradient(&self, x: T) -> T {
        if self.samples.len() == 1 {
            return T::zero();
        }

        let (p1, p2) = self.samples.interval(x);
        if x <= p1.x || x >= p2.x {
            return T::zero();
        }

        let h = p2.x - p1.x;
        let mu = ((x - p1.x) / h).sqrt();
        (p2.y / p1.y).ln() * geometric_blend(p1.y, p2.y, mu) / ((mu + mu) * h)
    }

    #[inline]
    fn samples(&self) -> &Samples<T> {
        &self.samples
    }
}
