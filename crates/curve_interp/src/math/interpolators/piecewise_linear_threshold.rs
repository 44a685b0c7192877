//! Piecewise linear interpolation with flat extrapolation.

use super::piecewise_linear::linear_blend;
use super::{InterpolationMethod, Interpolator, InterpolatorConfig, Samples};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator that holds the boundary values outside
/// the sample span.
///
/// Requires at least 2 samples.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::{Interpolator, PiecewiseLinearThreshold, Samples};
///
/// let samples = Samples::from(vec![(0.0, 1.0), (2.0, 3.0)]);
/// let interp = PiecewiseLinearThreshold::new(samples).unwrap();
/// assert_eq!(interp.value(1.0), 2.0);
/// assert_eq!(interp.value(5.0), 3.0);
/// assert_eq!(interp.gradient(5.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseLinearThreshold<T: Float> {
    samples: Samples<T>,
}

impl<T: Float> PiecewiseLinearThreshold<T> {
    /// Build a threshold interpolator with the default configuration.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
    pub fn new(samples: Samples<T>) -> Result<Self, InterpolationError> {
        Self::with_config(samples, &InterpolatorConfig::default())
    }

    /// Build a threshold interpolator with an explicit configuration.
    pub fn with_config(
        samples: Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<Self, InterpolationError> {
        InterpolationMethod::PiecewiseLinearThreshold.validate(&samples, config)?;
        Ok(Self { samples })
    }
}

impl<T: Float> Interpolator<T> for PiecewiseLinearThreshold<T> {
    fn value(&self, x: T) -> T {
        let (p1, p2) = self.samples.interval(x);
        if x <= p1.x {
            return p1.y;
        }
        if x >= p2.x {
            return p2.y;
        }

        let lambda = (x - p1.x) / (p2.x - p1.x);
        linear_blend(p1.y, p2.y, lambda)
    }

    fn gradient(&self, x: T) -> T {
        let (p1, p2) = self.samples.interval(x);
        if x <= p1.x || x >= p2.x {
            return T::zero();
        }
        (p2.y - p1.y) / (p2.x - p1.x)
    }

    #[inline]
    fn samples(&self) -> &Samples<T> {
        &self.samples
    }
}
