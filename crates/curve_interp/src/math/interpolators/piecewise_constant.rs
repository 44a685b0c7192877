//! Piecewise constant interpolation implementation.

use super::{InterpolationMethod, Interpolator, InterpolatorConfig, Samples};
use crate::types::InterpolationError;
use num_traits::Float;

/// Right-continuous step interpolator.
///
/// Holds each ordinate until the next sample: for `x1 <= x < x2` the value
/// is `y1`, and at `x == x2` it jumps to `y2`. Left of the first sample the
/// first ordinate applies, right of the last sample the last one. The
/// gradient is zero everywhere.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::{Interpolator, PiecewiseConstant, Samples};
///
/// let samples = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
/// let interp = PiecewiseConstant::new(samples).unwrap();
/// assert_eq!(interp.value(0.75), 1.0);
/// assert_eq!(interp.value(1.0), 1.4);
/// ```
#[derive(Debug, Clone)]
pub struct PiecewiseConstant<T: Float> {
    samples: Samples<T>,
}

impl<T: Float> PiecewiseConstant<T> {
    /// Build a step interpolator. At least 1 sample is required.
    pub fn new(samples: Samples<T>) -> Result<Self, InterpolationError> {
        Self::with_config(samples, &InterpolatorConfig::default())
    }

    /// Build a step interpolator with an explicit configuration.
    pub fn with_config(
        samples: Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<Self, InterpolationError> {
        InterpolationMethod::PiecewiseConstant.validate(&samples, config)?;
        Ok(Self { samples })
    }
}

impl<T: Float> Interpolator<T> for PiecewiseConstant<T> {
    fn value(&self, x: T) -> T {
        if let [only] = self.samples.points() {
            return only.y;
        }

        let (p1, p2) = self.samples.interval(x);
        if x < p2.x {
            p1.y
        } else {
            p2.y
        }
    }

    #[inline]
    fn gradient(&self, _x: T) -> T {
        T::zero()
    }

    #[inline]
    fn samples(&self) -> &Samples<T> {
        &self.samples
    }
}
