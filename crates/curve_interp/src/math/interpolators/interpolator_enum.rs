//! Static dispatch over the concrete interpolators.

use super::{
    Geometric, GeometricSqrt, InterpolationMethod, Interpolator, InterpolatorConfig,
    PiecewiseConstant, PiecewiseLinear, PiecewiseLinearSqrt, PiecewiseLinearThreshold, Samples,
};
use crate::types::InterpolationError;
use num_traits::Float;

/// Enum wrapping every concrete interpolator.
///
/// Lets callers pick the interpolation policy at run time (for example from
/// a configured [`InterpolationMethod`] name) without trait objects.
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::{
///     InterpolationMethod, Interpolator, InterpolatorEnum, Samples,
/// };
///
/// let samples = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
/// let method: InterpolationMethod = "piecewise_constant".parse().unwrap();
/// let interp = InterpolatorEnum::new(method, samples).unwrap();
/// assert_eq!(interp.method(), InterpolationMethod::PiecewiseConstant);
/// assert_eq!(interp.value(0.75), 1.0);
/// ```
#[derive(Debug, Clone)]
pub enum InterpolatorEnum<T: Float> {
    /// Geometric interpolator
    Geometric(Geometric<T>),
    /// Geometric sqrt interpolator
    GeometricSqrt(GeometricSqrt<T>),
    /// Step interpolator
    PiecewiseConstant(PiecewiseConstant<T>),
    /// Piecewise linear interpolator
    PiecewiseLinear(PiecewiseLinear<T>),
    /// Piecewise linear sqrt interpolator
    PiecewiseLinearSqrt(PiecewiseLinearSqrt<T>),
    /// Piecewise linear threshold interpolator
    PiecewiseLinearThreshold(PiecewiseLinearThreshold<T>),
}

impl<T: Float> InterpolatorEnum<T> {
    /// Build the interpolator for `method` with the default configuration.
    pub fn new(method: InterpolationMethod, samples: Samples<T>) -> Result<Self, InterpolationError> {
        Self::with_config(method, samples, &InterpolatorConfig::default())
    }

    /// Build the interpolator for `method` with an explicit configuration.
    pub fn with_config(
        method: InterpolationMethod,
        samples: Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<Self, InterpolationError> {
        Ok(match method {
            InterpolationMethod::Geometric => {
                Self::Geometric(Geometric::with_config(samples, config)?)
            }
            InterpolationMethod::GeometricSqrt => {
                Self::GeometricSqrt(GeometricSqrt::with_config(samples, config)?)
            }
            InterpolationMethod::PiecewiseConstant => {
                Self::PiecewiseConstant(PiecewiseConstant::with_config(samples, config)?)
            }
            InterpolationMethod::PiecewiseLinear => {
                Self::PiecewiseLinear(PiecewiseLinear::with_config(samples, config)?)
            }
            InterpolationMethod::PiecewiseLinearSqrt => {
                Self::PiecewiseLinearSqrt(PiecewiseLinearSqrt::with_config(samples, config)?)
            }
            InterpolationMethod::PiecewiseLinearThreshold => Self::PiecewiseLinearThreshold(
                PiecewiseLinearThreshold::with_config(samples, config)?,
            ),
        })
    }

    /// The method of the wrapped interpolator.
    #[inline]
    pub fn method(&self) -> InterpolationMethod {
        match self {
            Self::Geometric(_) => InterpolationMethod::Geometric,
            Self::GeometricSqrt(_) => InterpolationMethod::GeometricSqrt,
            Self::PiecewiseConstant(_) => InterpolationMethod::PiecewiseConstant,
            Self::PiecewiseLinear(_) => InterpolationMethod::PiecewiseLinear,
            Self::PiecewiseLinearSqrt(_) => InterpolationMethod::PiecewiseLinearSqrt,
            Self::PiecewiseLinearThreshold(_) => InterpolationMethod::PiecewiseLinearThreshold,
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $inner:ident => $body:expr) => {
        match $self {
            InterpolatorEnum::Geometric($inner) => $body,
            InterpolatorEnum::GeometricSqrt($inner) => $body,
            InterpolatorEnum::PiecewiseConstant($inner) => $body,
            InterpolatorEnum::PiecewiseLinear($inner) => $body,
            InterpolatorEnum::PiecewiseLinearSqrt($inner) => $body,
            InterpolatorEnum::PiecewiseLinearThreshold($inner) => $body,
        }
    };
}

impl<T: Float> Interpolator<T> for InterpolatorEnum<T> {
    #[inline]
    fn value(&self, x: T) -> T {
        dispatch!(self, interp => interp.value(x))
    }

    #[inline]
    fn gradient(&self, x: T) -> T {
        dispatch!(self, interp => interp.gradient(x))
    }

    #[inline]
    fn samples(&self) -> &Samples<T> {
        dispatch!(self, interp => interp.samples())
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl<T: Float> From<$variant<T>> for InterpolatorEnum<T> {
                fn from(interp: $variant<T>) -> Self {
                    InterpolatorEnum::$variant(interp)
                }
            }
        )*
    };
}

impl_from!(
    Geometric,
    GeometricSqrt,
    PiecewiseConstant,
    PiecewiseLinear,
    PiecewiseLinearSqrt,
    PiecewiseLinearThreshold
);
