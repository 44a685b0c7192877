//! Interpolation method tags and the construction checks attached to them.

use super::{InterpolatorConfig, Samples};
use crate::types::InterpolationError;
use num_traits::Float;
use std::str::FromStr;

/// The available interpolation policies.
///
/// Each method fixes a formula between samples, an extrapolation rule and
/// the construction checks applied to the samples.
///
/// | Method | Min points | Extrapolation |
/// |---|---|---|
/// | `Geometric` | 1 | geometric extension |
/// | `GeometricSqrt` | 1 | flat |
/// | `PiecewiseConstant` | 1 | flat (step) |
/// | `PiecewiseLinear` | 1 | linear extension |
/// | `PiecewiseLinearSqrt` | 2 | flat |
/// | `PiecewiseLinearThreshold` | 2 | flat |
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::InterpolationMethod;
///
/// let method: InterpolationMethod = "piecewise_linear_sqrt".parse().unwrap();
/// assert_eq!(method, InterpolationMethod::PiecewiseLinearSqrt);
/// assert_eq!(method.min_points(), 2);
/// assert!(method.flat_extrapolation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMethod {
    /// Geometric interpolation of the ordinates.
    Geometric,
    /// Geometric interpolation in the square root of the bracket fraction.
    GeometricSqrt,
    /// Right-continuous step function.
    PiecewiseConstant,
    /// Linear interpolation.
    PiecewiseLinear,
    /// Linear interpolation in the square root of the bracket fraction.
    PiecewiseLinearSqrt,
    /// Linear interpolation clamped to the boundary values.
    PiecewiseLinearThreshold,
}

impl InterpolationMethod {
    /// Every method, in declaration order.
    pub const ALL: [InterpolationMethod; 6] = [
        InterpolationMethod::Geometric,
        InterpolationMethod::GeometricSqrt,
        InterpolationMethod::PiecewiseConstant,
        InterpolationMethod::PiecewiseLinear,
        InterpolationMethod::PiecewiseLinearSqrt,
        InterpolationMethod::PiecewiseLinearThreshold,
    ];

    /// Human-readable name, used in error messages and logs.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMethod::Geometric => "geometric",
            InterpolationMethod::GeometricSqrt => "geometric sqrt",
            InterpolationMethod::PiecewiseConstant => "piecewise constant",
            InterpolationMethod::PiecewiseLinear => "piecewise linear",
            InterpolationMethod::PiecewiseLinearSqrt => "piecewise linear sqrt",
            InterpolationMethod::PiecewiseLinearThreshold => "piecewise linear threshold",
        }
    }

    /// Minimum number of samples accepted at construction.
    ///
    /// Methods accepting a single sample treat it as a constant curve.
    #[inline]
    pub fn min_points(&self) -> usize {
        match self {
            InterpolationMethod::Geometric
            | InterpolationMethod::GeometricSqrt
            | InterpolationMethod::PiecewiseConstant
            | InterpolationMethod::PiecewiseLinear => 1,
            InterpolationMethod::PiecewiseLinearSqrt
            | InterpolationMethod::PiecewiseLinearThreshold => 2,
        }
    }

    /// Whether ordinates must be at least the configured epsilon.
    #[inline]
    pub fn requires_positive_ordinates(&self) -> bool {
        matches!(
            self,
            InterpolationMethod::Geometric | InterpolationMethod::GeometricSqrt
        )
    }

    /// Whether values outside the sample span are held at the boundary
    /// ordinates.
    #[inline]
    pub fn flat_extrapolation(&self) -> bool {
        !matches!(
            self,
            InterpolationMethod::Geometric | InterpolationMethod::PiecewiseLinear
        )
    }

    /// Run the construction checks of this method against `samples`.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than [`min_points`](Self::min_points) samples
    /// * `Err(InterpolationError::NonPositiveOrdinate)` - Geometric family only, an ordinate below `config.epsilon`
    /// * `Err(InterpolationError::NonFiniteData)` - Strict mode only
    /// * `Err(InterpolationError::NonMonotonicData)` - Strict mode only
    pub fn validate<T: Float>(
        &self,
        samples: &Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<(), InterpolationError> {
        let result = self.check(samples, config);
        match &result {
            Ok(()) => tracing::debug!(
                method = self.as_str(),
                points = samples.len(),
                strict = config.strict,
                "built interpolator"
            ),
            Err(err) => tracing::debug!(
                method = self.as_str(),
                points = samples.len(),
                error = %err,
                "rejected interpolator samples"
            ),
        }
        result
    }

    fn check<T: Float>(
        &self,
        samples: &Samples<T>,
        config: &InterpolatorConfig<T>,
    ) -> Result<(), InterpolationError> {
        let need = self.min_points();
        if samples.len() < need {
            return Err(InterpolationError::InsufficientData {
                method: self.as_str(),
                need,
                got: samples.len(),
            });
        }

        if config.strict {
            samples.check_finite()?;
            samples.check_strictly_increasing()?;
        }

        if self.requires_positive_ordinates() {
            if let Some((index, p)) = samples
                .points()
                .iter()
                .enumerate()
                .find(|(_, p)| p.y < config.epsilon)
            {
                return Err(InterpolationError::NonPositiveOrdinate {
                    method: self.as_str(),
                    index,
                    value: p.y.to_f64().unwrap_or(f64::NAN),
                    epsilon: config.epsilon.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InterpolationMethod {
    type Err = InterpolationError;

    /// Parse a method name. Case, spaces, hyphens and underscores are
    /// interchangeable: `"Geometric-Sqrt"` and `"geometric_sqrt"` both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match key.as_str() {
            "geometric" => Ok(InterpolationMethod::Geometric),
            "geometric_sqrt" => Ok(InterpolationMethod::GeometricSqrt),
            "piecewise_constant" => Ok(InterpolationMethod::PiecewiseConstant),
            "piecewise_linear" => Ok(InterpolationMethod::PiecewiseLinear),
            "piecewise_linear_sqrt" => Ok(InterpolationMethod::PiecewiseLinearSqrt),
            "piecewise_linear_threshold" => Ok(InterpolationMethod::PiecewiseLinearThreshold),
            _ => Err(InterpolationError::InvalidInput(format!(
                "unknown interpolation method: {s}"
            ))),
        }
    }
}
