//! Error types for interpolator construction.
//!
//! All failures are detected when an interpolator is built; evaluating a
//! constructed interpolator never fails. Every variant describes a kind of
//! invalid input and renders with an `Invalid input:` prefix.

use thiserror::Error;

/// Interpolator construction errors.
///
/// # Examples
/// ```
/// use curve_interp::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData {
///     method: "piecewise linear threshold",
///     need: 2,
///     got: 1,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid input: at least 2 point(s) required to build a piecewise linear threshold interpolator, but got 1"
/// );
/// assert!(err.is_invalid_input());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Fewer samples than the interpolation method requires.
    #[error(
        "Invalid input: at least {need} point(s) required to build a {method} interpolator, but got {got}"
    )]
    InsufficientData {
        /// Name of the interpolation method
        method: &'static str,
        /// Minimum number of points required
        need: usize,
        /// Number of points provided
        got: usize,
    },

    /// An ordinate too small to be interpolated on a logarithmic scale.
    #[error(
        "Invalid input: {method} interpolation requires ordinates of at least {epsilon}, got {value} at index {index}"
    )]
    NonPositiveOrdinate {
        /// Name of the interpolation method
        method: &'static str,
        /// Index of the offending sample
        index: usize,
        /// The offending ordinate
        value: f64,
        /// Positivity floor in force
        epsilon: f64,
    },

    /// Abscissas are not strictly increasing.
    #[error("Invalid input: abscissas are not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index of the first sample that does not exceed its predecessor
        index: usize,
    },

    /// A sample coordinate is NaN or infinite.
    #[error("Invalid input: non-finite sample at index {index}")]
    NonFiniteData {
        /// Index of the offending sample
        index: usize,
    },

    /// Any other malformed input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl InterpolationError {
    /// Whether this error denotes invalid construction input.
    ///
    /// Always true: every construction failure is an invalid-input failure.
    /// The finer variants only say which check rejected the samples.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. }
                | Self::NonPositiveOrdinate { .. }
                | Self::NonMonotonicData { .. }
                | Self::NonFiniteData { .. }
                | Self::InvalidInput(_)
        )
    }
}
