//! Interpolator construction settings.

use num_traits::Float;

/// Default positivity floor for log-scale interpolation.
pub const DEFAULT_EPSILON: f64 = 1.0e-16;

/// Construction-time validation settings shared by every interpolator.
///
/// The default configuration performs exactly the checks each interpolator
/// documents: a minimum point count, plus an ordinate floor for the
/// geometric family. Ordering of the abscissas is assumed, not checked.
/// `strict` additionally rejects unsorted, duplicate or non-finite samples.
///
/// # Type Parameters
///
/// * `T` - Floating-point type of the samples (e.g., `f64`)
///
/// # Example
///
/// ```
/// use curve_interp::math::interpolators::InterpolatorConfig;
///
/// let config: InterpolatorConfig<f64> = InterpolatorConfig::default();
/// assert_eq!(config.epsilon, 1e-16);
/// assert!(!config.strict);
///
/// let strict: InterpolatorConfig<f64> = InterpolatorConfig::strict();
/// assert!(strict.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolatorConfig<T: Float> {
    /// Ordinates below this value are rejected by log-scale interpolators.
    pub epsilon: T,

    /// Reject non-finite samples and abscissas that are not strictly
    /// increasing.
    pub strict: bool,
}

impl<T: Float> Default for InterpolatorConfig<T> {
    /// Default values:
    /// - `epsilon`: 1e-16
    /// - `strict`: false
    fn default() -> Self {
        Self {
            epsilon: T::from(DEFAULT_EPSILON).unwrap_or_else(T::min_positive_value),
            strict: false,
        }
    }
}

impl<T: Float> InterpolatorConfig<T> {
    /// Create a configuration with explicit values.
    ///
    /// # Panics
    ///
    /// Panics if `epsilon` is not strictly positive.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_interp::math::interpolators::InterpolatorConfig;
    ///
    /// let config = InterpolatorConfig::new(1e-12, true);
    /// assert_eq!(config.epsilon, 1e-12);
    /// ```
    pub fn new(epsilon: T, strict: bool) -> Self {
        assert!(epsilon > T::zero(), "epsilon must be positive");
        Self { epsilon, strict }
    }

    /// Default floor with ordering and finiteness checks enabled.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Replace the positivity floor.
    ///
    /// # Panics
    ///
    /// Panics if `epsilon` is not strictly positive.
    pub fn with_epsilon(self, epsilon: T) -> Self {
        Self::new(epsilon, self.strict)
    }
}
