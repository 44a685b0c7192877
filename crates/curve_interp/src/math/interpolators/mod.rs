//! One-dimensional curve interpolators.
//!
//! Every interpolator is built once from a [`Samples`] sequence, validated
//! at construction, and then evaluated any number of times through the
//! [`Interpolator`] trait. Evaluation never fails and never mutates.
//!
//! ## Available Interpolators
//!
//! - [`Geometric`]: geometric interpolation, geometric extrapolation
//! - [`GeometricSqrt`]: geometric in `sqrt(λ)`, flat extrapolation
//! - [`PiecewiseConstant`]: right-continuous steps
//! - [`PiecewiseLinear`]: linear interpolation, linear extrapolation
//! - [`PiecewiseLinearSqrt`]: linear in `sqrt(λ)`, flat extrapolation
//! - [`PiecewiseLinearThreshold`]: linear interpolation, flat extrapolation
//! - [`InterpolatorEnum`]: static dispatch over all of the above
//!
//! ## Core Trait
//!
//! [`Interpolator`] defines:
//! - `value(x: T) -> T`: the curve value
//! - `gradient(x: T) -> T`: its derivative in `x`
//! - `domain() -> (T, T)`: the sampled abscissa range
//!
//! ## Numeric Types
//!
//! All interpolators are generic over `T: num_traits::Float` (`f64`, `f32`).
//! With the `num-dual-mode` feature the analytic gradients are checked
//! against forward-mode AD (`Dual64`) in tests.
//!
//! ## Example
//!
//! ```
//! use curve_interp::math::interpolators::{Interpolator, PiecewiseLinear, Samples};
//!
//! let samples: Samples<f64> = Samples::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]);
//! let interp = PiecewiseLinear::new(samples).unwrap();
//!
//! // Between y=1.0 and y=4.0
//! assert!((interp.value(1.5) - 2.5).abs() < 1e-10);
//! assert!((interp.gradient(1.5) - 3.0).abs() < 1e-10);
//! ```

mod config;
mod geometric;
mod geometric_sqrt;
mod interpolator_enum;
mod method;
mod piecewise_constant;
mod piecewise_linear;
mod piecewise_linear_sqrt;
mod piecewise_linear_threshold;
mod samples;
mod traits;

// Re-export public types at module level
pub use config::{InterpolatorConfig, DEFAULT_EPSILON};
pub use geometric::Geometric;
pub use geometric_sqrt::GeometricSqrt;
pub use interpolator_enum::InterpolatorEnum;
pub use method::InterpolationMethod;
pub use piecewise_constant::PiecewiseConstant;
pub use piecewise_linear::PiecewiseLinear;
pub use piecewise_linear_sqrt::PiecewiseLinearSqrt;
pub use piecewise_linear_threshold::PiecewiseLinearThreshold;
pub use samples::Samples;
pub use traits::Interpolator;
