//! # curve_interp: One-Dimensional Curve Interpolation
//!
//! Deterministic interpolators for curves sampled at ordered abscissas,
//! such as yield curves or volatility term structures. Each interpolator
//! evaluates the curve and its derivative in `x` at arbitrary query points.
//!
//! ## Modules
//!
//! - `types`: the [`Point`](types::Point) sample type and
//!   [`InterpolationError`](types::InterpolationError)
//! - `math::interpolators`: the sample sequence, the shared interval search
//!   and the interpolation policies
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_interp::math::interpolators::{
//!     Geometric, Interpolator, PiecewiseLinearSqrt, Samples,
//! };
//!
//! let samples: Samples<f64> = Samples::from(vec![(0.0, 1.2), (0.5, 1.0), (1.0, 1.4)]);
//!
//! let geometric = Geometric::new(samples.clone()).unwrap();
//! assert!((geometric.value(0.75) - 1.1832).abs() < 1e-4);
//!
//! // Flat beyond the last sample
//! let sqrt = PiecewiseLinearSqrt::new(samples).unwrap();
//! assert_eq!(sqrt.value(1.5), 1.4);
//! assert_eq!(sqrt.gradient(1.5), 0.0);
//! ```
//!
//! ## Logging
//!
//! Construction emits `tracing` debug events (method, point count, and the
//! rejection reason on failure). Evaluation does not log. Install any
//! `tracing` subscriber to see them.
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): enables dual-number gradient verification tests

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
