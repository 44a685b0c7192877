//! Dual number type used to verify analytic gradients.
//!
//! Interpolator gradients are closed-form. Evaluating a bracket formula
//! with a seeded [`DualNumber`] query gives an independent derivative to
//! compare them against.
//!
//! ```
//! use curve_interp::types::dual::DualNumber;
//! use num_dual::DualNum;
//!
//! // d/dx sqrt(x) at x = 4
//! let x = DualNumber::new(4.0, 1.0);
//! let y = x.sqrt();
//! assert_eq!(y.re, 2.0);
//! assert_eq!(y.eps, 0.25);
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: real part (function value)
/// - `eps`: dual part (derivative)
pub type DualNumber = num_dual::Dual64;
