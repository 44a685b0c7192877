//! Core data and error types.
//!
//! - `point`: the `(x, y)` sample type
//! - `error`: construction errors shared by every interpolator
//! - `dual`: dual number alias for gradient verification (when the
//!   `num-dual-mode` feature is enabled)
//!
//! # Re-exports
//!
//! [`Point`] and [`InterpolationError`] are re-exported at this level.

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;
pub mod point;

pub use error::InterpolationError;
pub use point::Point;
