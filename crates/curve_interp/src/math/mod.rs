//! Numerical algorithms.
//!
//! - `interpolators`: one-dimensional curve interpolation

pub mod interpolators;
