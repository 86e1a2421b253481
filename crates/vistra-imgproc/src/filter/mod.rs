//! Filter operations
//!
//! This module provides the convolution engine and the filter kernels it
//! composes with.

/// Filter kernels
pub mod kernels;

/// Convolution engine
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
