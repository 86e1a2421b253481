//! Pixel interpolation methods for image resampling.
//!
//! Both methods sample through the image's zero-padding pixel accessor, so
//! coordinates outside the image contribute zeros.

mod bilinear;
mod interpolate;
mod nearest;

pub use bilinear::bilinear_interpolation;
pub use interpolate::{interpolate_pixel, InterpolationMode};
pub use nearest::nearest_neighbor_interpolation;
