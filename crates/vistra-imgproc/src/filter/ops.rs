use super::{convolve, kernels};
use vistra_image::{Image, ImageError};

/// Blur an image with a box kernel, preserving channels.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `kernel_size` - The side length of the box kernel.
pub fn box_blur(src: &Image, kernel_size: usize) -> Result<Image, ImageError> {
    convolve(src, &kernels::box_kernel(kernel_size), true)
}

/// Blur an image with a Gaussian kernel, preserving channels.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `sigma` - The standard deviation of the Gaussian; must be positive.
pub fn gaussian_blur(src: &Image, sigma: f32) -> Result<Image, ImageError> {
    convolve(src, &kernels::gaussian_kernel(sigma), true)
}

/// Compute the Sobel gradient pair of an image.
///
/// Returns the horizontal and vertical gradient images `(gx, gy)`, each a
/// single-channel collapse-mode convolution with the Sobel kernels. The
/// caller combines them as needed, e.g. magnitude `sqrt(gx^2 + gy^2)` and
/// direction `atan2(gy, gx)`.
pub fn sobel_gradients(src: &Image) -> Result<(Image, Image), ImageError> {
    let gx = convolve(src, &kernels::sobel_x_kernel(), false)?;
    let gy = convolve(src, &kernels::sobel_y_kernel(), false)?;
    Ok((gx, gy))
}
