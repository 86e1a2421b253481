use crate::normalize::l1_normalize;
use vistra_image::{Image, ImageSize};

fn kernel_3x3(values: [f32; 9]) -> Image {
    let mut kernel = Image::from_size_val(
        ImageSize {
            width: 3,
            height: 3,
        },
        1,
        0.0,
    );
    kernel.as_slice_mut().copy_from_slice(&values);
    kernel
}

/// Create a box kernel.
///
/// The kernel is a single-channel `size` x `size` image where every sample
/// is `1 / size^2`, so convolving with it preserves overall brightness.
pub fn box_kernel(size: usize) -> Image {
    let mut kernel = Image::from_size_val(
        ImageSize {
            width: size,
            height: size,
        },
        1,
        1.0,
    );
    l1_normalize(&mut kernel);
    kernel
}

/// Create a Gaussian kernel.
///
/// The window is `ceil(6 * sigma)` wide, bumped to the next odd integer so
/// the kernel has an exact center. Each sample at offset (dx, dy) from the
/// center is `exp(-(dx^2 + dy^2) / (2 sigma^2)) / (2 pi sigma^2)`, then the
/// kernel is L1-normalized: the analytic density only integrates to one
/// over infinite support, and the truncated window has to be rescaled back
/// to unit gain.
///
/// `sigma` must be positive.
pub fn gaussian_kernel(sigma: f32) -> Image {
    let mut size = (6.0 * sigma).ceil() as usize;
    if size % 2 == 0 {
        size += 1;
    }

    let mut kernel = Image::from_size_val(
        ImageSize {
            width: size,
            height: size,
        },
        1,
        0.0,
    );

    let half = (size / 2) as isize;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let norm = std::f32::consts::PI * two_sigma_sq;

    for dy in -half..=half {
        for dx in -half..=half {
            let value = (-((dx * dx + dy * dy) as f32) / two_sigma_sq).exp() / norm;
            kernel.set(dx + half, dy + half, 0, value);
        }
    }

    l1_normalize(&mut kernel);
    kernel
}

/// Create a highpass kernel.
///
/// A 3x3 Laplacian-like edge kernel. Like the other edge kernels it is
/// intentionally not normalized: its taps sum to zero and its output is
/// signed local contrast, usually rescaled with feature normalization
/// before display.
pub fn highpass_kernel() -> Image {
    #[rustfmt::skip]
    let values = [
         0.0, -1.0,  0.0,
        -1.0,  4.0, -1.0,
         0.0, -1.0,  0.0,
    ];
    kernel_3x3(values)
}

/// Create a sharpen kernel.
///
/// The highpass cross with a center of 5: the identity plus the Laplacian.
pub fn sharpen_kernel() -> Image {
    #[rustfmt::skip]
    let values = [
         0.0, -1.0,  0.0,
        -1.0,  5.0, -1.0,
         0.0, -1.0,  0.0,
    ];
    kernel_3x3(values)
}

/// Create an emboss kernel.
///
/// A directional 3x3 kernel with +-2 in opposite corners.
pub fn emboss_kernel() -> Image {
    #[rustfmt::skip]
    let values = [
        -2.0, -1.0,  0.0,
        -1.0,  1.0,  1.0,
         0.0,  1.0,  2.0,
    ];
    kernel_3x3(values)
}

/// Create the Sobel kernel for horizontal gradients.
pub fn sobel_x_kernel() -> Image {
    #[rustfmt::skip]
    let values = [
        -1.0,  0.0,  1.0,
        -2.0,  0.0,  2.0,
        -1.0,  0.0,  1.0,
    ];
    kernel_3x3(values)
}

/// Create the Sobel kernel for vertical gradients.
pub fn sobel_y_kernel() -> Image {
    #[rustfmt::skip]
    let values = [
        -1.0, -2.0, -1.0,
         0.0,  0.0,  0.0,
         1.0,  2.0,  1.0,
    ];
    kernel_3x3(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vistra_image::ImageError;

    #[test]
    fn test_box_kernel() {
        let kernel = box_kernel(3);

        assert_eq!(kernel.size().width, 3);
        assert_eq!(kernel.size().height, 3);
        assert_eq!(kernel.num_channels(), 1);

        for &v in kernel.as_slice() {
            assert!((v - 1.0 / 9.0).abs() < 1e-7);
        }
    }

    #[test]
    fn test_gaussian_kernel_shape() {
        // ceil(6 * 2.0) = 12, bumped to 13
        let kernel = gaussian_kernel(2.0);
        assert_eq!(kernel.size().width, 13);
        assert_eq!(kernel.size().height, 13);

        // ceil(6 * 0.5) = 3, already odd
        let kernel = gaussian_kernel(0.5);
        assert_eq!(kernel.size().width, 3);
    }

    #[test]
    fn test_gaussian_kernel_sums_to_one() {
        let kernel = gaussian_kernel(1.4);
        let sum = kernel.as_slice().iter().sum::<f32>();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_gaussian_kernel_symmetry() {
        let kernel = gaussian_kernel(1.0);
        let dim = kernel.size().width as isize;

        // symmetric under 180 degree rotation, and peaked at the center
        let center = kernel.get(dim / 2, dim / 2, 0);
        for y in 0..dim {
            for x in 0..dim {
                let v = kernel.get(x, y, 0);
                assert_eq!(v, kernel.get(dim - 1 - x, dim - 1 - y, 0));
                assert!(v <= center);
            }
        }
    }

    #[test]
    fn test_edge_kernels() -> Result<(), ImageError> {
        // the signed edge kernels are not normalized
        assert_eq!(highpass_kernel().as_slice().iter().sum::<f32>(), 0.0);
        assert_eq!(sharpen_kernel().as_slice().iter().sum::<f32>(), 1.0);
        assert_eq!(sobel_x_kernel().as_slice().iter().sum::<f32>(), 0.0);
        assert_eq!(sobel_y_kernel().as_slice().iter().sum::<f32>(), 0.0);
        assert_eq!(emboss_kernel().as_slice().iter().sum::<f32>(), 1.0);

        // sobel y is sobel x transposed
        let sx = sobel_x_kernel();
        let sy = sobel_y_kernel();
        for y in 0..3isize {
            for x in 0..3isize {
                assert_eq!(sx.get(x, y, 0), sy.get(y, x, 0));
            }
        }

        Ok(())
    }
}
