use vistra_image::{Image, ImageError};

/// Convolve an image with a kernel, producing a new image.
///
/// The kernel is itself an [`Image`], conventionally square and odd-sized
/// so that `dim / 2` is its exact center. Its channel count must be either
/// 1 or equal to the image's channel count.
///
/// When `preserve_channels` is true the output has the image's channel
/// count and each output channel is accumulated from the same-indexed
/// source channel. When false the output has a single channel and every
/// accumulation reads source channel 0, summed over all kernel channels.
/// This collapse mode is used by edge detectors, where channel identity
/// does not matter.
///
/// Pixels outside the source image contribute zeros (the pixel accessor's
/// zero-padding border policy).
///
/// # Errors
///
/// Returns an error if the kernel channel count is neither 1 nor the
/// image's channel count.
///
/// # Example
///
/// ```
/// use vistra_image::{Image, ImageSize};
/// use vistra_imgproc::filter::{convolve, kernels};
///
/// let image = Image::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 4,
///     },
///     3,
///     1.0,
/// );
///
/// let blurred = convolve(&image, &kernels::box_kernel(3), true).unwrap();
/// assert_eq!(blurred.num_channels(), 3);
///
/// let edges = convolve(&image, &kernels::highpass_kernel(), false).unwrap();
/// assert_eq!(edges.num_channels(), 1);
/// ```
pub fn convolve(
    src: &Image,
    kernel: &Image,
    preserve_channels: bool,
) -> Result<Image, ImageError> {
    if kernel.num_channels() != 1 && kernel.num_channels() != src.num_channels() {
        return Err(ImageError::InvalidKernelChannels(
            kernel.num_channels(),
            src.num_channels(),
        ));
    }

    let channels = if preserve_channels {
        src.num_channels()
    } else {
        1
    };
    let mut dst = Image::from_size_val(src.size(), channels, 0.0);

    let (kw, kh) = (kernel.width() as isize, kernel.height() as isize);
    let (half_w, half_h) = (kw / 2, kh / 2);
    let kernel_plane = kernel.width() * kernel.height();
    let kernel_data = kernel.as_slice();

    for c in 0..channels {
        let src_c = if preserve_channels { c } else { 0 };
        for y in 0..src.height() as isize {
            for x in 0..src.width() as isize {
                let mut sum = 0.0;
                for fc in 0..kernel.num_channels() {
                    for fy in 0..kh {
                        for fx in 0..kw {
                            let val = src.get(x + fx - half_w, y + fy - half_h, src_c);
                            let weight =
                                kernel_data[fc * kernel_plane + (fy * kw + fx) as usize];
                            sum += val * weight;
                        }
                    }
                }
                dst.set(x, y, c, sum);
            }
        }
    }

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use crate::filter::kernels;
    use vistra_image::{Image, ImageError, ImageSize};

    #[test]
    fn convolve_box_unit_interior() -> Result<(), ImageError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            1,
            1.0,
        );

        let out = super::convolve(&image, &kernels::box_kernel(3), true)?;

        for y in 0..4isize {
            for x in 0..4isize {
                let v = out.get(x, y, 0);
                if (1..3).contains(&x) && (1..3).contains(&y) {
                    // interior: nine samples of 1/9 each
                    assert!((v - 1.0).abs() < 1e-6);
                } else {
                    // border: zero padding removes part of the window
                    assert!(v < 1.0);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn convolve_output_channels() -> Result<(), ImageError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 5,
                height: 5,
            },
            3,
            0.5,
        );
        let kernel = kernels::box_kernel(3);

        let collapsed = super::convolve(&image, &kernel, false)?;
        assert_eq!(collapsed.num_channels(), 1);

        let preserved = super::convolve(&image, &kernel, true)?;
        assert_eq!(preserved.num_channels(), 3);
        assert_eq!(preserved.size(), image.size());

        Ok(())
    }

    #[test]
    fn convolve_rejects_kernel_channels() -> Result<(), ImageError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            3,
            0.0,
        );
        let kernel = Image::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            2,
            0.0,
        );

        assert_eq!(
            super::convolve(&image, &kernel, true),
            Err(ImageError::InvalidKernelChannels(2, 3))
        );

        Ok(())
    }

    #[test]
    fn collapse_reads_channel_zero() -> Result<(), ImageError> {
        // channel 0 and channel 1 of the source differ; a 2-channel kernel
        // in collapse mode must read channel 0 for every kernel channel,
        // not sum across source channels.
        let size = ImageSize {
            width: 3,
            height: 3,
        };
        let mut image = Image::from_size_val(size, 2, 0.0);
        image.set(1, 1, 0, 1.0);
        image.set(1, 1, 1, 100.0);

        // kernel plane 0 is a 2x identity tap, plane 1 a 3x identity tap
        let mut kernel = Image::from_size_val(size, 2, 0.0);
        kernel.set(1, 1, 0, 2.0);
        kernel.set(1, 1, 1, 3.0);

        let out = super::convolve(&image, &kernel, false)?;

        assert_eq!(out.num_channels(), 1);
        // (2 + 3) * source channel 0; channel 1's 100.0 must not leak in
        assert_eq!(out.get(1, 1, 0), 5.0);

        Ok(())
    }

    #[test]
    fn convolve_preserve_multi_channel_kernel() -> Result<(), ImageError> {
        // in preserve mode each output channel reads its own source channel,
        // still summing over every kernel channel
        let size = ImageSize {
            width: 3,
            height: 3,
        };
        let mut image = Image::from_size_val(size, 2, 0.0);
        image.set(1, 1, 0, 1.0);
        image.set(1, 1, 1, 10.0);

        let mut kernel = Image::from_size_val(size, 2, 0.0);
        kernel.set(1, 1, 0, 2.0);
        kernel.set(1, 1, 1, 3.0);

        let out = super::convolve(&image, &kernel, true)?;

        assert_eq!(out.num_channels(), 2);
        assert_eq!(out.get(1, 1, 0), 5.0);
        assert_eq!(out.get(1, 1, 1), 50.0);

        Ok(())
    }

    #[test]
    fn convolve_highpass_flat_region_is_zero() -> Result<(), ImageError> {
        let image = Image::from_size_val(
            ImageSize {
                width: 5,
                height: 5,
            },
            1,
            0.7,
        );

        let out = super::convolve(&image, &kernels::highpass_kernel(), true)?;

        // the Laplacian cross sums to zero over a constant interior
        assert_eq!(out.get(2, 2, 0), 0.0);

        Ok(())
    }
}
