use crate::interpolation::{interpolate_pixel, InterpolationMode};
use vistra_image::{Image, ImageError, ImageSize};

/// Resize an image to a new size.
///
/// Output pixel (i, j) maps to the source coordinate
/// `((i + 0.5) * src_w / new_w - 0.5, (j + 0.5) * src_h / new_h - 0.5)`
/// (center-aligned scaling) and is sampled with the given interpolation
/// mode. The channel count is preserved, and resizing to the source size
/// reproduces the image.
///
/// # Errors
///
/// Returns an error for a zero-area target size.
///
/// # Example
///
/// ```
/// use vistra_image::{Image, ImageSize};
/// use vistra_imgproc::interpolation::InterpolationMode;
/// use vistra_imgproc::resize::resize;
///
/// let image = Image::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     3,
///     0.0,
/// );
///
/// let resized = resize(
///     &image,
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     InterpolationMode::Bilinear,
/// )
/// .unwrap();
///
/// assert_eq!(resized.num_channels(), 3);
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// ```
pub fn resize(
    src: &Image,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image, ImageError> {
    if new_size.width == 0 || new_size.height == 0 {
        return Err(ImageError::InvalidImageSize(
            new_size.width,
            new_size.height,
            1,
            1,
        ));
    }

    let width_scale = src.width() as f32 / new_size.width as f32;
    let height_scale = src.height() as f32 / new_size.height as f32;

    let mut dst = Image::from_size_val(new_size, src.num_channels(), 0.0);

    for k in 0..src.num_channels() {
        for j in 0..new_size.height {
            for i in 0..new_size.width {
                let u = (i as f32 + 0.5) * width_scale - 0.5;
                let v = (j as f32 + 0.5) * height_scale - 0.5;
                dst.set(
                    i as isize,
                    j as isize,
                    k,
                    interpolate_pixel(src, u, v, k, interpolation),
                );
            }
        }
    }

    Ok(dst)
}
