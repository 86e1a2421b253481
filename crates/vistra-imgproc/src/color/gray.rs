use vistra_image::{Image, ImageError};

/// Define the RGB weights for the grayscale conversion.
const RW: f32 = 0.299;
const GW: f32 = 0.587;
const BW: f32 = 0.114;

/// Convert an RGB image to grayscale using the formula:
///
/// Y = 0.299 * R + 0.587 * G + 0.114 * B
///
/// The input channels are assumed to be in the order R, G, B.
///
/// # Errors
///
/// Returns an error if the input image does not have 3 channels.
///
/// # Example
///
/// ```
/// use vistra_image::{Image, ImageSize};
/// use vistra_imgproc::color::gray_from_rgb;
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
/// let gray = gray_from_rgb(&image).unwrap();
/// assert_eq!(gray.num_channels(), 1);
/// assert_eq!(gray.size().width, 4);
/// assert_eq!(gray.size().height, 5);
/// ```
pub fn gray_from_rgb(src: &Image) -> Result<Image, ImageError> {
    if src.num_channels() != 3 {
        return Err(ImageError::InvalidChannelsCount(src.num_channels(), 3));
    }

    let plane = src.width() * src.height();
    let (r, rest) = src.as_slice().split_at(plane);
    let (g, b) = rest.split_at(plane);

    let mut gray = Image::from_size_val(src.size(), 1, 0.0);
    gray.as_slice_mut()
        .iter_mut()
        .zip(r.iter().zip(g.iter().zip(b.iter())))
        .for_each(|(out, (&r, (&g, &b)))| {
            *out = RW * r + GW * g + BW * b;
        });

    Ok(gray)
}
