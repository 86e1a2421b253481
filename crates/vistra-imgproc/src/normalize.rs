use vistra_image::{Image, ImageError};

/// Normalize an image so that all its samples sum to one.
///
/// The sum is a single global scalar over all channels, rows and columns,
/// not a per-channel sum. This is the normalization step used by the filter
/// factory to give smoothing kernels unit gain.
///
/// The caller must guarantee a nonzero sum: there is no guard, and an
/// all-zero image produces non-finite samples. Kernel construction always
/// supplies a positive sum.
pub fn l1_normalize(image: &mut Image) {
    let sum = image.as_slice().iter().sum::<f32>();
    image.as_slice_mut().iter_mut().for_each(|x| *x /= sum);
}

/// Find the minimum and maximum values in an image.
///
/// # Errors
///
/// If the image contains no data, an error is returned.
///
/// # Example
///
/// ```
/// use vistra_image::{Image, ImageSize};
/// use vistra_imgproc::normalize::find_min_max;
///
/// let image = Image::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     1,
///     vec![0.0, 1.0, 2.0, 3.0],
/// )
/// .unwrap();
///
/// let (min, max) = find_min_max(&image).unwrap();
/// assert_eq!(min, 0.0);
/// assert_eq!(max, 3.0);
/// ```
pub fn find_min_max(image: &Image) -> Result<(f32, f32), ImageError> {
    let first_element = match image.as_slice().iter().next() {
        Some(x) => x,
        None => return Err(ImageError::ImageDataNotInitialized),
    };

    let mut min = first_element;
    let mut max = first_element;

    for x in image.as_slice().iter() {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    Ok((*min, *max))
}

/// Rescale an image linearly so that its samples span [0, 1].
///
/// Applies `(v - min) / (max - min)` with the global minimum and maximum.
/// A constant image (max == min) is set to all zeros instead of dividing by
/// zero. An empty image is left untouched.
pub fn feature_normalize(image: &mut Image) {
    let Ok((min, max)) = find_min_max(image) else {
        return;
    };

    let range = max - min;
    if range == 0.0 {
        image.as_slice_mut().fill(0.0);
    } else {
        image
            .as_slice_mut()
            .iter_mut()
            .for_each(|x| *x = (*x - min) / range);
    }
}
