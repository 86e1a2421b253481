use vistra_image::{Image, ImageError};

fn check_same_shape(a: &Image, b: &Image) -> Result<(), ImageError> {
    if a.size() != b.size() {
        return Err(ImageError::InvalidImageSize(
            a.cols(),
            a.rows(),
            b.cols(),
            b.rows(),
        ));
    }

    if a.num_channels() != b.num_channels() {
        return Err(ImageError::InvalidChannelsCount(
            a.num_channels(),
            b.num_channels(),
        ));
    }

    Ok(())
}

/// Add two images elementwise, producing a new image.
///
/// # Errors
///
/// Returns an error if the images do not have identical width, height and
/// channel count.
///
/// # Example
///
/// ```
/// use vistra_image::{Image, ImageSize};
/// use vistra_imgproc::enhance::add;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let a = Image::new(size, 1, vec![1.0, 2.0]).unwrap();
/// let b = Image::new(size, 1, vec![0.5, 0.5]).unwrap();
///
/// let sum = add(&a, &b).unwrap();
/// assert_eq!(sum.as_slice(), &[1.5, 2.5]);
/// ```
pub fn add(a: &Image, b: &Image) -> Result<Image, ImageError> {
    check_same_shape(a, b)?;

    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice().iter())
        .map(|(x, y)| x + y)
        .collect();

    Image::new(a.size(), a.num_channels(), data)
}

/// Subtract image `b` from image `a` elementwise, producing a new image.
///
/// # Errors
///
/// Returns an error if the images do not have identical width, height and
/// channel count.
pub fn sub(a: &Image, b: &Image) -> Result<Image, ImageError> {
    check_same_shape(a, b)?;

    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice().iter())
        .map(|(x, y)| x - y)
        .collect();

    Image::new(a.size(), a.num_channels(), data)
}

/// Add a constant to every sample of one channel, in place.
///
/// An out-of-range channel index is a silent no-op.
pub fn shift(image: &mut Image, channel: usize, delta: f32) {
    if channel >= image.num_channels() {
        return;
    }

    let plane = image.width() * image.height();
    image.as_slice_mut()[channel * plane..(channel + 1) * plane]
        .iter_mut()
        .for_each(|x| *x += delta);
}

/// Saturate every sample into the closed interval [0, 1], in place.
pub fn clamp(image: &mut Image) {
    image
        .as_slice_mut()
        .iter_mut()
        .for_each(|x| *x = x.clamp(0.0, 1.0));
}

#[cfg(test)]
mod tests {
    use vistra_image::{Image, ImageError, ImageSize};

    #[test]
    fn add_and_sub() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let a = Image::new(size, 2, vec![1.0, 2.0, 3.0, 4.0])?;
        let b = Image::new(size, 2, vec![0.5, 1.0, 1.5, 2.0])?;

        let sum = super::add(&a, &b)?;
        assert_eq!(sum.as_slice(), &[1.5, 3.0, 4.5, 6.0]);

        let diff = super::sub(&sum, &b)?;
        assert_eq!(diff.as_slice(), a.as_slice());

        Ok(())
    }

    #[test]
    fn add_shape_mismatch() -> Result<(), ImageError> {
        let a = Image::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            1,
            0.0,
        );
        let b = Image::from_size_val(
            ImageSize {
                width: 3,
                height: 2,
            },
            1,
            0.0,
        );
        assert_eq!(
            super::add(&a, &b),
            Err(ImageError::InvalidImageSize(2, 2, 3, 2))
        );

        let c = Image::from_size_val(a.size(), 3, 0.0);
        assert_eq!(
            super::sub(&a, &c),
            Err(ImageError::InvalidChannelsCount(1, 3))
        );

        Ok(())
    }

    #[test]
    fn shift_channel() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let mut image = Image::new(size, 2, vec![1.0, 2.0, 3.0, 4.0])?;

        super::shift(&mut image, 1, 0.5);
        assert_eq!(image.as_slice(), &[1.0, 2.0, 3.5, 4.5]);

        // out of range channel leaves the image untouched
        super::shift(&mut image, 2, 100.0);
        assert_eq!(image.as_slice(), &[1.0, 2.0, 3.5, 4.5]);

        Ok(())
    }

    #[test]
    fn clamp_saturates_and_is_idempotent() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let mut image = Image::new(size, 2, vec![-0.5, 0.25, 1.5, 1.0])?;

        super::clamp(&mut image);
        assert_eq!(image.as_slice(), &[0.0, 0.25, 1.0, 1.0]);

        let clamped = image.clone();
        super::clamp(&mut image);
        assert_eq!(image.as_slice(), clamped.as_slice());

        Ok(())
    }
}
