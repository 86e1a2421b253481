use vistra_image::{Image, ImageError};

/// Convert an RGB image to HSV, in place.
///
/// The three channels are assumed to be R, G, B in [0, 1] and are
/// overwritten with H, S, V:
///
/// * H: hue in [0, 1) (degrees / 360).
/// * S: saturation in [0, 1], 0 for black.
/// * V: value in [0, 1].
///
/// # Errors
///
/// Returns an error if the image does not have 3 channels.
pub fn hsv_from_rgb(image: &mut Image) -> Result<(), ImageError> {
    if image.num_channels() != 3 {
        return Err(ImageError::InvalidChannelsCount(image.num_channels(), 3));
    }

    let plane = image.width() * image.height();
    let data = image.as_slice_mut();

    for i in 0..plane {
        let r = data[i];
        let g = data[i + plane];
        let b = data[i + 2 * plane];

        let value = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = value - min;

        let saturation = if value == 0.0 { 0.0 } else { chroma / value };

        let hue = if chroma == 0.0 {
            0.0
        } else {
            // sector test against V in R, G, B priority order
            let h = if value == r {
                (g - b) / chroma
            } else if value == g {
                (b - r) / chroma + 2.0
            } else {
                (r - g) / chroma + 4.0
            };

            if h < 0.0 {
                h / 6.0 + 1.0
            } else {
                h / 6.0
            }
        };

        data[i] = hue;
        data[i + plane] = saturation;
        data[i + 2 * plane] = value;
    }

    Ok(())
}

/// Convert an HSV image back to RGB, in place.
///
/// The inverse of [`hsv_from_rgb`]: the three channels are assumed to be H
/// in [0, 1), S and V in [0, 1], and are overwritten with R, G, B.
///
/// # Errors
///
/// Returns an error if the image does not have 3 channels.
pub fn rgb_from_hsv(image: &mut Image) -> Result<(), ImageError> {
    if image.num_channels() != 3 {
        return Err(ImageError::InvalidChannelsCount(image.num_channels(), 3));
    }

    let plane = image.width() * image.height();
    let data = image.as_slice_mut();

    for i in 0..plane {
        let h = data[i] * 360.0;
        let s = data[i + plane];
        let v = data[i + 2 * plane];

        let c = s * v;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        data[i] = r + m;
        data[i + plane] = g + m;
        data[i + 2 * plane] = b + m;
    }

    Ok(())
}
