use vistra_image::Image;

/// Kernel for bilinear interpolation
///
/// Blends the four pixels surrounding (`u`, `v`) in channel `c`, weighted
/// by the fractional offsets. Corners outside the image contribute 0.0.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `c` - The channel of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel value.
pub fn bilinear_interpolation(image: &Image, u: f32, v: f32, c: usize) -> f32 {
    let x1 = u.floor();
    let y1 = v.floor();

    let (ix1, iy1) = (x1 as isize, y1 as isize);
    let (ix2, iy2) = (ix1 + 1, iy1 + 1);

    let q11 = image.get(ix1, iy1, c);
    let q21 = image.get(ix2, iy1, c);
    let q12 = image.get(ix1, iy2, c);
    let q22 = image.get(ix2, iy2, c);

    let du = u - x1;
    let dv = v - y1;

    (1.0 - du) * (1.0 - dv) * q11
        + du * (1.0 - dv) * q21
        + (1.0 - du) * dv * q12
        + du * dv * q22
}
