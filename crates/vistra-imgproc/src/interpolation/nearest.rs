use vistra_image::Image;

/// Kernel for nearest neighbor interpolation
///
/// Samples the pixel closest to (`u`, `v`) in channel `c`; coordinates that
/// round outside the image yield 0.0.
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
pub fn nearest_neighbor_interpolation(image: &Image, u: f32, v: f32, c: usize) -> f32 {
    image.get(u.round() as isize, v.round() as isize, c)
}
