use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use vistra_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Border policy for pixel reads outside the image bounds.
///
/// Out-of-bounds reads are not an error: they resolve through the border
/// policy. [`Border::Zero`] is the zero-padding boundary condition used by
/// the convolution engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    /// Fill all out-of-bounds samples with zero.
    #[default]
    Zero,

    /// Replicate the value of the nearest edge pixel.
    Replicate,
}

/// Represents an image with planar pixel data.
///
/// The image is stored as a single contiguous buffer in channel-major
/// (planar) order: all samples of channel 0, then all samples of channel 1,
/// and so on. Within a channel, rows are contiguous, so the sample at
/// (channel, row, column) lives at `channel * width * height + row * width + column`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    size: ImageSize,
    channels: usize,
    data: Vec<f32>,
}

impl Image {
    /// Create a new image from planar pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `channels` - The number of channels in the image.
    /// * `data` - The pixel data in channel-major order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image shape, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use vistra_image::{Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     3,
    ///     vec![0.0; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, channels: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * channels {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * channels,
            ));
        }

        Ok(Self {
            size,
            channels,
            data,
        })
    }

    /// Create a new image with the given shape, filled with a constant value.
    ///
    /// `from_size_val(size, channels, 0.0)` is the zero-initialized
    /// allocation used throughout the library.
    ///
    /// # Examples
    ///
    /// ```
    /// use vistra_image::{Image, ImageSize};
    ///
    /// let image = Image::from_size_val(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     3,
    ///     0.0,
    /// );
    ///
    /// assert_eq!(image.num_channels(), 3);
    /// assert!(image.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn from_size_val(size: ImageSize, channels: usize, val: f32) -> Self {
        Self {
            size,
            channels,
            data: vec![val; size.width * size.height * channels],
        }
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.channels
    }

    /// Get a flat view of the pixel data.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Get a mutable flat view of the pixel data.
    pub fn as_slice_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the image and return the underlying buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Get a channel of the image as a new single-channel image.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn channel(&self, channel: usize) -> Result<Image, ImageError> {
        if channel >= self.channels {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, self.channels));
        }

        let plane = self.size.width * self.size.height;
        let data = self.data[channel * plane..(channel + 1) * plane].to_vec();

        Image::new(self.size, 1, data)
    }

    /// Read the sample at column `x`, row `y`, channel `c`.
    ///
    /// Out-of-bounds coordinates resolve through [`Border::Zero`]: the read
    /// returns 0.0 rather than failing. This is the implicit zero padding
    /// that the convolution engine relies on.
    ///
    /// # Examples
    ///
    /// ```
    /// use vistra_image::{Image, ImageSize};
    ///
    /// let image = Image::new(
    ///     ImageSize { width: 2, height: 1 },
    ///     1,
    ///     vec![0.25, 0.75],
    /// ).unwrap();
    ///
    /// assert_eq!(image.get(1, 0, 0), 0.75);
    /// assert_eq!(image.get(-1, 0, 0), 0.0);
    /// assert_eq!(image.get(0, 5, 0), 0.0);
    /// ```
    pub fn get(&self, x: isize, y: isize, c: usize) -> f32 {
        self.get_border(x, y, c, Border::Zero)
    }

    /// Read the sample at column `x`, row `y`, channel `c` with an explicit
    /// border policy.
    ///
    /// An out-of-range channel yields 0.0 under every policy; only spatial
    /// coordinates are subject to the border rule.
    pub fn get_border(&self, x: isize, y: isize, c: usize, border: Border) -> f32 {
        if c >= self.channels {
            return 0.0;
        }

        let (w, h) = (self.size.width as isize, self.size.height as isize);
        let (x, y) = match border {
            Border::Zero => {
                if x < 0 || x >= w || y < 0 || y >= h {
                    return 0.0;
                }
                (x, y)
            }
            Border::Replicate => {
                if w == 0 || h == 0 {
                    return 0.0;
                }
                (x.clamp(0, w - 1), y.clamp(0, h - 1))
            }
        };

        self.data[self.offset(x as usize, y as usize, c)]
    }

    /// Write the sample at column `x`, row `y`, channel `c`.
    ///
    /// Out-of-bounds writes are silently ignored.
    pub fn set(&mut self, x: isize, y: isize, c: usize, v: f32) {
        if x < 0
            || x >= self.size.width as isize
            || y < 0
            || y >= self.size.height as isize
            || c >= self.channels
        {
            return;
        }

        let idx = self.offset(x as usize, y as usize, c);
        self.data[idx] = v;
    }

    fn offset(&self, x: usize, y: usize, c: usize) -> usize {
        c * self.size.width * self.size.height + y * self.size.width + x
    }
}
