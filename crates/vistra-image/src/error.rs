/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image shape.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images are expected to have the same size.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when two images are expected to have the same channel count.
    #[error("Channel count ({0}) does not match the expected count ({1})")]
    InvalidChannelsCount(usize, usize),

    /// Error when a channel index is out of bounds.
    #[error("Channel index ({0}) is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a kernel has an unsupported channel count.
    #[error("Kernel channel count ({0}) must be 1 or match the image channel count ({1})")]
    InvalidKernelChannels(usize, usize),

    /// Error when the image contains no data.
    #[error("Image data is not initialized")]
    ImageDataNotInitialized,
}
