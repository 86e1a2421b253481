#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use vistra_image as image;

#[doc(inline)]
pub use vistra_imgproc as imgproc;
