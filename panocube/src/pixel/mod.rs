//! Pixel buffer abstraction.
//!
//! The projector and assembler operate on [`PixelBuffer`], a minimal
//! random-access pixel interface, rather than on a concrete codec type.
//! This keeps the geometry code decoupled from image decoding and lets
//! tests inject instrumented buffers.
//!
//! [`RasterImage`] is the concrete implementation backed by the `image`
//! crate, created either by decoding bytes or by allocation.

use image::RgbImage;

/// An 8-bit RGB triple, channel order red/green/blue.
pub type Rgb = [u8; 3];

/// Random-access pixel storage with a fixed width and height.
///
/// Coordinates are zero-based with `(0, 0)` at the top-left corner.
/// Implementations may assume callers stay in bounds; [`RasterImage`]
/// panics on out-of-range access like the underlying `image` buffer.
pub trait PixelBuffer {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Reads the pixel at `(x, y)`.
    fn pixel(&self, x: u32, y: u32) -> Rgb;

    /// Writes the pixel at `(x, y)`.
    fn set_pixel(&mut self, x: u32, y: u32, value: Rgb);
}

/// In-memory RGB raster backed by [`image::RgbImage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    inner: RgbImage,
}

impl RasterImage {
    /// Allocates a black `width` × `height` raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: RgbImage::new(width, height),
        }
    }

    /// Allocates a raster filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            inner: RgbImage::from_pixel(width, height, image::Rgb(color)),
        }
    }

    /// Decodes an encoded image (JPEG, PNG, ...) into an RGB raster.
    ///
    /// Any format supported by the `image` crate is accepted; alpha and
    /// higher bit depths are converted to 8-bit RGB.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self {
            inner: decoded.to_rgb8(),
        })
    }

    /// Wraps an existing `RgbImage`.
    pub fn from_rgb(inner: RgbImage) -> Self {
        Self { inner }
    }

    /// Borrows the underlying `image` buffer, for encoding and compositing.
    pub fn as_rgb(&self) -> &RgbImage {
        &self.inner
    }

    /// Consumes the raster, returning the underlying `image` buffer.
    pub fn into_rgb(self) -> RgbImage {
        self.inner
    }
}

impl PixelBuffer for RasterImage {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.inner.get_pixel(x, y).0
    }

    fn set_pixel(&mut self, x: u32, y: u32, value: Rgb) {
        self.inner.put_pixel(x, y, image::Rgb(value));
    }
}
