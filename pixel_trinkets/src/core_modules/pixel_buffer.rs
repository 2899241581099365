// THEORY:
// `PixelBuffer` is the hand-off format between the image I/O code and the
// transforms. It is a row-major raster of `Pixel<C>` values with a fixed width,
// height and channel count.
//
// The buffer guarantees one invariant: `pixels.len() == width * height`. Every
// constructor checks it, and nothing outside this module can change the length
// afterwards, so the transforms index rows without further bounds reasoning.
//
// Conversions to and from the `image` crate's `RgbImage`/`RgbaImage` are plain
// memory reshuffles. They do not decode or encode anything.

use crate::core_modules::pixel::pixel::{Channel, Pixel};
use crate::error::TrinketError;
use image::{ImageBuffer, RgbImage, RgbaImage};

/// A row-major raster of `C`-channel pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer<const C: usize> {
    width: u32,
    height: u32,
    pixels: Vec<Pixel<C>>,
}

/// Pixel count of a `width` x `height` raster.
pub(crate) fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl<const C: usize> PixelBuffer<C> {
    /// Wraps `pixels` as a `width` x `height` raster.
    pub fn new(width: u32, height: u32, pixels: Vec<Pixel<C>>) -> Result<Self, TrinketError> {
        let expected = pixel_count(width, height);
        if pixels.len() != expected {
            return Err(TrinketError::DimensionMismatch {
                width,
                height,
                channels: C,
                expected: expected * C,
                actual: pixels.len() * C,
            });
        }
        Ok(Self::from_parts(width, height, pixels))
    }

    /// Builds a raster from interleaved channel bytes, e.g. `RGBRGB...`.
    pub fn from_raw(width: u32, height: u32, bytes: &[Channel]) -> Result<Self, TrinketError> {
        const { assert!(C > 0, "a pixel needs at least one channel") };

        let expected = pixel_count(width, height) * C;
        if bytes.len() != expected {
            return Err(TrinketError::DimensionMismatch {
                width,
                height,
                channels: C,
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(C)
            .map(|chunk| {
                let mut channels = [0; C];
                channels.copy_from_slice(chunk);
                Pixel(channels)
            })
            .collect();
        Ok(Self::from_parts(width, height, pixels))
    }

    /// A raster where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel<C>) -> Self {
        Self::from_parts(width, height, vec![pixel; pixel_count(width, height)])
    }

    /// Caller guarantees `pixels.len() == width * height`.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Pixel<C>>) -> Self {
        debug_assert_eq!(pixels.len(), pixel_count(width, height));
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels (not bytes).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels in scan order.
    pub fn pixels(&self) -> &[Pixel<C>] {
        &self.pixels
    }

    /// Mutable access to the pixels. The length is fixed, so the raster invariant holds.
    pub fn pixels_mut(&mut self) -> &mut [Pixel<C>] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel<C>> {
        self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&Pixel<C>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize)
    }

    /// One row of the raster, left to right.
    pub fn row(&self, y: u32) -> Option<&[Pixel<C>]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        self.pixels.get(start..start + width)
    }

    /// Flattens the raster back into interleaved channel bytes.
    pub fn into_raw(self) -> Vec<Channel> {
        self.pixels.iter().flat_map(|pixel| pixel.0).collect()
    }
}

impl From<RgbImage> for PixelBuffer<3> {
    fn from(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|pixel| Pixel(pixel.0)).collect();
        Self::from_parts(width, height, pixels)
    }
}

impl From<RgbaImage> for PixelBuffer<4> {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|pixel| Pixel(pixel.0)).collect();
        Self::from_parts(width, height, pixels)
    }
}

impl From<PixelBuffer<3>> for RgbImage {
    fn from(buffer: PixelBuffer<3>) -> Self {
        let width = buffer.width as usize;
        ImageBuffer::from_fn(buffer.width, buffer.height, |x, y| {
            image::Rgb(buffer.pixels[y as usize * width + x as usize].0)
        })
    }
}

impl From<PixelBuffer<4>> for RgbaImage {
    fn from(buffer: PixelBuffer<4>) -> Self {
        let width = buffer.width as usize;
        ImageBuffer::from_fn(buffer.width, buffer.height, |x, y| {
            image::Rgba(buffer.pixels[y as usize * width + x as usize].0)
        })
    }
}
