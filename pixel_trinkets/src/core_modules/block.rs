// THEORY:
// A `Block` is one cell of the pixelation grid: a rectangle of source pixels that
// will be flattened to a single color. It is the bridge between the raster and
// the per-block averaging that gives pixelation its look.
//
// Key principles:
// 1.  **Clipping**: Blocks start on multiples of the block size. Blocks on the
//     right and bottom edges are shrunk to whatever is left of the image, and
//     they are averaged over that smaller pixel count.
// 2.  **Floor mean**: The representative color is the per-channel sum divided by
//     the pixel count, truncated. Sums are `u64`, so no realistic block overflows.
// 3.  **Data container**: A block only knows its rectangle. It reads pixels from a
//     borrowed `PixelBuffer` and never owns or copies them.

pub mod block {
    use crate::core_modules::pixel::pixel::Pixel;
    use crate::core_modules::pixel_buffer::PixelBuffer;

    /// A rectangular group of pixels treated as one unit during pixelation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Block {
        /// Column of the top-left pixel.
        pub x: u32,
        /// Row of the top-left pixel.
        pub y: u32,
        /// Width in pixels, already clipped to the image.
        pub width: u32,
        /// Height in pixels, already clipped to the image.
        pub height: u32,
    }

    impl Block {
        /// A `size` x `size` block at `(x, y)`, clipped to an image of the given dimensions.
        pub fn clipped(x: u32, y: u32, size: u32, image_width: u32, image_height: u32) -> Self {
            Self {
                x,
                y,
                width: size.min(image_width.saturating_sub(x)),
                height: size.min(image_height.saturating_sub(y)),
            }
        }

        pub fn pixel_count(&self) -> usize {
            self.width as usize * self.height as usize
        }

        /// True when the block was not cut short by the image edge.
        pub fn is_full(&self, size: u32) -> bool {
            self.width == size && self.height == size
        }

        /// Floor of the per-channel mean over every pixel in the block.
        pub fn average_pixel<const C: usize>(&self, buffer: &PixelBuffer<C>) -> Pixel<C> {
            let num_pixels = self.pixel_count() as u64;
            if num_pixels == 0 {
                return Pixel::default();
            }

            let image_width = buffer.width() as usize;
            let pixels = buffer.pixels();
            let mut sums = [0u64; C];

            for row in self.y..self.y + self.height {
                let start = row as usize * image_width + self.x as usize;
                for pixel in &pixels[start..start + self.width as usize] {
                    for (sum, &value) in sums.iter_mut().zip(pixel.0.iter()) {
                        *sum += value as u64;
                    }
                }
            }

            // A mean of u8 values always fits back into a u8.
            Pixel(sums.map(|sum| (sum / num_pixels) as u8))
        }
    }
}
