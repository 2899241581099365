// THEORY:
// The approximate pixelation path: shrink the image by the block size with a
// bilinear filter, then blow it back up with nearest-neighbor replication. It is
// quick and looks close to the exact transform, but it is NOT the block mean.
//
// Divergence from `Pixelator`:
// - The bilinear kernel reaches across block boundaries, so neighboring blocks
//   bleed into each other's color.
// - The reduced size is `max(1, W / k)`, so when `W` is not a multiple of `k` the
//   upsampled cells are slightly wider than `k` and do not line up with the exact
//   grid.
// - Channel values are rounded, not truncated.
//
// Use it only when speed matters more than reproducing the exact block colors.

use crate::error::TrinketError;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel as ImagePixel};

/// Downsample/upsample approximation of block pixelation on an `image` buffer.
pub fn pixelate_approximate<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
    block_size: u32,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>, TrinketError>
where
    P: ImagePixel + 'static,
    P::Subpixel: 'static,
{
    if block_size == 0 {
        return Err(TrinketError::InvalidParameter(
            "block_size must be a positive integer".to_string(),
        ));
    }

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Ok(image.clone());
    }

    let reduced_width = (width / block_size).max(1);
    let reduced_height = (height / block_size).max(1);

    let small = imageops::resize(image, reduced_width, reduced_height, FilterType::Triangle);
    Ok(imageops::resize(&small, width, height, FilterType::Nearest))
}
