// THEORY:
// The `transforms` module is the top-level API of the crate. It wraps the engine
// pieces (`Pixelator`, `RadixSorter`) into the handful of calls the command-line
// tools actually make, together with the plain config structs those tools fill in
// from their arguments.

use crate::core_modules::pixel::pixel::{Channel, Pixel};
use crate::core_modules::pixel_buffer::PixelBuffer;
use crate::core_modules::pixelator::Pixelator;
use crate::core_modules::radix_sorter::RadixSorter;
use crate::error::TrinketError;

/// Which pixelation algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelateStrategy {
    /// Floor of the per-block mean. The reference behavior.
    #[default]
    Exact,
    /// Bilinear downsample then nearest-neighbor upsample. Faster, not block-exact.
    Approximate,
}

/// Configuration for a pixelation run.
#[derive(Debug, Clone)]
pub struct PixelateConfig {
    pub block_size: u32,
    pub strategy: PixelateStrategy,
}

impl PixelateConfig {
    pub fn new(block_size: u32) -> Self {
        Self {
            block_size,
            strategy: PixelateStrategy::Exact,
        }
    }
}

/// Configuration for a pixel sort run.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Largest channel value the sorter accepts; the radix is this plus one.
    pub max_channel_value: Channel,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            max_channel_value: Channel::MAX,
        }
    }
}

/// Flattens every `block_size` x `block_size` block of `buffer` to its floor mean.
pub fn pixelate<const C: usize>(
    buffer: &PixelBuffer<C>,
    block_size: u32,
) -> Result<PixelBuffer<C>, TrinketError> {
    Ok(Pixelator::new(block_size)?.apply(buffer))
}

/// Sorts color tuples lexicographically, channel 0 most significant.
pub fn sort_pixels<const C: usize>(
    pixels: &[Pixel<C>],
    max_channel_value: Channel,
) -> Result<Vec<Pixel<C>>, TrinketError> {
    RadixSorter::new(max_channel_value).sort(pixels)
}

/// Sorts all pixels of `buffer` and lays them back out in scan order.
///
/// The result has the same dimensions; which pixel ends up where has nothing to
/// do with where it started.
pub fn sort_image<const C: usize>(
    buffer: PixelBuffer<C>,
    config: &SortConfig,
) -> Result<PixelBuffer<C>, TrinketError> {
    let (width, height) = buffer.dimensions();
    let sorted = RadixSorter::new(config.max_channel_value).sort_vec(buffer.into_pixels())?;
    Ok(PixelBuffer::from_parts(width, height, sorted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::pixel::Rgb;

    #[test]
    fn pixelate_validates_block_size() {
        let buffer = PixelBuffer::<3>::filled(2, 2, Rgb::new([1, 2, 3]));
        assert!(pixelate(&buffer, 0).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn sort_image_keeps_dimensions() {
        let pixels = vec![
            Rgb::new([9, 0, 0]),
            Rgb::new([1, 0, 0]),
            Rgb::new([5, 0, 0]),
            Rgb::new([3, 0, 0]),
            Rgb::new([7, 0, 0]),
            Rgb::new([2, 0, 0]),
        ];
        let buffer = PixelBuffer::new(3, 2, pixels).unwrap();
        let sorted = sort_image(buffer, &SortConfig::default()).unwrap();

        assert_eq!(sorted.dimensions(), (3, 2));
        assert_eq!(sorted.row(0).unwrap(), &[Rgb::new([1, 0, 0]), Rgb::new([2, 0, 0]), Rgb::new([3, 0, 0])]);
        assert_eq!(sorted.row(1).unwrap(), &[Rgb::new([5, 0, 0]), Rgb::new([7, 0, 0]), Rgb::new([9, 0, 0])]);
    }

    #[test]
    fn sort_image_rejects_values_above_max() {
        let buffer = PixelBuffer::<3>::filled(1, 1, Rgb::new([0, 200, 0]));
        let config = SortConfig {
            max_channel_value: 100,
        };
        assert!(matches!(
            sort_image(buffer, &config),
            Err(TrinketError::OutOfRange { value: 200, .. })
        ));
    }

    #[test]
    fn default_config_is_exact() {
        let config = PixelateConfig::new(8);
        assert_eq!(config.strategy, PixelateStrategy::Exact);
        assert_eq!(SortConfig::default().max_channel_value, 255);
    }
}
