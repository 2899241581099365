// THEORY:
// The `Pixelator` owns the block grid and drives the exact pixelation transform.
// It is not an analyzer itself: it slices the raster into `Block`s, asks each block
// for its mean color and paints that color back over the block's rectangle.
//
// Key architectural principles:
// 1.  **Validate first**: The block size is checked when the `Pixelator` is built.
//     Once one exists, `apply` cannot fail and never returns a partial image.
// 2.  **Grid math**: The grid has `ceil(W / k)` columns and `ceil(H / k)` rows,
//     anchored at (0, 0). Edge blocks are clipped, never dropped.
// 3.  **Bands**: One row of blocks writes to a contiguous run of output rows, so
//     the output splits into disjoint `&mut` bands. With the `parallel` feature
//     the bands go to the rayon pool; otherwise they are filled in order. Both
//     paths run the same band routine and produce identical bytes.

use crate::core_modules::block::block::Block;
use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::pixel_buffer::PixelBuffer;
use crate::error::TrinketError;
use crate::transforms::PixelateConfig;

/// Layout of the block grid over an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    /// Number of block columns, including a clipped right edge.
    pub columns: u32,
    /// Number of block rows, including a clipped bottom edge.
    pub rows: u32,
    block_size: u32,
    image_width: u32,
    image_height: u32,
}

impl BlockGrid {
    fn new(image_width: u32, image_height: u32, block_size: u32) -> Self {
        Self {
            columns: image_width.div_ceil(block_size),
            rows: image_height.div_ceil(block_size),
            block_size,
            image_width,
            image_height,
        }
    }

    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The blocks of one grid row, left to right.
    pub fn band(&self, row: u32) -> impl Iterator<Item = Block> + '_ {
        let y = row * self.block_size;
        (0..self.columns).map(move |column| {
            Block::clipped(
                column * self.block_size,
                y,
                self.block_size,
                self.image_width,
                self.image_height,
            )
        })
    }

    /// Every block in row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        (0..self.rows).flat_map(move |row| self.band(row))
    }
}

/// Exact block-mean pixelation for a fixed block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixelator {
    block_size: u32,
}

impl Pixelator {
    /// Fails with `InvalidParameter` when `block_size` is zero.
    pub fn new(block_size: u32) -> Result<Self, TrinketError> {
        if block_size == 0 {
            return Err(TrinketError::InvalidParameter(
                "block_size must be a positive integer".to_string(),
            ));
        }
        Ok(Self { block_size })
    }

    pub fn from_config(config: &PixelateConfig) -> Result<Self, TrinketError> {
        Self::new(config.block_size)
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn grid(&self, image_width: u32, image_height: u32) -> BlockGrid {
        BlockGrid::new(image_width, image_height, self.block_size)
    }

    /// Returns a new buffer of the same dimensions with every block flattened to its mean.
    pub fn apply<const C: usize>(&self, input: &PixelBuffer<C>) -> PixelBuffer<C> {
        let (width, height) = input.dimensions();
        let mut output = vec![Pixel::default(); input.len()];
        if output.is_empty() {
            return PixelBuffer::from_parts(width, height, output);
        }

        let grid = self.grid(width, height);
        let band_len = width as usize * self.block_size as usize;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            output
                .par_chunks_mut(band_len)
                .enumerate()
                .for_each(|(row, band)| Self::fill_band(input, &grid, row as u32, band));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (row, band) in output.chunks_mut(band_len).enumerate() {
                Self::fill_band(input, &grid, row as u32, band);
            }
        }

        PixelBuffer::from_parts(width, height, output)
    }

    /// Paints one grid row. `band` starts at the first pixel row of that grid row.
    fn fill_band<const C: usize>(
        input: &PixelBuffer<C>,
        grid: &BlockGrid,
        row: u32,
        band: &mut [Pixel<C>],
    ) {
        let image_width = input.width() as usize;
        for block in grid.band(row) {
            let mean = block.average_pixel(input);
            for offset in 0..block.height as usize {
                let start = offset * image_width + block.x as usize;
                band[start..start + block.width as usize].fill(mean);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::pixel::pixel::{Rgb, Rgba};

    fn gradient(width: u32, height: u32) -> PixelBuffer<3> {
        let pixels = (0..width * height)
            .map(|i| Rgb::new([(i * 7 % 256) as u8, (i * 13 % 256) as u8, (i % 256) as u8]))
            .collect();
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn zero_block_size_is_rejected() {
        let err = Pixelator::new(0).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn grid_counts_clipped_edges() {
        let grid = Pixelator::new(4).unwrap().grid(10, 3);
        assert_eq!((grid.columns, grid.rows), (3, 1));
        assert_eq!(grid.len(), 3);

        let widths: Vec<u32> = grid.blocks().map(|block| block.width).collect();
        assert_eq!(widths, vec![4, 4, 2]);
        assert!(grid.blocks().all(|block| block.height == 3));
    }

    #[test]
    fn grid_of_empty_image_is_empty() {
        let grid = Pixelator::new(3).unwrap().grid(0, 9);
        assert!(grid.is_empty());
        assert_eq!(grid.blocks().count(), 0);
    }

    #[test]
    fn full_blocks_get_the_floor_mean() {
        // 4x2 image, block size 2: two full blocks.
        let pixels = vec![
            Rgb::new([0, 0, 0]),
            Rgb::new([1, 1, 1]),
            Rgb::new([100, 0, 0]),
            Rgb::new([100, 0, 0]),
            Rgb::new([2, 2, 2]),
            Rgb::new([4, 4, 4]),
            Rgb::new([100, 0, 0]),
            Rgb::new([101, 3, 0]),
        ];
        let input = PixelBuffer::new(4, 2, pixels).unwrap();
        let output = Pixelator::new(2).unwrap().apply(&input);

        let left = Rgb::new([1, 1, 1]);
        let right = Rgb::new([100, 0, 0]);
        assert_eq!(output.row(0).unwrap(), &[left, left, right, right]);
        assert_eq!(output.row(1).unwrap(), &[left, left, right, right]);
    }

    #[test]
    fn clipped_blocks_average_over_their_own_pixels() {
        // 3x1 image with block size 2: the last block holds one pixel.
        let input = PixelBuffer::new(
            3,
            1,
            vec![Rgba::new([10, 10, 10, 10]), Rgba::new([20, 20, 20, 20]), Rgba::new([7, 8, 9, 255])],
        )
        .unwrap();
        let output = Pixelator::new(2).unwrap().apply(&input);

        assert_eq!(
            output.pixels(),
            &[Rgba::new([15, 15, 15, 15]), Rgba::new([15, 15, 15, 15]), Rgba::new([7, 8, 9, 255])]
        );
    }

    #[test]
    fn bands_cover_uneven_heights() {
        let input = gradient(7, 5);
        let pixelator = Pixelator::new(3).unwrap();
        let output = pixelator.apply(&input);
        let grid = pixelator.grid(7, 5);

        for block in grid.blocks() {
            let expected = block.average_pixel(&input);
            for y in block.y..block.y + block.height {
                for x in block.x..block.x + block.width {
                    assert_eq!(output.get(x, y), Some(&expected), "pixel ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn block_larger_than_image_flattens_everything() {
        let input = gradient(5, 4);
        let output = Pixelator::new(64).unwrap().apply(&input);
        let first = output.pixels()[0];
        assert!(output.pixels().iter().all(|&pixel| pixel == first));
    }

    #[test]
    fn empty_buffer_passes_through() {
        let input = PixelBuffer::<3>::new(0, 0, Vec::new()).unwrap();
        let output = Pixelator::new(2).unwrap().apply(&input);
        assert_eq!(output, input);
    }
}
