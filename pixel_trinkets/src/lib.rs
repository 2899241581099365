// THEORY:
// This file is the entry point for the `pixel_trinkets` library crate. It exposes
// the two raster transforms the command-line tools are built around:
//
// 1.  **Block pixelation**: the image is cut into a grid of square blocks and every
//     block is flattened to the floor of its per-channel mean.
// 2.  **Radix pixel sorting**: the pixels of an image are treated as a bag of color
//     tuples, sorted lexicographically with an LSD radix sort and written back in
//     scan order.
//
// Everything here works on in-memory buffers only. Decoding, encoding and argument
// parsing belong to the surrounding crates (`trinkets_cli`), which hand a
// `PixelBuffer` in and take one back out.

pub mod core_modules;
pub mod error;
pub mod transforms;

pub use core_modules::approximate::pixelate_approximate;
pub use core_modules::block::block::Block;
pub use core_modules::pixel::pixel::{Channel, Pixel, Rgb, Rgba};
pub use core_modules::pixel_buffer::PixelBuffer;
pub use core_modules::pixelator::{BlockGrid, Pixelator};
pub use core_modules::radix_sorter::RadixSorter;
pub use error::TrinketError;
pub use transforms::{
    PixelateConfig, PixelateStrategy, SortConfig, pixelate, sort_image, sort_pixels,
};
