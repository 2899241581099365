pub mod approximate;
pub mod block;
pub mod pixel;
pub mod pixel_buffer;
pub mod pixelator;
pub mod radix_sorter;
