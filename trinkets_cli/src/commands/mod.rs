pub mod pixelate;
pub mod resize;
pub mod sort_image;
