use pixel_trinkets::TrinketError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Input image not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("factor cannot be zero")]
    ZeroFactor,
    #[error("{0}")]
    InvalidParameter(String),
    #[error("cannot decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("cannot encode image: {0}")]
    Encode(#[source] image::ImageError),
    #[error("no image format matches output path {}", .0.display())]
    UnknownFormat(PathBuf),
    #[error(transparent)]
    Transform(#[from] TrinketError),
    #[error(transparent)]
    Io(#[from] io::Error),
}
