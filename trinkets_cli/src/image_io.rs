use crate::error::CliError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// A decoded input image and the container format it was read from.
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: Option<ImageFormat>,
}

/// Decodes the image at `path`, detecting the format from its content.
///
/// # Arguments
///
/// * `path` - The input file. A missing or non-regular file is reported as `NotFound`.
pub fn load(path: &Path) -> Result<LoadedImage, CliError> {
    if !path.is_file() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }

    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let image = reader.decode().map_err(CliError::Decode)?;
    Ok(LoadedImage { image, format })
}

/// Picks the output format from the output extension, falling back to `input_format`.
pub fn output_format(
    output: &Path,
    input_format: Option<ImageFormat>,
) -> Result<ImageFormat, CliError> {
    ImageFormat::from_path(output)
        .ok()
        .or(input_format)
        .ok_or_else(|| CliError::UnknownFormat(output.to_path_buf()))
}

/// Encodes `image` fully in memory, then writes it to `output` in one go.
///
/// An encoder failure therefore never leaves a truncated file behind.
pub fn save(image: &DynamicImage, output: &Path, format: ImageFormat) -> Result<(), CliError> {
    let mut encoded = Cursor::new(Vec::new());
    image
        .write_to(&mut encoded, format)
        .map_err(CliError::Encode)?;
    fs::write(output, encoded.into_inner())?;
    Ok(())
}
