use crate::error::CliError;
use crate::image_io;
use argh::FromArgs;
use image::DynamicImage;
use pixel_trinkets::{PixelBuffer, SortConfig, sort_image};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Sort image pixels using radix sort.
pub struct SortImageCmd {
    /// path to input image (JPEG, PNG, WebP, etc.)
    #[argh(positional)]
    pub input: PathBuf,

    /// path to save the sorted output image
    #[argh(positional)]
    pub output: PathBuf,

    /// sort RGBA tuples instead of dropping alpha (alpha sorts last)
    #[argh(switch)]
    pub keep_alpha: bool,
}

pub fn handle_sort_image_command(cmd: SortImageCmd) -> Result<(), CliError> {
    let loaded = image_io::load(&cmd.input)?;
    let format = image_io::output_format(&cmd.output, loaded.format)?;
    let sorted = sort_dynamic(&loaded.image, cmd.keep_alpha, &SortConfig::default())?;
    image_io::save(&sorted, &cmd.output, format)?;

    println!("Sorted image saved to: {}", cmd.output.display());
    Ok(())
}

/// Sorts the pixels of `image` as RGB, or as RGBA when asked and alpha exists.
pub fn sort_dynamic(
    image: &DynamicImage,
    keep_alpha: bool,
    config: &SortConfig,
) -> Result<DynamicImage, CliError> {
    if keep_alpha && image.color().has_alpha() {
        let sorted = sort_image(PixelBuffer::<4>::from(image.to_rgba8()), config)?;
        return Ok(DynamicImage::ImageRgba8(sorted.into()));
    }

    let sorted = sort_image(PixelBuffer::<3>::from(image.to_rgb8()), config)?;
    Ok(DynamicImage::ImageRgb8(sorted.into()))
}
