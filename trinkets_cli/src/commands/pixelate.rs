use crate::error::CliError;
use crate::image_io;
use argh::FromArgs;
use image::DynamicImage;
use pixel_trinkets::{
    PixelBuffer, PixelateConfig, PixelateStrategy, Pixelator, pixelate_approximate,
};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Pixelate an image using fixed-size pixel blocks.
pub struct PixelateCmd {
    /// path to input image (jpg, png, webp, tiff, etc.)
    #[argh(positional)]
    pub input: PathBuf,

    /// path to output image
    #[argh(positional)]
    pub output: PathBuf,

    /// pixel block size (e.g. 10, 50)
    #[argh(option, short = 'b')]
    pub block_size: i64,

    /// approximate with a bilinear downsample and nearest upsample instead of exact block means
    #[argh(switch)]
    pub fast: bool,
}

impl PixelateCmd {
    /// Builds the run configuration, rejecting block sizes that do not fit a positive `u32`.
    pub fn config(&self) -> Result<PixelateConfig, CliError> {
        let block_size = u32::try_from(self.block_size).map_err(|_| {
            CliError::InvalidParameter("block_size must be a positive integer".to_string())
        })?;
        let strategy = if self.fast {
            PixelateStrategy::Approximate
        } else {
            PixelateStrategy::Exact
        };
        Ok(PixelateConfig {
            block_size,
            strategy,
        })
    }
}

pub fn handle_pixelate_command(cmd: PixelateCmd) -> Result<(), CliError> {
    let config = cmd.config()?;
    let pixelator = Pixelator::from_config(&config)?;

    let loaded = image_io::load(&cmd.input)?;
    let format = image_io::output_format(&cmd.output, loaded.format)?;
    let pixelated = pixelate_image(&loaded.image, &pixelator, config.strategy)?;
    image_io::save(&pixelated, &cmd.output, format)?;

    println!("Pixelated image saved to: {}", cmd.output.display());
    Ok(())
}

/// Runs the chosen strategy, keeping alpha only when the source has it.
pub fn pixelate_image(
    image: &DynamicImage,
    pixelator: &Pixelator,
    strategy: PixelateStrategy,
) -> Result<DynamicImage, CliError> {
    let has_alpha = image.color().has_alpha();
    let pixelated = match (strategy, has_alpha) {
        (PixelateStrategy::Exact, true) => {
            let buffer = PixelBuffer::<4>::from(image.to_rgba8());
            DynamicImage::ImageRgba8(pixelator.apply(&buffer).into())
        }
        (PixelateStrategy::Exact, false) => {
            let buffer = PixelBuffer::<3>::from(image.to_rgb8());
            DynamicImage::ImageRgb8(pixelator.apply(&buffer).into())
        }
        (PixelateStrategy::Approximate, true) => DynamicImage::ImageRgba8(pixelate_approximate(
            &image.to_rgba8(),
            pixelator.block_size(),
        )?),
        (PixelateStrategy::Approximate, false) => DynamicImage::ImageRgb8(pixelate_approximate(
            &image.to_rgb8(),
            pixelator.block_size(),
        )?),
    };
    Ok(pixelated)
}
