use crate::error::CliError;
use crate::{image_io, resize};
use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Shrink an input image by FACTOR in both width and height.
pub struct ResizeCmd {
    /// path to the image to shrink (e.g. image.png)
    #[argh(positional)]
    pub input: PathBuf,

    /// path to save the resized image
    #[argh(positional)]
    pub output: PathBuf,

    /// factor to divide width and height by (positive integer)
    #[argh(positional)]
    pub factor: i64,
}

pub fn handle_resize_command(cmd: ResizeCmd) -> Result<(), CliError> {
    resize::validate_factor(cmd.factor)?;

    let loaded = image_io::load(&cmd.input)?;
    let format = image_io::output_format(&cmd.output, loaded.format)?;
    let resized = resize::resize_image(&loaded.image, cmd.factor)?;
    image_io::save(&resized, &cmd.output, format)?;

    println!("Image resized and saved to: {}", cmd.output.display());
    Ok(())
}
