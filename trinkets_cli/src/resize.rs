use crate::error::CliError;
use image::DynamicImage;
use image::imageops::FilterType;

/// Checks a user-supplied reduction factor. Zero gets its own error.
pub fn validate_factor(factor: i64) -> Result<u32, CliError> {
    match factor {
        0 => Err(CliError::ZeroFactor),
        f if f < 0 => Err(CliError::InvalidParameter(format!(
            "factor must be a positive integer, got {f}"
        ))),
        f => u32::try_from(f)
            .map_err(|_| CliError::InvalidParameter(format!("factor {f} is too large"))),
    }
}

/// Shrinks both dimensions of `image` by `factor` (floor division), bicubic filtering.
pub fn resize_image(image: &DynamicImage, factor: i64) -> Result<DynamicImage, CliError> {
    let factor = validate_factor(factor)?;
    let new_width = image.width() / factor;
    let new_height = image.height() / factor;

    if new_width == 0 || new_height == 0 {
        return Err(CliError::InvalidParameter(format!(
            "factor {factor} reduces a {}x{} image to nothing",
            image.width(),
            image.height()
        )));
    }

    Ok(image.resize_exact(new_width, new_height, FilterType::CatmullRom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use rstest::rstest;

    fn image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([90, 90, 90])))
    }

    #[test]
    fn zero_factor_is_its_own_error() {
        assert!(matches!(validate_factor(0), Err(CliError::ZeroFactor)));
        assert_eq!(validate_factor(0).unwrap_err().to_string(), "factor cannot be zero");
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::MAX)]
    fn unusable_factors_are_invalid(#[case] factor: i64) {
        assert!(matches!(validate_factor(factor), Err(CliError::InvalidParameter(_))));
    }

    #[rstest]
    #[case(10, 6, 2, (5, 3))]
    #[case(10, 7, 3, (3, 2))]
    #[case(8, 8, 1, (8, 8))]
    fn dimensions_are_floor_divided(
        #[case] width: u32,
        #[case] height: u32,
        #[case] factor: i64,
        #[case] expected: (u32, u32),
    ) {
        let resized = resize_image(&image(width, height), factor).unwrap();
        assert_eq!((resized.width(), resized.height()), expected);
    }

    #[test]
    fn factor_larger_than_image_is_rejected() {
        assert!(matches!(
            resize_image(&image(4, 40), 5),
            Err(CliError::InvalidParameter(_))
        ));
    }
}
