use crate::core_modules::pixel::pixel::Channel;

/// Errors raised by the in-memory transforms.
///
/// Every variant is produced while validating inputs, before any pixel data is
/// touched, so a failed call never leaves a half-transformed buffer behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TrinketError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("channel {channel} of pixel {index} is {value}, outside 0..={max}")]
    OutOfRange {
        index: usize,
        channel: usize,
        value: Channel,
        max: Channel,
    },

    #[error(
        "a {width}x{height} buffer with {channels} channels needs {expected} values, got {actual}"
    )]
    DimensionMismatch {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },
}

impl TrinketError {
    /// True for caller mistakes in the transform parameters (block size, channel range).
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_) | Self::OutOfRange { .. })
    }
}
