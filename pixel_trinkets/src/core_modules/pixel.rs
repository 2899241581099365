// THEORY:
// The `Pixel` module is the most fundamental unit of the crate. It is a "dumb"
// data container: a fixed-length tuple of 8-bit channels and nothing else.
//
// Key principles:
// 1.  **Value type**: A pixel is a `[u8; C]` newtype. It is `Copy`, lives inline in
//     its buffer and never touches the heap, which matters when the radix sorter
//     moves every pixel once per channel.
// 2.  **Compile-time channel count**: `C` is a const generic. RGB and RGBA buffers
//     are different types, so a transform never has to ask how wide a pixel is.
// 3.  **Order is meaning**: Channel 0 is the most significant sort key. The derived
//     `Ord` on the inner array is exactly channel-major lexicographic order, which
//     is the order the radix sorter has to reproduce.

pub mod pixel {
    use core::ops::Index;

    pub type Channel = u8;
    pub type Rgb = Pixel<3>;
    pub type Rgba = Pixel<4>;

    /// A color tuple of `C` channels, channel 0 first.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Pixel<const C: usize>(pub [Channel; C]);

    impl<const C: usize> Default for Pixel<C> {
        fn default() -> Self {
            Pixel([0; C])
        }
    }

    impl<const C: usize> Pixel<C> {
        /// Number of channels in this pixel type.
        pub const CHANNELS: usize = C;

        pub const fn new(channels: [Channel; C]) -> Self {
            Pixel(channels)
        }

        pub fn channels(&self) -> &[Channel; C] {
            &self.0
        }

        /// The largest channel value, or 0 for a channel-less pixel.
        pub fn max_channel(&self) -> Channel {
            self.0.iter().copied().max().unwrap_or(0)
        }
    }

    impl<const C: usize> Index<usize> for Pixel<C> {
        type Output = Channel;

        fn index(&self, channel: usize) -> &Channel {
            &self.0[channel]
        }
    }

    impl<const C: usize> From<[Channel; C]> for Pixel<C> {
        fn from(channels: [Channel; C]) -> Self {
            Pixel(channels)
        }
    }

    impl<const C: usize> From<Pixel<C>> for [Channel; C] {
        fn from(pixel: Pixel<C>) -> Self {
            pixel.0
        }
    }

    impl<const C: usize> TryFrom<&[Channel]> for Pixel<C> {
        type Error = core::array::TryFromSliceError;

        fn try_from(bytes: &[Channel]) -> Result<Self, Self::Error> {
            <[Channel; C]>::try_from(bytes).map(Pixel)
        }
    }
}
