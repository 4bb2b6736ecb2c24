use serde::{Deserialize, Serialize};

/// One RGBA sample, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const WHITE: Pixel = Pixel::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Pixel = Pixel::rgb(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        }
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Colour channel that drives the gradient estimate and the visualizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    #[default]
    Green,
    Blue,
    /// Integer mean of red, green and blue.
    Monochrome,
}

impl Channel {
    /// Scalar value of `pixel` as seen through this channel.
    #[inline]
    pub fn sample(self, pixel: Pixel) -> i32 {
        match self {
            Channel::Red => pixel.r as i32,
            Channel::Green => pixel.g as i32,
            Channel::Blue => pixel.b as i32,
            Channel::Monochrome => (pixel.r as i32 + pixel.g as i32 + pixel.b as i32) / 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Monochrome => "monochrome",
        }
    }
}
