//! Color to device pixel conversion.

use crate::Color;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 8-bit RGB pixel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode back to a color in [0, 1].
    pub fn to_color(self) -> Color {
        Color::new(
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

/// Clamp a channel to at most 1. There is no lower clamp, and NaN passes
/// through unchanged.
#[inline]
pub fn legalize(channel: f64) -> f64 {
    if channel > 1.0 {
        1.0
    } else {
        channel
    }
}

/// Convert a color to an 8-bit pixel by clamping above and truncating.
///
/// Negative and NaN channels are not clamped here; the float to integer
/// cast saturates them to 0.
pub fn color_to_pixel(color: Color) -> Rgb8 {
    Rgb8::new(
        (legalize(color.x) * 255.0) as u8,
        (legalize(color.y) * 255.0) as u8,
        (legalize(color.z) * 255.0) as u8,
    )
}

/// Byte layout of a destination pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// B, G, R
    Bgr24,
    /// B, G, R, 0. A little-endian `0x00RRGGBB` word.
    #[default]
    Bgr32,
    /// B, G, R, 255
    Bgra32,
    /// R, G, B
    Rgb24,
    /// R, G, B, 255
    Rgba32,
}

impl PixelFormat {
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgr24 | PixelFormat::Rgb24 => 3,
            PixelFormat::Bgr32 | PixelFormat::Bgra32 | PixelFormat::Rgba32 => 4,
        }
    }

    /// Write `pixel` into `dst`, which must be exactly one pixel long.
    #[inline]
    pub fn write(self, pixel: Rgb8, dst: &mut [u8]) {
        match self {
            PixelFormat::Bgr24 => dst.copy_from_slice(&[pixel.b, pixel.g, pixel.r]),
            PixelFormat::Bgr32 => dst.copy_from_slice(&[pixel.b, pixel.g, pixel.r, 0]),
            PixelFormat::Bgra32 => dst.copy_from_slice(&[pixel.b, pixel.g, pixel.r, 255]),
            PixelFormat::Rgb24 => dst.copy_from_slice(bytemuck::bytes_of(&pixel)),
            PixelFormat::Rgba32 => dst.copy_from_slice(&[pixel.r, pixel.g, pixel.b, 255]),
        }
    }

    /// Read back a pixel previously written with [`PixelFormat::write`].
    #[inline]
    pub fn read(self, src: &[u8]) -> Rgb8 {
        match self {
            PixelFormat::Bgr24 | PixelFormat::Bgr32 | PixelFormat::Bgra32 => {
                Rgb8::new(src[2], src[1], src[0])
            }
            PixelFormat::Rgb24 => *bytemuck::from_bytes(&src[..3]),
            PixelFormat::Rgba32 => Rgb8::new(src[0], src[1], src[2]),
        }
    }
}
