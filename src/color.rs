//! Color order and pixel format types
//!
//! This module defines [`ColorOrder`], the order of the color elements on the
//! panel's subpixels, and [`ColorFormat`], the interface pixel format selected
//! through the bits-per-pixel setting.
//!
//! ## Register Values
//!
//! | Bits per pixel | Format | COLMOD |
//! |----------------|--------|--------|
//! | 16             | RGB565 | 0x55   |
//! | 18             | RGB666 | 0x66   |
//! | 24             | RGB888 | 0x77   |
//!
//! ## Example
//!
//! ```
//! use st7102::{ColorFormat, ColorOrder};
//!
//! let format = ColorFormat::from_bits_per_pixel(18).ok();
//! assert_eq!(format, Some(ColorFormat::Rgb666));
//! assert_eq!(ColorFormat::Rgb666.colmod(), 0x66);
//!
//! assert_eq!(ColorOrder::try_from(1), Ok(ColorOrder::Bgr));
//! ```

use crate::error::Unsupported;

/// Subpixel color element order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorOrder {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Blue, green, red (sets the MADCTL BGR bit)
    Bgr,
}

impl TryFrom<u8> for ColorOrder {
    type Error = Unsupported;

    /// Convert a raw element order as found in board descriptions
    /// (0 = RGB, 1 = BGR).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Rgb),
            1 => Ok(Self::Bgr),
            other => Err(Unsupported::ColorOrder(other)),
        }
    }
}

/// Interface pixel format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorFormat {
    /// 16 bits per pixel
    #[default]
    Rgb565,
    /// 18 bits per pixel
    Rgb666,
    /// 24 bits per pixel
    Rgb888,
}

impl ColorFormat {
    /// Select the format for a bits-per-pixel value
    ///
    /// # Errors
    ///
    /// Returns [`Unsupported::BitsPerPixel`] for anything other than 16, 18 or 24.
    pub const fn from_bits_per_pixel(bits: u8) -> Result<Self, Unsupported> {
        match bits {
            16 => Ok(Self::Rgb565),
            18 => Ok(Self::Rgb666),
            24 => Ok(Self::Rgb888),
            other => Err(Unsupported::BitsPerPixel(other)),
        }
    }

    /// Bits per pixel of this format
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Rgb565 => 16,
            Self::Rgb666 => 18,
            Self::Rgb888 => 24,
        }
    }

    /// Value written to the COLMOD register
    pub const fn colmod(self) -> u8 {
        match self {
            Self::Rgb565 => 0x55,
            Self::Rgb666 => 0x66,
            Self::Rgb888 => 0x77,
        }
    }
}
