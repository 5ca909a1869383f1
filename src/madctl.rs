//! Memory access control (MADCTL) register model
//!
//! The MADCTL byte controls the scan direction of the panel and the order of
//! the color elements. The driver keeps a copy of the byte so that mirroring
//! can flip single bits without disturbing the rest.
//!
//! ## Bits Touched
//!
//! - **MY** (0x80): mirror along the Y axis
//! - **MX** (0x40): mirror along the X axis
//! - **BGR** (0x08): color order, fixed when the panel is created
//!
//! ## Example
//!
//! ```
//! use st7102::{ColorOrder, Madctl};
//!
//! let mut madctl = Madctl::new(ColorOrder::Bgr);
//! assert_eq!(madctl.bits(), 0x08);
//!
//! madctl.set_mirror(true, false);
//! assert_eq!(madctl.bits(), 0x48);
//!
//! madctl.set_mirror(false, false);
//! assert_eq!(madctl.bits(), 0x08);
//! ```

use crate::color::ColorOrder;
use crate::command::{MADCTL_BGR, MADCTL_MX, MADCTL_MY};

/// Stored value of the MADCTL register
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Madctl(u8);

impl Madctl {
    /// Initial register value for a color order, no mirroring
    pub const fn new(order: ColorOrder) -> Self {
        match order {
            ColorOrder::Rgb => Self(0),
            ColorOrder::Bgr => Self(MADCTL_BGR),
        }
    }

    /// Raw register byte
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Color order encoded in the BGR bit
    pub const fn color_order(self) -> ColorOrder {
        if self.0 & MADCTL_BGR != 0 {
            ColorOrder::Bgr
        } else {
            ColorOrder::Rgb
        }
    }

    /// Whether the X axis is mirrored
    pub const fn mirror_x(self) -> bool {
        self.0 & MADCTL_MX != 0
    }

    /// Whether the Y axis is mirrored
    pub const fn mirror_y(self) -> bool {
        self.0 & MADCTL_MY != 0
    }

    /// Set or clear MX and MY, leaving every other bit as it was
    pub fn set_mirror(&mut self, mirror_x: bool, mirror_y: bool) {
        self.0 = with_bit(self.0, MADCTL_MX, mirror_x);
        self.0 = with_bit(self.0, MADCTL_MY, mirror_y);
    }
}

const fn with_bit(value: u8, mask: u8, set: bool) -> u8 {
    if set { value | mask } else { value & !mask }
}
