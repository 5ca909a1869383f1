//! MIPI DCS command definitions used by the ST7102
//!
//! The ST7102 accepts the standard MIPI Display Command Set over the DBI
//! link that runs alongside the DSI video stream. Every command is an opcode
//! followed by zero or more parameter bytes, sent through a
//! [`CommandTransport`](crate::CommandTransport).
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7102::{command, CommandTransport};
//! # use core::convert::Infallible;
//! # struct Link;
//! # impl CommandTransport for Link {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _opcode: u8, _params: &[u8]) -> Result<(), Infallible> {
//! #         Ok(())
//! #     }
//! # }
//! # let mut link = Link;
//! // Leave sleep mode, then turn the panel on
//! let _ = link.send_command(command::SLPOUT, &[]);
//! let _ = link.send_command(command::DISPON, &[]);
//! ```

// System control commands

/// Software reset command (0x01)
///
/// Resets the controller registers to their power-on defaults.
pub const SWRESET: u8 = 0x01;

/// Sleep in command (0x10)
///
/// Enters the minimum power consumption mode. No parameters.
pub const SLPIN: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Leaves sleep mode. The controller needs time to stabilise afterwards,
/// which is why vendor tables usually attach a post-delay to it.
pub const SLPOUT: u8 = 0x11;

// Display control commands

/// Display inversion off command (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on command (0x21)
///
/// The ST7102 takes one parameter byte: 0x01 inverts, 0x00 restores.
pub const INVON: u8 = 0x21;

/// Display off command (0x28)
///
/// Blanks the output without touching frame memory. No parameters.
pub const DISPOFF: u8 = 0x28;

/// Display on command (0x29)
pub const DISPON: u8 = 0x29;

/// Tearing effect line on command (0x35)
///
/// Requires 1 byte: 0x00 = V-blank only, 0x01 = V-blank and H-blank.
pub const TEON: u8 = 0x35;

// Memory and pixel format commands

/// Memory data access control command (0x36)
///
/// Requires 1 byte, see the `MADCTL_*` bit masks below.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format command (0x3A)
///
/// Requires 1 byte:
/// - 0x55: 16 bits per pixel (RGB565)
/// - 0x66: 18 bits per pixel (RGB666)
/// - 0x77: 24 bits per pixel (RGB888)
pub const COLMOD: u8 = 0x3A;

// MADCTL bits

/// Row address order (mirror Y)
pub const MADCTL_MY: u8 = 0x80;

/// Column address order (mirror X)
pub const MADCTL_MX: u8 = 0x40;

/// Row/column exchange
pub const MADCTL_MV: u8 = 0x20;

/// BGR color order (0 = RGB)
pub const MADCTL_BGR: u8 = 0x08;
