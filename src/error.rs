//! Error types for the driver
//!
//! This module defines the error returned by panel construction and by every
//! lifecycle operation ([`Error`]), together with the reasons behind
//! configuration rejections ([`ArgumentError`], [`Unsupported`]).
//!
//! ## Error Types
//!
//! - [`Error`] - Construction and lifecycle errors, generic over the
//!   transport, reset pin and pipeline error types
//! - [`ErrorKind`] - Coarse classification of an [`Error`]
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level SPI/GPIO errors of [`SpiInterface`](crate::SpiInterface)
//!
//! ## Example
//!
//! ```
//! use st7102::{ColorFormat, Unsupported};
//!
//! let result = ColorFormat::from_bits_per_pixel(32);
//! assert!(matches!(result, Err(Unsupported::BitsPerPixel(32))));
//! ```

use core::fmt::Debug;

use crate::sequence::MAX_PARAMS;

/// Errors that can occur when creating or driving the panel
///
/// Generic over the error types of the three collaborators so that callers
/// can still match on the underlying hardware error:
///
/// * `TE` - command transport error
/// * `PE` - reset pin error
/// * `BE` - pipeline panel error
#[derive(Debug)]
pub enum Error<TE, PE, BE> {
    /// A required piece of configuration is missing or malformed
    InvalidArgument(ArgumentError),
    /// The configuration asks for something the panel cannot do
    NotSupported(Unsupported),
    /// Sending a command over the transport failed
    Transport(TE),
    /// Driving the reset line failed
    ResetPin(PE),
    /// The pipeline panel failed to build, initialize or release
    Pipeline(BE),
}

/// Coarse error classification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed configuration
    InvalidArgument,
    /// Unsupported color order, pixel depth or interface
    NotSupported,
    /// Out of memory
    ///
    /// Never produced by this driver itself, whose state lives inline in the
    /// panel; kept so pipeline errors can be mapped onto the same taxonomy.
    NoMemory,
    /// A GPIO, transport or pipeline operation failed
    HardwareFailure,
}

impl<TE, PE, BE> Error<TE, PE, BE> {
    /// Classify the error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotSupported(_) => ErrorKind::NotSupported,
            Self::Transport(_) | Self::ResetPin(_) | Self::Pipeline(_) => {
                ErrorKind::HardwareFailure
            }
        }
    }
}

impl<TE, PE, BE> From<Unsupported> for Error<TE, PE, BE> {
    fn from(reason: Unsupported) -> Self {
        Self::NotSupported(reason)
    }
}

impl<TE, PE, BE> From<ArgumentError> for Error<TE, PE, BE> {
    fn from(reason: ArgumentError) -> Self {
        Self::InvalidArgument(reason)
    }
}

impl<TE: Debug, PE: Debug, BE: Debug> core::fmt::Display for Error<TE, PE, BE> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
            Self::NotSupported(reason) => write!(f, "Not supported: {reason}"),
            Self::Transport(e) => write!(f, "Transport error: {e:?}"),
            Self::ResetPin(e) => write!(f, "Reset pin error: {e:?}"),
            Self::Pipeline(e) => write!(f, "Pipeline panel error: {e:?}"),
        }
    }
}

impl<TE: Debug, PE: Debug, BE: Debug> core::error::Error for Error<TE, PE, BE> {}

/// Reasons a configuration is rejected as invalid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// No vendor configuration was given
    MissingVendorConfig,
    /// The vendor configuration carries no pipeline sub-configuration
    MissingPipelineConfig,
    /// An init command carries more than [`MAX_PARAMS`] parameter bytes
    CommandTooLong {
        /// Position of the command in the table
        index: usize,
        /// Number of parameter bytes it carries
        len: usize,
    },
}

impl core::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingVendorConfig => write!(f, "vendor config is required"),
            Self::MissingPipelineConfig => write!(f, "pipeline config is required"),
            Self::CommandTooLong { index, len } => write!(
                f,
                "init command {index} has {len} parameter bytes (max {MAX_PARAMS})"
            ),
        }
    }
}

impl core::error::Error for ArgumentError {}

/// Reasons a configuration is rejected as unsupported
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsupported {
    /// Raw color element order other than RGB (0) or BGR (1)
    ColorOrder(u8),
    /// Bits per pixel other than 16, 18 or 24
    BitsPerPixel(u8),
    /// The requested bus interface is not MIPI-DSI
    Interface,
}

impl core::fmt::Display for Unsupported {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ColorOrder(value) => write!(f, "unsupported rgb element order {value}"),
            Self::BitsPerPixel(bits) => write!(f, "unsupported pixel width {bits}"),
            Self::Interface => write!(f, "only the MIPI-DSI interface is supported"),
        }
    }
}

impl core::error::Error for Unsupported {}
