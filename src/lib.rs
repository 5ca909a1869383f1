//! ST7102 MIPI-DSI Panel Driver
//!
//! A vendor driver for LCD modules built on the Sitronix ST7102 controller,
//! attached over a MIPI-DSI link.
//!
//! The platform owns the video pipeline (DSI host and DPI engine) and exposes
//! it as a [`PipelinePanel`]. [`St7102`] wraps that pipeline panel: it drives
//! the reset line, replays the vendor initialization table over the DSI
//! command channel, programs pixel format and memory access control, and
//! handles color inversion, mirroring, display on/off and sleep itself.
//! `init` and `delete` are then forwarded to the pipeline.
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - Any command transport via [`CommandTransport`] (DSI DBI channel, SPI)
//! - 16/18/24 bits per pixel, RGB or BGR element order
//! - Presets for known panels and standard DPI timings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use st7102::{presets, Builder, ColorFormat, Panel, PipelinePanel, St7102};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # struct DsiDbi;
//! # impl st7102::CommandTransport for DsiDbi {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _opcode: u8, _params: &[u8]) -> Result<(), Infallible> {
//! #         Ok(())
//! #     }
//! # }
//! # struct DpiPanel;
//! # impl Panel for DpiPanel {
//! #     type Error = Infallible;
//! #     fn reset(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn init(&mut self) -> Result<(), Infallible> { Ok(()) }
//! #     fn invert_color(&mut self, _: bool) -> Result<(), Infallible> { Ok(()) }
//! #     fn mirror(&mut self, _: bool, _: bool) -> Result<(), Infallible> { Ok(()) }
//! #     fn disp_on_off(&mut self, _: bool) -> Result<(), Infallible> { Ok(()) }
//! #     fn sleep(&mut self, _: bool) -> Result<(), Infallible> { Ok(()) }
//! #     fn delete(self) -> Result<(), Infallible> { Ok(()) }
//! # }
//! # impl PipelinePanel for DpiPanel {
//! #     type Config = st7102::MipiConfig;
//! #     fn new_pipeline(_: st7102::MipiConfig) -> Result<Self, Infallible> { Ok(DpiPanel) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let dbi = DsiDbi;
//! # let rst = MockPin;
//! # let delay = MockDelay;
//! let config = Builder::new()
//!     .reset_pin(rst, false)
//!     .bits_per_pixel(24)
//!     .init_commands(presets::TL043WVV02_B1900A_INIT_COMMANDS)
//!     .pipeline(presets::tl043wvv02_b1900a_mipi_config(ColorFormat::Rgb888))
//!     .build();
//!
//! let mut panel: St7102<_, DpiPanel, _, _> = match St7102::new(dbi, config, delay) {
//!     Ok(panel) => panel,
//!     Err(_) => return,
//! };
//! let _ = panel.init();
//! let _ = panel.mirror(true, false);
//! let _ = panel.disp_on_off(false);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Pixel formats and color element order
pub mod color;
/// ST7102 command definitions
pub mod command;
/// Panel configuration types and builder
pub mod config;
/// Error types for the driver
pub mod error;
/// Command transport abstraction
pub mod interface;
/// Memory access control register
pub mod madctl;
/// Panel lifecycle and the ST7102 driver
pub mod panel;
pub mod presets;
/// Vendor initialization tables
pub mod sequence;

#[cfg(test)]
mod mock;

pub use color::{ColorFormat, ColorOrder};
pub use config::{
    Builder, DbiIoConfig, DeviceConfig, DpiConfig, DsiBusConfig, MipiConfig, NoResetPin,
    VendorConfig, VideoTiming,
};
pub use error::{ArgumentError, Error, ErrorKind, Unsupported};
pub use interface::{CommandTransport, InterfaceError, SpiInterface};
pub use madctl::Madctl;
pub use panel::{Panel, PanelError, PipelinePanel, RESET_HOLD_MS, St7102, VERSION};
pub use sequence::{InitCommand, MAX_PARAMS, ReplayError, find_oversized, replay};
