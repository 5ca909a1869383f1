//! Panel lifecycle and the ST7102 vendor driver
//!
//! [`Panel`] is the lifecycle operation set every panel exposes. The platform
//! provides the pipeline panel (the DPI video engine behind the MIPI-DSI
//! link) through [`PipelinePanel`]; [`St7102`] wraps it, runs the vendor
//! bring-up over the command transport and hands back to the pipeline for
//! its own `init` and `delete`.
//!
//! ## Operation Order
//!
//! A typical bring-up is `new` → `init` → `disp_on_off(false)`; `init`
//! already performs the hardware reset. `delete` consumes the panel.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, PinState};

use crate::color::ColorFormat;
use crate::command::{COLMOD, DISPOFF, DISPON, INVON, MADCTL, SLPIN, SLPOUT};
use crate::config::DeviceConfig;
use crate::error::{ArgumentError, Error, Unsupported};
use crate::interface::CommandTransport;
use crate::madctl::Madctl;
use crate::sequence::{InitCommand, find_oversized, replay};

/// Driver version (major, minor, patch)
pub const VERSION: (u8, u8, u8) = (1, 0, 0);

/// Time the reset line is held in each state, in milliseconds
pub const RESET_HOLD_MS: u32 = 10;

/// Lifecycle operations of a display panel
pub trait Panel {
    /// Error type for panel operations
    type Error: core::fmt::Debug;

    /// Hardware reset
    fn reset(&mut self) -> Result<(), Self::Error>;

    /// Bring the panel up
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Enable or disable color inversion
    fn invert_color(&mut self, invert: bool) -> Result<(), Self::Error>;

    /// Mirror the image along the X and/or Y axis
    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error>;

    /// Turn the display output off (`true`) or on (`false`)
    fn disp_on_off(&mut self, off: bool) -> Result<(), Self::Error>;

    /// Enter (`true`) or leave (`false`) sleep mode
    fn sleep(&mut self, enter: bool) -> Result<(), Self::Error>;

    /// Release the panel and everything it owns
    fn delete(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}

/// A pipeline panel that can be built from a sub-configuration
pub trait PipelinePanel: Panel + Sized {
    /// Resolution, timing and bus settings the pipeline needs
    type Config;

    /// Build the pipeline panel
    ///
    /// # Errors
    ///
    /// Returns the pipeline's own error if it cannot be created.
    fn new_pipeline(config: Self::Config) -> Result<Self, Self::Error>;
}

/// Error type of [`St7102`] for given transport, reset pin and pipeline
pub type PanelError<T, RST, B> = Error<
    <T as CommandTransport>::Error,
    <RST as ErrorType>::Error,
    <B as Panel>::Error,
>;

struct ResetLine<RST> {
    pin: RST,
    active_high: bool,
}

impl<RST: OutputPin> ResetLine<RST> {
    fn drive(&mut self, active: bool) -> Result<(), RST::Error> {
        self.pin
            .set_state(PinState::from(active == self.active_high))
    }
}

fn logged<R: core::fmt::Display>(reason: R) -> R {
    log::error!("{}", reason);
    reason
}

/// ST7102 MIPI-DSI panel driver
///
/// Wraps the pipeline panel `B` and implements [`Panel`] itself. `reset`,
/// `invert_color`, `mirror`, `disp_on_off` and `sleep` are handled entirely
/// over the command transport; `init` and `delete` finish by calling the
/// pipeline's own implementation.
///
/// ## Type Parameters
///
/// * `T` - command transport (pass `&mut transport` to keep ownership)
/// * `B` - pipeline panel
/// * `RST` - reset pin ([`NoResetPin`](crate::NoResetPin) when there is none)
/// * `D` - delay provider
pub struct St7102<'a, T, B, RST, D> {
    transport: T,
    base: B,
    reset_line: Option<ResetLine<RST>>,
    delay: D,
    madctl: Madctl,
    color_format: ColorFormat,
    init_commands: &'a [InitCommand<'a>],
}

impl<'a, T, B, RST, D> St7102<'a, T, B, RST, D>
where
    T: CommandTransport,
    B: PipelinePanel,
    RST: OutputPin,
    D: DelayNs,
{
    /// Validate `config`, build the pipeline panel and wrap it
    ///
    /// The reset line, if any, is driven to its inactive level before the
    /// pipeline is built. Nothing is sent over the transport.
    ///
    /// ## Example
    ///
    /// ```rust,no_run
    /// use st7102::{presets, Builder, ColorFormat, Panel, PipelinePanel, St7102};
    /// # use core::convert::Infallible;
    /// # use embedded_hal::delay::DelayNs;
    /// # use embedded_hal::digital::OutputPin;
    /// # struct Link;
    /// # impl st7102::CommandTransport for Link {
    /// #     type Error = Infallible;
    /// #     fn send_command(&mut self, _opcode: u8, _params: &[u8]) -> Result<(), Infallible> {
    /// #         Ok(())
    /// #     }
    /// # }
    /// # struct Dpi;
    /// # impl Panel for Dpi {
    /// #     type Error = Infallible;
    /// #     fn reset(&mut self) -> Result<(), Infallible> { Ok(()) }
    /// #     fn init(&mut self) -> Result<(), Infallible> { Ok(()) }
    /// #     fn invert_color(&mut self, _: bool) -> Result<(), Infallible> { Ok(()) }
    /// #     fn mirror(&mut self, _: bool, _: bool) -> Result<(), Infallible> { Ok(()) }
    /// #     fn disp_on_off(&mut self, _: bool) -> Result<(), Infallible> { Ok(()) }
    /// #     fn sleep(&mut self, _: bool) -> Result<(), Infallible> { Ok(()) }
    /// #     fn delete(self) -> Result<(), Infallible> { Ok(()) }
    /// # }
    /// # impl PipelinePanel for Dpi {
    /// #     type Config = st7102::MipiConfig;
    /// #     fn new_pipeline(_: st7102::MipiConfig) -> Result<Self, Infallible> { Ok(Dpi) }
    /// # }
    /// # struct MockPin;
    /// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
    /// # impl OutputPin for MockPin {
    /// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
    /// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
    /// # }
    /// # struct MockDelay;
    /// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
    /// # let mut link = Link;
    /// let config = Builder::new()
    ///     .reset_pin(MockPin, false)
    ///     .bits_per_pixel(16)
    ///     .init_commands(presets::TL043WVV02_B1900A_INIT_COMMANDS)
    ///     .pipeline(presets::tl043wvv02_b1900a_mipi_config(ColorFormat::Rgb565))
    ///     .build();
    ///
    /// let mut panel: St7102<_, Dpi, _, _> = match St7102::new(&mut link, config, MockDelay) {
    ///     Ok(panel) => panel,
    ///     Err(_) => return,
    /// };
    /// let _ = panel.init();
    /// let _ = panel.disp_on_off(false);
    /// ```
    pub fn new(
        transport: T,
        config: DeviceConfig<'a, RST, B::Config>,
        delay: D,
    ) -> Result<Self, PanelError<T, RST, B>> {
        let (major, minor, patch) = VERSION;
        log::info!("version: {}.{}.{}", major, minor, patch);

        let vendor = config
            .vendor
            .ok_or_else(|| logged(ArgumentError::MissingVendorConfig))?;
        if !vendor.use_mipi_interface {
            return Err(logged(Unsupported::Interface).into());
        }
        let pipeline_config = vendor
            .pipeline
            .ok_or_else(|| logged(ArgumentError::MissingPipelineConfig))?;
        if let Some((index, len)) = find_oversized(vendor.init_commands) {
            return Err(logged(ArgumentError::CommandTooLong { index, len }).into());
        }
        let color_format =
            ColorFormat::from_bits_per_pixel(config.bits_per_pixel).map_err(logged)?;

        let reset_line = match config.reset_pin {
            Some(pin) => {
                let mut line = ResetLine {
                    pin,
                    active_high: config.reset_active_high,
                };
                line.drive(false).map_err(|e| {
                    log::error!("configure GPIO for RST line failed: {:?}", e);
                    Error::ResetPin(e)
                })?;
                Some(line)
            }
            None => None,
        };

        let base = B::new_pipeline(pipeline_config).map_err(|e| {
            log::error!("create dpi panel failed: {:?}", e);
            Error::Pipeline(e)
        })?;

        log::info!(
            "create st7102 mipi panel ({} init commands, colmod 0x{:02X})",
            vendor.init_commands.len(),
            color_format.colmod()
        );
        Ok(Self {
            transport,
            base,
            reset_line,
            delay,
            madctl: Madctl::new(config.color_order),
            color_format,
            init_commands: vendor.init_commands,
        })
    }

    /// Current MADCTL register value
    pub fn madctl(&self) -> Madctl {
        self.madctl
    }

    /// COLMOD register value, fixed at construction
    pub fn colmod(&self) -> u8 {
        self.color_format.colmod()
    }

    /// Interface pixel format
    pub fn color_format(&self) -> ColorFormat {
        self.color_format
    }

    /// Vendor table replayed by `init`
    pub fn init_commands(&self) -> &'a [InitCommand<'a>] {
        self.init_commands
    }

    /// The wrapped pipeline panel
    pub fn pipeline(&self) -> &B {
        &self.base
    }

    /// The wrapped pipeline panel, for operations this driver does not cover
    pub fn pipeline_mut(&mut self) -> &mut B {
        &mut self.base
    }

    fn send(
        &mut self,
        opcode: u8,
        params: &[u8],
        what: &str,
    ) -> Result<(), PanelError<T, RST, B>> {
        self.transport.send_command(opcode, params).map_err(|e| {
            log::error!("send {} failed: {:?}", what, e);
            Error::Transport(e)
        })
    }
}

impl<T, B, RST, D> Panel for St7102<'_, T, B, RST, D>
where
    T: CommandTransport,
    B: PipelinePanel,
    RST: OutputPin,
    D: DelayNs,
{
    type Error = PanelError<T, RST, B>;

    fn reset(&mut self) -> Result<(), Self::Error> {
        let Some(line) = self.reset_line.as_mut() else {
            return Ok(());
        };
        log::debug!("hardware reset");
        let pin_failed = |e: RST::Error| -> Self::Error {
            log::error!("gpio set level failed: {:?}", e);
            Error::ResetPin(e)
        };
        line.drive(true).map_err(pin_failed)?;
        self.delay.delay_ms(RESET_HOLD_MS);
        line.drive(false).map_err(pin_failed)?;
        self.delay.delay_ms(RESET_HOLD_MS);
        Ok(())
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        self.reset()?;

        replay(&mut self.transport, &mut self.delay, self.init_commands).map_err(|e| {
            log::error!("send command failed: {}", e);
            Error::Transport(e.source)
        })?;

        self.send(COLMOD, &[self.color_format.colmod()], "colmod")?;
        self.send(MADCTL, &[self.madctl.bits()], "madctl")?;

        self.base.init().map_err(|e| {
            log::error!("pipeline init failed: {:?}", e);
            Error::Pipeline(e)
        })
    }

    fn invert_color(&mut self, invert: bool) -> Result<(), Self::Error> {
        log::debug!("invert color: {}", invert);
        self.send(INVON, &[u8::from(invert)], "invon")
    }

    fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> Result<(), Self::Error> {
        log::debug!("mirror x: {}, y: {}", mirror_x, mirror_y);
        self.madctl.set_mirror(mirror_x, mirror_y);
        self.send(MADCTL, &[self.madctl.bits()], "madctl")
    }

    fn disp_on_off(&mut self, off: bool) -> Result<(), Self::Error> {
        if off {
            self.send(DISPOFF, &[], "dispoff")
        } else {
            self.send(DISPON, &[], "dispon")
        }
    }

    fn sleep(&mut self, enter: bool) -> Result<(), Self::Error> {
        if enter {
            self.send(SLPIN, &[], "slpin")
        } else {
            self.send(SLPOUT, &[], "slpout")
        }
    }

    fn delete(self) -> Result<(), Self::Error> {
        let Self {
            transport,
            base,
            reset_line,
            delay,
            ..
        } = self;

        let result = base.delete().map_err(|e| {
            log::error!("pipeline delete failed: {:?}", e);
            Error::Pipeline(e)
        });
        drop((transport, reset_line, delay));
        result
    }
}
