//! Panel configuration types and builder
//!
//! [`DeviceConfig`] is what [`St7102::new`](crate::St7102::new) consumes: the
//! reset line, color settings and the vendor extension, which carries the init
//! command table and the sub-configuration handed to the pipeline panel.
//!
//! The MIPI sub-configuration types ([`MipiConfig`] and friends) describe the
//! DSI link and the DPI video timing. The driver never interprets them; they
//! are passed through to [`PipelinePanel::new_pipeline`](crate::PipelinePanel::new_pipeline).

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::color::{ColorFormat, ColorOrder};
use crate::sequence::InitCommand;

/// Placeholder reset pin type for panels without a reset line
///
/// Uninhabited, so an `Option<NoResetPin>` is always `None`.
#[derive(Debug)]
pub enum NoResetPin {}

impl ErrorType for NoResetPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        match *self {}
    }
}

/// Device configuration
///
/// Use [`Builder`] to create one, or fill in the fields directly.
#[derive(Clone, Debug)]
pub struct DeviceConfig<'a, RST, C> {
    /// Reset line (`None` if the panel has no reset line)
    pub reset_pin: Option<RST>,
    /// Level that holds the panel in reset (true = high)
    pub reset_active_high: bool,
    /// Subpixel color order
    pub color_order: ColorOrder,
    /// Interface pixel depth: 16, 18 or 24
    pub bits_per_pixel: u8,
    /// Vendor extension (required)
    pub vendor: Option<VendorConfig<'a, C>>,
}

/// Vendor extension of the device configuration
#[derive(Clone, Debug)]
pub struct VendorConfig<'a, C> {
    /// Initialization table replayed on every `init`
    pub init_commands: &'a [InitCommand<'a>],
    /// Whether the panel is attached through MIPI-DSI
    pub use_mipi_interface: bool,
    /// Sub-configuration for the pipeline panel (required)
    pub pipeline: Option<C>,
}

/// Builder for constructing a device configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7102::{presets, Builder, ColorFormat, ColorOrder};
///
/// let config = Builder::new()
///     .color_order(ColorOrder::Rgb)
///     .bits_per_pixel(16)
///     .init_commands(presets::TL043WVV02_B1900A_INIT_COMMANDS)
///     .pipeline(presets::tl043wvv02_b1900a_mipi_config(ColorFormat::Rgb565))
///     .build();
/// let _ = config;
/// ```
#[must_use]
pub struct Builder<'a, RST, C> {
    /// Reset line
    reset_pin: Option<RST>,
    /// Reset polarity
    reset_active_high: bool,
    /// Subpixel color order
    color_order: ColorOrder,
    /// Interface pixel depth
    bits_per_pixel: u8,
    /// Vendor init table
    init_commands: &'a [InitCommand<'a>],
    /// Bus selection
    use_mipi_interface: bool,
    /// Pipeline sub-configuration (required)
    pipeline: Option<C>,
}

impl<C> Default for Builder<'_, NoResetPin, C> {
    fn default() -> Self {
        Self {
            reset_pin: None,
            // Most panels hold reset while the line is low
            reset_active_high: false,
            color_order: ColorOrder::Rgb,
            bits_per_pixel: ColorFormat::Rgb888.bits_per_pixel(),
            init_commands: &[],
            use_mipi_interface: true,
            pipeline: None,
        }
    }
}

impl<C> Builder<'_, NoResetPin, C> {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a, RST, C> Builder<'a, RST, C> {
    /// Attach a reset line
    ///
    /// `active_high` selects the level that holds the panel in reset.
    pub fn reset_pin<RST2: OutputPin>(self, pin: RST2, active_high: bool) -> Builder<'a, RST2, C> {
        Builder {
            reset_pin: Some(pin),
            reset_active_high: active_high,
            color_order: self.color_order,
            bits_per_pixel: self.bits_per_pixel,
            init_commands: self.init_commands,
            use_mipi_interface: self.use_mipi_interface,
            pipeline: self.pipeline,
        }
    }

    /// Set the subpixel color order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Set the interface pixel depth (16, 18 or 24)
    pub fn bits_per_pixel(mut self, bits: u8) -> Self {
        self.bits_per_pixel = bits;
        self
    }

    /// Set the vendor initialization table
    pub fn init_commands(mut self, commands: &'a [InitCommand<'a>]) -> Self {
        self.init_commands = commands;
        self
    }

    /// Select whether the panel is attached through MIPI-DSI (default true)
    pub fn use_mipi_interface(mut self, value: bool) -> Self {
        self.use_mipi_interface = value;
        self
    }

    /// Set the pipeline sub-configuration (required)
    pub fn pipeline(mut self, config: C) -> Self {
        self.pipeline = Some(config);
        self
    }

    /// Build the configuration
    ///
    /// Validation happens when the panel is created.
    pub fn build(self) -> DeviceConfig<'a, RST, C> {
        DeviceConfig {
            reset_pin: self.reset_pin,
            reset_active_high: self.reset_active_high,
            color_order: self.color_order,
            bits_per_pixel: self.bits_per_pixel,
            vendor: Some(VendorConfig {
                init_commands: self.init_commands,
                use_mipi_interface: self.use_mipi_interface,
                pipeline: self.pipeline,
            }),
        }
    }
}

/// DPI video timing
///
/// All values are in pixel clocks (horizontal) or lines (vertical).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoTiming {
    /// Active pixels per line
    pub h_size: u32,
    /// Active lines per frame
    pub v_size: u32,
    /// Horizontal sync pulse width
    pub hsync_pulse_width: u32,
    /// Horizontal back porch
    pub hsync_back_porch: u32,
    /// Horizontal front porch
    pub hsync_front_porch: u32,
    /// Vertical sync pulse width
    pub vsync_pulse_width: u32,
    /// Vertical back porch
    pub vsync_back_porch: u32,
    /// Vertical front porch
    pub vsync_front_porch: u32,
}

impl VideoTiming {
    /// Create a timing for a resolution with all porches and pulses at zero
    pub const fn new(h_size: u32, v_size: u32) -> Self {
        Self {
            h_size,
            v_size,
            hsync_pulse_width: 0,
            hsync_back_porch: 0,
            hsync_front_porch: 0,
            vsync_pulse_width: 0,
            vsync_back_porch: 0,
            vsync_front_porch: 0,
        }
    }

    /// Set horizontal pulse width, back porch and front porch
    pub const fn hsync(mut self, pulse_width: u32, back_porch: u32, front_porch: u32) -> Self {
        self.hsync_pulse_width = pulse_width;
        self.hsync_back_porch = back_porch;
        self.hsync_front_porch = front_porch;
        self
    }

    /// Set vertical pulse width, back porch and front porch
    pub const fn vsync(mut self, pulse_width: u32, back_porch: u32, front_porch: u32) -> Self {
        self.vsync_pulse_width = pulse_width;
        self.vsync_back_porch = back_porch;
        self.vsync_front_porch = front_porch;
        self
    }

    /// Pixel clocks per line, blanking included
    pub const fn h_total(&self) -> u32 {
        self.h_size + self.hsync_pulse_width + self.hsync_back_porch + self.hsync_front_porch
    }

    /// Lines per frame, blanking included
    pub const fn v_total(&self) -> u32 {
        self.v_size + self.vsync_pulse_width + self.vsync_back_porch + self.vsync_front_porch
    }
}

/// MIPI-DSI bus configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DsiBusConfig {
    /// DSI host index
    pub bus_id: u8,
    /// Number of data lanes
    pub num_data_lanes: u8,
    /// Bit rate per lane in Mbps
    pub lane_bit_rate_mbps: u32,
}

/// DBI (command) channel configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DbiIoConfig {
    /// DSI virtual channel used for commands
    pub virtual_channel: u8,
    /// Width of a command in bits
    pub cmd_bits: u8,
    /// Width of a parameter in bits
    pub param_bits: u8,
}

impl Default for DbiIoConfig {
    fn default() -> Self {
        Self {
            virtual_channel: 0,
            cmd_bits: 8,
            param_bits: 8,
        }
    }
}

/// DPI (video) channel configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DpiConfig {
    /// Pixel clock in MHz
    pub clock_freq_mhz: u32,
    /// DSI virtual channel used for video
    pub virtual_channel: u8,
    /// Pixel format streamed to the panel
    pub color_format: ColorFormat,
    /// Number of frame buffers the pipeline allocates
    pub num_fbs: u8,
    /// Video timing
    pub timing: VideoTiming,
    /// Whether the pipeline copies frames with the 2D DMA engine
    pub use_dma2d: bool,
}

impl DpiConfig {
    /// Frame rate resulting from the pixel clock and timing, rounded down
    ///
    /// Returns 0 for a degenerate timing with no pixels.
    pub const fn refresh_rate_hz(&self) -> u32 {
        let pixels_per_frame = self.timing.h_total() as u64 * self.timing.v_total() as u64;
        if pixels_per_frame == 0 {
            return 0;
        }
        (self.clock_freq_mhz as u64 * 1_000_000 / pixels_per_frame) as u32
    }
}

/// Complete pipeline sub-configuration for a MIPI-DSI panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MipiConfig {
    /// DSI bus
    pub dsi_bus: DsiBusConfig,
    /// Command channel
    pub dbi: DbiIoConfig,
    /// Video channel
    pub dpi: DpiConfig,
}
