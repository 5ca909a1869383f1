//! Known panel configurations
//!
//! Bus settings, video timings and init tables for ST7102 panels that have
//! been brought up with this driver. Timings follow the panel makers' data;
//! the refresh rate actually achieved is `clock / h_total / v_total` (see
//! [`DpiConfig::refresh_rate_hz`]).

use crate::color::ColorFormat;
use crate::command::{DISPON, SLPOUT, TEON};
use crate::config::{DbiIoConfig, DpiConfig, DsiBusConfig, MipiConfig, VideoTiming};
use crate::sequence::InitCommand;

/// DSI bus with 2 data lanes at 500 Mbps
pub const DSI_BUS_2_LANE: DsiBusConfig = DsiBusConfig {
    bus_id: 0,
    num_data_lanes: 2,
    lane_bit_rate_mbps: 500,
};

/// DSI bus with 4 data lanes at 800 Mbps
pub const DSI_BUS_4_LANE: DsiBusConfig = DsiBusConfig {
    bus_id: 0,
    num_data_lanes: 4,
    lane_bit_rate_mbps: 800,
};

const fn dpi(clock_freq_mhz: u32, color_format: ColorFormat, timing: VideoTiming) -> DpiConfig {
    DpiConfig {
        clock_freq_mhz,
        virtual_channel: 0,
        color_format,
        num_fbs: 1,
        timing,
        use_dma2d: true,
    }
}

/// 1280x720 at 60 Hz, 74 MHz pixel clock
pub const fn dpi_1280x720_60hz(color_format: ColorFormat) -> DpiConfig {
    dpi(
        74,
        color_format,
        VideoTiming::new(1280, 720).hsync(40, 110, 220).vsync(5, 5, 20),
    )
}

/// 1920x1080 at 60 Hz, 148 MHz pixel clock
pub const fn dpi_1920x1080_60hz(color_format: ColorFormat) -> DpiConfig {
    dpi(
        148,
        color_format,
        VideoTiming::new(1920, 1080).hsync(44, 148, 88).vsync(5, 36, 4),
    )
}

/// TL043WVV02-B1900A 4.3" panel, 480x272, 9 MHz pixel clock
pub const fn dpi_tl043wvv02_b1900a(color_format: ColorFormat) -> DpiConfig {
    dpi(
        9,
        color_format,
        VideoTiming::new(480, 272).hsync(2, 40, 40).vsync(2, 10, 180),
    )
}

/// Full pipeline sub-configuration for the TL043WVV02-B1900A (2-lane module)
pub fn tl043wvv02_b1900a_mipi_config(color_format: ColorFormat) -> MipiConfig {
    MipiConfig {
        dsi_bus: DSI_BUS_2_LANE,
        dbi: DbiIoConfig::default(),
        dpi: dpi_tl043wvv02_b1900a(color_format),
    }
}

/// TL043WVV02-B1900A initialization table
///
/// Unlocks the vendor command page, programs power, gamma and GIP timing,
/// then leaves sleep, turns the display on and enables the tearing-effect
/// output.
pub static TL043WVV02_B1900A_INIT_COMMANDS: &[InitCommand<'static>] = &[
    // Command page unlock
    InitCommand::new(0x99, &[0x71, 0x02, 0xA2], 0),
    InitCommand::new(0x99, &[0x71, 0x02, 0xA3], 0),
    InitCommand::new(0x99, &[0x71, 0x02, 0xA4], 0),
    // Power
    InitCommand::new(0xA4, &[0x31], 0),
    InitCommand::new(0xB0, &[0x22, 0x57, 0x1E, 0x61, 0x2F, 0x57, 0x61], 0),
    InitCommand::new(0xB7, &[0x64, 0x64], 0),
    InitCommand::new(0xBF, &[0xB4, 0xB4], 0),
    // Gamma
    InitCommand::new(
        0xC8,
        &[
            0x00, 0x00, 0x0F, 0x1C, 0x34, 0x00, 0x60, 0x03, 0xA0, 0x06, 0x10, 0xFE, 0x06, 0x74,
            0x03, 0x21, 0xC4, 0x00, 0x08, 0x00, 0x22, 0x46, 0x0F, 0x8F, 0x0A, 0x32, 0xF2, 0x0C,
            0x42, 0x0C, 0xF3, 0x80, 0x00, 0xAB, 0xC0, 0x03, 0xC4,
        ],
        0,
    ),
    InitCommand::new(
        0xC9,
        &[
            0x00, 0x00, 0x0F, 0x1C, 0x34, 0x00, 0x60, 0x03, 0xA0, 0x06, 0x10, 0xFE, 0x06, 0x74,
            0x03, 0x21, 0xC4, 0x00, 0x08, 0x00, 0x22, 0x46, 0x0F, 0x8F, 0x0A, 0x32, 0xF2, 0x0C,
            0x42, 0x0C, 0xF3, 0x80, 0x00, 0xAB, 0xC0, 0x03, 0xC4,
        ],
        0,
    ),
    InitCommand::new(0xD7, &[0x10, 0x0C, 0x36, 0x19, 0x90, 0x90], 0),
    // GIP
    InitCommand::new(
        0xA3,
        &[
            0x51, 0x03, 0x80, 0xCF, 0x44, 0x00, 0x00, 0x00, 0x00, 0x04, 0x78, 0x78, 0x00, 0x1A,
            0x00, 0x45, 0x05, 0x00, 0x00, 0x00, 0x00, 0x46, 0x00, 0x00, 0x02, 0x20, 0x52, 0x00,
            0x05, 0x00, 0x00, 0xFF,
        ],
        0,
    ),
    InitCommand::new(
        0xA6,
        &[
            0x02, 0x00, 0x24, 0x55, 0x35, 0x00, 0x38, 0x00, 0x78, 0x78, 0x00, 0x24, 0x55, 0x36,
            0x00, 0x37, 0x00, 0x78, 0x78, 0x02, 0xAC, 0x51, 0x3A, 0x00, 0x00, 0x00, 0x78, 0x78,
            0x03, 0xAC, 0x21, 0x00, 0x04, 0x00, 0x00, 0x78, 0x78, 0x3E, 0x00, 0x06, 0x00, 0x00,
            0x00, 0x00,
        ],
        0,
    ),
    InitCommand::new(
        0xA7,
        &[
            0x19, 0x19, 0x00, 0x64, 0x40, 0x07, 0x16, 0x40, 0x00, 0x04, 0x03, 0x78, 0x78, 0x00,
            0x64, 0x40, 0x25, 0x34, 0x00, 0x00, 0x02, 0x01, 0x78, 0x78, 0x00, 0x64, 0x40, 0x4B,
            0x5A, 0x00, 0x00, 0x02, 0x01, 0x78, 0x78, 0x00, 0x24, 0x40, 0x69, 0x78, 0x00, 0x00,
            0x00, 0x00, 0x78, 0x78, 0x00, 0x44,
        ],
        0,
    ),
    InitCommand::new(
        0xAC,
        &[
            0x08, 0x0A, 0x11, 0x00, 0x13, 0x03, 0x1B, 0x18, 0x06, 0x1A, 0x19, 0x1B, 0x1B, 0x1B,
            0x18, 0x1B, 0x09, 0x0B, 0x10, 0x02, 0x12, 0x01, 0x1B, 0x18, 0x06, 0x1A, 0x19, 0x1B,
            0x1B, 0x1B, 0x18, 0x1B, 0xFF, 0x67, 0xFF, 0x67, 0x00,
        ],
        0,
    ),
    InitCommand::new(0xAD, &[0xCC, 0x40, 0x46, 0x11, 0x04, 0x78, 0x78], 0),
    InitCommand::new(
        0xE8,
        &[
            0x30, 0x07, 0x00, 0x94, 0x94, 0x9C, 0x00, 0xE2, 0x04, 0x00, 0x00, 0x00, 0x00, 0xEF,
        ],
        0,
    ),
    InitCommand::new(
        0xE7,
        &[
            0x8B, 0x3C, 0x00, 0x0C, 0xF0, 0x5D, 0x00, 0x5D, 0x00, 0x5D, 0x00, 0x5D, 0x00, 0xFF,
            0x00, 0x08, 0x7B, 0x00, 0x00, 0xC8, 0x6A, 0x5A, 0x08, 0x1A, 0x3C, 0x00, 0x81, 0x01,
            0xCC, 0x01, 0x7F, 0xF0, 0x22,
        ],
        0,
    ),
    // Bring-up
    InitCommand::new(SLPOUT, &[], 20),
    InitCommand::new(DISPON, &[], 20),
    InitCommand::new(TEON, &[0x00], 0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::find_oversized;

    #[test]
    fn test_refresh_rates() {
        assert_eq!(dpi_1280x720_60hz(ColorFormat::Rgb888).refresh_rate_hz(), 59);
        assert_eq!(dpi_1920x1080_60hz(ColorFormat::Rgb888).refresh_rate_hz(), 59);
        assert_eq!(dpi_tl043wvv02_b1900a(ColorFormat::Rgb565).refresh_rate_hz(), 34);
    }

    #[test]
    fn test_tl043_table_fits_param_limit() {
        assert_eq!(TL043WVV02_B1900A_INIT_COMMANDS.len(), 20);
        assert_eq!(find_oversized(TL043WVV02_B1900A_INIT_COMMANDS), None);
    }

    #[test]
    fn test_tl043_table_ends_with_bring_up() {
        let tail: alloc::vec::Vec<(u8, u32)> = TL043WVV02_B1900A_INIT_COMMANDS[17..]
            .iter()
            .map(|cmd| (cmd.opcode, cmd.delay_ms))
            .collect();
        assert_eq!(tail, [(SLPOUT, 20), (DISPON, 20), (TEON, 0)]);
    }

    #[test]
    fn test_tl043_mipi_config() {
        let config = tl043wvv02_b1900a_mipi_config(ColorFormat::Rgb888);
        assert_eq!(config.dsi_bus.num_data_lanes, 2);
        assert_eq!(config.dbi.cmd_bits, 8);
        assert_eq!(config.dpi.timing.h_size, 480);
        assert_eq!(config.dpi.timing.v_size, 272);
        assert_eq!(config.dpi.color_format, ColorFormat::Rgb888);
        assert!(config.dpi.use_dma2d);
    }
}
