//! Command transport abstraction
//!
//! This module provides the [`CommandTransport`] trait, the write-only
//! `opcode + parameters` channel the driver talks to the ST7102 through, and
//! [`SpiInterface`], an implementation for controllers wired as a 4-line
//! serial DBI bus (SPI plus a data/command pin).
//!
//! On a MIPI-DSI board the transport is usually the DBI link that the DSI host
//! exposes next to the video stream; implement [`CommandTransport`] on the
//! platform's handle for that link.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7102::{command, CommandTransport, SpiInterface};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = SpiInterface::new(MockSpi, MockPin);
//!
//! // Select 24 bits per pixel
//! let _ = interface.send_command(command::COLMOD, &[0x77]);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

/// Write-only command/parameter channel to the display controller
///
/// The driver never reads back from the panel, so the trait only covers
/// parameter transmission.
pub trait CommandTransport {
    /// Error type for transport operations
    type Error: Debug;

    /// Send a command opcode followed by its parameter bytes
    ///
    /// `params` may be empty, in which case only the opcode is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying bus fails.
    fn send_command(&mut self, opcode: u8, params: &[u8]) -> Result<(), Self::Error>;
}

impl<T: CommandTransport + ?Sized> CommandTransport for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, opcode: u8, params: &[u8]) -> Result<(), Self::Error> {
        T::send_command(self, opcode, params)
    }
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// Data/command pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// 4-line serial command transport
///
/// Implements [`CommandTransport`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
pub struct SpiInterface<SPI, DC> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new SpiInterface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give back the SPI device and the data/command pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> CommandTransport for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin,
{
    type Error = InterfaceError<SPI::Error, DC::Error>;

    fn send_command(&mut self, opcode: u8, params: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[opcode]).map_err(InterfaceError::Spi)?;
        if params.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(params).map_err(InterfaceError::Spi)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    /// Bus events in the order they happened
    #[derive(Debug, PartialEq)]
    enum Event {
        Dc(bool),
        Write(Vec<u8>),
    }

    #[derive(Default)]
    struct Bus {
        events: Vec<Event>,
        fail_spi: bool,
    }

    struct MockSpi<'a>(&'a core::cell::RefCell<Bus>);
    struct MockDc<'a>(&'a core::cell::RefCell<Bus>);

    impl SpiErrorType for MockSpi<'_> {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi<'_> {
        fn transaction(
            &mut self,
            operations: &mut [embedded_hal::spi::Operation<'_, u8>],
        ) -> Result<(), Self::Error> {
            let mut bus = self.0.borrow_mut();
            if bus.fail_spi {
                return Err(MockError);
            }
            for op in operations {
                if let embedded_hal::spi::Operation::Write(data) = op {
                    bus.events.push(Event::Write(data.to_vec()));
                }
            }
            Ok(())
        }
    }

    impl ErrorType for MockDc<'_> {
        type Error = MockError;
    }

    impl OutputPin for MockDc<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().events.push(Event::Dc(false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().events.push(Event::Dc(true));
            Ok(())
        }
    }

    #[test]
    fn test_command_with_params() {
        let bus = core::cell::RefCell::new(Bus::default());
        let mut interface = SpiInterface::new(MockSpi(&bus), MockDc(&bus));
        interface.send_command(0x3A, &[0x55]).unwrap();

        assert_eq!(
            bus.borrow().events,
            [
                Event::Dc(false),
                Event::Write(alloc::vec![0x3A]),
                Event::Dc(true),
                Event::Write(alloc::vec![0x55]),
            ]
        );
    }

    #[test]
    fn test_command_without_params_skips_data_phase() {
        let bus = core::cell::RefCell::new(Bus::default());
        let mut interface = SpiInterface::new(MockSpi(&bus), MockDc(&bus));
        interface.send_command(0x29, &[]).unwrap();

        assert_eq!(
            bus.borrow().events,
            [Event::Dc(false), Event::Write(alloc::vec![0x29])]
        );
    }

    #[test]
    fn test_spi_error_is_reported() {
        let bus = core::cell::RefCell::new(Bus {
            fail_spi: true,
            ..Bus::default()
        });
        let mut interface = SpiInterface::new(MockSpi(&bus), MockDc(&bus));
        let result = interface.send_command(0x11, &[]);
        assert!(matches!(result, Err(InterfaceError::Spi(MockError))));
    }

    #[test]
    fn test_borrowed_transport() {
        let bus = core::cell::RefCell::new(Bus::default());
        let mut interface = SpiInterface::new(MockSpi(&bus), MockDc(&bus));

        fn display_off<T: CommandTransport>(mut transport: T) -> Result<(), T::Error> {
            transport.send_command(0x28, &[])
        }

        display_off(&mut interface).unwrap();
        display_off(&mut interface).unwrap();
        assert_eq!(bus.borrow().events.len(), 4);
    }
}
