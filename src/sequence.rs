//! Vendor initialization command tables
//!
//! Panel vendors ship their bring-up sequence as a list of register writes:
//! an opcode, its parameter bytes, and an optional settle time. An
//! [`InitCommand`] table is plain data; [`replay`] sends it over any
//! [`CommandTransport`] in order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7102::{command, replay, InitCommand};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # struct Link;
//! # impl st7102::CommandTransport for Link {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _opcode: u8, _params: &[u8]) -> Result<(), Infallible> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut link = Link;
//! # let mut delay = MockDelay;
//! static TABLE: &[InitCommand<'static>] = &[
//!     InitCommand::new(0xB7, &[0x64, 0x64], 0),
//!     InitCommand::new(command::SLPOUT, &[], 20),
//!     InitCommand::new(command::DISPON, &[], 20),
//! ];
//!
//! let _ = replay(&mut link, &mut delay, TABLE);
//! ```

use embedded_hal::delay::DelayNs;

use crate::interface::CommandTransport;

/// Maximum number of parameter bytes a single init command may carry
pub const MAX_PARAMS: usize = 64;

/// One entry of a vendor initialization table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitCommand<'a> {
    /// Command opcode
    pub opcode: u8,
    /// Parameter bytes sent after the opcode (may be empty)
    pub params: &'a [u8],
    /// Time to wait after the command, in milliseconds (0 = no wait)
    pub delay_ms: u32,
}

impl<'a> InitCommand<'a> {
    /// Create a table entry
    pub const fn new(opcode: u8, params: &'a [u8], delay_ms: u32) -> Self {
        Self {
            opcode,
            params,
            delay_ms,
        }
    }

    /// Number of parameter bytes
    pub const fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the command carries no parameters
    pub const fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Check a table against [`MAX_PARAMS`]
///
/// Returns the index and parameter count of the first oversized command.
pub fn find_oversized(commands: &[InitCommand<'_>]) -> Option<(usize, usize)> {
    commands
        .iter()
        .enumerate()
        .find(|(_, cmd)| cmd.len() > MAX_PARAMS)
        .map(|(index, cmd)| (index, cmd.len()))
}

/// A table replay stopped at a failing command
#[derive(Debug)]
pub struct ReplayError<E> {
    /// Position of the failing command in the table
    pub index: usize,
    /// Opcode of the failing command
    pub opcode: u8,
    /// Error reported by the transport
    pub source: E,
}

impl<E: core::fmt::Debug> core::fmt::Display for ReplayError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "init command {} (0x{:02X}) failed: {:?}",
            self.index, self.opcode, self.source
        )
    }
}

impl<E: core::fmt::Debug> core::error::Error for ReplayError<E> {}

/// Send every command of `commands` in table order
///
/// Each command's post-delay is applied before the next one is sent. The
/// first transport failure stops the replay; commands already sent stay sent.
pub fn replay<T, D>(
    transport: &mut T,
    delay: &mut D,
    commands: &[InitCommand<'_>],
) -> Result<(), ReplayError<T::Error>>
where
    T: CommandTransport + ?Sized,
    D: DelayNs + ?Sized,
{
    for (index, cmd) in commands.iter().enumerate() {
        log::debug!(
            "init command {}: 0x{:02X} ({} bytes)",
            index,
            cmd.opcode,
            cmd.len()
        );
        transport
            .send_command(cmd.opcode, cmd.params)
            .map_err(|source| ReplayError {
                index,
                opcode: cmd.opcode,
                source,
            })?;
        if cmd.delay_ms > 0 {
            delay.delay_ms(cmd.delay_ms);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockTransport, Sent};

    static TABLE: &[InitCommand<'static>] = &[
        InitCommand::new(0xA4, &[0x31], 0),
        InitCommand::new(0x11, &[], 20),
        InitCommand::new(0xB7, &[0x64, 0x64], 0),
        InitCommand::new(0x29, &[], 5),
    ];

    #[test]
    fn test_replay_sends_in_order() {
        let mut transport = MockTransport::new();
        let mut delay = MockDelay::new();
        replay(&mut transport, &mut delay, TABLE).unwrap();

        let expected: alloc::vec::Vec<Sent> = TABLE
            .iter()
            .map(|cmd| Sent::new(cmd.opcode, cmd.params))
            .collect();
        assert_eq!(transport.sent(), expected);
        assert_eq!(delay.delays_ms(), [20, 5]);
    }

    #[test]
    fn test_replay_empty_table() {
        let mut transport = MockTransport::new();
        let mut delay = MockDelay::new();
        replay(&mut transport, &mut delay, &[]).unwrap();
        assert!(transport.sent().is_empty());
        assert!(delay.delays_ms().is_empty());
    }

    #[test]
    fn test_replay_stops_at_failing_command() {
        for fail_at in 0..TABLE.len() {
            let mut transport = MockTransport::failing_at(fail_at);
            let mut delay = MockDelay::new();
            let err = replay(&mut transport, &mut delay, TABLE).unwrap_err();

            assert_eq!(err.index, fail_at);
            assert_eq!(err.opcode, TABLE[fail_at].opcode);
            assert_eq!(transport.sent().len(), fail_at);
        }
    }

    #[test]
    fn test_no_delay_after_failing_command() {
        let mut transport = MockTransport::failing_at(1);
        let mut delay = MockDelay::new();
        assert!(replay(&mut transport, &mut delay, TABLE).is_err());
        assert!(delay.delays_ms().is_empty());
    }

    #[test]
    fn test_find_oversized() {
        static LONG: [u8; MAX_PARAMS + 1] = [0; MAX_PARAMS + 1];
        static MAX: [u8; MAX_PARAMS] = [0; MAX_PARAMS];
        let table = [
            InitCommand::new(0x01, &MAX, 0),
            InitCommand::new(0x02, &LONG, 0),
        ];
        assert_eq!(find_oversized(TABLE), None);
        assert_eq!(find_oversized(&table), Some((1, MAX_PARAMS + 1)));
    }
}
