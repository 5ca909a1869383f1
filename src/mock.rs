//! Recording mocks shared by the unit tests
//!
//! Every mock appends to a shared [`Log`] so tests can check the exact order
//! of GPIO, delay, transport and pipeline activity.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use crate::interface::CommandTransport;
use crate::panel::{Panel, PipelinePanel};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockError;

impl embedded_hal::digital::Error for MockError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sent {
    pub opcode: u8,
    pub params: Vec<u8>,
}

impl Sent {
    pub fn new(opcode: u8, params: &[u8]) -> Self {
        Self {
            opcode,
            params: params.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Reset pin driven high (true) or low (false)
    Pin(bool),
    DelayMs(u32),
    Send(Sent),
    PipelineNew,
    PipelineInit,
    PipelineDelete,
    /// A pipeline operation the driver should never forward
    PipelineOther(&'static str),
    TransportDropped,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn send(opcode: u8, params: &[u8]) -> Event {
    Event::Send(Sent::new(opcode, params))
}

pub struct MockTransport {
    log: Log,
    fail_at: Option<usize>,
    attempts: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::with_log(log())
    }

    pub fn with_log(log: Log) -> Self {
        Self {
            log,
            fail_at: None,
            attempts: 0,
        }
    }

    /// Fail the `index`-th send (0-indexed) and nothing else
    pub fn failing_at(index: usize) -> Self {
        Self::new().fail_at(index)
    }

    pub fn fail_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Send(sent) => Some(sent.clone()),
                _ => None,
            })
            .collect()
    }
}

impl CommandTransport for MockTransport {
    type Error = MockError;

    fn send_command(&mut self, opcode: u8, params: &[u8]) -> Result<(), Self::Error> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(MockError);
        }
        self.log.borrow_mut().push(send(opcode, params));
        Ok(())
    }
}

impl Drop for MockTransport {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Event::TransportDropped);
    }
}

pub struct MockPin {
    log: Log,
    /// Number of successful level changes before the pin starts failing
    fail_after: Option<usize>,
    changes: usize,
}

impl MockPin {
    pub fn new() -> Self {
        Self::with_log(log())
    }

    pub fn with_log(log: Log) -> Self {
        Self {
            log,
            fail_after: None,
            changes: 0,
        }
    }

    pub fn failing_after(mut self, changes: usize) -> Self {
        self.fail_after = Some(changes);
        self
    }

    fn drive(&mut self, high: bool) -> Result<(), MockError> {
        if self.fail_after.is_some_and(|limit| self.changes >= limit) {
            return Err(MockError);
        }
        self.changes += 1;
        self.log.borrow_mut().push(Event::Pin(high));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true)
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::with_log(log())
    }

    pub fn with_log(log: Log) -> Self {
        Self { log }
    }

    pub fn delays_ms(&self) -> Vec<u32> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::DelayMs(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

/// Configuration of [`MockPipeline`]; carries the log into `new_pipeline`
#[derive(Clone)]
pub struct MockPipelineConfig {
    pub log: Log,
    pub fail_new: bool,
    pub fail_init: bool,
    pub fail_delete: bool,
}

impl MockPipelineConfig {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            fail_new: false,
            fail_init: false,
            fail_delete: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PipelineError {
    New,
    Init,
    Delete,
}

pub struct MockPipeline {
    config: MockPipelineConfig,
}

impl MockPipeline {
    fn record(&self, event: Event) {
        self.config.log.borrow_mut().push(event);
    }
}

impl Panel for MockPipeline {
    type Error = PipelineError;

    fn reset(&mut self) -> Result<(), Self::Error> {
        self.record(Event::PipelineOther("reset"));
        Ok(())
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        self.record(Event::PipelineInit);
        if self.config.fail_init {
            return Err(PipelineError::Init);
        }
        Ok(())
    }

    fn invert_color(&mut self, _invert: bool) -> Result<(), Self::Error> {
        self.record(Event::PipelineOther("invert_color"));
        Ok(())
    }

    fn mirror(&mut self, _mirror_x: bool, _mirror_y: bool) -> Result<(), Self::Error> {
        self.record(Event::PipelineOther("mirror"));
        Ok(())
    }

    fn disp_on_off(&mut self, _off: bool) -> Result<(), Self::Error> {
        self.record(Event::PipelineOther("disp_on_off"));
        Ok(())
    }

    fn sleep(&mut self, _enter: bool) -> Result<(), Self::Error> {
        self.record(Event::PipelineOther("sleep"));
        Ok(())
    }

    fn delete(self) -> Result<(), Self::Error> {
        self.record(Event::PipelineDelete);
        if self.config.fail_delete {
            return Err(PipelineError::Delete);
        }
        Ok(())
    }
}

impl PipelinePanel for MockPipeline {
    type Config = MockPipelineConfig;

    fn new_pipeline(config: Self::Config) -> Result<Self, Self::Error> {
        if config.fail_new {
            return Err(PipelineError::New);
        }
        config.log.borrow_mut().push(Event::PipelineNew);
        Ok(Self { config })
    }
}
