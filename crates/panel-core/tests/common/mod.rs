//! In-memory stand-ins for the peripherals and the network.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    convert::Infallible,
    rc::Rc,
};

use embedded_io::ErrorKind;
use panel_core::{
    bringup::{LinkStatus, RestartHook, StationInterface},
    http::Transport,
    projector::ProjectorRelay,
    random::RandomSource,
};

// -----------------------------------------------------------------------------
// Network
// -----------------------------------------------------------------------------

/// Client connection that replays a fixed request and records the response.
pub struct ScriptedTransport {
    input: Vec<u8>,
    pos: usize,
    chunk: usize,
    fail_reads: bool,
    pub output: Rc<RefCell<Vec<u8>>>,
    pub closed: Rc<Cell<bool>>,
}

impl ScriptedTransport {
    pub fn new(input: &[u8]) -> Self {
        Self {
            input: input.to_vec(),
            pos: 0,
            chunk: usize::MAX,
            fail_reads: false,
            output: Rc::default(),
            closed: Rc::default(),
        }
    }

    /// Deliver at most `chunk` bytes per read.
    pub fn with_chunk(mut self, chunk: usize) -> Self {
        self.chunk = chunk;
        self
    }

    pub fn failing() -> Self {
        let mut transport = Self::new(b"");
        transport.fail_reads = true;
        transport
    }

    pub fn response(&self) -> String {
        String::from_utf8(self.output.borrow().clone()).unwrap()
    }
}

impl embedded_io_async::ErrorType for ScriptedTransport {
    type Error = ErrorKind;
}

impl embedded_io_async::Read for ScriptedTransport {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, ErrorKind> {
        if self.fail_reads {
            return Err(ErrorKind::ConnectionReset);
        }
        let remaining = self.input.len() - self.pos;
        let n = remaining.min(buf.len()).min(self.chunk);
        buf[..n].copy_from_slice(&self.input[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl embedded_io_async::Write for ScriptedTransport {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, ErrorKind> {
        self.output.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), ErrorKind> {
        Ok(())
    }
}

impl Transport for ScriptedTransport {
    async fn close(&mut self) -> Result<(), ErrorKind> {
        self.closed.set(true);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Peripherals
// -----------------------------------------------------------------------------

/// Output pin recording every level it was driven to.
#[derive(Clone, Default)]
pub struct MockPin {
    pub levels: Rc<RefCell<Vec<bool>>>,
}

impl MockPin {
    pub fn last_level(&self) -> Option<bool> {
        self.levels.borrow().last().copied()
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.levels.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.levels.borrow_mut().push(true);
        Ok(())
    }
}

/// Serial port recording writes and answering with a canned response.
#[derive(Clone, Default)]
pub struct MockSerial {
    pub written: Rc<RefCell<Vec<u8>>>,
    pub pending: Rc<RefCell<VecDeque<u8>>>,
}

impl MockSerial {
    pub fn with_response(response: &[u8]) -> Self {
        let serial = Self::default();
        serial.pending.borrow_mut().extend(response.iter().copied());
        serial
    }
}

impl embedded_io_async::ErrorType for MockSerial {
    type Error = ErrorKind;
}

impl embedded_io_async::Read for MockSerial {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, ErrorKind> {
        let mut pending = self.pending.borrow_mut();
        let n = pending.len().min(buf.len());
        for (slot, byte) in buf.iter_mut().zip(pending.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

impl embedded_io_async::Write for MockSerial {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, ErrorKind> {
        self.written.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), ErrorKind> {
        Ok(())
    }
}

impl embedded_io::ReadReady for MockSerial {
    fn read_ready(&mut self) -> Result<bool, ErrorKind> {
        Ok(!self.pending.borrow().is_empty())
    }
}

/// Delay that returns immediately and sums up the requested milliseconds.
#[derive(Clone, Default)]
pub struct NoopDelay {
    pub total_ms: Rc<Cell<u64>>,
}

impl embedded_hal_async::delay::DelayNs for NoopDelay {
    async fn delay_ns(&mut self, _ns: u32) {}

    async fn delay_ms(&mut self, ms: u32) {
        self.total_ms.set(self.total_ms.get() + u64::from(ms));
    }
}

/// Random source cycling through fixed numbers.
pub struct SequenceRng {
    values: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

// -----------------------------------------------------------------------------
// Wi-Fi
// -----------------------------------------------------------------------------

/// Station replaying a status sequence. The last status repeats.
#[derive(Default)]
pub struct MockStation {
    statuses: VecDeque<LinkStatus>,
    pub connect_error: Option<&'static str>,
    pub activated: bool,
    pub power_saving_disabled: bool,
    pub joined: Option<(String, String)>,
    pub status_polls: usize,
}

impl MockStation {
    pub fn with_statuses(statuses: &[LinkStatus]) -> Self {
        Self {
            statuses: statuses.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl StationInterface for MockStation {
    type Error = &'static str;

    async fn activate(&mut self) -> Result<(), Self::Error> {
        self.activated = true;
        Ok(())
    }

    async fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Self::Error> {
        if let Some(err) = self.connect_error {
            return Err(err);
        }
        self.joined = Some((ssid.to_owned(), password.to_owned()));
        Ok(())
    }

    fn disable_power_saving(&mut self) -> Result<(), Self::Error> {
        self.power_saving_disabled = true;
        Ok(())
    }

    fn status(&mut self) -> LinkStatus {
        self.status_polls += 1;
        if self.statuses.len() > 1 {
            self.statuses.pop_front().unwrap()
        } else {
            self.statuses.front().copied().unwrap_or(LinkStatus::Idle)
        }
    }
}

#[derive(Default)]
pub struct CountingRestart {
    pub restarts: usize,
}

impl RestartHook for CountingRestart {
    fn restart(&mut self) {
        self.restarts += 1;
    }
}

// -----------------------------------------------------------------------------
// Assembled controller
// -----------------------------------------------------------------------------

pub type TestController =
    panel_core::PanelController<MockPin, SequenceRng, MockSerial, NoopDelay>;

pub struct Rig {
    pub controller: TestController,
    pub pin: MockPin,
    pub serial: MockSerial,
}

pub fn rig(relay_light: bool, random: &[u32]) -> Rig {
    let pin = MockPin::default();
    let serial = MockSerial::default();
    let relay = ProjectorRelay::new(serial.clone(), NoopDelay::default(), false);
    let controller =
        TestController::new(pin.clone(), SequenceRng::new(random), relay, relay_light);
    Rig {
        controller,
        pin,
        serial,
    }
}
