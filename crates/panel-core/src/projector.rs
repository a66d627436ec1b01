//! RS-232 projector relay
//!
//! Maps symbolic commands to the projector's fixed 8 byte frames and writes
//! them to the serial port. Responses are not validated; with debug enabled
//! they are read back and logged.

use embedded_hal_async::delay::DelayNs;
use embedded_io::ReadReady;
use embedded_io_async::{Read, Write};

use crate::config::{COLON_POSITION, format_variable};

/// Serial link speed expected by the projector (8N1)
pub const BAUD_RATE: u32 = 9600;
pub const FRAME_LEN: usize = 8;
/// Time the projector gets to answer before the echo is read
pub const RESPONSE_DELAY_MS: u32 = 1000;

const RESPONSE_BUFFER_SIZE: usize = 64;

const POWER_ON_FRAME: [u8; FRAME_LEN] = [0x7E, 0x30, 0x30, 0x30, 0x30, 0x20, 0x31, 0x0D];
const POWER_OFF_FRAME: [u8; FRAME_LEN] = [0x7E, 0x30, 0x30, 0x30, 0x30, 0x20, 0x32, 0x0D];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectorCommand {
    PowerOn,
    PowerOff,
}

impl ProjectorCommand {
    /// Parse a symbolic command (`on` or `off`).
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "on" => Some(ProjectorCommand::PowerOn),
            "off" => Some(ProjectorCommand::PowerOff),
            _ => None,
        }
    }

    pub const fn frame(self) -> &'static [u8; FRAME_LEN] {
        match self {
            ProjectorCommand::PowerOn => &POWER_ON_FRAME,
            ProjectorCommand::PowerOff => &POWER_OFF_FRAME,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ProjectorCommand::PowerOn => "on",
            ProjectorCommand::PowerOff => "off",
        }
    }
}

/// Frame for a symbolic command, empty if the command is unknown.
pub fn command_frame(command: &str) -> &'static [u8] {
    match ProjectorCommand::parse(command) {
        Some(command) => command.frame(),
        None => &[],
    }
}

#[derive(Debug)]
pub enum RelayError<E> {
    Serial(E),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Frame written; `echoed` response bytes were read back
    Sent { echoed: usize },
    /// Unknown command, nothing written
    Ignored,
}

pub struct ProjectorRelay<S, D> {
    serial: S,
    delay: D,
    debug: bool,
}

impl<S, D> ProjectorRelay<S, D>
where
    S: Read + Write + ReadReady,
    D: DelayNs,
{
    pub const fn new(serial: S, delay: D, debug: bool) -> Self {
        Self {
            serial,
            delay,
            debug,
        }
    }

    /// Send a symbolic command to the projector.
    pub async fn send(&mut self, command: &str) -> Result<RelayOutcome, RelayError<S::Error>> {
        if self.debug {
            log::debug!("{}", format_variable("command", command, COLON_POSITION));
        }
        let Some(command) = ProjectorCommand::parse(command) else {
            if self.debug {
                log::debug!("Invalid Command!");
            }
            return Ok(RelayOutcome::Ignored);
        };

        self.serial
            .write_all(command.frame())
            .await
            .map_err(RelayError::Serial)?;
        self.serial.flush().await.map_err(RelayError::Serial)?;
        self.delay.delay_ms(RESPONSE_DELAY_MS).await;

        let mut echoed = 0;
        if self.debug && self.serial.read_ready().map_err(RelayError::Serial)? {
            let mut response = [0u8; RESPONSE_BUFFER_SIZE];
            echoed = self
                .serial
                .read(&mut response)
                .await
                .map_err(RelayError::Serial)?;
            log::debug!("Response: {:02X?}", &response[..echoed]);
        }

        Ok(RelayOutcome::Sent { echoed })
    }
}
