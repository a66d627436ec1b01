use core::fmt::{Display, Write as _};

use heapless::String;

/// Maximum SSID length defined by 802.11
pub const MAX_SSID_LEN: usize = 32;
/// Maximum WPA2 passphrase length
pub const MAX_PASSWORD_LEN: usize = 64;
/// Column of the colon in the configuration dump
pub const COLON_POSITION: usize = 11;

const VARIABLE_LINE_LEN: usize = 96;

pub type VariableLine = String<VARIABLE_LINE_LEN>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    SsidTooLong,
    PasswordTooLong,
    /// Flag value other than `0`, `1`, `true` or `false`
    InvalidFlag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiConfig {
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
}

/// Device configuration, read once at boot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub wifi: WifiConfig,
    /// Enables debug output and projector echo logging
    pub debug: bool,
    /// Mirror light on/off requests to the projector
    pub projector_relay: bool,
}

impl Config {
    /// Build the configuration from raw key values.
    ///
    /// Missing flags default to disabled.
    pub fn from_values(
        ssid: &str,
        password: &str,
        debug: Option<&str>,
        projector_relay: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut wifi = WifiConfig {
            ssid: String::new(),
            password: String::new(),
        };
        wifi.ssid
            .push_str(ssid)
            .map_err(|()| ConfigError::SsidTooLong)?;
        wifi.password
            .push_str(password)
            .map_err(|()| ConfigError::PasswordTooLong)?;

        Ok(Self {
            wifi,
            debug: parse_flag(debug)?,
            projector_relay: parse_flag(projector_relay)?,
        })
    }

    /// Log the configuration, one aligned line per key.
    pub fn log_summary(&self) {
        log::debug!("Configuration");
        for line in self.summary_lines() {
            log::debug!("{}", line);
        }
    }

    /// Configuration dump lines. The password is masked.
    pub fn summary_lines(&self) -> [VariableLine; 4] {
        let masked = mask(&self.wifi.password);
        [
            format_variable("debug", u8::from(self.debug), COLON_POSITION),
            format_variable("ssid", &self.wifi.ssid, COLON_POSITION),
            format_variable("password", &masked, COLON_POSITION),
            format_variable("relay", u8::from(self.projector_relay), COLON_POSITION),
        ]
    }
}

/// Parse a boolean-like flag. `None` and empty values are `false`.
pub fn parse_flag(value: Option<&str>) -> Result<bool, ConfigError> {
    let Some(value) = value.map(str::trim) else {
        return Ok(false);
    };
    if value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else if value == "1" || value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else {
        Err(ConfigError::InvalidFlag)
    }
}

/// Format `name : value` with the name padded so the colon lands at `colon_position`.
///
/// Output that does not fit the line buffer is cut off.
pub fn format_variable(
    name: &str,
    value: impl Display,
    colon_position: usize,
) -> VariableLine {
    let mut line = VariableLine::new();
    let _ = write!(line, "{:<width$} : {}", name, value, width = colon_position);
    line
}

fn mask(secret: &str) -> String<MAX_PASSWORD_LEN> {
    let mut masked = String::new();
    for _ in secret.chars() {
        if masked.push('*').is_err() {
            break;
        }
    }
    masked
}
