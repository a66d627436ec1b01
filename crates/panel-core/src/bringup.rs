//! Wi-Fi station bring-up
//!
//! Activates the station interface, connects and polls the link status a
//! bounded number of times. A device that cannot join the network has no
//! other way to recover, so failure escalates to the [`RestartHook`].

use embedded_hal_async::delay::DelayNs;

use crate::config::WifiConfig;

/// Number of status polls before giving up
pub const MAX_STATUS_POLLS: u8 = 10;
pub const STATUS_POLL_INTERVAL_MS: u32 = 3_000;
/// Delay between giving up and restarting the device
pub const RESTART_DELAY_MS: u32 = 10_000;

/// Station link status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Idle,
    Connecting,
    /// Associated, no address yet
    NoIp,
    GotIp,
    Failed,
    NoApFound,
    BadAuth,
}

impl LinkStatus {
    /// Numeric status code. Errors are negative.
    pub const fn code(self) -> i8 {
        match self {
            LinkStatus::Idle => 0,
            LinkStatus::Connecting => 1,
            LinkStatus::NoIp => 2,
            LinkStatus::GotIp => 3,
            LinkStatus::Failed => -1,
            LinkStatus::NoApFound => -2,
            LinkStatus::BadAuth => -3,
        }
    }

    pub const fn is_error(self) -> bool {
        self.code() < 0
    }

    /// Polling stops on success or on any error.
    pub const fn is_settled(self) -> bool {
        self.is_error() || self.code() >= LinkStatus::GotIp.code()
    }
}

/// Station mode network interface
#[allow(async_fn_in_trait)]
pub trait StationInterface {
    type Error: core::fmt::Debug;

    async fn activate(&mut self) -> Result<(), Self::Error>;

    async fn connect(&mut self, ssid: &str, password: &str) -> Result<(), Self::Error>;

    /// Keep the radio awake so incoming connections are answered promptly.
    fn disable_power_saving(&mut self) -> Result<(), Self::Error>;

    fn status(&mut self) -> LinkStatus;
}

/// Escalation used when the network cannot be brought up.
pub trait RestartHook {
    /// Restart the device. Implementations on hardware do not return.
    fn restart(&mut self);
}

#[derive(Debug, PartialEq, Eq)]
pub enum BringUpError<E> {
    Driver(E),
    NotConnected(LinkStatus),
}

/// Connect the station and wait for an address.
///
/// Returns the last status seen if it is not [`LinkStatus::GotIp`].
pub async fn connect_station<S, D>(
    station: &mut S,
    delay: &mut D,
    wifi: &WifiConfig,
) -> Result<(), BringUpError<S::Error>>
where
    S: StationInterface,
    D: DelayNs,
{
    station.activate().await.map_err(BringUpError::Driver)?;
    station
        .connect(&wifi.ssid, &wifi.password)
        .await
        .map_err(BringUpError::Driver)?;
    station
        .disable_power_saving()
        .map_err(BringUpError::Driver)?;

    for _ in 0..MAX_STATUS_POLLS {
        if station.status().is_settled() {
            break;
        }
        log::debug!("Connecting to {} ...", wifi.ssid);
        delay.delay_ms(STATUS_POLL_INTERVAL_MS).await;
    }

    match station.status() {
        LinkStatus::GotIp => Ok(()),
        status => Err(BringUpError::NotConnected(status)),
    }
}

/// Bring the network up or restart the device.
///
/// On failure the restart hook is called once, after [`RESTART_DELAY_MS`].
/// The error is returned for hooks that do return.
pub async fn bring_up<S, D, H>(
    station: &mut S,
    delay: &mut D,
    restart: &mut H,
    wifi: &WifiConfig,
) -> Result<(), BringUpError<S::Error>>
where
    S: StationInterface,
    D: DelayNs,
    H: RestartHook,
{
    match connect_station(station, delay, wifi).await {
        Ok(()) => {
            log::info!("Connected to {}", wifi.ssid);
            Ok(())
        }
        Err(err) => {
            log::warn!("Unable to connect to {}! ({:?})", wifi.ssid, err);
            delay.delay_ms(RESTART_DELAY_MS).await;
            restart.restart();
            Err(err)
        }
    }
}
