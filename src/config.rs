use panel_core::config::{Config, ConfigError};

pub const HTTP_PORT: u16 = 80;
pub const HOSTNAME: &str = "projector-panel";
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");
pub const HEARTBEAT_INTERVAL_SECS: u64 = 5;

/// Load the configuration baked in at build time.
///
/// `WIFI_SSID` and `WIFI_PASSWORD` are required, `PANEL_DEBUG` and
/// `PANEL_PROJECTOR_RELAY` default to `0`.
pub fn load() -> Result<Config, ConfigError> {
    Config::from_values(
        env!("WIFI_SSID"),
        env!("WIFI_PASSWORD"),
        option_env!("PANEL_DEBUG"),
        option_env!("PANEL_PROJECTOR_RELAY"),
    )
}

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO2
    };
}
