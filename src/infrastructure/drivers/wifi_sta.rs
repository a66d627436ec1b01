use embassy_net::Stack;
use esp_radio::wifi::{
    AuthMethod,
    ClientConfig,
    ModeConfig,
    PowerSaveMode,
    WifiController,
    WifiError,
};
use panel_core::bringup::{LinkStatus, StationInterface};

/// Wi-Fi station backed by the `esp-radio` controller and the `embassy-net`
/// stack.
///
/// The controller must stay alive for as long as the network is used.
pub struct EspStation {
    controller: WifiController<'static>,
    stack: Stack<'static>,
    failure: Option<LinkStatus>,
}

impl EspStation {
    pub fn new(controller: WifiController<'static>, stack: Stack<'static>) -> Self {
        Self {
            controller,
            stack,
            failure: None,
        }
    }
}

impl StationInterface for EspStation {
    type Error = WifiError;

    async fn activate(&mut self) -> Result<(), WifiError> {
        if matches!(self.controller.is_started(), Ok(true)) {
            return Ok(());
        }
        self.controller
            .set_config(&ModeConfig::Client(ClientConfig::default()))?;
        self.controller.start_async().await
    }

    async fn connect(&mut self, ssid: &str, password: &str) -> Result<(), WifiError> {
        let client_config = if password.is_empty() {
            ClientConfig::default()
                .with_ssid(ssid.into())
                .with_auth_method(AuthMethod::None)
        } else {
            ClientConfig::default()
                .with_ssid(ssid.into())
                .with_password(password.into())
        };
        self.controller
            .set_config(&ModeConfig::Client(client_config))?;

        // A rejected association is a link status, not a driver fault
        self.failure = None;
        if let Err(e) = self.controller.connect_async().await {
            log::warn!("network: error connecting: {:?}", e);
            self.failure = Some(LinkStatus::Failed);
        }
        Ok(())
    }

    fn disable_power_saving(&mut self) -> Result<(), WifiError> {
        self.controller.set_power_saving(PowerSaveMode::None)
    }

    fn status(&mut self) -> LinkStatus {
        if let Some(failure) = self.failure {
            return failure;
        }
        if self.stack.config_v4().is_some() {
            LinkStatus::GotIp
        } else if matches!(self.controller.is_connected(), Ok(true)) {
            LinkStatus::NoIp
        } else {
            LinkStatus::Connecting
        }
    }
}
