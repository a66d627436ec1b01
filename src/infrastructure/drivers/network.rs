use core::str::FromStr;

use embassy_net::{DhcpConfig, Runner, Stack, StackResources};
use esp_hal::peripherals::WIFI;
use esp_radio::wifi::{Config as WifiConfig, WifiController, WifiDevice};
use heapless::String;
use static_cell::make_static;

use super::random::get_seed;
use crate::config;

/// One listening socket plus DHCP and headroom
const MAX_CONNECTIONS: usize = 3;

/// Create the radio controller and the station network stack.
///
/// The stack uses DHCP with the panel hostname. The runner must be spawned
/// before the station is connected.
pub fn init_network_stack(
    wifi_device: WIFI<'static>,
) -> (
    Stack<'static>,
    Runner<'static, WifiDevice<'static>>,
    WifiController<'static>,
) {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().expect("Failed to init radio"));
    let wifi_config = WifiConfig::default();
    let (controller, interfaces) = esp_radio::wifi::new(esp_radio_ctrl, wifi_device, wifi_config)
        .expect("Failed to init wifi");
    let mut dhcp_config = DhcpConfig::default();
    let hostname = String::from_str(config::HOSTNAME).expect("Invalid hostname");
    dhcp_config.hostname = Some(hostname);

    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) =
        embassy_net::new(interfaces.sta, net_config, network_resources, get_seed());

    (stack, runner, controller)
}
