mod network;
mod random;
mod system;
mod uart;
pub mod wifi_sta;

pub use network::init_network_stack;
pub use random::HardwareRng;
pub use system::SoftwareReset;
pub use uart::projector_uart_config;
pub use wifi_sta::EspStation;
