use esp_hal::uart::{Config, DataBits, Parity, StopBits};
use panel_core::projector::BAUD_RATE;

/// Serial settings of the projector's RS-232 port (9600 8N1).
pub fn projector_uart_config() -> Config {
    Config::default()
        .with_baudrate(BAUD_RATE)
        .with_data_bits(DataBits::_8)
        .with_parity(Parity::None)
        .with_stop_bits(StopBits::_1)
}
