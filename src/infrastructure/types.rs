use embassy_time::Delay;
use esp_hal::{Async, gpio::Output, uart::Uart};
use panel_core::{PanelController, projector::ProjectorRelay};

use super::drivers::HardwareRng;

pub type ProjectorLink = ProjectorRelay<Uart<'static, Async>, Delay>;

pub type PanelHttpController =
    PanelController<Output<'static>, HardwareRng, Uart<'static, Async>, Delay>;
