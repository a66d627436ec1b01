use embassy_time::Delay;
use esp_hal::{Async, gpio::Output, uart::Uart};
use panel_core::{Config, PanelController, projector::ProjectorRelay};

use crate::infrastructure::{
    drivers::HardwareRng,
    types::{PanelHttpController, ProjectorLink},
};

/// Assemble the panel controller from its peripherals.
///
/// The controller is owned by the HTTP server task. Serving several clients
/// at once would need it behind an `embassy_sync` mutex.
pub fn init_panel_controller(
    led: Output<'static>,
    projector_uart: Uart<'static, Async>,
    config: &Config,
) -> PanelHttpController {
    let projector: ProjectorLink = ProjectorRelay::new(projector_uart, Delay, config.debug);
    PanelController::new(led, HardwareRng::new(), projector, config.projector_relay)
}
