use panel_core::bringup::RestartHook;

/// Restarts the chip through a software reset.
pub struct SoftwareReset;

impl RestartHook for SoftwareReset {
    fn restart(&mut self) {
        esp_hal::system::software_reset();
    }
}
