use embassy_time::{Duration, Timer};
use esp_println::println;

use crate::config::HEARTBEAT_INTERVAL_SECS;

/// Liveness marker, printed only in debug mode
#[embassy_executor::task]
pub async fn heartbeat_task(debug: bool) {
    loop {
        Timer::after(Duration::from_secs(HEARTBEAT_INTERVAL_SECS)).await;
        if debug {
            println!(".");
        }
    }
}
