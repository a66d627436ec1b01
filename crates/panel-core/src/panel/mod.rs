mod page;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_io::ReadReady;
use embedded_io_async::{Read, Write};

pub use page::{PAGE_CAPACITY, Page, render_page};

use crate::{
    http::{ContentType, HttpConnection, HttpHandler, HttpResult, ResponseHeaders, Transport},
    projector::{ProjectorCommand, ProjectorRelay},
    random::{RandomSource, draw_value},
    state::{LedState, PanelState},
};

/// Panel action selected by the request target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    LightOn,
    LightOff,
    FetchValue,
    /// Any other target. The page is served without changes.
    Other,
}

impl Route {
    /// Match the request target by suffix; the first matching rule wins.
    pub fn from_target(target: &str) -> Self {
        if target.ends_with("/lighton?") {
            Route::LightOn
        } else if target.ends_with("/lightoff?") {
            Route::LightOff
        } else if target.ends_with("/value?") {
            Route::FetchValue
        } else {
            Route::Other
        }
    }
}

/// Owns the panel state and the peripherals it drives.
pub struct PanelController<P, R, S, D> {
    state: PanelState,
    led: P,
    rng: R,
    projector: ProjectorRelay<S, D>,
    relay_light: bool,
}

impl<P, R, S, D> PanelController<P, R, S, D>
where
    P: OutputPin,
    R: RandomSource,
    S: Read + Write + ReadReady,
    D: DelayNs,
{
    /// Create the controller with the LED off.
    ///
    /// With `relay_light` set, light changes are also sent to the projector.
    pub fn new(led: P, rng: R, projector: ProjectorRelay<S, D>, relay_light: bool) -> Self {
        let mut controller = Self {
            state: PanelState::default(),
            led,
            rng,
            projector,
            relay_light,
        };
        controller.drive_led();
        controller
    }

    pub const fn state(&self) -> PanelState {
        self.state
    }

    /// Apply a route to the state and peripherals.
    pub async fn apply(&mut self, route: Route) -> PanelState {
        match route {
            Route::LightOn => {
                log::info!("LED on");
                self.set_led(LedState::On).await;
            }
            Route::LightOff => {
                log::info!("LED off");
                self.set_led(LedState::Off).await;
            }
            Route::FetchValue => {
                self.state.last_value = draw_value(&mut self.rng);
                log::info!("Fetched value {}", self.state.last_value);
            }
            Route::Other => {}
        }
        self.state
    }

    async fn set_led(&mut self, led: LedState) {
        self.state.led = led;
        self.drive_led();

        if self.relay_light {
            let command = match led {
                LedState::On => ProjectorCommand::PowerOn,
                LedState::Off => ProjectorCommand::PowerOff,
            };
            if let Err(e) = self.projector.send(command.as_str()).await {
                log::warn!("projector: relay failed: {:?}", e);
            }
        }
    }

    fn drive_led(&mut self) {
        let result = if self.state.led.is_on() {
            self.led.set_high()
        } else {
            self.led.set_low()
        };
        if let Err(e) = result {
            log::warn!("led: failed to drive pin: {:?}", e);
        }
    }
}

impl<P, R, S, D> HttpHandler for PanelController<P, R, S, D>
where
    P: OutputPin,
    R: RandomSource,
    S: Read + Write + ReadReady,
    D: DelayNs,
{
    async fn handle_request<T: Transport>(&mut self, conn: HttpConnection<T>) -> HttpResult {
        let mut conn = conn;
        log::info!("Client connected");

        let request = match conn.read_request().await {
            Ok(request) => request,
            Err(e) => {
                // The read error is the one reported
                let _ = conn.close().await;
                log::info!("Client disconnected");
                return Err(e);
            }
        };
        log::info!("Request: {}", request.target);

        let state = self.apply(Route::from_target(&request.target)).await;
        let page = render_page(&state)?;
        let headers = ResponseHeaders::success().with_content_type(ContentType::TextHtml);
        conn.write_response(&headers, page.as_bytes()).await?;
        conn.close().await?;

        log::info!("Client disconnected");
        Ok(())
    }
}
