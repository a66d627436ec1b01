//! Wi-Fi bring-up polling and restart escalation.

mod common;

use common::{CountingRestart, MockStation, NoopDelay};
use embassy_futures::block_on;
use panel_core::{
    Config,
    bringup::{
        BringUpError, LinkStatus, MAX_STATUS_POLLS, RESTART_DELAY_MS, STATUS_POLL_INTERVAL_MS,
        bring_up,
    },
};

fn config() -> Config {
    Config::from_values("workshop", "hunter22", None, None).unwrap()
}

fn run(
    station: &mut MockStation,
) -> (Result<(), BringUpError<&'static str>>, CountingRestart, u64) {
    let mut delay = NoopDelay::default();
    let mut restart = CountingRestart::default();
    let result = block_on(bring_up(station, &mut delay, &mut restart, &config().wifi));
    (result, restart, delay.total_ms.get())
}

#[test]
fn status_codes_follow_station_convention() {
    assert_eq!(LinkStatus::Idle.code(), 0);
    assert_eq!(LinkStatus::GotIp.code(), 3);
    assert_eq!(LinkStatus::NoApFound.code(), -2);
    assert!(LinkStatus::BadAuth.is_error());
    assert!(LinkStatus::Failed.is_settled());
    assert!(LinkStatus::GotIp.is_settled());
    assert!(!LinkStatus::NoIp.is_settled());
}

#[test]
fn success_within_budget_does_not_restart() {
    let mut station = MockStation::with_statuses(&[
        LinkStatus::Idle,
        LinkStatus::Connecting,
        LinkStatus::NoIp,
        LinkStatus::GotIp,
    ]);

    let (result, restart, slept_ms) = run(&mut station);

    assert_eq!(result, Ok(()));
    assert_eq!(restart.restarts, 0);
    assert_eq!(slept_ms, 3 * u64::from(STATUS_POLL_INTERVAL_MS));
    assert!(station.activated);
    assert!(station.power_saving_disabled);
    assert_eq!(
        station.joined,
        Some(("workshop".to_owned(), "hunter22".to_owned()))
    );
}

#[test]
fn immediate_success_does_not_sleep() {
    let mut station = MockStation::with_statuses(&[LinkStatus::GotIp]);

    let (result, restart, slept_ms) = run(&mut station);

    assert_eq!(result, Ok(()));
    assert_eq!(restart.restarts, 0);
    assert_eq!(slept_ms, 0);
}

#[test]
fn exhausted_budget_restarts_once() {
    let mut station = MockStation::with_statuses(&[LinkStatus::Connecting]);

    let (result, restart, slept_ms) = run(&mut station);

    assert_eq!(
        result,
        Err(BringUpError::NotConnected(LinkStatus::Connecting))
    );
    assert_eq!(restart.restarts, 1);
    assert_eq!(
        slept_ms,
        u64::from(MAX_STATUS_POLLS) * u64::from(STATUS_POLL_INTERVAL_MS)
            + u64::from(RESTART_DELAY_MS)
    );
    assert_eq!(station.status_polls, usize::from(MAX_STATUS_POLLS) + 1);
}

#[test]
fn error_status_stops_polling_early() {
    let mut station = MockStation::with_statuses(&[LinkStatus::Connecting, LinkStatus::BadAuth]);

    let (result, restart, slept_ms) = run(&mut station);

    assert_eq!(result, Err(BringUpError::NotConnected(LinkStatus::BadAuth)));
    assert_eq!(restart.restarts, 1);
    assert_eq!(
        slept_ms,
        u64::from(STATUS_POLL_INTERVAL_MS) + u64::from(RESTART_DELAY_MS)
    );
}

#[test]
fn got_ip_after_budget_is_too_late() {
    let mut statuses = vec![LinkStatus::Connecting; usize::from(MAX_STATUS_POLLS) + 1];
    statuses.push(LinkStatus::GotIp);
    let mut station = MockStation::with_statuses(&statuses);

    let (result, restart, _) = run(&mut station);

    assert_eq!(
        result,
        Err(BringUpError::NotConnected(LinkStatus::Connecting))
    );
    assert_eq!(restart.restarts, 1);
}

#[test]
fn driver_error_restarts() {
    let mut station = MockStation::with_statuses(&[LinkStatus::GotIp]);
    station.connect_error = Some("radio not started");

    let (result, restart, slept_ms) = run(&mut station);

    assert_eq!(result, Err(BringUpError::Driver("radio not started")));
    assert_eq!(restart.restarts, 1);
    assert_eq!(slept_ms, u64::from(RESTART_DELAY_MS));
    assert_eq!(station.status_polls, 0);
}
