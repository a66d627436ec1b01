#![no_std]

//! Projector panel core
//!
//! Hardware-independent part of the panel firmware:
//! - `config` - Build-time configuration parsing
//! - `bringup` - Wi-Fi station bring-up policy with a restart escalation hook
//! - `http` - Line reader, request line parser and response writer
//! - `panel` - Routing, state changes and page rendering
//! - `projector` - RS-232 projector command relay
//!
//! Hardware is reached through `embedded-hal`, `embedded-hal-async` and
//! `embedded-io-async` traits, so the firmware plugs in `esp-hal` drivers and
//! tests plug in mocks.

pub mod bringup;
pub mod config;
pub mod http;
pub mod panel;
pub mod projector;
pub mod random;
pub mod state;

pub use config::Config;
pub use panel::{PanelController, Route};
pub use state::{LedState, PanelState};
