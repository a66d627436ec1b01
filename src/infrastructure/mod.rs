//! Infrastructure layer
//!
//! `esp-hal`, `esp-radio` and `embassy-net` implementations of the seams
//! defined by `panel-core`, plus the Embassy tasks that run them.

pub mod drivers;
pub mod services;
pub mod tasks;
pub mod types;
