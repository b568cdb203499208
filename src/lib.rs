//! Board configuration for the firmware build.
//!
//! The board is picked with a `target-board-*` feature. `build.rs` loads the
//! matching file from `boards/`, rejects it if the MCU cannot honour it, and
//! generates the constants exposed by [`platform::config`]. Driver setup code
//! reads them through [`platform::CurrentBoard`] and never sees a runtime
//! value.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

pub mod console;
pub mod platform;

pub use board_core::{Bus, Chip, Gpio, I2cPins, PinMap, ReplRoute, Role, Signal, SpiPins};
pub use platform::{CurrentBoard, board::Board};
