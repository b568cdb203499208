//! Platform module - the board the firmware is built for.
//!
//! The board is selected with a `target-board-*` feature at build time; its
//! constants live in [`config`] and are re-checked here while compiling, so
//! an inconsistent descriptor never produces an artifact.

use core::fmt;

use board_core::{Chip, PinMap, check};
use static_assertions::const_assert;

pub mod board;
pub mod config;

use board::Board;

/// The board selected by the `target-board-*` feature.
pub struct CurrentBoard;

impl Board for CurrentBoard {
    const NAME: &'static str = config::BOARD_NAME;
    const MCU: Chip = config::MCU;
    const ENABLE_UART_REPL: bool = config::ENABLE_UART_REPL;
    const PINS: PinMap = config::PINS;
}

const_assert!(!config::BOARD_NAME.is_empty());

const _: () = match check(CurrentBoard::MCU, &CurrentBoard::PINS) {
    Ok(()) => {}
    Err(violation) => panic!("{}", violation.summary()),
};

/// Identifies the build in version banners, e.g. `ESP32C3 module with ESP32C3`.
pub struct Banner;

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {}", CurrentBoard::NAME, config::MCU_NAME)
    }
}

pub const fn banner() -> Banner {
    Banner
}
