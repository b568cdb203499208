//! Build-time loader for board files.
//!
//! A board file is a small TOML document naming the board, its MCU, the UART
//! REPL switch and the pins of each peripheral bus. The loader resolves
//! omitted keys to the MCU's documented defaults, rejects anything the chip
//! cannot honour, and renders the result for the firmware build.

#[macro_use]
extern crate log;

pub mod codegen;
mod error;
mod lint;
mod load;
pub mod raw;
mod resolve;

pub use error::ConfigError;
pub use lint::{Advisory, advisories};
pub use load::{Loader, env_var_name, env_var_names, watched_env_vars};
pub use raw::RECOGNIZED_KEYS;
