//! Board descriptor types shared by the firmware crate and the build-time
//! loader.
//!
//! Everything here is `no_std` and the validation entry point, [`check`], is
//! a `const fn` so firmware can reject an inconsistent descriptor while it
//! compiles.

#![cfg_attr(not(test), no_std)]

pub mod check;
pub mod chip;
pub mod console;
pub mod descriptor;

pub use check::{Violation, check};
pub use chip::{Chip, ChipProfile, PinFlags};
pub use console::ReplRoute;
pub use descriptor::{
    BoardDescriptor, Bus, Gpio, I2cPins, MAX_I2C_BUSES, MAX_SPI_BUSES, PinMap, Role, Signal,
    SpiPins, spi_slot,
};
