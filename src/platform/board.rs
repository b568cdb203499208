//! Board abstraction trait.
//!
//! This trait defines the interface every board description provides.

use board_core::{BoardDescriptor, Chip, I2cPins, PinMap, ReplRoute, SpiPins};

/// Board-specific configuration trait.
pub trait Board {
    /// Board name.
    const NAME: &'static str;

    /// MCU the board is built around.
    const MCU: Chip;

    /// Whether the REPL is exposed on the UART.
    const ENABLE_UART_REPL: bool;

    /// Pins of every peripheral bus the MCU provides.
    const PINS: PinMap;

    /// The same values as one record.
    const DESCRIPTOR: BoardDescriptor = BoardDescriptor {
        name: Self::NAME,
        mcu: Self::MCU,
        uart_repl: Self::ENABLE_UART_REPL,
        pins: Self::PINS,
    };

    const REPL: ReplRoute = ReplRoute::resolve(Self::MCU, Self::ENABLE_UART_REPL);

    fn i2c(id: u8) -> Option<I2cPins> {
        Self::PINS.i2c(id)
    }

    fn spi(id: u8) -> Option<SpiPins> {
        Self::PINS.spi(id)
    }

    /// Logs the board identity and pin map.
    fn init() {
        info!("Board: {} with {}", Self::NAME, Self::MCU);
        for (signal, pin) in Self::PINS.signals() {
            debug!("    {signal}: {pin}");
        }
        info!(
            "REPL console: uart={} usb={}",
            Self::REPL.uart,
            Self::REPL.usb
        );
    }
}
