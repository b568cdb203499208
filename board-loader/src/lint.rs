//! Findings that do not stop the build but deserve a look.

use std::fmt;

use board_core::{BoardDescriptor, Chip, Gpio, PinFlags, ReplRoute, Signal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// The pin is sampled at reset; the attached device must not pull it
    /// the wrong way while the chip boots.
    StrappingPin { signal: Signal, pin: Gpio, chip: Chip },
    /// The pin is wired to the flash or PSRAM on most modules.
    FlashPin { signal: Signal, pin: Gpio, chip: Chip },
    /// The pin carries the native USB console.
    UsbPin { signal: Signal, pin: Gpio, chip: Chip },
    /// Signals of two different buses share a pin.
    SharedPin { first: Signal, second: Signal, pin: Gpio },
    /// Neither a UART nor a USB console is reachable.
    NoConsole { chip: Chip },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::StrappingPin { signal, pin, chip } => {
                write!(f, "`{signal}` uses {pin}, a strapping pin on {chip}")
            }
            Advisory::FlashPin { signal, pin, chip } => {
                write!(f, "`{signal}` uses {pin}, wired to flash on most {chip} modules")
            }
            Advisory::UsbPin { signal, pin, chip } => {
                write!(f, "`{signal}` uses {pin}, which {chip} needs for its USB console")
            }
            Advisory::SharedPin { first, second, pin } => {
                write!(f, "`{first}` and `{second}` share {pin}")
            }
            Advisory::NoConsole { chip } => write!(
                f,
                "no REPL console: {chip} has no native USB and the UART REPL is disabled"
            ),
        }
    }
}

pub fn advisories<S: AsRef<str>>(board: &BoardDescriptor<S>) -> Vec<Advisory> {
    let chip = board.mcu;
    let signals: Vec<(Signal, Gpio)> = board.pins.signals().collect();
    let mut found = Vec::new();

    for &(signal, pin) in &signals {
        let flags = chip.pin_flags(pin.number());
        if flags.contains(PinFlags::STRAPPING) {
            found.push(Advisory::StrappingPin { signal, pin, chip });
        }
        if flags.contains(PinFlags::FLASH) {
            found.push(Advisory::FlashPin { signal, pin, chip });
        }
        if flags.contains(PinFlags::USB) && chip.profile().native_usb {
            found.push(Advisory::UsbPin { signal, pin, chip });
        }
    }

    for (i, &(first, a)) in signals.iter().enumerate() {
        for &(second, b) in &signals[i + 1..] {
            if a == b && first.bus != second.bus {
                found.push(Advisory::SharedPin { first, second, pin: a });
            }
        }
    }

    if !ReplRoute::resolve(chip, board.uart_repl).is_reachable() {
        found.push(Advisory::NoConsole { chip });
    }

    found
}
