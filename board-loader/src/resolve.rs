//! Turns a parsed board file into a checked descriptor.

use board_core::{
    BoardDescriptor, Bus, Chip, Gpio, I2cPins, MAX_I2C_BUSES, MAX_SPI_BUSES, PinMap, Role, Signal,
    SpiPins, Violation, check,
};

use crate::error::ConfigError;
use crate::raw::{BoardFile, PinNumber};

pub(crate) fn resolve(
    file: BoardFile,
    origin: &str,
) -> Result<BoardDescriptor<String>, ConfigError> {
    if file.board.name.trim().is_empty() {
        return Err(ConfigError::Invalid {
            origin: origin.to_string(),
            key: "board.name".to_string(),
            reason: "board name must not be empty".to_string(),
        });
    }

    let mcu = Chip::from_name(&file.board.mcu).ok_or_else(|| ConfigError::Invalid {
        origin: origin.to_string(),
        key: "board.mcu".to_string(),
        reason: format!(
            "unknown MCU `{}` (expected one of {})",
            file.board.mcu,
            Chip::ALL.map(Chip::name).join(", ")
        ),
    })?;
    let profile = mcu.profile();

    let uart_repl = match file.board.enable_uart_repl {
        Some(flag) => flag.0,
        None => {
            debug!(
                "{origin}: board.enable_uart_repl not set, using the {mcu} default ({})",
                profile.uart_repl_default as u8
            );
            profile.uart_repl_default
        }
    };

    let mut pins = PinMap::EMPTY;

    for id in 0..MAX_I2C_BUSES as u8 {
        let section = file.i2c(id);
        let Some(defaults) = profile.defaults.i2c(id) else {
            reject_bus(section.is_some(), Bus::I2c(id), mcu, origin)?;
            continue;
        };
        let section = section.unwrap_or_default();
        let bus = Bus::I2c(id);
        pins.i2c[id as usize] = Some(I2cPins {
            scl: pin(mcu, Signal::new(bus, Role::Scl), section.scl, defaults.scl, origin)?,
            sda: pin(mcu, Signal::new(bus, Role::Sda), section.sda, defaults.sda, origin)?,
        });
    }

    for slot in 0..MAX_SPI_BUSES {
        let id = slot as u8 + 1;
        let section = file.spi(id);
        let Some(defaults) = profile.defaults.spi(id) else {
            reject_bus(section.is_some(), Bus::Spi(id), mcu, origin)?;
            continue;
        };
        let section = section.unwrap_or_default();
        let bus = Bus::Spi(id);
        pins.spi[slot] = Some(SpiPins {
            mosi: pin(mcu, Signal::new(bus, Role::Mosi), section.mosi, defaults.mosi, origin)?,
            miso: pin(mcu, Signal::new(bus, Role::Miso), section.miso, defaults.miso, origin)?,
            sck: pin(mcu, Signal::new(bus, Role::Sck), section.sck, defaults.sck, origin)?,
        });
    }

    check(mcu, &pins).map_err(|violation| ConfigError::Pins {
        origin: origin.to_string(),
        violation,
    })?;

    Ok(BoardDescriptor {
        name: file.board.name,
        mcu,
        uart_repl,
        pins,
    })
}

/// A bus table for a bus the chip lacks is not a recognized key.
fn reject_bus(present: bool, bus: Bus, chip: Chip, origin: &str) -> Result<(), ConfigError> {
    if present {
        return Err(ConfigError::UnknownKey {
            origin: origin.to_string(),
            key: bus.to_string(),
            detail: Some(format!("{chip} has no {bus} bus")),
        });
    }
    Ok(())
}

fn pin(
    chip: Chip,
    signal: Signal,
    value: Option<PinNumber>,
    default: Gpio,
    origin: &str,
) -> Result<Gpio, ConfigError> {
    let Some(PinNumber(number)) = value else {
        debug!("{origin}: {signal} not set, using the {chip} default {default}");
        return Ok(default);
    };
    u8::try_from(number)
        .ok()
        .filter(|n| *n < chip.profile().gpio_count)
        .map(Gpio)
        .ok_or_else(|| ConfigError::Pins {
            origin: origin.to_string(),
            violation: Violation::PinOutOfRange {
                signal,
                pin: number,
                chip,
            },
        })
}
