//! Const-evaluable validation of a pin map against a chip.

use core::fmt;

use crate::chip::{Chip, PinFlags};
use crate::descriptor::{
    Bus, Gpio, I2cPins, MAX_I2C_BUSES, MAX_SPI_BUSES, PinMap, Role, Signal, SpiPins,
};

/// A pin assignment the chip cannot honour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// The number is negative or past the chip's last GPIO.
    PinOutOfRange { signal: Signal, pin: i64, chip: Chip },
    /// The number falls into a gap of the chip's GPIO numbering.
    NoSuchPin { signal: Signal, pin: Gpio, chip: Chip },
    /// An output signal sits on a pad without an output driver.
    InputOnlyPin { signal: Signal, pin: Gpio, chip: Chip },
    /// Two signals of one bus share a pin.
    DuplicatePin { first: Signal, second: Signal, pin: Gpio },
    /// The board assigns pins to a bus the chip does not have.
    BusUnavailable { bus: Bus, chip: Chip },
}

impl Violation {
    /// Short, allocation-free description, usable in const panics.
    pub const fn summary(&self) -> &'static str {
        match self {
            Violation::PinOutOfRange { .. } => "GPIO number out of range for the MCU",
            Violation::NoSuchPin { .. } => "GPIO number does not exist on the MCU",
            Violation::InputOnlyPin { .. } => "output signal assigned to an input-only GPIO",
            Violation::DuplicatePin { .. } => "two signals of one bus share a GPIO",
            Violation::BusUnavailable { .. } => "bus not available on the MCU",
        }
    }

    /// The key the diagnostic should point at.
    pub const fn signal(&self) -> Option<Signal> {
        match *self {
            Violation::PinOutOfRange { signal, .. }
            | Violation::NoSuchPin { signal, .. }
            | Violation::InputOnlyPin { signal, .. } => Some(signal),
            Violation::DuplicatePin { second, .. } => Some(second),
            Violation::BusUnavailable { .. } => None,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::PinOutOfRange { signal, pin, chip } => write!(
                f,
                "`{signal}` = {pin}: GPIO number out of range for {chip} (expected 0..={})",
                chip.profile().gpio_count - 1
            ),
            Violation::NoSuchPin { signal, pin, chip } => {
                write!(f, "`{signal}` = {}: {chip} has no {pin}", pin.number())
            }
            Violation::InputOnlyPin { signal, pin, chip } => write!(
                f,
                "`{signal}` = {}: {pin} is input-only on {chip} but {} drives the line",
                pin.number(),
                signal.role.label()
            ),
            Violation::DuplicatePin { first, second, pin } => {
                write!(f, "`{first}` and `{second}` both use {pin}")
            }
            Violation::BusUnavailable { bus, chip } => {
                write!(f, "`{bus}`: bus not available on {chip}")
            }
        }
    }
}

macro_rules! bail {
    ($result:expr) => {
        if let Err(violation) = $result {
            return Err(violation);
        }
    };
}

const fn check_pin(chip: Chip, signal: Signal, pin: Gpio) -> Result<(), Violation> {
    if pin.0 >= chip.profile().gpio_count {
        return Err(Violation::PinOutOfRange { signal, pin: pin.0 as i64, chip });
    }
    if !chip.has_pin(pin.0) {
        return Err(Violation::NoSuchPin { signal, pin, chip });
    }
    if signal.role.drives_output() && chip.pin_flags(pin.0).contains(PinFlags::INPUT_ONLY) {
        return Err(Violation::InputOnlyPin { signal, pin, chip });
    }
    Ok(())
}

const fn check_distinct(a: (Signal, Gpio), b: (Signal, Gpio)) -> Result<(), Violation> {
    if a.1.number() == b.1.number() {
        return Err(Violation::DuplicatePin { first: a.0, second: b.0, pin: b.1 });
    }
    Ok(())
}

const fn check_i2c(chip: Chip, id: u8, pins: I2cPins) -> Result<(), Violation> {
    let bus = Bus::I2c(id);
    if !chip.has_i2c(id) {
        return Err(Violation::BusUnavailable { bus, chip });
    }
    let scl = (Signal::new(bus, Role::Scl), pins.scl);
    let sda = (Signal::new(bus, Role::Sda), pins.sda);
    bail!(check_pin(chip, scl.0, scl.1));
    bail!(check_pin(chip, sda.0, sda.1));
    check_distinct(scl, sda)
}

const fn check_spi(chip: Chip, id: u8, pins: SpiPins) -> Result<(), Violation> {
    let bus = Bus::Spi(id);
    if !chip.has_spi(id) {
        return Err(Violation::BusUnavailable { bus, chip });
    }
    let mosi = (Signal::new(bus, Role::Mosi), pins.mosi);
    let miso = (Signal::new(bus, Role::Miso), pins.miso);
    let sck = (Signal::new(bus, Role::Sck), pins.sck);
    bail!(check_pin(chip, mosi.0, mosi.1));
    bail!(check_pin(chip, miso.0, miso.1));
    bail!(check_pin(chip, sck.0, sck.1));
    bail!(check_distinct(mosi, miso));
    bail!(check_distinct(mosi, sck));
    check_distinct(miso, sck)
}

/// Validates every bus of `pins` against `chip`.
///
/// Buses are checked in key order and the first violation wins. Pins shared
/// between different buses are allowed here.
pub const fn check(chip: Chip, pins: &PinMap) -> Result<(), Violation> {
    let mut id = 0;
    while id < MAX_I2C_BUSES {
        if let Some(bus) = pins.i2c[id] {
            bail!(check_i2c(chip, id as u8, bus));
        }
        id += 1;
    }
    let mut slot = 0;
    while slot < MAX_SPI_BUSES {
        if let Some(bus) = pins.spi[slot] {
            bail!(check_spi(chip, slot as u8 + 1, bus));
        }
        slot += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_board() -> PinMap {
        let mut pins = PinMap::EMPTY;
        pins.i2c[0] = Some(I2cPins::new(5, 4));
        pins.spi[0] = Some(SpiPins::new(7, 2, 6));
        pins
    }

    #[test]
    fn reference_board_is_valid() {
        assert_eq!(check(Chip::Esp32c3, &reference_board()), Ok(()));
    }

    #[test]
    fn evaluates_in_const_context() {
        const PINS: PinMap = PinMap {
            i2c: [Some(I2cPins::new(5, 4)), None],
            spi: [Some(SpiPins::new(7, 2, 6)), None],
        };
        const RESULT: Result<(), Violation> = check(Chip::Esp32c3, &PINS);
        assert!(RESULT.is_ok());
    }

    #[test]
    fn same_bus_duplicate() {
        let mut pins = reference_board();
        pins.spi[0] = Some(SpiPins::new(7, 2, 7));
        let err = check(Chip::Esp32c3, &pins).unwrap_err();
        assert_eq!(
            err,
            Violation::DuplicatePin {
                first: Signal::new(Bus::Spi(1), Role::Mosi),
                second: Signal::new(Bus::Spi(1), Role::Sck),
                pin: Gpio(7),
            }
        );
        assert_eq!(err.to_string(), "`spi1.mosi` and `spi1.sck` both use GPIO7");
    }

    #[test]
    fn i2c_duplicate() {
        let mut pins = reference_board();
        pins.i2c[0] = Some(I2cPins::new(4, 4));
        assert!(matches!(
            check(Chip::Esp32c3, &pins),
            Err(Violation::DuplicatePin { pin: Gpio(4), .. })
        ));
    }

    #[test]
    fn cross_bus_sharing_is_allowed() {
        let mut pins = reference_board();
        pins.i2c[0] = Some(I2cPins::new(6, 7));
        assert_eq!(check(Chip::Esp32c3, &pins), Ok(()));
    }

    #[test]
    fn out_of_range() {
        let mut pins = reference_board();
        pins.i2c[0] = Some(I2cPins::new(22, 4));
        let err = check(Chip::Esp32c3, &pins).unwrap_err();
        assert_eq!(
            err,
            Violation::PinOutOfRange {
                signal: Signal::new(Bus::I2c(0), Role::Scl),
                pin: 22,
                chip: Chip::Esp32c3,
            }
        );
        assert_eq!(
            err.to_string(),
            "`i2c0.scl` = 22: GPIO number out of range for ESP32C3 (expected 0..=21)"
        );
    }

    #[test]
    fn numbering_gap() {
        let mut pins = PinMap::EMPTY;
        pins.spi[0] = Some(SpiPins::new(13, 12, 20));
        assert!(matches!(
            check(Chip::Esp32, &pins),
            Err(Violation::NoSuchPin { pin: Gpio(20), chip: Chip::Esp32, .. })
        ));
    }

    #[test]
    fn input_only_pins() {
        let mut pins = PinMap::EMPTY;
        pins.spi[1] = Some(SpiPins::new(23, 36, 18));
        assert_eq!(check(Chip::Esp32, &pins), Ok(()), "MISO may be input-only");

        pins.i2c[0] = Some(I2cPins::new(18, 35));
        let err = check(Chip::Esp32, &pins).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`i2c0.sda` = 35: GPIO35 is input-only on ESP32 but SDA drives the line"
        );
    }

    #[test]
    fn unavailable_bus() {
        let mut pins = reference_board();
        pins.i2c[1] = Some(I2cPins::new(0, 1));
        let err = check(Chip::Esp32c3, &pins).unwrap_err();
        assert_eq!(err, Violation::BusUnavailable { bus: Bus::I2c(1), chip: Chip::Esp32c3 });
        assert_eq!(err.signal(), None);
        assert_eq!(err.summary(), "bus not available on the MCU");
    }
}
