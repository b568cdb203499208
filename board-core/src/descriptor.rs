//! Board descriptor types.

use core::fmt;

use crate::chip::Chip;

/// Number of I2C bus slots a descriptor can hold (`i2c0`, `i2c1`).
pub const MAX_I2C_BUSES: usize = 2;

/// Number of SPI bus slots a descriptor can hold (`spi1`, `spi2`).
///
/// SPI0 drives the flash chip on every supported MCU and is never exposed,
/// so slot 0 holds bus id 1.
pub const MAX_SPI_BUSES: usize = 2;

/// A GPIO number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gpio(pub u8);

impl Gpio {
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Gpio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

/// Pin assignment of one I2C bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct I2cPins {
    pub scl: Gpio,
    pub sda: Gpio,
}

impl I2cPins {
    pub const fn new(scl: u8, sda: u8) -> Self {
        Self { scl: Gpio(scl), sda: Gpio(sda) }
    }
}

/// Pin assignment of one SPI bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpiPins {
    pub mosi: Gpio,
    pub miso: Gpio,
    pub sck: Gpio,
}

impl SpiPins {
    pub const fn new(mosi: u8, miso: u8, sck: u8) -> Self {
        Self { mosi: Gpio(mosi), miso: Gpio(miso), sck: Gpio(sck) }
    }
}

/// A peripheral bus, qualified by its index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bus {
    I2c(u8),
    Spi(u8),
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bus::I2c(id) => write!(f, "i2c{id}"),
            Bus::Spi(id) => write!(f, "spi{id}"),
        }
    }
}

/// The logical role a pin plays on its bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Scl,
    Sda,
    Mosi,
    Miso,
    Sck,
}

impl Role {
    /// Key of this role inside a bus table.
    pub const fn key(self) -> &'static str {
        match self {
            Role::Scl => "scl",
            Role::Sda => "sda",
            Role::Mosi => "mosi",
            Role::Miso => "miso",
            Role::Sck => "sck",
        }
    }

    /// Signal name as printed on schematics.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Scl => "SCL",
            Role::Sda => "SDA",
            Role::Mosi => "MOSI",
            Role::Miso => "MISO",
            Role::Sck => "SCK",
        }
    }

    /// Whether the peripheral ever drives this line.
    ///
    /// I2C lines are open-drain but still need an output driver.
    pub const fn drives_output(self) -> bool {
        !matches!(self, Role::Miso)
    }
}

/// One signal of one bus, e.g. `i2c0.scl`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signal {
    pub bus: Bus,
    pub role: Role,
}

impl Signal {
    pub const fn new(bus: Bus, role: Role) -> Self {
        Self { bus, role }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.bus, self.role.key())
    }
}

/// Pin assignments of every bus a board exposes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PinMap {
    /// Indexed by I2C bus id.
    pub i2c: [Option<I2cPins>; MAX_I2C_BUSES],
    /// Indexed by SPI bus id minus one.
    pub spi: [Option<SpiPins>; MAX_SPI_BUSES],
}

impl PinMap {
    pub const EMPTY: PinMap = PinMap {
        i2c: [None; MAX_I2C_BUSES],
        spi: [None; MAX_SPI_BUSES],
    };

    pub const fn i2c(&self, id: u8) -> Option<I2cPins> {
        if (id as usize) < MAX_I2C_BUSES {
            self.i2c[id as usize]
        } else {
            None
        }
    }

    pub const fn spi(&self, id: u8) -> Option<SpiPins> {
        match spi_slot(id) {
            Some(slot) => self.spi[slot],
            None => None,
        }
    }

    /// Every assigned signal, I2C buses first, in key order.
    pub fn signals(&self) -> impl Iterator<Item = (Signal, Gpio)> + '_ {
        let i2c = self.i2c.iter().enumerate().flat_map(|(id, pins)| {
            let bus = Bus::I2c(id as u8);
            pins.iter().flat_map(move |p| {
                [
                    (Signal::new(bus, Role::Scl), p.scl),
                    (Signal::new(bus, Role::Sda), p.sda),
                ]
            })
        });
        let spi = self.spi.iter().enumerate().flat_map(|(slot, pins)| {
            let bus = Bus::Spi(slot as u8 + 1);
            pins.iter().flat_map(move |p| {
                [
                    (Signal::new(bus, Role::Mosi), p.mosi),
                    (Signal::new(bus, Role::Miso), p.miso),
                    (Signal::new(bus, Role::Sck), p.sck),
                ]
            })
        });
        i2c.chain(spi)
    }
}

/// Maps an SPI bus id to its slot in [`PinMap::spi`].
pub const fn spi_slot(id: u8) -> Option<usize> {
    if id >= 1 && (id as usize) <= MAX_SPI_BUSES {
        Some(id as usize - 1)
    } else {
        None
    }
}

/// The full description of one board variant.
///
/// Firmware sees `BoardDescriptor<&'static str>` built from generated
/// constants; the loader works with owned strings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardDescriptor<S = &'static str> {
    pub name: S,
    pub mcu: Chip,
    pub uart_repl: bool,
    pub pins: PinMap,
}

impl<S: AsRef<str>> BoardDescriptor<S> {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn mcu_name(&self) -> &'static str {
        self.mcu.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_keys() {
        let scl = Signal::new(Bus::I2c(0), Role::Scl);
        let sck = Signal::new(Bus::Spi(1), Role::Sck);
        assert_eq!(scl.to_string(), "i2c0.scl");
        assert_eq!(sck.to_string(), "spi1.sck");
        assert_eq!(Gpio(7).to_string(), "GPIO7");
    }

    #[test]
    fn signals_follow_key_order() {
        let mut pins = PinMap::EMPTY;
        pins.i2c[0] = Some(I2cPins::new(5, 4));
        pins.spi[0] = Some(SpiPins::new(7, 2, 6));

        let seen: Vec<_> = pins
            .signals()
            .map(|(signal, gpio)| (signal.to_string(), gpio.number()))
            .collect();
        assert_eq!(
            seen,
            [
                ("i2c0.scl".to_string(), 5),
                ("i2c0.sda".to_string(), 4),
                ("spi1.mosi".to_string(), 7),
                ("spi1.miso".to_string(), 2),
                ("spi1.sck".to_string(), 6),
            ]
        );
    }

    #[test]
    fn spi_ids_start_at_one() {
        let mut pins = PinMap::EMPTY;
        pins.spi[1] = Some(SpiPins::new(23, 19, 18));
        assert_eq!(pins.spi(2), Some(SpiPins::new(23, 19, 18)));
        assert_eq!(pins.spi(1), None);
        assert_eq!(pins.spi(0), None);
        assert_eq!(pins.spi(3), None);
        assert_eq!(pins.i2c(7), None);
    }
}
