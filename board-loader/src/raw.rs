//! On-disk shape of a board file.

use std::fmt;

use board_core::{BoardDescriptor, I2cPins, SpiPins};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Every key a board file may contain, in file order.
///
/// Bus tables are further restricted to the buses of the board's MCU.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "board.name",
    "board.mcu",
    "board.enable_uart_repl",
    "i2c0.scl",
    "i2c0.sda",
    "i2c1.scl",
    "i2c1.sda",
    "spi1.mosi",
    "spi1.miso",
    "spi1.sck",
    "spi2.mosi",
    "spi2.miso",
    "spi2.sck",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BoardFile {
    pub board: BoardSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i2c0: Option<I2cSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub i2c1: Option<I2cSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spi1: Option<SpiSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spi2: Option<SpiSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BoardSection {
    pub name: String,
    pub mcu: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_uart_repl: Option<Flag>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct I2cSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scl: Option<PinNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sda: Option<PinNumber>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpiSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mosi: Option<PinNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miso: Option<PinNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sck: Option<PinNumber>,
}

impl BoardFile {
    pub fn i2c(&self, id: u8) -> Option<I2cSection> {
        match id {
            0 => self.i2c0,
            1 => self.i2c1,
            _ => None,
        }
    }

    pub fn spi(&self, id: u8) -> Option<SpiSection> {
        match id {
            1 => self.spi1,
            2 => self.spi2,
            _ => None,
        }
    }

    /// Writes every resolved value out explicitly, defaults included.
    pub fn from_descriptor<S: AsRef<str>>(board: &BoardDescriptor<S>) -> Self {
        let i2c = |id: u8| board.pins.i2c(id).map(I2cSection::from);
        let spi = |id: u8| board.pins.spi(id).map(SpiSection::from);
        BoardFile {
            board: BoardSection {
                name: board.name().to_string(),
                mcu: board.mcu_name().to_string(),
                enable_uart_repl: Some(Flag(board.uart_repl)),
            },
            i2c0: i2c(0),
            i2c1: i2c(1),
            spi1: spi(1),
            spi2: spi(2),
        }
    }
}

impl From<I2cPins> for I2cSection {
    fn from(pins: I2cPins) -> Self {
        I2cSection {
            scl: Some(pins.scl.into()),
            sda: Some(pins.sda.into()),
        }
    }
}

impl From<SpiPins> for SpiSection {
    fn from(pins: SpiPins) -> Self {
        SpiSection {
            mosi: Some(pins.mosi.into()),
            miso: Some(pins.miso.into()),
            sck: Some(pins.sck.into()),
        }
    }
}

/// A 0/1 switch. `true` and `false` are accepted as well.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Flag(pub bool);

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagVisitor;

        impl Visitor<'_> for FlagVisitor {
            type Value = Flag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("0, 1, true or false")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Flag, E> {
                Ok(Flag(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Flag, E> {
                match v {
                    0 => Ok(Flag(false)),
                    1 => Ok(Flag(true)),
                    _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
                }
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Flag, E> {
                match v {
                    0 => Ok(Flag(false)),
                    1 => Ok(Flag(true)),
                    _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0 as i64)
    }
}

/// A GPIO number as written, before it is checked against a chip.
///
/// Kept signed so negative numbers reach the range check and get a
/// diagnostic of their own instead of a type error.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PinNumber(pub i64);

impl From<board_core::Gpio> for PinNumber {
    fn from(gpio: board_core::Gpio) -> Self {
        PinNumber(gpio.number().into())
    }
}

impl<'de> Deserialize<'de> for PinNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PinVisitor;

        impl Visitor<'_> for PinVisitor {
            type Value = PinNumber;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a GPIO number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PinNumber, E> {
                Ok(PinNumber(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PinNumber, E> {
                i64::try_from(v)
                    .map(PinNumber)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
            }
        }

        deserializer.deserialize_any(PinVisitor)
    }
}

impl Serialize for PinNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}
