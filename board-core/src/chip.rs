//! Chip profiles.
//!
//! A profile records what the build needs to know about one silicon family:
//! which GPIO numbers exist, what each pin is wired to inside the package,
//! which peripheral buses the firmware exposes and the pins those buses use
//! when a board file does not name them.

use core::fmt;

use bitflags::bitflags;

use crate::descriptor::{I2cPins, PinMap, SpiPins};

bitflags! {
    /// Capabilities and package-level wiring of a single GPIO.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PinFlags: u8 {
        /// The pad has no output driver.
        const INPUT_ONLY = 1 << 0;
        /// Sampled at reset to select the boot mode.
        const STRAPPING = 1 << 1;
        /// Wired to the SPI flash or PSRAM on common modules.
        const FLASH = 1 << 2;
        /// Used by the on-chip USB PHY.
        const USB = 1 << 3;
    }
}

/// Supported MCU families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Chip {
    Esp32,
    Esp32c3,
    Esp32s3,
}

/// Static description of one MCU family.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChipProfile {
    /// Canonical MCU name, as written in board files.
    pub name: &'static str,
    /// GPIO numbers are `0..gpio_count`, minus the numbering gaps.
    pub gpio_count: u8,
    /// I2C bus ids are `0..i2c_buses`.
    pub i2c_buses: u8,
    /// SPI bus ids are `1..=spi_buses`.
    pub spi_buses: u8,
    /// Whether the chip has a USB console of its own.
    pub native_usb: bool,
    /// Value of the UART REPL flag when a board file omits it.
    pub uart_repl_default: bool,
    /// Bus pins used when a board file omits them.
    pub defaults: PinMap,
}

const ESP32: ChipProfile = ChipProfile {
    name: "ESP32",
    gpio_count: 40,
    i2c_buses: 2,
    spi_buses: 2,
    native_usb: false,
    uart_repl_default: true,
    defaults: PinMap {
        i2c: [Some(I2cPins::new(18, 19)), Some(I2cPins::new(25, 26))],
        // HSPI and VSPI IO_MUX pins.
        spi: [Some(SpiPins::new(13, 12, 14)), Some(SpiPins::new(23, 19, 18))],
    },
};

const ESP32C3: ChipProfile = ChipProfile {
    name: "ESP32C3",
    gpio_count: 22,
    i2c_buses: 1,
    spi_buses: 1,
    native_usb: true,
    uart_repl_default: false,
    defaults: PinMap {
        i2c: [Some(I2cPins::new(9, 8)), None],
        // FSPI IO_MUX pins.
        spi: [Some(SpiPins::new(7, 2, 6)), None],
    },
};

const ESP32S3: ChipProfile = ChipProfile {
    name: "ESP32S3",
    gpio_count: 49,
    i2c_buses: 2,
    spi_buses: 2,
    native_usb: true,
    uart_repl_default: false,
    defaults: PinMap {
        i2c: [Some(I2cPins::new(9, 8)), Some(I2cPins::new(7, 6))],
        spi: [Some(SpiPins::new(11, 13, 12)), Some(SpiPins::new(35, 37, 36))],
    },
};

impl Chip {
    pub const ALL: [Chip; 3] = [Chip::Esp32, Chip::Esp32c3, Chip::Esp32s3];

    pub const fn profile(self) -> &'static ChipProfile {
        match self {
            Chip::Esp32 => &ESP32,
            Chip::Esp32c3 => &ESP32C3,
            Chip::Esp32s3 => &ESP32S3,
        }
    }

    pub const fn name(self) -> &'static str {
        self.profile().name
    }

    /// Looks up a chip by MCU name.
    ///
    /// Case and `-`/`_` separators are ignored, so `esp32-c3` names the
    /// same chip as `ESP32C3`.
    pub fn from_name(name: &str) -> Option<Chip> {
        let normalized = name.bytes().filter(|b| !matches!(b, b'-' | b'_'));
        Chip::ALL.into_iter().find(|chip| {
            normalized
                .clone()
                .map(|b| b.to_ascii_uppercase())
                .eq(chip.name().bytes())
        })
    }

    /// Whether `pin` is bonded out on this chip.
    pub const fn has_pin(self, pin: u8) -> bool {
        if pin >= self.profile().gpio_count {
            return false;
        }
        match self {
            Chip::Esp32 => !matches!(pin, 20 | 24 | 28..=31),
            Chip::Esp32c3 => true,
            Chip::Esp32s3 => !matches!(pin, 22..=25),
        }
    }

    pub const fn pin_flags(self, pin: u8) -> PinFlags {
        match self {
            Chip::Esp32 => match pin {
                0 | 2 | 5 | 12 | 15 => PinFlags::STRAPPING,
                6..=11 => PinFlags::FLASH,
                34..=39 => PinFlags::INPUT_ONLY,
                _ => PinFlags::empty(),
            },
            Chip::Esp32c3 => match pin {
                2 | 8 | 9 => PinFlags::STRAPPING,
                12..=17 => PinFlags::FLASH,
                18 | 19 => PinFlags::USB,
                _ => PinFlags::empty(),
            },
            Chip::Esp32s3 => match pin {
                0 | 3 | 45 | 46 => PinFlags::STRAPPING,
                19 | 20 => PinFlags::USB,
                26..=32 => PinFlags::FLASH,
                _ => PinFlags::empty(),
            },
        }
    }

    pub const fn has_i2c(self, id: u8) -> bool {
        id < self.profile().i2c_buses
    }

    pub const fn has_spi(self, id: u8) -> bool {
        id >= 1 && id <= self.profile().spi_buses
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check;

    #[test]
    fn lookup_by_name() {
        assert_eq!(Chip::from_name("ESP32C3"), Some(Chip::Esp32c3));
        assert_eq!(Chip::from_name("esp32-c3"), Some(Chip::Esp32c3));
        assert_eq!(Chip::from_name("ESP32_S3"), Some(Chip::Esp32s3));
        assert_eq!(Chip::from_name("esp32"), Some(Chip::Esp32));
        assert_eq!(Chip::from_name("ESP32C6"), None);
        assert_eq!(Chip::from_name("ESP32C"), None);
        assert_eq!(Chip::from_name(""), None);
    }

    #[test]
    fn defaults_pass_check() {
        for chip in Chip::ALL {
            assert_eq!(check(chip, &chip.profile().defaults), Ok(()), "{chip}");
        }
    }

    #[test]
    fn defaults_cover_every_bus() {
        for chip in Chip::ALL {
            let defaults = chip.profile().defaults;
            for id in 0..4 {
                assert_eq!(defaults.i2c(id).is_some(), chip.has_i2c(id), "{chip} i2c{id}");
                assert_eq!(defaults.spi(id).is_some(), chip.has_spi(id), "{chip} spi{id}");
            }
        }
    }

    #[test]
    fn numbering_gaps() {
        assert!(Chip::Esp32.has_pin(19));
        assert!(!Chip::Esp32.has_pin(20));
        assert!(!Chip::Esp32.has_pin(30));
        assert!(Chip::Esp32.has_pin(39));
        assert!(!Chip::Esp32.has_pin(40));
        assert!(Chip::Esp32c3.has_pin(21));
        assert!(!Chip::Esp32c3.has_pin(22));
        assert!(!Chip::Esp32s3.has_pin(23));
        assert!(Chip::Esp32s3.has_pin(48));
    }

    #[test]
    fn esp32c3_pin_flags() {
        assert!(Chip::Esp32c3.pin_flags(2).contains(PinFlags::STRAPPING));
        assert!(Chip::Esp32c3.pin_flags(14).contains(PinFlags::FLASH));
        assert!(Chip::Esp32c3.pin_flags(18).contains(PinFlags::USB));
        assert!(Chip::Esp32c3.pin_flags(5).is_empty());
        assert!(Chip::Esp32.pin_flags(36).contains(PinFlags::INPUT_ONLY));
    }
}
