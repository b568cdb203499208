//! Renders a checked descriptor for its consumers: Rust constants for the
//! firmware crate, a MicroPython-style `mpconfigboard.h`, and canonical TOML.

use std::fmt::Write;

use board_core::{BoardDescriptor, Bus};

use crate::error::ConfigError;
use crate::raw::BoardFile;

/// Rust items for `include!`, paths fully qualified through `::board_core`.
pub fn rust_consts<S: AsRef<str>>(board: &BoardDescriptor<S>, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// @generated by board-loader from {source}. Do not edit.");
    out.push('\n');
    let _ = writeln!(out, "pub const BOARD_NAME: &str = {:?};", board.name());
    let _ = writeln!(out, "pub const MCU_NAME: &str = {:?};", board.mcu_name());
    let _ = writeln!(
        out,
        "pub const MCU: ::board_core::Chip = ::board_core::Chip::{:?};",
        board.mcu
    );
    let _ = writeln!(out, "pub const ENABLE_UART_REPL: bool = {};", board.uart_repl);

    let mut current: Option<Bus> = None;
    for (signal, pin) in board.pins.signals() {
        if current != Some(signal.bus) {
            out.push('\n');
            current = Some(signal.bus);
        }
        let _ = writeln!(
            out,
            "pub const {}_{}: u8 = {};",
            signal.bus.to_string().to_ascii_uppercase(),
            signal.role.label(),
            pin.number()
        );
    }

    let i2c = board.pins.i2c.map(|bus| match bus {
        Some(p) => format!(
            "Some(::board_core::I2cPins::new({}, {}))",
            p.scl.number(),
            p.sda.number()
        ),
        None => "None".to_string(),
    });
    let spi = board.pins.spi.map(|bus| match bus {
        Some(p) => format!(
            "Some(::board_core::SpiPins::new({}, {}, {}))",
            p.mosi.number(),
            p.miso.number(),
            p.sck.number()
        ),
        None => "None".to_string(),
    });
    out.push('\n');
    let _ = writeln!(out, "pub const PINS: ::board_core::PinMap = ::board_core::PinMap {{");
    let _ = writeln!(out, "    i2c: [{}],", i2c.join(", "));
    let _ = writeln!(out, "    spi: [{}],", spi.join(", "));
    let _ = writeln!(out, "}};");
    out
}

fn define(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "#define {name:<35} {value}");
}

fn c_string(s: &str) -> String {
    let mut lit = String::with_capacity(s.len() + 2);
    lit.push('"');
    for c in s.chars() {
        match c {
            '"' => lit.push_str("\\\""),
            '\\' => lit.push_str("\\\\"),
            '\n' => lit.push_str("\\n"),
            // Octal takes at most three digits, so a following digit stays literal.
            c if c.is_ascii_control() => {
                let _ = write!(lit, "\\{:03o}", c as u32);
            }
            c => lit.push(c),
        }
    }
    lit.push('"');
    lit
}

/// `MICROPY_HW_*` board header for the MicroPython ESP32 port.
pub fn c_header<S: AsRef<str>>(board: &BoardDescriptor<S>, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// Generated by board-loader from {source}. Do not edit.");
    out.push('\n');
    define(&mut out, "MICROPY_HW_BOARD_NAME", &c_string(board.name()));
    define(&mut out, "MICROPY_HW_MCU_NAME", &c_string(board.mcu_name()));
    out.push('\n');
    define(
        &mut out,
        "MICROPY_HW_ENABLE_UART_REPL",
        &format!("({})", board.uart_repl as u8),
    );

    let mut current: Option<Bus> = None;
    for (signal, pin) in board.pins.signals() {
        if current != Some(signal.bus) {
            out.push('\n');
            current = Some(signal.bus);
        }
        let name = format!(
            "MICROPY_HW_{}_{}",
            signal.bus.to_string().to_ascii_uppercase(),
            signal.role.label()
        );
        define(&mut out, &name, &format!("({})", pin.number()));
    }
    out
}

/// Canonical TOML with every resolved value spelled out.
///
/// Loading the output again yields the same descriptor.
pub fn to_toml<S: AsRef<str>>(board: &BoardDescriptor<S>) -> Result<String, ConfigError> {
    Ok(toml::to_string(&BoardFile::from_descriptor(board))?)
}
