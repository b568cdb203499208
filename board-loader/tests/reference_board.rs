use std::path::PathBuf;

use board_core::{Chip, Gpio, I2cPins, SpiPins};
use board_loader::{Loader, advisories, codegen};

fn boards_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../boards")
}

#[test]
fn esp32c3_module_values() {
    let board = Loader::new(boards_dir().join("esp32c3-module.toml"))
        .load()
        .unwrap();

    assert_eq!(board.name, "ESP32C3 module");
    assert_eq!(board.mcu, Chip::Esp32c3);
    assert_eq!(board.mcu_name(), "ESP32C3");
    assert!(board.uart_repl);
    assert_eq!(board.pins.i2c(0), Some(I2cPins::new(5, 4)));
    assert_eq!(board.pins.spi(1), Some(SpiPins::new(7, 2, 6)));
    assert_eq!(board.pins.i2c(1), None);
    assert_eq!(board.pins.spi(2), None);
}

#[test]
fn esp32c3_module_pins_are_pairwise_distinct() {
    let board = Loader::new(boards_dir().join("esp32c3-module.toml"))
        .load()
        .unwrap();

    let pins: Vec<Gpio> = board.pins.signals().map(|(_, pin)| pin).collect();
    assert_eq!(pins.len(), 5, "two I2C and three SPI signals");
    for (i, a) in pins.iter().enumerate() {
        for b in &pins[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn toml_round_trip_is_identity() {
    for name in ["esp32c3-module", "esp32-devkitc", "esp32s3-devkitc"] {
        let path = boards_dir().join(format!("{name}.toml"));
        let board = Loader::new(&path).load().unwrap();

        let text = codegen::to_toml(&board).unwrap();
        let again = Loader::from_toml(format!("{name} (canonical)"), text)
            .load()
            .unwrap();
        assert_eq!(again, board, "{name}");
    }
}

#[test]
fn omitted_buses_use_chip_defaults() {
    let board = Loader::new(boards_dir().join("esp32-devkitc.toml"))
        .load()
        .unwrap();

    assert_eq!(board.mcu, Chip::Esp32);
    assert!(board.uart_repl, "ESP32 has no native USB console");
    assert_eq!(board.pins, Chip::Esp32.profile().defaults);
}

#[test]
fn esp32s3_devkitc_overrides_second_i2c_bus() {
    let board = Loader::new(boards_dir().join("esp32s3-devkitc.toml"))
        .load()
        .unwrap();

    assert!(!board.uart_repl);
    assert_eq!(board.pins.i2c(1), Some(I2cPins::new(41, 42)));
    assert_eq!(board.pins.spi(1), Chip::Esp32s3.profile().defaults.spi(1));
}

#[test]
fn esp32c3_module_flags_strapping_miso() {
    let board = Loader::new(boards_dir().join("esp32c3-module.toml"))
        .load()
        .unwrap();

    let found: Vec<String> = advisories(&board).iter().map(ToString::to_string).collect();
    assert_eq!(found, ["`spi1.miso` uses GPIO2, a strapping pin on ESP32C3"]);
}

#[test]
fn header_for_esp32c3_module() {
    let path = boards_dir().join("esp32c3-module.toml");
    let board = Loader::new(&path).load().unwrap();
    let header = codegen::c_header(&board, "esp32c3-module.toml");

    assert!(header.contains("#define MICROPY_HW_ENABLE_UART_REPL         (1)\n"));
    assert!(header.contains("#define MICROPY_HW_I2C0_SCL                 (5)\n"));
    assert!(header.contains("#define MICROPY_HW_SPI1_SCK                 (6)\n"));
    assert!(!header.contains("I2C1"));
}
