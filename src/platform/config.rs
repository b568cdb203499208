//! Constants of the selected board, generated by `build.rs` from
//! `boards/<board>.toml`.
//!
//! Besides `BOARD_NAME`, `MCU_NAME`, `MCU`, `ENABLE_UART_REPL` and `PINS`
//! there is one `u8` constant per bus signal the MCU provides, named after
//! the key it came from: `i2c0.scl` becomes `I2C0_SCL`.

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
