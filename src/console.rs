//! REPL console routing for the selected board.

use board_core::ReplRoute;

use crate::platform::{CurrentBoard, board::Board};

/// Console transports the firmware brings up.
///
/// With `ENABLE_UART_REPL` set the REPL is also served on the UART, next to
/// any native USB console; cleared, the UART path is compiled out.
pub const REPL: ReplRoute = CurrentBoard::REPL;

pub const fn uart_repl_enabled() -> bool {
    REPL.uart
}

#[cfg(all(test, feature = "target-board-esp32c3-module"))]
mod tests {
    use super::*;

    #[test]
    fn esp32c3_module_serves_uart_and_usb() {
        assert!(uart_repl_enabled());
        assert_eq!(REPL, ReplRoute { uart: true, usb: true });
    }
}
