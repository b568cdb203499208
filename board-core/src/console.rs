//! Where the interactive console (REPL) is reachable.

use crate::chip::Chip;

/// The console transports a firmware image brings up.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReplRoute {
    /// REPL on the UART wired to the module's USB-UART bridge.
    pub uart: bool,
    /// REPL on the chip's own USB peripheral.
    pub usb: bool,
}

impl ReplRoute {
    /// Resolves the console transports for a chip and the UART REPL flag.
    ///
    /// The UART console is added next to the native USB one, it never
    /// replaces it.
    pub const fn resolve(chip: Chip, enable_uart_repl: bool) -> Self {
        Self {
            uart: enable_uart_repl,
            usb: chip.profile().native_usb,
        }
    }

    /// Whether any console is reachable at all.
    pub const fn is_reachable(self) -> bool {
        self.uart || self.usb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uart_repl_on_usb_chip() {
        let route = ReplRoute::resolve(Chip::Esp32c3, true);
        assert_eq!(route, ReplRoute { uart: true, usb: true });
    }

    #[test]
    fn esp32_without_uart_repl_has_no_console() {
        let route = ReplRoute::resolve(Chip::Esp32, false);
        assert!(!route.is_reachable());
        let default_flag = Chip::Esp32.profile().uart_repl_default;
        assert!(ReplRoute::resolve(Chip::Esp32, default_flag).is_reachable());
    }
}
