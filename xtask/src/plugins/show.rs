use board_core::BoardDescriptor;
use board_loader::{codegen, Loader};

use crate::config::XtaskConfig;
use crate::utils::{project_root, TaskResult, BOARD_ENV_PREFIX};

pub struct ShowTask {
    board: BoardDescriptor<String>,
    toml: bool,
}

impl ShowTask {
    pub fn new(board: Option<String>, toml: bool, config: XtaskConfig) -> TaskResult<Self> {
        let name = board.unwrap_or_else(|| config.boards.default.clone());
        let path = config.board_path(&project_root(), &name)?;
        let board = Loader::new(path)
            .with_env_overrides(BOARD_ENV_PREFIX)
            .load()?;
        Ok(ShowTask { board, toml })
    }
}

impl super::TaskPlugin for ShowTask {
    fn description() -> &'static str {
        "Print the resolved board configuration, defaults included"
    }

    fn execute(&self) -> TaskResult<()> {
        if self.toml {
            print!("{}", codegen::to_toml(&self.board)?);
            return Ok(());
        }

        println!("Board:      {}", self.board.name);
        println!("MCU:        {}", self.board.mcu);
        println!("UART REPL:  {}", self.board.uart_repl as u8);
        for (signal, pin) in self.board.pins.signals() {
            println!("{:<11} {}", format!("{}:", signal), pin);
        }
        Ok(())
    }
}
