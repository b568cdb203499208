use std::path::PathBuf;

use board_loader::Loader;

use crate::config::XtaskConfig;
use crate::utils::{project_root, TaskError, TaskResult, BOARD_ENV_PREFIX};

pub struct CheckTask {
    boards: Vec<(String, PathBuf)>,
}

impl CheckTask {
    pub fn new(boards: Vec<String>, all: bool, config: XtaskConfig) -> TaskResult<Self> {
        let root = project_root();
        let names = if all {
            config.boards(&root)?
        } else if boards.is_empty() {
            vec![config.boards.default.clone()]
        } else {
            boards
        };

        let boards = names
            .into_iter()
            .map(|name| {
                let path = config.board_path(&root, &name)?;
                Ok((name, path))
            })
            .collect::<TaskResult<Vec<_>>>()?;
        Ok(CheckTask { boards })
    }
}

impl super::TaskPlugin for CheckTask {
    fn description() -> &'static str {
        "Load and validate board files"
    }

    fn execute(&self) -> TaskResult<()> {
        let mut failed = 0;
        for (name, path) in &self.boards {
            info!("==> Checking {}", name);
            match Loader::new(path).with_env_overrides(BOARD_ENV_PREFIX).load() {
                Ok(board) => {
                    info!("    {} with {}: ok", board.name, board.mcu);
                }
                Err(e) => {
                    error!("    {}", e);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(TaskError::InvalidBoards(failed));
        }
        info!("==> {} board file(s) valid", self.boards.len());
        Ok(())
    }
}
