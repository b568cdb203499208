use std::fs;
use std::path::PathBuf;

use board_loader::{codegen, Loader};

use crate::config::XtaskConfig;
use crate::utils::{project_root, TaskResult, BOARD_ENV_PREFIX};

pub struct HeaderTask {
    name: String,
    board_file: PathBuf,
    out: PathBuf,
}

impl HeaderTask {
    pub fn new(
        board: Option<String>,
        out: Option<PathBuf>,
        config: XtaskConfig,
    ) -> TaskResult<Self> {
        let root = project_root();
        let name = board.unwrap_or_else(|| config.boards.default.clone());
        let board_file = config.board_path(&root, &name)?;
        let out = out.unwrap_or_else(|| {
            root.join(&config.header.out_dir)
                .join(&name)
                .join("mpconfigboard.h")
        });
        Ok(HeaderTask {
            name,
            board_file,
            out,
        })
    }
}

impl super::TaskPlugin for HeaderTask {
    fn description() -> &'static str {
        "Write the MicroPython mpconfigboard.h for a board"
    }

    fn execute(&self) -> TaskResult<()> {
        info!("==> Generating header for {}", self.name);
        let board = Loader::new(&self.board_file)
            .with_env_overrides(BOARD_ENV_PREFIX)
            .load()?;

        let source = format!("{}.toml", self.name);
        if let Some(dir) = self.out.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.out, codegen::c_header(&board, &source))?;
        info!("    Header file: {}", self.out.display());
        Ok(())
    }
}
