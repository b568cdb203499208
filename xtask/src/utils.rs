use std::path::PathBuf;

use board_loader::ConfigError;

/// Environment prefix for board key overrides, shared with the root
/// crate's `build.rs` so `cargo xtask` sees what the build sees.
pub const BOARD_ENV_PREFIX: &str = "BOARDCFG_";

#[derive(thiserror::Error, Debug)]
pub enum TaskError {
    #[error("Board not found: {0}")]
    BoardNotFound(String),
    #[error("{0} board file(s) failed validation")]
    InvalidBoards(usize),
    #[error("{0}")]
    Board(#[from] ConfigError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("figment: {0}")]
    Figment(#[from] figment::Error),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Project root directory
pub fn project_root() -> PathBuf {
    let xtask_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    xtask_dir
        .parent()
        .unwrap_or(xtask_dir)
        .to_path_buf()
}
