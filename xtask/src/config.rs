//! Settings for the tasks, read from `boardcfg.toml` at the project root.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::utils::{TaskError, TaskResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct XtaskConfig {
    pub boards: BoardsConfig,
    pub header: HeaderConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardsConfig {
    /// Directory holding `<board>.toml` files, relative to the project root.
    pub dir: PathBuf,
    /// Board used when a task is given none.
    pub default: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderConfig {
    pub out_dir: PathBuf,
}

impl Default for XtaskConfig {
    fn default() -> Self {
        XtaskConfig {
            boards: BoardsConfig {
                dir: PathBuf::from("boards"),
                default: "esp32c3-module".to_string(),
            },
            header: HeaderConfig {
                out_dir: PathBuf::from("target/boards"),
            },
        }
    }
}

impl XtaskConfig {
    /// Defaults, then `boardcfg.toml`, then `XTASK_*` variables
    /// (`XTASK_BOARDS__DEFAULT=esp32-devkitc`).
    pub fn load(root: &Path) -> TaskResult<Self> {
        let config = Figment::from(Serialized::defaults(XtaskConfig::default()))
            .merge(Toml::file(root.join("boardcfg.toml")))
            .merge(Env::prefixed("XTASK_").split("__"))
            .extract()?;
        Ok(config)
    }

    /// Path of a board file, relative to `root`.
    pub fn board_path(&self, root: &Path, board: &str) -> TaskResult<PathBuf> {
        let path = root.join(&self.boards.dir).join(format!("{board}.toml"));
        if !path.is_file() {
            return Err(TaskError::BoardNotFound(board.to_string()));
        }
        Ok(path)
    }

    /// Names of every board file, sorted.
    pub fn boards(&self, root: &Path) -> TaskResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(root.join(&self.boards.dir))? {
            let path = entry?.path();
            if path.extension().map(|e| e == "toml").unwrap_or(false) {
                if let Some(stem) = path.file_stem() {
                    names.push(stem.to_string_lossy().to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_config_file() {
        Jail::expect_with(|jail| {
            let config = XtaskConfig::load(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(config, XtaskConfig::default());
            Ok(())
        });
    }

    #[test]
    fn file_and_environment() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "boardcfg.toml",
                "[boards]\ndir = \"hw\"\ndefault = \"esp32-devkitc\"\n",
            )
            .map_err(|e| e.to_string())?;
            jail.set_env("XTASK_HEADER__OUT_DIR", "out");

            let config = XtaskConfig::load(jail.directory()).map_err(|e| e.to_string())?;
            assert_eq!(config.boards.dir, PathBuf::from("hw"));
            assert_eq!(config.boards.default, "esp32-devkitc");
            assert_eq!(config.header.out_dir, PathBuf::from("out"));
            Ok(())
        });
    }

    #[test]
    fn lists_and_resolves_boards() {
        Jail::expect_with(|jail| {
            std::fs::create_dir("boards").map_err(|e| e.to_string())?;
            jail.create_file("boards/b.toml", "").map_err(|e| e.to_string())?;
            jail.create_file("boards/a.toml", "").map_err(|e| e.to_string())?;
            jail.create_file("boards/notes.md", "").map_err(|e| e.to_string())?;

            let root = jail.directory();
            let config = XtaskConfig::default();
            assert_eq!(config.boards(root).map_err(|e| e.to_string())?, ["a", "b"]);
            assert!(config.board_path(root, "a").is_ok());
            assert!(matches!(
                config.board_path(root, "c"),
                Err(TaskError::BoardNotFound(name)) if name == "c"
            ));
            Ok(())
        });
    }
}
