use std::fs;
use std::path::{Path, PathBuf};

use board_core::BoardDescriptor;
use figment::Figment;
use figment::providers::{Env, Format, Toml};

use crate::error::ConfigError;
use crate::lint::advisories;
use crate::raw::{BoardFile, RECOGNIZED_KEYS};
use crate::resolve::resolve;

enum Input {
    File(PathBuf),
    Text(String),
}

/// Loads one board file and checks it.
///
/// ```no_run
/// use board_loader::Loader;
///
/// let board = Loader::new("boards/esp32c3-module.toml")
///     .with_env_overrides("BOARDCFG_")
///     .load()?;
/// assert_eq!(board.pins.i2c(0).map(|p| p.scl.number()), Some(5));
/// # Ok::<(), board_loader::ConfigError>(())
/// ```
pub struct Loader {
    input: Input,
    origin: String,
    env_prefix: Option<String>,
}

impl Loader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Loader {
            origin: path.display().to_string(),
            input: Input::File(path.to_path_buf()),
            env_prefix: None,
        }
    }

    /// Loads from TOML text; `origin` names it in diagnostics.
    pub fn from_toml(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Loader {
            origin: origin.into(),
            input: Input::Text(text.into()),
            env_prefix: None,
        }
    }

    /// Lets `<PREFIX><TABLE>__<KEY>` environment variables override the file,
    /// e.g. `BOARDCFG_I2C0__SCL=9`.
    pub fn with_env_overrides(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn figment(&self) -> Result<Figment, ConfigError> {
        let text = match &self.input {
            Input::File(path) => fs::read_to_string(path).map_err(|source| ConfigError::Io {
                origin: self.origin.clone(),
                source,
            })?,
            Input::Text(text) => text.clone(),
        };

        let mut figment = Figment::from(Toml::string(&text));
        if let Some(prefix) = &self.env_prefix {
            figment = figment.merge(Env::prefixed(prefix).split("__"));
        }
        Ok(figment)
    }

    /// The file as written, without defaults or checks beyond its types.
    pub fn extract(&self) -> Result<BoardFile, ConfigError> {
        self.figment()?
            .extract()
            .map_err(|err| ConfigError::from_figment(err, &self.origin))
    }

    pub fn load(&self) -> Result<BoardDescriptor<String>, ConfigError> {
        debug!("loading board file {}", self.origin);
        let board = resolve(self.extract()?, &self.origin)?;

        for advisory in advisories(&board) {
            warn!("{}: {}", self.origin, advisory);
        }
        info!(
            "{}: {} with {} (UART REPL {})",
            self.origin,
            board.name,
            board.mcu,
            if board.uart_repl { "on" } else { "off" }
        );
        Ok(board)
    }
}

/// Environment variable that overrides `key` under `prefix`.
///
/// `env_var_name("BOARDCFG_", "i2c0.scl")` is `BOARDCFG_I2C0__SCL`.
pub fn env_var_name(prefix: &str, key: &str) -> String {
    format!("{prefix}{}", key.replace('.', "__").to_ascii_uppercase())
}

/// Every environment variable [`Loader::with_env_overrides`] may read.
pub fn env_var_names(prefix: &str) -> impl Iterator<Item = String> + '_ {
    RECOGNIZED_KEYS.iter().map(move |key| env_var_name(prefix, key))
}

/// Variables a build must watch: every recognised override plus any other
/// `present` variable under `prefix`, so an unknown key keeps failing the
/// build until it is removed.
pub fn watched_env_vars(prefix: &str, present: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = env_var_names(prefix).collect();
    for name in present {
        if name.starts_with(prefix) && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
