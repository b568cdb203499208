use board_core::Violation;
use figment::error::Kind;
use figment::providers::{Format, Toml};
use figment::{Provider, Source};

/// Why a board file was rejected.
///
/// Every variant carries the origin (a file path or the environment
/// provider) and, unless the text does not parse, the key at fault.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{origin}: cannot read board file: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },
    #[error("{origin}: malformed value for `{key}`: expected {expected}, found {found}")]
    Malformed {
        origin: String,
        key: String,
        expected: String,
        found: String,
    },
    #[error("{origin}: not a valid board file: {message}")]
    Syntax { origin: String, message: String },
    #[error("{origin}: unknown key `{key}`{}", detail_suffix(.detail))]
    UnknownKey {
        origin: String,
        key: String,
        detail: Option<String>,
    },
    #[error("{origin}: missing required key `{key}`")]
    MissingKey { origin: String, key: String },
    #[error("{origin}: invalid value for `{key}`: {reason}")]
    Invalid {
        origin: String,
        key: String,
        reason: String,
    },
    #[error("{origin}: {violation}")]
    Pins { origin: String, violation: Violation },
    #[error("cannot serialize board file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

impl ConfigError {
    /// The offending key, when the error is about one.
    pub fn key(&self) -> Option<String> {
        match self {
            ConfigError::Malformed { key, .. }
            | ConfigError::UnknownKey { key, .. }
            | ConfigError::MissingKey { key, .. }
            | ConfigError::Invalid { key, .. } => Some(key.clone()),
            ConfigError::Pins { violation, .. } => match violation {
                Violation::BusUnavailable { bus, .. } => Some(bus.to_string()),
                other => other.signal().map(|s| s.to_string()),
            },
            ConfigError::Io { .. } | ConfigError::Syntax { .. } | ConfigError::Serialize(_) => None,
        }
    }

    pub fn origin(&self) -> Option<&str> {
        match self {
            ConfigError::Io { origin, .. }
            | ConfigError::Malformed { origin, .. }
            | ConfigError::Syntax { origin, .. }
            | ConfigError::UnknownKey { origin, .. }
            | ConfigError::MissingKey { origin, .. }
            | ConfigError::Invalid { origin, .. }
            | ConfigError::Pins { origin, .. } => Some(origin),
            ConfigError::Serialize(_) => None,
        }
    }

    /// Maps the first error figment reports onto the board file taxonomy.
    ///
    /// Board text is merged as a TOML string, so errors from it are reported
    /// against `file_origin`. Other providers, such as `Env`, name themselves.
    pub(crate) fn from_figment(err: figment::Error, file_origin: &str) -> Self {
        let origin = match &err.metadata {
            Some(md) if md.name == Toml::string("").metadata().name => file_origin.to_string(),
            Some(md) => match &md.source {
                Some(Source::File(path)) => path.display().to_string(),
                _ => md.name.to_string(),
            },
            None => file_origin.to_string(),
        };
        let key_with = |field: &str| {
            if err.path.last().map(String::as_str) == Some(field) {
                err.path.join(".")
            } else {
                err.path
                    .iter()
                    .map(String::as_str)
                    .chain(std::iter::once(field))
                    .collect::<Vec<_>>()
                    .join(".")
            }
        };

        match &err.kind {
            Kind::UnknownField(field, _) => ConfigError::UnknownKey {
                key: key_with(field),
                origin,
                detail: None,
            },
            Kind::MissingField(field) => ConfigError::MissingKey {
                key: key_with(field),
                origin,
            },
            Kind::InvalidType(actual, expected) | Kind::InvalidValue(actual, expected) => {
                ConfigError::Malformed {
                    key: err.path.join("."),
                    origin,
                    expected: expected.clone(),
                    found: actual.to_string(),
                }
            }
            // Parse errors (bad syntax, duplicate keys) are not tied to a key.
            other if err.path.is_empty() => ConfigError::Syntax {
                origin,
                message: other.to_string(),
            },
            other => ConfigError::Malformed {
                key: err.path.join("."),
                origin,
                expected: "a value of the documented type".to_string(),
                found: other.to_string(),
            },
        }
    }
}
