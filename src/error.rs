//! Error types for ddlkit.

use thiserror::Error;

/// The main error type for ddlkit operations.
#[derive(Debug, Error)]
pub enum DdlError {
    /// A type tag has no mapping to any SQL column type.
    #[error("Unsupported SQL type: '{0}'")]
    UnsupportedType(String),

    /// A migration endpoint does not name a known snapshot.
    #[error("Version not found: '{0}'")]
    VersionNotFound(String),

    /// A column, index or version label was registered twice.
    #[error("Duplicate {kind} name: '{name}'")]
    NameCollision { kind: &'static str, name: String },

    /// A history snapshot belongs to a different table.
    #[error("Cannot add history of table '{found}' to table '{expected}'")]
    HistoryMismatch { expected: String, found: String },

    /// A history snapshot uses a reserved version label.
    #[error("Invalid history version label: '{0}'")]
    ReservedVersion(String),

    /// A history snapshot was attached without a version label.
    #[error("History snapshot of table '{0}' has no version label")]
    MissingVersion(String),

    /// Failed to parse a column descriptor.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML input.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DdlError {
    /// Create a parse error at the given position.
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }

    /// Create a name collision error.
    pub fn collision(kind: &'static str, name: impl Into<String>) -> Self {
        Self::NameCollision {
            kind,
            name: name.into(),
        }
    }
}

/// Result type alias for ddlkit operations.
pub type DdlResult<T> = Result<T, DdlError>;
