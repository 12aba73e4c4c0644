//! SQL dialects.
//!
//! Each engine maps logical column types to its own type names, quotes
//! identifiers its own way and may append engine options after CREATE TABLE.

pub mod mysql;
pub mod postgres;
pub mod sqlite;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DdlError;
use crate::schema::types::ColumnType;

pub use mysql::MysqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

/// Bound used for string/binary columns without a size hint.
pub const DEFAULT_SIZE: u64 = 255;

/// Sizes below this (roughly 64KB minus length prefix) get an explicitly sized type.
pub const SIZED_LIMIT: u64 = (1 << 16) - 1 - 2;

/// Sizes below this (16MB) get a medium-length type; anything larger gets the large one.
pub const MEDIUM_LIMIT: u64 = 1 << 24;

/// Size bucket of a string or binary column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// No size hint given, use [`DEFAULT_SIZE`].
    Default,
    /// Explicit bound.
    Sized(u64),
    Medium,
    Large,
}

impl SizeClass {
    pub const fn of(size: u64) -> Self {
        if size == 0 {
            Self::Default
        } else if size < SIZED_LIMIT {
            Self::Sized(size)
        } else if size < MEDIUM_LIMIT {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

/// Trait for dialect-specific DDL generation.
pub trait SqlDialect: fmt::Debug + Send + Sync {
    /// Short engine name, used in logs and listings.
    fn name(&self) -> &'static str;

    /// Column type for a logical type.
    ///
    /// Dialects that express auto-increment through the type itself fold
    /// `auto_increment` into the result.
    fn data_type(&self, ty: ColumnType, auto_increment: bool, size: u64) -> String;

    /// Keyword appended to an auto-increment column, or empty when the
    /// type already carries it.
    fn auto_increment(&self) -> &str;

    /// Quote an identifier (table, column or index name).
    fn quote_identifier(&self, name: &str) -> String;

    /// Trailing clause after the closing parenthesis of CREATE TABLE.
    fn create_table_suffix(&self) -> String {
        String::new()
    }
}

/// Wrap `name` in `quote`, doubling embedded quote characters.
pub(crate) fn quote_with(name: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(name.len() + 2);
    escaped.push(quote);
    for c in name.chars() {
        if c == quote {
            escaped.push(quote);
        }
        escaped.push(c);
    }
    escaped.push(quote);
    escaped
}

/// Supported SQL dialects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Dialect {
    Mysql {
        #[serde(default)]
        charset: Option<String>,
        #[serde(default)]
        engine: Option<String>,
    },
    #[default]
    Postgres,
    Sqlite,
}

impl Dialect {
    /// MySQL with table options, e.g. `Dialect::mysql("utf8", "InnoDB")`.
    pub fn mysql(charset: impl Into<String>, engine: impl Into<String>) -> Self {
        Self::Mysql {
            charset: Some(charset.into()),
            engine: Some(engine.into()),
        }
    }

    pub fn generator(&self) -> Arc<dyn SqlDialect> {
        match self {
            Dialect::Mysql { charset, engine } => {
                Arc::new(MysqlDialect::new(charset.clone(), engine.clone()))
            }
            Dialect::Postgres => Arc::new(PostgresDialect),
            Dialect::Sqlite => Arc::new(SqliteDialect),
        }
    }
}

impl FromStr for Dialect {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::Mysql {
                charset: None,
                engine: None,
            }),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            other => Err(DdlError::Config(format!(
                "unknown dialect '{}', expected mysql, postgres or sqlite",
                other
            ))),
        }
    }
}
