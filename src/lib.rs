//! # ddlkit
//!
//! Dialect-aware DDL generation for versioned tables.
//!
//! Describe a table once, render `CREATE TABLE` / `CREATE INDEX` for MySQL,
//! PostgreSQL or SQLite, and diff two named versions of it into a single
//! `ALTER TABLE` statement.
//!
//! ## Quick Example
//!
//! ```
//! use ddlkit::prelude::*;
//!
//! let builder = Builder::new(&Dialect::mysql("utf8", "InnoDB"));
//! let mut people = builder.table("people");
//! people
//!     .add_column(Column::of::<u64>("id").primary_key().auto_increment())?
//!     .add_column(Column::of::<String>("name").size(200).unique())?
//!     .add_column(Column::of::<Option<String>>("info"))?;
//!
//! assert_eq!(
//!     people.to_sql(),
//!     "CREATE TABLE IF NOT EXISTS `people`(\n\
//!      `id` BIGINT AUTO_INCREMENT NOT NULL PRIMARY KEY,\n\
//!      `name` VARCHAR(200) NOT NULL UNIQUE,\n\
//!      `info` VARCHAR(255) \n\
//!      ) ENGINE=InnoDB DEFAULT CHARACTER SET=utf8;\n"
//! );
//! # Ok::<(), ddlkit::DdlError>(())
//! ```
//!
//! ## Dialects
//!
//! | Dialect  | Auto-increment            | Quote | Table suffix              |
//! |----------|---------------------------|-------|---------------------------|
//! | MySQL    | `AUTO_INCREMENT` keyword  | backtick | `ENGINE=… DEFAULT CHARACTER SET=…` |
//! | Postgres | serial types, no keyword  | `"`   | none                      |
//! | SQLite   | `AUTOINCREMENT` keyword   | `"`   | none                      |

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod dialect;
pub mod error;
pub mod migrate;
pub mod schema;

pub use builder::Builder;
pub use error::{DdlError, DdlResult};

pub mod prelude {
    pub use crate::builder::Builder;
    pub use crate::config::Config;
    pub use crate::descriptor::{ColumnDescriptor, IndexDescriptor, SchemaFile, TableDescriptor};
    pub use crate::dialect::{Dialect, SqlDialect};
    pub use crate::error::*;
    pub use crate::migrate::{AlterOp, ModifyTarget};
    pub use crate::schema::{Column, ColumnType, Index, SqlTyped, Table, TypeTag};
}
