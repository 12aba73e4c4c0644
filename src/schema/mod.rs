//! Table model: columns, indices and versioned tables.
//!
//! ```
//! use ddlkit::dialect::Dialect;
//! use ddlkit::schema::{Column, Index, Table};
//!
//! let mut people = Table::new("people", Dialect::Postgres.generator());
//! people
//!     .add_column(Column::of::<u64>("id").primary_key().auto_increment())?
//!     .add_column(Column::of::<String>("name").size(200).unique())?
//!     .add_index(Index::new("by_name", ["name"]))?;
//!
//! assert!(people.to_sql().starts_with("CREATE TABLE IF NOT EXISTS \"people\"(\n"));
//! # Ok::<(), ddlkit::DdlError>(())
//! ```

pub mod column;
pub mod index;
pub mod table;
pub mod types;

pub use column::Column;
pub use index::Index;
pub use table::{Table, CURRENT_VERSION};
pub use types::{ColumnType, SqlTyped, TypeTag};
