use super::{quote_with, SqlDialect};
use crate::schema::types::ColumnType;

/// SQLite dialect.
///
/// Types are storage affinities, which carry no length, so the size hint
/// is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn data_type(&self, ty: ColumnType, _auto_increment: bool, _size: u64) -> String {
        let affinity = match ty {
            ColumnType::Bool => "boolean",
            ColumnType::SmallInt | ColumnType::Int | ColumnType::BigInt => "integer",
            ColumnType::Float | ColumnType::Double => "real",
            ColumnType::Text => "text",
            ColumnType::Bytes => "blob",
            ColumnType::Timestamp => "datetime",
        };
        affinity.to_string()
    }

    fn auto_increment(&self) -> &str {
        "AUTOINCREMENT"
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '"')
    }
}
