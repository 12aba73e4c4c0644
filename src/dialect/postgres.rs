use super::{quote_with, SizeClass, SqlDialect, DEFAULT_SIZE};
use crate::schema::types::ColumnType;

/// PostgreSQL dialect.
///
/// Auto-increment is expressed by the serial pseudo-types, so
/// [`SqlDialect::auto_increment`] is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostgresDialect;

impl PostgresDialect {
    fn integer(auto_increment: bool, plain: &str, serial: &str) -> String {
        let name = if auto_increment { serial } else { plain };
        name.to_string()
    }

    fn varchar(size: u64) -> String {
        match SizeClass::of(size) {
            SizeClass::Default => format!("VARCHAR({})", DEFAULT_SIZE),
            SizeClass::Sized(n) => format!("VARCHAR({})", n),
            SizeClass::Medium | SizeClass::Large => "TEXT".to_string(),
        }
    }

    fn bit_varying(size: u64) -> String {
        match SizeClass::of(size) {
            SizeClass::Default => format!("BIT VARYING({})", DEFAULT_SIZE),
            SizeClass::Sized(n) => format!("BIT VARYING({})", n),
            SizeClass::Medium | SizeClass::Large => "BYTEA".to_string(),
        }
    }
}

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn data_type(&self, ty: ColumnType, auto_increment: bool, size: u64) -> String {
        match ty {
            ColumnType::Bool => "BOOLEAN".to_string(),
            ColumnType::SmallInt => Self::integer(auto_increment, "SMALLINT", "SMALLSERIAL"),
            ColumnType::Int => Self::integer(auto_increment, "INTEGER", "SERIAL"),
            ColumnType::BigInt => Self::integer(auto_increment, "BIGINT", "BIGSERIAL"),
            ColumnType::Float => "REAL".to_string(),
            ColumnType::Double => "DOUBLE PRECISION".to_string(),
            ColumnType::Text => Self::varchar(size),
            ColumnType::Bytes => Self::bit_varying(size),
            ColumnType::Timestamp => "TIMESTAMP WITH TIME ZONE".to_string(),
        }
    }

    fn auto_increment(&self) -> &str {
        ""
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '"')
    }
}
