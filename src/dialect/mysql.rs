use super::{quote_with, SizeClass, SqlDialect, DEFAULT_SIZE};
use crate::schema::types::ColumnType;

/// MySQL dialect with optional table options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MysqlDialect {
    pub charset: Option<String>,
    pub engine: Option<String>,
}

impl MysqlDialect {
    pub fn new(charset: Option<String>, engine: Option<String>) -> Self {
        Self { charset, engine }
    }

    fn varchar(size: u64) -> String {
        match SizeClass::of(size) {
            SizeClass::Default => format!("VARCHAR({})", DEFAULT_SIZE),
            SizeClass::Sized(n) => format!("VARCHAR({})", n),
            SizeClass::Medium => "MEDIUMTEXT".to_string(),
            SizeClass::Large => "LONGTEXT".to_string(),
        }
    }

    fn varbinary(size: u64) -> String {
        match SizeClass::of(size) {
            SizeClass::Default => format!("VARBINARY({})", DEFAULT_SIZE),
            SizeClass::Sized(n) => format!("VARBINARY({})", n),
            SizeClass::Medium => "MEDIUMBLOB".to_string(),
            SizeClass::Large => "LONGBLOB".to_string(),
        }
    }
}

impl SqlDialect for MysqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn data_type(&self, ty: ColumnType, _auto_increment: bool, size: u64) -> String {
        match ty {
            ColumnType::Bool => "BOOLEAN".to_string(),
            ColumnType::SmallInt => "SMALLINT".to_string(),
            ColumnType::Int => "INT".to_string(),
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::Float | ColumnType::Double => "DOUBLE".to_string(),
            ColumnType::Text => Self::varchar(size),
            ColumnType::Bytes => Self::varbinary(size),
            ColumnType::Timestamp => "DATETIME".to_string(),
        }
    }

    fn auto_increment(&self) -> &str {
        "AUTO_INCREMENT"
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '`')
    }

    fn create_table_suffix(&self) -> String {
        let mut options = Vec::new();
        if let Some(engine) = self.engine.as_deref().filter(|e| !e.is_empty()) {
            options.push(format!("ENGINE={}", engine));
        }
        if let Some(charset) = self.charset.as_deref().filter(|c| !c.is_empty()) {
            options.push(format!("DEFAULT CHARACTER SET={}", charset));
        }
        if options.is_empty() {
            String::new()
        } else {
            format!(" {}", options.join(" "))
        }
    }
}
