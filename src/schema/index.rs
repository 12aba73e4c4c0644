//! Index definitions.

use crate::dialect::SqlDialect;

/// A (possibly composite) index over named columns.
///
/// Column names are not checked against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: String,
    pub unique: bool,
    /// Key order.
    pub columns: Vec<String>,
}

impl Index {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            unique: false,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn to_sql(&self, table: &str, dialect: &dyn SqlDialect) -> String {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let cols = self
            .columns
            .iter()
            .map(|c| dialect.quote_identifier(c))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "CREATE {}INDEX {} ON {} ({})",
            unique,
            dialect.quote_identifier(&self.name),
            dialect.quote_identifier(table),
            cols
        )
    }
}
