//! Table definitions and their version history.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::dialect::SqlDialect;
use crate::error::{DdlError, DdlResult};

use super::column::Column;
use super::index::Index;

/// Version label that always resolves to the live table.
pub const CURRENT_VERSION: &str = "current";

/// A table bound to one dialect.
///
/// Built by appending columns and indices, then treated as read-only.
/// Historical snapshots are full tables of the same name kept in a flat
/// list and addressed by version label.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    dialect: Arc<dyn SqlDialect>,
    columns: Vec<Column>,
    column_map: HashMap<String, usize>,
    indices: Vec<Index>,
    index_map: HashMap<String, usize>,
    version: Option<String>,
    histories: Vec<Table>,
}

impl Table {
    pub fn new(name: impl Into<String>, dialect: Arc<dyn SqlDialect>) -> Self {
        Self {
            name: name.into(),
            dialect,
            columns: Vec::new(),
            column_map: HashMap::new(),
            indices: Vec::new(),
            index_map: HashMap::new(),
            version: None,
            histories: Vec::new(),
        }
    }

    /// An empty table with the same name and dialect, labelled `version`.
    pub fn snapshot(&self, version: impl Into<String>) -> Table {
        Table::new(self.name.clone(), Arc::clone(&self.dialect)).with_version(version)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dialect(&self) -> &dyn SqlDialect {
        self.dialect.as_ref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn indices(&self) -> &[Index] {
        &self.indices
    }

    pub fn histories(&self) -> &[Table] {
        &self.histories
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_map.get(name).map(|&i| &self.columns[i])
    }

    pub fn index(&self, name: &str) -> Option<&Index> {
        self.index_map.get(name).map(|&i| &self.indices[i])
    }

    pub fn add_column(&mut self, column: Column) -> DdlResult<&mut Self> {
        if self.column_map.contains_key(&column.name) {
            return Err(DdlError::collision("column", column.name));
        }
        trace!(table = %self.name, column = %column.name, "add column");
        self.column_map.insert(column.name.clone(), self.columns.len());
        self.columns.push(column);
        Ok(self)
    }

    pub fn add_index(&mut self, index: Index) -> DdlResult<&mut Self> {
        if self.index_map.contains_key(&index.name) {
            return Err(DdlError::collision("index", index.name));
        }
        trace!(table = %self.name, index = %index.name, "add index");
        self.index_map.insert(index.name.clone(), self.indices.len());
        self.indices.push(index);
        Ok(self)
    }

    /// Append copies of every column of `other`, in its order.
    ///
    /// Nothing is appended when any of the names is already taken.
    pub fn embed(&mut self, other: &Table) -> DdlResult<&mut Self> {
        if let Some(taken) = other
            .columns
            .iter()
            .find(|c| self.column_map.contains_key(&c.name))
        {
            return Err(DdlError::collision("column", taken.name.clone()));
        }
        for column in &other.columns {
            self.add_column(column.clone())?;
        }
        Ok(self)
    }

    /// Attach a historical snapshot of this table.
    ///
    /// The snapshot is rebound to this table's dialect.
    pub fn add_history(&mut self, mut history: Table) -> DdlResult<&mut Self> {
        if history.name != self.name {
            return Err(DdlError::HistoryMismatch {
                expected: self.name.clone(),
                found: history.name,
            });
        }
        let label = match history.version.as_deref() {
            None => return Err(DdlError::MissingVersion(self.name.clone())),
            Some(CURRENT_VERSION) => {
                return Err(DdlError::ReservedVersion(CURRENT_VERSION.to_string()));
            }
            Some(label) => label.to_string(),
        };
        if self.histories.iter().any(|h| h.version() == Some(label.as_str())) {
            return Err(DdlError::collision("version", label));
        }
        debug!(
            table = %self.name,
            version = %label,
            columns = history.columns.len(),
            "add history"
        );
        history.dialect = Arc::clone(&self.dialect);
        self.histories.push(history);
        Ok(self)
    }

    /// Resolve a version label; `current` is this table itself.
    pub fn lookup_version(&self, version: &str) -> Option<&Table> {
        if version == CURRENT_VERSION {
            return Some(self);
        }
        self.histories
            .iter()
            .find(|h| h.version.as_deref() == Some(version))
    }

    pub fn column_sql(&self, column: &Column) -> String {
        column.to_sql(self.dialect())
    }

    fn build_create_table(&self, if_not_exists: bool) -> String {
        let if_not_exists = if if_not_exists { "IF NOT EXISTS " } else { "" };
        let defs = self
            .columns
            .iter()
            .map(|c| self.column_sql(c))
            .collect::<Vec<_>>()
            .join(",\n");
        format!(
            "CREATE TABLE {}{}(\n{}\n){}",
            if_not_exists,
            self.dialect.quote_identifier(&self.name),
            defs,
            self.dialect.create_table_suffix()
        )
    }

    pub fn create_table_sql(&self) -> String {
        self.build_create_table(false)
    }

    pub fn create_table_if_not_exists_sql(&self) -> String {
        self.build_create_table(true)
    }

    /// One CREATE INDEX statement per index, in declaration order.
    pub fn create_index_sqls(&self) -> Vec<String> {
        self.indices
            .iter()
            .map(|i| i.to_sql(&self.name, self.dialect()))
            .collect()
    }

    /// CREATE TABLE followed by the index statements, without terminators.
    pub fn statements(&self, if_not_exists: bool) -> Vec<String> {
        let mut stmts = vec![self.build_create_table(if_not_exists)];
        stmts.extend(self.create_index_sqls());
        stmts
    }

    /// Full DDL text using `IF NOT EXISTS`, every statement terminated by `;\n`.
    pub fn to_sql(&self) -> String {
        self.to_string()
    }

    pub fn to_sql_with(&self, if_not_exists: bool) -> String {
        self.statements(if_not_exists)
            .iter()
            .map(|stmt| format!("{};\n", stmt))
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql_with(true))
    }
}
