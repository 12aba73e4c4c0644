//! Builder binding a dialect to table construction.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::descriptor::{SchemaFile, TableDescriptor};
use crate::dialect::{Dialect, SqlDialect};
use crate::error::{DdlError, DdlResult};
use crate::schema::Table;

/// Builds tables for one dialect.
#[derive(Debug, Clone)]
pub struct Builder {
    dialect: Arc<dyn SqlDialect>,
}

impl Builder {
    pub fn new(dialect: &Dialect) -> Self {
        Self::with_generator(dialect.generator())
    }

    pub fn with_generator(dialect: Arc<dyn SqlDialect>) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &dyn SqlDialect {
        self.dialect.as_ref()
    }

    /// An empty table bound to this builder's dialect.
    pub fn table(&self, name: impl Into<String>) -> Table {
        Table::new(name, Arc::clone(&self.dialect))
    }

    /// Build a table, its indices and its histories.
    ///
    /// Fails if the descriptor extends another table; use [`Builder::define_all`]
    /// for files where tables build on each other.
    pub fn define_table(&self, desc: &TableDescriptor) -> DdlResult<Table> {
        if let Some(base) = &desc.extends {
            return Err(DdlError::Config(format!(
                "table '{}' extends '{}', which is not defined before it",
                desc.name, base
            )));
        }
        self.define_extending(desc, None)
    }

    /// Build every table of a file in order, resolving `extends` against
    /// tables defined earlier in the same file.
    pub fn define_all(&self, file: &SchemaFile) -> DdlResult<Vec<Table>> {
        let mut tables: Vec<Table> = Vec::with_capacity(file.tables.len());
        let mut by_name: HashMap<&str, usize> = HashMap::new();

        for desc in &file.tables {
            let base = match &desc.extends {
                Some(base) => {
                    let i = by_name.get(base.as_str()).copied().ok_or_else(|| {
                        DdlError::Config(format!(
                            "table '{}' extends '{}', which is not defined before it",
                            desc.name, base
                        ))
                    })?;
                    Some(&tables[i])
                }
                None => None,
            };
            let table = self.define_extending(desc, base)?;
            by_name.insert(desc.name.as_str(), tables.len());
            tables.push(table);
        }
        Ok(tables)
    }

    fn define_extending(&self, desc: &TableDescriptor, base: Option<&Table>) -> DdlResult<Table> {
        let mut table = self.table(desc.name.clone());
        if let Some(version) = &desc.version {
            table = table.with_version(version.clone());
        }
        if let Some(base) = base {
            table.embed(base)?;
        }
        for spec in &desc.columns {
            table.add_column(spec.to_column()?)?;
        }
        for index in &desc.indices {
            table.add_index(index.to_index())?;
        }

        for history in &desc.histories {
            let mut snapshot = table.snapshot(history.version.clone());
            if let Some(parent) = &history.extends {
                let parent = table
                    .histories()
                    .iter()
                    .find(|h| h.version() == Some(parent.as_str()))
                    .ok_or_else(|| DdlError::VersionNotFound(parent.clone()))?;
                snapshot.embed(parent)?;
            }
            for spec in &history.columns {
                snapshot.add_column(spec.to_column()?)?;
            }
            for index in &history.indices {
                snapshot.add_index(index.to_index())?;
            }
            table.add_history(snapshot)?;
        }

        debug!(
            table = %table.name(),
            dialect = self.dialect.name(),
            columns = table.columns().len(),
            indices = table.indices().len(),
            histories = table.histories().len(),
            "defined table"
        );
        Ok(table)
    }
}
