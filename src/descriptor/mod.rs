//! Table descriptors.
//!
//! Serializable descriptions of tables, their indices and historical
//! versions, loaded from TOML or JSON. Columns are written either in the
//! compact shorthand understood by [`parser::parse_column`] or as full
//! tables/objects.
//!
//! ```toml
//! [[tables]]
//! name = "people"
//! columns = [
//!   "id: u64 pk autoincrement",
//!   "name: String size=200 unique",
//!   { name = "info", type = "Option<String>" },
//! ]
//! indices = [{ name = "by_name", columns = ["name"] }]
//!
//! [[tables.histories]]
//! version = "v1"
//! columns = ["id: u64 pk autoincrement", "name: String"]
//! ```

pub mod parser;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{DdlError, DdlResult};
use crate::schema::{Column, Index, TypeTag};

pub use parser::parse_column;

/// One column, with its type tag still in textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default, alias = "pk")]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, alias = "autoincrement")]
    pub auto_increment: bool,
    /// Forces a nullable column even when the tag is not.
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub default: Option<String>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            size: 0,
            primary_key: false,
            unique: false,
            auto_increment: false,
            nullable: false,
            default: None,
        }
    }

    /// Resolve the type tag and build the column.
    pub fn to_column(&self) -> DdlResult<Column> {
        let tag = TypeTag::parse(&self.ty)?;
        let mut column = Column::new(self.name.clone(), tag).size(self.size);
        if self.nullable {
            column = column.nullable();
        }
        if self.primary_key {
            column = column.primary_key();
        }
        if self.unique {
            column = column.unique();
        }
        if self.auto_increment {
            column = column.auto_increment();
        }
        if let Some(default) = &self.default {
            column = column.default(default.clone());
        }
        Ok(column)
    }
}

/// A column written as shorthand text or as a full descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnSpec {
    Short(String),
    Full(ColumnDescriptor),
}

impl ColumnSpec {
    pub fn descriptor(&self) -> DdlResult<ColumnDescriptor> {
        match self {
            ColumnSpec::Short(s) => parse_column(s),
            ColumnSpec::Full(d) => Ok(d.clone()),
        }
    }

    pub fn to_column(&self) -> DdlResult<Column> {
        self.descriptor()?.to_column()
    }
}

impl From<ColumnDescriptor> for ColumnSpec {
    fn from(desc: ColumnDescriptor) -> Self {
        Self::Full(desc)
    }
}

impl From<&str> for ColumnSpec {
    fn from(s: &str) -> Self {
        Self::Short(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDescriptor {
    pub name: String,
    #[serde(default)]
    pub unique: bool,
    pub columns: Vec<String>,
}

impl IndexDescriptor {
    pub fn to_index(&self) -> Index {
        let index = Index::new(self.name.clone(), self.columns.iter().cloned());
        if self.unique { index.unique() } else { index }
    }
}

/// A historical version of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDescriptor {
    pub version: String,
    /// Earlier history whose columns come first.
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub indices: Vec<IndexDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Earlier table in the same file whose columns come first.
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub indices: Vec<IndexDescriptor>,
    #[serde(default)]
    pub histories: Vec<HistoryDescriptor>,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            extends: None,
            columns: Vec::new(),
            indices: Vec::new(),
            histories: Vec::new(),
        }
    }
}

/// A file of table descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Dialect to render with, when the file pins one.
    #[serde(default)]
    pub dialect: Option<Dialect>,
    #[serde(default)]
    pub tables: Vec<TableDescriptor>,
}

impl SchemaFile {
    pub fn from_toml(s: &str) -> DdlResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json(s: &str) -> DdlResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a `.json` file as JSON, anything else as TOML.
    pub fn load(path: &Path) -> DdlResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
    }

    pub fn table(&self, name: &str) -> DdlResult<&TableDescriptor> {
        self.tables
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| DdlError::Config(format!("table '{}' is not defined", name)))
    }
}
