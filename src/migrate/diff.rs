//! Column diff between two snapshots of a table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::dialect::SqlDialect;
use crate::error::DdlError;
use crate::schema::{Column, Table};

/// Which side's declaration a MODIFY operation renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifyTarget {
    /// Re-render the old declaration (leaves the column unchanged when applied).
    From,
    /// Render the new declaration.
    #[default]
    To,
}

impl FromStr for ModifyTarget {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "from" => Ok(Self::From),
            "to" => Ok(Self::To),
            other => Err(DdlError::Config(format!(
                "unknown modify target '{}', expected from or to",
                other
            ))),
        }
    }
}

impl fmt::Display for ModifyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => f.write_str("from"),
            Self::To => f.write_str("to"),
        }
    }
}

/// One clause of an ALTER TABLE statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterOp<'a> {
    Drop(&'a Column),
    Modify(&'a Column),
    Add(&'a Column),
}

impl<'a> AlterOp<'a> {
    pub fn column(&self) -> &'a Column {
        match self {
            AlterOp::Drop(c) | AlterOp::Modify(c) | AlterOp::Add(c) => c,
        }
    }

    pub fn to_sql(&self, dialect: &dyn SqlDialect) -> String {
        match self {
            AlterOp::Drop(c) => format!("DROP {}", dialect.quote_identifier(&c.name)),
            AlterOp::Modify(c) => format!("MODIFY {}", c.to_sql(dialect)),
            AlterOp::Add(c) => format!("ADD {}", c.to_sql(dialect)),
        }
    }
}

/// Compute the operations that turn `from` into `to`.
///
/// Drops and modifications come first, in `from`'s column order, followed
/// by additions in `to`'s column order. Columns are matched by name and
/// compared by their rendered declaration. Indices are not compared.
pub fn diff_tables<'a>(from: &'a Table, to: &'a Table, target: ModifyTarget) -> Vec<AlterOp<'a>> {
    let dialect = from.dialect();
    let mut ops = Vec::new();

    for from_col in from.columns() {
        match to.column(&from_col.name) {
            None => ops.push(AlterOp::Drop(from_col)),
            Some(to_col) if !from_col.same_definition(to_col, dialect) => {
                let col = match target {
                    ModifyTarget::From => from_col,
                    ModifyTarget::To => to_col,
                };
                ops.push(AlterOp::Modify(col));
            }
            Some(_) => {}
        }
    }

    for to_col in to.columns() {
        if from.column(&to_col.name).is_none() {
            ops.push(AlterOp::Add(to_col));
        }
    }

    for op in &ops {
        trace!(table = %from.name(), op = ?op, "alter op");
    }
    ops
}

/// Wrap rendered operations into one ALTER TABLE statement.
pub fn render_alter(table: &str, ops: &[AlterOp<'_>], dialect: &dyn SqlDialect) -> String {
    let body = ops
        .iter()
        .map(|op| op.to_sql(dialect))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("ALTER TABLE {}\n{}", dialect.quote_identifier(table), body)
}
