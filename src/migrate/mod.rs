//! Versioned migrations.
//!
//! Diffs two named snapshots of a table into a single ALTER TABLE statement.
//! The label `current` names the live table; any other label names one of
//! its histories.
//!
//! ```
//! use ddlkit::dialect::Dialect;
//! use ddlkit::schema::{Column, Table};
//!
//! let mut users = Table::new("users", Dialect::Postgres.generator());
//! users.add_column(Column::of::<i64>("id"))?;
//! users.add_column(Column::of::<String>("email"))?;
//!
//! let mut v1 = users.snapshot("v1");
//! v1.add_column(Column::of::<i64>("id"))?;
//! users.add_history(v1)?;
//!
//! assert_eq!(
//!     users.migrate("v1", "current")?,
//!     "ALTER TABLE \"users\"\nADD \"email\" VARCHAR(255) NOT NULL"
//! );
//! # Ok::<(), ddlkit::DdlError>(())
//! ```

pub mod diff;

use tracing::debug;

use crate::error::{DdlError, DdlResult};
use crate::schema::Table;

pub use diff::{diff_tables, render_alter, AlterOp, ModifyTarget};

impl Table {
    /// Operations migrating snapshot `from` to snapshot `to`.
    pub fn diff(&self, from: &str, to: &str, target: ModifyTarget) -> DdlResult<Vec<AlterOp<'_>>> {
        let from_table = self
            .lookup_version(from)
            .ok_or_else(|| DdlError::VersionNotFound(from.to_string()))?;
        let to_table = self
            .lookup_version(to)
            .ok_or_else(|| DdlError::VersionNotFound(to.to_string()))?;

        let ops = diff_tables(from_table, to_table, target);
        debug!(
            table = %self.name(),
            from,
            to,
            ops = ops.len(),
            "computed migration"
        );
        Ok(ops)
    }

    /// ALTER TABLE statement migrating `from` to `to`; MODIFY renders the new declaration.
    pub fn migrate(&self, from: &str, to: &str) -> DdlResult<String> {
        self.migrate_with(from, to, ModifyTarget::To)
    }

    pub fn migrate_with(&self, from: &str, to: &str, target: ModifyTarget) -> DdlResult<String> {
        let ops = self.diff(from, to, target)?;
        Ok(render_alter(self.name(), &ops, self.dialect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use crate::schema::Column;

    fn versioned() -> Table {
        let mut t = Table::new("accounts", Dialect::mysql("utf8", "InnoDB").generator());
        t.add_column(Column::of::<u64>("id").primary_key().auto_increment())
            .unwrap()
            .add_column(Column::of::<String>("name").size(64))
            .unwrap();
        let mut v1 = t.snapshot("v1");
        v1.add_column(Column::of::<u64>("id").primary_key().auto_increment())
            .unwrap()
            .add_column(Column::of::<String>("name"))
            .unwrap()
            .add_column(Column::of::<Option<String>>("nick"))
            .unwrap();
        t.add_history(v1).unwrap();
        t
    }

    #[test]
    fn test_migrate_forward() {
        let t = versioned();
        assert_eq!(
            t.migrate("v1", "current").unwrap(),
            "ALTER TABLE `accounts`\nMODIFY `name` VARCHAR(64) NOT NULL,\nDROP `nick`"
        );
    }

    #[test]
    fn test_migrate_backward() {
        let t = versioned();
        assert_eq!(
            t.migrate("current", "v1").unwrap(),
            "ALTER TABLE `accounts`\nMODIFY `name` VARCHAR(255) NOT NULL,\nADD `nick` VARCHAR(255) "
        );
    }

    #[test]
    fn test_migrate_self_is_empty() {
        let t = versioned();
        assert_eq!(t.migrate("current", "current").unwrap(), "ALTER TABLE `accounts`\n");
        assert_eq!(t.migrate("v1", "v1").unwrap(), "ALTER TABLE `accounts`\n");
    }

    #[test]
    fn test_unknown_versions() {
        let t = versioned();
        let err = t.migrate("vX", "current").unwrap_err();
        assert!(matches!(err, DdlError::VersionNotFound(ref v) if v == "vX"));
        let err = t.migrate("v1", "v9").unwrap_err();
        assert!(matches!(err, DdlError::VersionNotFound(ref v) if v == "v9"));
    }
}
