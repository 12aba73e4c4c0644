//! Column definitions.

use crate::dialect::SqlDialect;

use super::types::{ColumnType, SqlTyped, TypeTag};

/// A column definition.
///
/// Columns are dialect-agnostic; the owning table supplies the dialect when
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
    pub not_null: bool,
    /// Raw SQL literal, emitted verbatim after `DEFAULT`.
    pub default: Option<String>,
    pub auto_increment: bool,
    pub primary_key: bool,
    pub unique: bool,
    /// Length bound for text/binary columns, 0 means the dialect default.
    pub size: u64,
}

impl Column {
    /// Create a column of the given type; nullable tags yield a nullable column.
    pub fn new(name: impl Into<String>, tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            ty: tag.ty,
            not_null: !tag.nullable,
            default: None,
            auto_increment: false,
            primary_key: false,
            unique: false,
            size: 0,
        }
    }

    /// Create a column typed after a Rust value type.
    ///
    /// ```
    /// use ddlkit::schema::Column;
    ///
    /// let id = Column::of::<u64>("id").primary_key().auto_increment();
    /// let info = Column::of::<Option<String>>("info");
    /// assert!(id.not_null);
    /// assert!(!info.not_null);
    /// ```
    pub fn of<T: SqlTyped + ?Sized>(name: impl Into<String>) -> Self {
        Self::new(name, T::TAG)
    }

    /// Retype the column; nullability follows the tag.
    pub fn with_type(mut self, tag: TypeTag) -> Self {
        self.ty = tag.ty;
        self.not_null = !tag.nullable;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.not_null = false;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn default(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Full column declaration: `<name> <type> <constraints>`.
    ///
    /// The separator before the constraints is always present, so a column
    /// without constraints ends in a single space.
    pub fn to_sql(&self, dialect: &dyn SqlDialect) -> String {
        format!(
            "{} {} {}",
            dialect.quote_identifier(&self.name),
            self.data_type(dialect),
            self.constraints(dialect)
        )
    }

    pub fn data_type(&self, dialect: &dyn SqlDialect) -> String {
        dialect.data_type(self.ty, self.auto_increment, self.size)
    }

    /// Constraint clauses in fixed order:
    /// DEFAULT, auto-increment keyword, NOT NULL, PRIMARY KEY, UNIQUE.
    pub fn constraints(&self, dialect: &dyn SqlDialect) -> String {
        let mut options: Vec<&str> = Vec::new();
        if let Some(default) = self.default.as_deref().filter(|d| !d.is_empty()) {
            options.push("DEFAULT");
            options.push(default);
        }
        if self.auto_increment {
            let keyword = dialect.auto_increment();
            if !keyword.is_empty() {
                options.push(keyword);
            }
        }
        if self.not_null {
            options.push("NOT NULL");
        }
        if self.primary_key {
            options.push("PRIMARY KEY");
        }
        if self.unique {
            options.push("UNIQUE");
        }
        options.join(" ")
    }

    /// Whether both columns render to the same declaration.
    pub fn same_definition(&self, other: &Column, dialect: &dyn SqlDialect) -> bool {
        self.to_sql(dialect) == other.to_sql(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{MysqlDialect, PostgresDialect, SqliteDialect};

    #[test]
    fn test_constraint_order_is_fixed() {
        let d = MysqlDialect::default();
        let a = Column::of::<i64>("id")
            .unique()
            .primary_key()
            .auto_increment()
            .default("1");
        let b = Column::of::<i64>("id")
            .default("1")
            .auto_increment()
            .primary_key()
            .unique();
        let expected = "`id` BIGINT DEFAULT 1 AUTO_INCREMENT NOT NULL PRIMARY KEY UNIQUE";
        assert_eq!(a.to_sql(&d), expected);
        assert_eq!(b.to_sql(&d), expected);
    }

    #[test]
    fn test_empty_keyword_is_omitted() {
        let col = Column::of::<u64>("id").primary_key().auto_increment();
        assert_eq!(
            col.to_sql(&PostgresDialect),
            "\"id\" BIGSERIAL NOT NULL PRIMARY KEY"
        );
        assert_eq!(
            col.to_sql(&SqliteDialect),
            "\"id\" integer AUTOINCREMENT NOT NULL PRIMARY KEY"
        );
    }

    #[test]
    fn test_nullable_column_has_trailing_separator() {
        let col = Column::of::<Option<String>>("info");
        assert_eq!(col.constraints(&PostgresDialect), "");
        assert_eq!(col.to_sql(&PostgresDialect), "\"info\" VARCHAR(255) ");
    }

    #[test]
    fn test_with_type_resets_nullability() {
        let col = Column::of::<Option<i32>>("n").with_type(TypeTag::of::<i64>());
        assert_eq!(col.ty, ColumnType::BigInt);
        assert!(col.not_null);
        assert!(!Column::of::<bool>("flag").nullable().not_null);
    }

    #[test]
    fn test_empty_default_is_ignored() {
        let col = Column::of::<String>("s").default("");
        assert_eq!(col.constraints(&SqliteDialect), "NOT NULL");
        let col = Column::of::<String>("s").default("'x'");
        assert_eq!(col.constraints(&SqliteDialect), "DEFAULT 'x' NOT NULL");
    }

    #[test]
    fn test_same_definition() {
        let d = MysqlDialect::default();
        let a = Column::of::<String>("a");
        assert!(a.same_definition(&a.clone(), &d));
        assert!(!a.same_definition(&a.clone().size(1_000_000), &d));
        assert!(!a.same_definition(&a.clone().unique(), &d));
        // SQLite text carries no length, so only the size differs in the model
        assert!(a.same_definition(&a.clone().size(10), &SqliteDialect));
    }
}
