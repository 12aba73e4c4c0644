//! Logical column types.
//!
//! A closed enumeration of value kinds that every dialect knows how to map.
//! Textual type names are resolved here, at the descriptor boundary, so
//! rendering never meets an unknown type.

use std::fmt;
use std::str::FromStr;

use crate::error::{DdlError, DdlResult};

/// Logical kind of the value stored in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Boolean
    Bool,
    /// 8 or 16-bit integer
    SmallInt,
    /// 32-bit integer
    Int,
    /// 64-bit integer
    BigInt,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Character data, bounded by the column size hint
    Text,
    /// Binary data, bounded by the column size hint
    Bytes,
    /// Point in time
    Timestamp,
}

impl ColumnType {
    /// Every supported kind, in declaration order.
    pub const ALL: [ColumnType; 9] = [
        Self::Bool,
        Self::SmallInt,
        Self::Int,
        Self::BigInt,
        Self::Float,
        Self::Double,
        Self::Text,
        Self::Bytes,
        Self::Timestamp,
    ];

    /// Resolve a type name (Rust or SQL flavoured, case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bool" | "boolean" => Some(Self::Bool),
            "i8" | "i16" | "u8" | "u16" | "smallint" | "int2" => Some(Self::SmallInt),
            "i32" | "u32" | "int" | "integer" | "int4" => Some(Self::Int),
            "i64" | "u64" | "isize" | "usize" | "bigint" | "int8" => Some(Self::BigInt),
            "f32" | "float" | "real" | "float4" => Some(Self::Float),
            "f64" | "double" | "float8" => Some(Self::Double),
            "string" | "&str" | "str" | "text" | "varchar" => Some(Self::Text),
            "vec<u8>" | "bytes" | "binary" | "blob" => Some(Self::Bytes),
            "datetime" | "naivedatetime" | "timestamp" | "time" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Canonical lower-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::SmallInt => "smallint",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A column type together with its nullability marker.
///
/// `Option<T>` representatives (and `T?` in descriptor files) produce a
/// nullable tag; everything else is non-null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    pub ty: ColumnType,
    pub nullable: bool,
}

impl TypeTag {
    pub const fn new(ty: ColumnType) -> Self {
        Self { ty, nullable: false }
    }

    pub const fn nullable(ty: ColumnType) -> Self {
        Self { ty, nullable: true }
    }

    /// The tag of a Rust value type.
    pub fn of<T: SqlTyped + ?Sized>() -> Self {
        T::TAG
    }

    /// Parse a textual tag such as `i64`, `Option<String>` or `text?`.
    pub fn parse(s: &str) -> DdlResult<Self> {
        let trimmed = s.trim();
        let (inner, nullable) = if let Some(inner) = trimmed.strip_suffix('?') {
            (inner, true)
        } else if let Some(inner) = trimmed
            .strip_prefix("Option<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            (inner, true)
        } else {
            (trimmed, false)
        };

        ColumnType::from_name(inner)
            .map(|ty| Self { ty, nullable })
            .ok_or_else(|| DdlError::UnsupportedType(trimmed.to_string()))
    }
}

impl FromStr for TypeTag {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "{}?", self.ty)
        } else {
            write!(f, "{}", self.ty)
        }
    }
}

/// Rust types that stand for a SQL column type.
pub trait SqlTyped {
    const TAG: TypeTag;
}

macro_rules! sql_typed {
    ($ty:expr => $($t:ty),+ $(,)?) => {
        $(impl SqlTyped for $t {
            const TAG: TypeTag = TypeTag::new($ty);
        })+
    };
}

sql_typed!(ColumnType::Bool => bool);
sql_typed!(ColumnType::SmallInt => i8, i16, u8, u16);
sql_typed!(ColumnType::Int => i32, u32);
sql_typed!(ColumnType::BigInt => i64, u64, isize, usize);
sql_typed!(ColumnType::Float => f32);
sql_typed!(ColumnType::Double => f64);
sql_typed!(ColumnType::Text => String, str);
sql_typed!(ColumnType::Bytes => Vec<u8>, [u8]);
sql_typed!(ColumnType::Timestamp => chrono::NaiveDateTime);

impl<Tz: chrono::TimeZone> SqlTyped for chrono::DateTime<Tz> {
    const TAG: TypeTag = TypeTag::new(ColumnType::Timestamp);
}

impl<T: SqlTyped + ?Sized> SqlTyped for &T {
    const TAG: TypeTag = T::TAG;
}

impl<T: SqlTyped> SqlTyped for Option<T> {
    const TAG: TypeTag = TypeTag::nullable(T::TAG.ty);
}
