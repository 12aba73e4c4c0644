//! Column shorthand parser using nom.
//!
//! # Syntax
//!
//! ```text
//! name: String size=200 unique default='n/a'
//! ─┬──  ──┬───  ────────┬───────────────────
//!  │      │             └── Attributes (any order)
//!  │      └── Type tag (`Option<T>` or `T?` for nullable)
//!  └── Column name
//! ```
//!
//! Attributes: `pk`/`primary_key`, `unique`, `autoincrement`/`auto_increment`,
//! `nullable`, `size=<n>`, `default=<literal>`. A default literal is either a
//! single-quoted SQL string (kept verbatim, `''` escapes a quote) or a bare token.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_while1},
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{map, map_res, recognize, value},
    multi::many0,
    sequence::{delimited, preceded},
    IResult,
};

use crate::error::{DdlError, DdlResult};

use super::ColumnDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Attr {
    PrimaryKey,
    Unique,
    AutoIncrement,
    Nullable,
    Size(u64),
    Default(String),
}

/// Parse a column shorthand into a descriptor.
///
/// The type tag is kept as text; it is resolved when the column is built.
pub fn parse_column(input: &str) -> DdlResult<ColumnDescriptor> {
    let trimmed = input.trim();
    let offset = input.len() - input.trim_start().len();

    match column_def(trimmed) {
        Ok(("", desc)) => Ok(desc),
        Ok((remaining, _)) => Err(DdlError::parse(
            offset + trimmed.len() - remaining.len(),
            format!("Unexpected trailing content: '{}'", remaining),
        )),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(DdlError::parse(
            offset + trimmed.len() - e.input.len(),
            format!("Invalid column definition '{}'", trimmed),
        )),
        Err(nom::Err::Incomplete(_)) => Err(DdlError::parse(
            offset + trimmed.len(),
            "Unexpected end of column definition",
        )),
    }
}

fn column_def(input: &str) -> IResult<&str, ColumnDescriptor> {
    let (input, name) = identifier(input)?;
    let (input, _) = delimited(multispace0, char(':'), multispace0)(input)?;
    let (input, ty) = type_tag(input)?;
    let (input, attrs) = many0(preceded(multispace1, attribute))(input)?;

    let mut desc = ColumnDescriptor::new(name, ty);
    for attr in attrs {
        match attr {
            Attr::PrimaryKey => desc.primary_key = true,
            Attr::Unique => desc.unique = true,
            Attr::AutoIncrement => desc.auto_increment = true,
            Attr::Nullable => desc.nullable = true,
            Attr::Size(n) => desc.size = n,
            Attr::Default(v) => desc.default = Some(v),
        }
    }
    Ok((input, desc))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// Type tags contain no whitespace: `i64`, `Option<String>`, `Vec<u8>`, `text?`.
fn type_tag(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

fn attribute(input: &str) -> IResult<&str, Attr> {
    alt((
        value(Attr::PrimaryKey, alt((tag("primary_key"), tag("pk")))),
        value(Attr::Unique, tag("unique")),
        value(
            Attr::AutoIncrement,
            alt((tag("auto_increment"), tag("autoincrement"))),
        ),
        value(Attr::Nullable, tag("nullable")),
        map(preceded(tag("size="), size), Attr::Size),
        map(preceded(tag("default="), default_literal), |v: &str| {
            Attr::Default(v.to_string())
        }),
    ))(input)
}

fn size(input: &str) -> IResult<&str, u64> {
    map_res(digit1, str::parse::<u64>)(input)
}

fn default_literal(input: &str) -> IResult<&str, &str> {
    alt((quoted_literal, take_while1(|c: char| !c.is_whitespace())))(input)
}

fn quoted_literal(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('\''),
        many0(alt((tag("''"), is_not("'")))),
        char('\''),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal() {
        let desc = parse_column("id: u64").unwrap();
        assert_eq!(desc, ColumnDescriptor::new("id", "u64"));
    }

    #[test]
    fn test_all_attributes() {
        let desc =
            parse_column("  id : u64 pk autoincrement unique size=12 default=0  ").unwrap();
        assert_eq!(desc.name, "id");
        assert_eq!(desc.ty, "u64");
        assert!(desc.primary_key && desc.auto_increment && desc.unique);
        assert_eq!(desc.size, 12);
        assert_eq!(desc.default.as_deref(), Some("0"));
    }

    #[test]
    fn test_long_attribute_names() {
        let desc = parse_column("id: i32 primary_key auto_increment nullable").unwrap();
        assert!(desc.primary_key && desc.auto_increment && desc.nullable);
    }

    #[test]
    fn test_quoted_default_is_verbatim() {
        let desc = parse_column("note: Option<String> default='it''s here' size=40").unwrap();
        assert_eq!(desc.ty, "Option<String>");
        assert_eq!(desc.default.as_deref(), Some("'it''s here'"));
        assert_eq!(desc.size, 40);
    }

    #[test]
    fn test_type_is_not_validated_here() {
        let desc = parse_column("id: uuid").unwrap();
        assert_eq!(desc.ty, "uuid");
    }

    #[test]
    fn test_errors_carry_position() {
        let err = parse_column("id u64").unwrap_err();
        assert!(matches!(err, DdlError::Parse { position: 3, .. }));

        let err = parse_column("id: u64 primary").unwrap_err();
        assert!(matches!(err, DdlError::Parse { position: 7, .. }));

        let err = parse_column("id: u64 size=big").unwrap_err();
        assert!(matches!(err, DdlError::Parse { .. }));

        assert!(parse_column("").is_err());
    }
}
