// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type mapping from schema column types to target-dialect type names.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Type Mapping System                           │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                     │
//! │  Column Type          TypeMapper             Mapped Type            │
//! │                                                                     │
//! │  int(11)        ──►  LanguageInfo   ──►   int / number             │
//! │  varchar(255)   ──►                 ──►   string  "max length: 255"│
//! │  decimal(10,2)  ──►                 ──►   float   "precision: 2"   │
//! │  tinyint(1)     ──►                 ──►   bool / boolean           │
//! │  datetime       ──►                 ──►   string / Date            │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The base type is the leading keyword of the declaration: the text before
//! any `(` or modifier such as `unsigned`, compared case-insensitively. A base
//! type missing from the dialect table is a hard error, never coerced.

mod language;

pub use language::{JAVASCRIPT, LanguageInfo, PHP};
use scaffold_core::{ColumnDescriptor, ScaffoldError};

use crate::Result;

/// Target-dialect type for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// Type name in the target dialect (e.g. `int`, `number`, `Date`).
    pub type_name: String,

    /// Descriptive note derived from type parameters.
    pub annotation: Option<String>
}

/// A column with its type resolved for a dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    /// Column name as declared.
    pub name: String,

    /// Resolved type.
    pub mapped: MappedType,

    /// Whether the column accepts NULL.
    pub nullable: bool
}

/// Trait for mapping schema column types to dialect types.
///
/// Implemented by each dialect's [`LanguageInfo`].
pub trait TypeMapper {
    /// Map a raw column type such as `varchar(255)`.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::UnrecognizedType`] when the base type is unknown.
    fn map_type(&self, raw_type: &str) -> Result<MappedType>;

    /// Map a whole column.
    ///
    /// # Errors
    ///
    /// Same as [`TypeMapper::map_type`].
    fn map_column(&self, column: &ColumnDescriptor) -> Result<MappedColumn> {
        Ok(MappedColumn {
            name:     column.name.clone(),
            mapped:   self.map_type(&column.raw_type)?,
            nullable: column.nullable
        })
    }
}

impl TypeMapper for LanguageInfo {
    fn map_type(&self, raw_type: &str) -> Result<MappedType> {
        let base = base_type(raw_type);
        let type_name = self
            .type_for(&base)
            .ok_or_else(|| ScaffoldError::UnrecognizedType {
                base: base.clone(),
                raw:  raw_type.to_string()
            })?;

        Ok(MappedType {
            type_name:  type_name.to_string(),
            annotation: annotation(&base, raw_type)
        })
    }
}

/// Leading keyword of a type declaration, lower-cased.
fn base_type(raw_type: &str) -> String {
    raw_type
        .split('(')
        .next()
        .and_then(|head| head.split_whitespace().next())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Text between the first `(` and the following `)`.
fn parameters(raw_type: &str) -> Option<&str> {
    let (_, rest) = raw_type.split_once('(')?;
    rest.split(')').next()
}

/// Annotation for parameterized types.
///
/// `varchar(N)` yields `max length: N`, `decimal(P,S)` yields
/// `precision: S`. A missing parameter yields nothing.
fn annotation(base: &str, raw_type: &str) -> Option<String> {
    let params = parameters(raw_type)?;
    let value = match base {
        "varchar" => params.trim(),
        "decimal" => params.split_once(',')?.1.trim(),
        _ => return None
    };

    if value.is_empty() {
        return None;
    }

    Some(match base {
        "varchar" => format!("max length: {value}"),
        _ => format!("precision: {value}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn php(raw: &str) -> MappedType {
        PHP.map_type(raw).unwrap()
    }

    fn js(raw: &str) -> MappedType {
        JAVASCRIPT.map_type(raw).unwrap()
    }

    #[test]
    fn varchar_has_max_length() {
        let ty = php("VARCHAR(255)");
        assert_eq!(ty.type_name, "string");
        assert_eq!(ty.annotation.as_deref(), Some("max length: 255"));
    }

    #[test]
    fn decimal_has_precision() {
        let ty = php("decimal(10,2)");
        assert_eq!(ty.type_name, "float");
        assert_eq!(ty.annotation.as_deref(), Some("precision: 2"));
    }

    #[test]
    fn decimal_with_spaces_and_modifier() {
        let ty = js("decimal(10, 4) unsigned");
        assert_eq!(ty.type_name, "number");
        assert_eq!(ty.annotation.as_deref(), Some("precision: 4"));
    }

    #[test]
    fn missing_parameters_give_no_annotation() {
        assert_eq!(php("varchar").annotation, None);
        assert_eq!(php("decimal(10)").annotation, None);
        assert_eq!(php("varchar()").annotation, None);
    }

    #[test]
    fn other_types_have_no_annotation() {
        assert_eq!(php("int(11)").annotation, None);
        assert_eq!(php("text").annotation, None);
    }

    #[test]
    fn php_table() {
        assert_eq!(php("int(11)").type_name, "int");
        assert_eq!(php("bigint(20) unsigned").type_name, "int");
        assert_eq!(php("tinyint(1)").type_name, "bool");
        assert_eq!(php("bit(1)").type_name, "bool");
        assert_eq!(php("double").type_name, "float");
        assert_eq!(php("float").type_name, "float");
        assert_eq!(php("longtext").type_name, "string");
        assert_eq!(php("timestamp").type_name, "string");
        assert_eq!(php("date").type_name, "string");
        assert_eq!(php("datetime").type_name, "string");
    }

    #[test]
    fn javascript_table() {
        assert_eq!(js("int(11)").type_name, "number");
        assert_eq!(js("bigint").type_name, "number");
        assert_eq!(js("decimal(8,2)").type_name, "number");
        assert_eq!(js("tinyint(1)").type_name, "boolean");
        assert_eq!(js("varchar(32)").type_name, "string");
        assert_eq!(js("datetime").type_name, "Date");
    }

    #[test]
    fn unknown_type_fails() {
        let err = PHP.map_type("geometry").unwrap_err();
        match err {
            ScaffoldError::UnrecognizedType { base, raw } => {
                assert_eq!(base, "geometry");
                assert_eq!(raw, "geometry");
            }
            other => panic!("unexpected error: {other}")
        }
    }

    #[test]
    fn unknown_parameterized_type_reports_base() {
        let err = JAVASCRIPT.map_type("enum('a','b')").unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::UnrecognizedType { ref base, .. } if base == "enum"
        ));
    }

    #[test]
    fn empty_type_fails() {
        assert!(PHP.map_type("").is_err());
    }

    #[test]
    fn map_column_keeps_name_and_nullability() {
        let column = ColumnDescriptor::new("price", "decimal(10,2)", true);
        let mapped = PHP.map_column(&column).unwrap();
        assert_eq!(mapped.name, "price");
        assert!(mapped.nullable);
        assert_eq!(mapped.mapped.annotation.as_deref(), Some("precision: 2"));
    }
}
