// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum emission.
//!
//! Renders lookup-table rows as a class of named constants. One constant per
//! row, in row order, named by the casing-converted name column and holding
//! the value column as a literal.
//!
//! | Value | Literal |
//! |-------|---------|
//! | string | `'text'` with `\` and `'` escaped |
//! | number, boolean | bare |
//! | null | `null` |
//!
//! Rows are not de-duplicated.

mod javascript;
mod php;

use scaffold_core::{EnumSource, Result, ScaffoldError};
use serde_json::Value;

use crate::{
    artifact::Artifact,
    config::GenerationConfig,
    dialect::Dialect,
    emit::single_quoted
};

/// Dialect-independent layout of an enum class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EnumPlan {
    pub class_name: String,
    pub constants:  Vec<Constant>
}

/// One named constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Constant {
    /// Cased constant name.
    pub name:    String,

    /// Name column value as stored, used as the lookup key.
    pub label:   String,

    /// Rendered value literal.
    pub literal: String
}

impl EnumPlan {
    /// Validate rows and lay out the constants.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::InvalidRow`] for the first row lacking the name or
    /// value column, or holding `null` as its name.
    pub fn build(source: &EnumSource, config: &GenerationConfig) -> Result<Self> {
        let constants = source
            .rows
            .iter()
            .map(|row| -> Result<Constant> {
                let label = match row.get(&source.name_field) {
                    None | Some(Value::Null) => {
                        return Err(invalid_row(source, &source.name_field));
                    }
                    Some(value) => label(value)
                };
                let value = row
                    .get(&source.value_field)
                    .ok_or_else(|| invalid_row(source, &source.value_field))?;

                Ok(Constant {
                    name: config.field_name(&label),
                    label,
                    literal: literal(value)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            class_name: config.class_name(&source.name),
            constants
        })
    }
}

/// Render an enum for `source` in `dialect`.
pub(crate) fn emit_enum(
    dialect: Dialect,
    source: &EnumSource,
    config: &GenerationConfig
) -> Result<Artifact> {
    let plan = EnumPlan::build(source, config)?;

    let content = match dialect {
        Dialect::Php => php::render_enum(&plan, config),
        Dialect::JavaScript => javascript::render_enum(&plan, config)
    };

    Ok(Artifact::new(plan.class_name, dialect.extension(), content))
}

fn invalid_row(source: &EnumSource, field: &str) -> ScaffoldError {
    ScaffoldError::InvalidRow {
        table: source.name.clone(),
        field: field.to_string()
    }
}

/// Text of a name column value.
fn label(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string()
    }
}

/// Source literal of a value column value.
fn literal(value: &Value) -> String {
    match value {
        Value::String(text) => single_quoted(text),
        Value::Null => "null".to_string(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => single_quoted(&value.to_string())
    }
}
