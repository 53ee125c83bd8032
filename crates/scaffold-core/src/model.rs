// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema metadata exchanged between providers and the generation engine.
//!
//! All types here are plain values: produced by a [`SchemaProvider`], handed
//! to the engine for one generation unit, and dropped afterwards.
//!
//! [`SchemaProvider`]: crate::SchemaProvider

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a table, keyed by column name.
pub type Row = serde_json::Map<String, Value>;

/// A table column as reported by the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name exactly as declared.
    pub name: String,

    /// Declared type, possibly parameterized (`varchar(255)`,
    /// `decimal(10,2)`, `int(11) unsigned`).
    pub raw_type: String,

    /// Whether the column accepts NULL.
    #[serde(default)]
    pub nullable: bool
}

impl ColumnDescriptor {
    /// Create a column descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            nullable
        }
    }
}

/// A foreign key declared by the table being inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingConstraint {
    /// Table the key points at.
    pub referenced_table: String,

    /// Column the key points at.
    pub referenced_field: String,

    /// Database holding the referenced table.
    pub database: String
}

/// A foreign key declared by another table that points at the inspected one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingConstraint {
    /// Table declaring the key.
    pub referencing_table: String,

    /// Declared constraint name, used to derive the collection field name.
    pub constraint_name: String,

    /// Database holding the referencing table.
    pub database: String
}

/// A resolved relation between two entities.
///
/// Direction is not stored here: outgoing and incoming relations live in
/// separate lists of the entity being generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Table name of the related entity.
    pub target_entity: String,

    /// Field name before casing is applied.
    pub field_name: String,

    /// Whether the relation field may be absent.
    pub nullable: bool,

    /// Database the underlying constraint belongs to.
    pub origin_database: String
}

/// Input to enum generation.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumSource {
    /// Table the rows were read from.
    pub name: String,

    /// Rows, in provider order.
    pub rows: Vec<Row>,

    /// Column holding constant names.
    pub name_field: String,

    /// Column holding constant values.
    pub value_field: String
}

impl EnumSource {
    /// Create an enum source.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        rows: Vec<Row>,
        name_field: impl Into<String>,
        value_field: impl Into<String>
    ) -> Self {
        Self {
            name: name.into(),
            rows,
            name_field: name_field.into(),
            value_field: value_field.into()
        }
    }
}
