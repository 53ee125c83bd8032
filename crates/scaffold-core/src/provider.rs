// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema introspection contract.
//!
//! The engine never talks to a database itself. It asks a [`SchemaProvider`]
//! for metadata, one blocking call at a time, in this order per table:
//!
//! ```text
//! list_tables ─► list_columns ─► list_outgoing_constraints ─► list_incoming_constraints
//! ```
//!
//! Enum generation calls `list_columns` and only then `query_rows`.

pub mod memory;

use crate::model::{ColumnDescriptor, IncomingConstraint, OutgoingConstraint, Row};

/// Source of schema metadata.
///
/// Methods take `&mut self` so connection-backed implementations can reuse
/// one session without interior mutability.
pub trait SchemaProvider {
    /// Error type for provider calls.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List table names of a schema, in the order they should be generated.
    fn list_tables(&mut self, schema: &str) -> Result<Vec<String>, Self::Error>;

    /// List the columns of a table in declaration order.
    fn list_columns(&mut self, schema: &str, table: &str)
    -> Result<Vec<ColumnDescriptor>, Self::Error>;

    /// List the foreign keys declared by a table.
    fn list_outgoing_constraints(
        &mut self,
        schema: &str,
        table: &str
    ) -> Result<Vec<OutgoingConstraint>, Self::Error>;

    /// List the foreign keys, in any database, that reference a table.
    fn list_incoming_constraints(
        &mut self,
        table: &str
    ) -> Result<Vec<IncomingConstraint>, Self::Error>;

    /// Read every row of a table.
    fn query_rows(&mut self, schema: &str, table: &str) -> Result<Vec<Row>, Self::Error>;
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for &mut P {
    type Error = P::Error;

    fn list_tables(&mut self, schema: &str) -> Result<Vec<String>, Self::Error> {
        (**self).list_tables(schema)
    }

    fn list_columns(
        &mut self,
        schema: &str,
        table: &str
    ) -> Result<Vec<ColumnDescriptor>, Self::Error> {
        (**self).list_columns(schema, table)
    }

    fn list_outgoing_constraints(
        &mut self,
        schema: &str,
        table: &str
    ) -> Result<Vec<OutgoingConstraint>, Self::Error> {
        (**self).list_outgoing_constraints(schema, table)
    }

    fn list_incoming_constraints(
        &mut self,
        table: &str
    ) -> Result<Vec<IncomingConstraint>, Self::Error> {
        (**self).list_incoming_constraints(table)
    }

    fn query_rows(&mut self, schema: &str, table: &str) -> Result<Vec<Row>, Self::Error> {
        (**self).query_rows(schema, table)
    }
}
