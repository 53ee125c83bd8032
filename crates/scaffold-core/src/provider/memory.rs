// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory schema provider.
//!
//! [`MemorySchema`] answers provider calls from a snapshot held in memory.
//! A snapshot can be built in code or deserialized from JSON exported by
//! another tool:
//!
//! ```json
//! {
//!   "databases": {
//!     "shop": [
//!       { "name": "customers", "columns": [{ "name": "id", "raw_type": "int" }] },
//!       {
//!         "name": "orders",
//!         "columns": [{ "name": "customer_id", "raw_type": "int" }],
//!         "foreign_keys": [
//!           { "constraint_name": "orders_customer_id_fk", "referenced_table": "customers" }
//!         ]
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! Every call is recorded, so tests can assert which queries were issued.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::SchemaProvider;
use crate::model::{ColumnDescriptor, IncomingConstraint, OutgoingConstraint, Row};

/// Lookup failures of [`MemorySchema`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemorySchemaError {
    /// The schema is not part of the snapshot.
    #[error("unknown schema `{0}`")]
    UnknownSchema(String),

    /// The table is not part of the schema.
    #[error("unknown table `{schema}.{table}`")]
    UnknownTable {
        /// Schema that was searched.
        schema: String,
        /// Missing table.
        table:  String
    }
}

/// Foreign key declared by a [`MemoryTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryForeignKey {
    /// Constraint name.
    pub constraint_name: String,

    /// Referenced table.
    pub referenced_table: String,

    /// Referenced column.
    #[serde(default = "default_referenced_field")]
    pub referenced_field: String,

    /// Database of the referenced table; the declaring database when absent.
    #[serde(default)]
    pub referenced_database: Option<String>
}

fn default_referenced_field() -> String {
    "id".to_string()
}

/// A table of the snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemoryTable {
    /// Table name.
    pub name: String,

    /// Columns in declaration order.
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,

    /// Foreign keys declared by this table.
    #[serde(default)]
    pub foreign_keys: Vec<MemoryForeignKey>,

    /// Table contents, used by enum generation.
    #[serde(default)]
    pub rows: Vec<Row>
}

impl MemoryTable {
    /// Create an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a column.
    #[must_use]
    pub fn column(mut self, name: &str, raw_type: &str, nullable: bool) -> Self {
        self.columns
            .push(ColumnDescriptor::new(name, raw_type, nullable));
        self
    }

    /// Append a foreign key to a table of the same database.
    #[must_use]
    pub fn foreign_key(mut self, constraint_name: &str, referenced_table: &str) -> Self {
        self.foreign_keys.push(MemoryForeignKey {
            constraint_name:     constraint_name.to_string(),
            referenced_table:    referenced_table.to_string(),
            referenced_field:    default_referenced_field(),
            referenced_database: None
        });
        self
    }

    /// Append a foreign key to a table of another database.
    #[must_use]
    pub fn foreign_key_in(
        mut self,
        constraint_name: &str,
        referenced_database: &str,
        referenced_table: &str
    ) -> Self {
        self.foreign_keys.push(MemoryForeignKey {
            constraint_name:     constraint_name.to_string(),
            referenced_table:    referenced_table.to_string(),
            referenced_field:    default_referenced_field(),
            referenced_database: Some(referenced_database.to_string())
        });
        self
    }

    /// Append a row.
    #[must_use]
    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }
}

/// Schema provider backed by an in-memory snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySchema {
    /// Tables per database, in listing order.
    #[serde(default)]
    pub databases: BTreeMap<String, Vec<MemoryTable>>,

    #[serde(skip)]
    calls: Vec<String>
}

impl MemorySchema {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the document does not match the
    /// snapshot layout.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Add a table to a database, creating the database if needed.
    #[must_use]
    pub fn with_table(mut self, database: &str, table: MemoryTable) -> Self {
        self.databases
            .entry(database.to_string())
            .or_default()
            .push(table);
        self
    }

    /// Calls received so far, formatted as `method schema.table`.
    #[must_use]
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    fn table(&self, schema: &str, table: &str) -> Result<&MemoryTable, MemorySchemaError> {
        self.databases
            .get(schema)
            .ok_or_else(|| MemorySchemaError::UnknownSchema(schema.to_string()))?
            .iter()
            .find(|t| t.name == table)
            .ok_or_else(|| MemorySchemaError::UnknownTable {
                schema: schema.to_string(),
                table:  table.to_string()
            })
    }
}

impl SchemaProvider for MemorySchema {
    type Error = MemorySchemaError;

    fn list_tables(&mut self, schema: &str) -> Result<Vec<String>, Self::Error> {
        self.calls.push(format!("list_tables {schema}"));
        self.databases
            .get(schema)
            .map(|tables| tables.iter().map(|t| t.name.clone()).collect())
            .ok_or_else(|| MemorySchemaError::UnknownSchema(schema.to_string()))
    }

    fn list_columns(
        &mut self,
        schema: &str,
        table: &str
    ) -> Result<Vec<ColumnDescriptor>, Self::Error> {
        self.calls.push(format!("list_columns {schema}.{table}"));
        Ok(self.table(schema, table)?.columns.clone())
    }

    fn list_outgoing_constraints(
        &mut self,
        schema: &str,
        table: &str
    ) -> Result<Vec<OutgoingConstraint>, Self::Error> {
        self.calls
            .push(format!("list_outgoing_constraints {schema}.{table}"));
        let constraints = self
            .table(schema, table)?
            .foreign_keys
            .iter()
            .map(|fk| OutgoingConstraint {
                referenced_table: fk.referenced_table.clone(),
                referenced_field: fk.referenced_field.clone(),
                database:         fk
                    .referenced_database
                    .clone()
                    .unwrap_or_else(|| schema.to_string())
            })
            .collect();
        Ok(constraints)
    }

    fn list_incoming_constraints(
        &mut self,
        table: &str
    ) -> Result<Vec<IncomingConstraint>, Self::Error> {
        self.calls
            .push(format!("list_incoming_constraints {table}"));
        let mut constraints = Vec::new();
        for (database, tables) in &self.databases {
            for referencing in tables {
                let matching = referencing
                    .foreign_keys
                    .iter()
                    .filter(|fk| fk.referenced_table == table);
                for fk in matching {
                    constraints.push(IncomingConstraint {
                        referencing_table: referencing.name.clone(),
                        constraint_name:   fk.constraint_name.clone(),
                        database:          database.clone()
                    });
                }
            }
        }
        Ok(constraints)
    }

    fn query_rows(&mut self, schema: &str, table: &str) -> Result<Vec<Row>, Self::Error> {
        self.calls.push(format!("query_rows {schema}.{table}"));
        Ok(self.table(schema, table)?.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> MemorySchema {
        MemorySchema::new()
            .with_table(
                "shop",
                MemoryTable::new("customers").column("id", "int(11)", false)
            )
            .with_table(
                "shop",
                MemoryTable::new("orders")
                    .column("id", "int(11)", false)
                    .column("customer_id", "int(11)", true)
                    .foreign_key("orders_customer_id_fk", "customers")
            )
            .with_table(
                "archive",
                MemoryTable::new("old_orders").foreign_key_in(
                    "old_orders_customer_id_fk",
                    "shop",
                    "customers"
                )
            )
    }

    #[test]
    fn lists_tables_in_insertion_order() {
        let mut schema = shop();
        assert_eq!(schema.list_tables("shop").unwrap(), vec!["customers", "orders"]);
    }

    #[test]
    fn unknown_schema_fails() {
        let mut schema = shop();
        assert_eq!(
            schema.list_tables("nope"),
            Err(MemorySchemaError::UnknownSchema("nope".to_string()))
        );
    }

    #[test]
    fn unknown_table_fails() {
        let mut schema = shop();
        assert!(matches!(
            schema.list_columns("shop", "nope"),
            Err(MemorySchemaError::UnknownTable { .. })
        ));
    }

    #[test]
    fn outgoing_defaults_to_declaring_database() {
        let mut schema = shop();
        let outgoing = schema.list_outgoing_constraints("shop", "orders").unwrap();
        assert_eq!(
            outgoing,
            vec![OutgoingConstraint {
                referenced_table: "customers".to_string(),
                referenced_field: "id".to_string(),
                database:         "shop".to_string()
            }]
        );
    }

    #[test]
    fn incoming_scans_every_database() {
        let mut schema = shop();
        let incoming = schema.list_incoming_constraints("customers").unwrap();
        let origins: Vec<_> = incoming
            .iter()
            .map(|c| (c.database.as_str(), c.referencing_table.as_str()))
            .collect();
        assert_eq!(origins, vec![("archive", "old_orders"), ("shop", "orders")]);
    }

    #[test]
    fn records_calls() {
        let mut schema = shop();
        schema.list_columns("shop", "orders").unwrap();
        schema.query_rows("shop", "customers").unwrap();
        assert_eq!(
            schema.calls(),
            ["list_columns shop.orders", "query_rows shop.customers"]
        );
    }

    #[test]
    fn parses_json_snapshot() {
        let mut schema = MemorySchema::from_json(
            r#"{
                "databases": {
                    "shop": [
                        {
                            "name": "orders",
                            "columns": [{ "name": "id", "raw_type": "int" }],
                            "foreign_keys": [
                                { "constraint_name": "orders_customer_id_fk", "referenced_table": "customers" }
                            ]
                        }
                    ]
                }
            }"#
        )
        .unwrap();
        let outgoing = schema.list_outgoing_constraints("shop", "orders").unwrap();
        assert_eq!(outgoing[0].referenced_field, "id");
        assert_eq!(outgoing[0].database, "shop");
    }
}
