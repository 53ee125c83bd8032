// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! # schema-scaffold
//!
//! Generates data classes and enum classes from a relational schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_scaffold::prelude::*;
//!
//! let schema = MemorySchema::new()
//!     .with_table(
//!         "shop",
//!         MemoryTable::new("customers")
//!             .column("id", "int(11)", false)
//!             .column("name", "varchar(255)", false)
//!     )
//!     .with_table(
//!         "shop",
//!         MemoryTable::new("orders")
//!             .column("id", "int(11)", false)
//!             .column("total", "decimal(10,2)", true)
//!             .foreign_key("orders_customer_id_fk", "customers")
//!     );
//!
//! let config = GenerationConfig {
//!     output_dir: "models".into(),
//!     ..GenerationConfig::default()
//! };
//! let mut scaffolder = Scaffolder::new(schema, MemorySink::new(), config, Dialect::JavaScript);
//! scaffolder.scaffold("shop").unwrap();
//!
//! let order = scaffolder.sink().get("models/Order.mjs").unwrap();
//! assert!(order.contains("import { Customer } from './Customer.mjs';"));
//! assert!(order.contains("/** @type {number|null} precision: 2 */"));
//! ```
//!
//! ## What Gets Generated
//!
//! | Table feature | Generated member |
//! |---------------|------------------|
//! | column | typed property, annotated for `varchar(N)` and `decimal(P,S)` |
//! | foreign key it declares | nullable reference to the related class |
//! | foreign key held by another table | nullable collection of that class |
//!
//! Each class has exactly one constructor, positional or dictionary style,
//! see [`ConstructorStyle`].
//!
//! ## Crates
//!
//! The provider and sink contracts, the schema model and the error type live
//! in `scaffold-core` and are re-exported here.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod artifact;
mod casing;
mod config;
mod connection;
mod dialect;
mod emit;
mod enums;
pub mod naming;
pub mod prelude;
pub mod relations;
mod scaffold;
pub mod types;

pub use artifact::Artifact;
pub use casing::Casing;
pub use config::{ConstructorStyle, GenerationConfig, LineDedup, UnknownOption};
pub use connection::ConnectionSettings;
pub use dialect::Dialect;
pub use emit::Entity;
pub use scaffold::Scaffolder;
pub use scaffold_core::{
    BoxError, ColumnDescriptor, EnumSource, FileSink, IncomingConstraint, MemoryForeignKey,
    MemorySchema, MemorySchemaError, MemorySink, MemoryTable, OutgoingConstraint,
    RelationDescriptor, Result, Row, ScaffoldError, SchemaProvider, Sink, Stage, WriteOutcome
};
pub use types::{LanguageInfo, MappedColumn, MappedType, TypeMapper};
