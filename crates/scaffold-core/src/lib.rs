// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for schema-scaffold.
//!
//! This crate holds everything the generation engine exchanges with the
//! outside world. It can be used standalone to plug a custom schema source or
//! output target into the engine.
//!
//! # Overview
//!
//! - [`SchemaProvider`] — lists tables, columns, constraints and rows
//! - [`Sink`] — persists generated source text
//! - [`ColumnDescriptor`], [`RelationDescriptor`] — schema metadata
//! - [`ScaffoldError`] — the error taxonomy shared by every component
//! - [`prelude`] — convenient re-exports
//!
//! # Usage
//!
//! ```rust,ignore
//! use scaffold_core::prelude::*;
//!
//! impl SchemaProvider for MyConnection {
//!     type Error = MyError;
//!
//!     fn list_tables(&mut self, schema: &str) -> Result<Vec<String>, Self::Error> {
//!         // ...
//!     }
//!     // ...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod model;
pub mod prelude;
pub mod provider;
pub mod sink;

pub use error::{BoxError, Result, ScaffoldError, Stage};
pub use model::{
    ColumnDescriptor, EnumSource, IncomingConstraint, OutgoingConstraint, RelationDescriptor, Row
};
pub use provider::{
    SchemaProvider,
    memory::{MemoryForeignKey, MemorySchema, MemorySchemaError, MemoryTable}
};
pub use sink::{FileSink, MemorySink, Sink, WriteOutcome};
