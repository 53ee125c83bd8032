// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use scaffold_core::prelude::*;
//! ```

pub use crate::{
    ColumnDescriptor, EnumSource, FileSink, IncomingConstraint, MemorySchema, MemorySink,
    MemoryTable, OutgoingConstraint, RelationDescriptor, Row, ScaffoldError, SchemaProvider, Sink,
    Stage, WriteOutcome
};
