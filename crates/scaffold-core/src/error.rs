// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error taxonomy for schema scaffolding.
//!
//! Every failure is fatal for the unit of work it happens in: a table during
//! class generation, or the whole enum during enum generation. Nothing is
//! retried or downgraded, so each variant carries the original cause.
//!
//! | Variant | Raised by | When |
//! |---------|-----------|------|
//! | `UnrecognizedType` | type mapper | column base type absent from the dialect table |
//! | `FieldNotFound` | enum generation | requested column missing from the table |
//! | `InvalidRow` | enum generation | a queried row lacks a requested column |
//! | `MissingConnectionParameters` | connection settings | before any provider call |
//! | `Query` | orchestrator | a provider call failed |
//! | `Write` | sinks | the generated file could not be written |

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Boxed error produced by a schema provider.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias defaulting to [`ScaffoldError`].
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Orchestrator state in which a unit of work was when it failed.
///
/// A session starts in `Connecting`. Class generation walks `ListingTables`
/// and then, per table, `FetchingFields → FetchingOwnRelations → FetchingInverseRelations →
/// Emitting`. Enum generation walks `ValidatingFields → QueryingRows →
/// Emitting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Opening a provider session.
    Connecting,
    /// Listing the tables of a schema.
    ListingTables,
    /// Reading the column list of a table.
    FetchingFields,
    /// Reading the foreign keys a table declares.
    FetchingOwnRelations,
    /// Reading the foreign keys other tables hold on this one.
    FetchingInverseRelations,
    /// Rendering source text.
    Emitting,
    /// Checking that enum name/value columns exist.
    ValidatingFields,
    /// Reading enum rows.
    QueryingRows
}

impl Stage {
    /// Human-readable stage name used in logs and error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::ListingTables => "listing tables",
            Self::FetchingFields => "fetching fields",
            Self::FetchingOwnRelations => "fetching own relations",
            Self::FetchingInverseRelations => "fetching inverse relations",
            Self::Emitting => "emitting",
            Self::ValidatingFields => "validating fields",
            Self::QueryingRows => "querying rows"
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while scaffolding.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The base of a column type is not in the dialect's type table.
    #[error("unrecognized column type `{base}` (declared as `{raw}`)")]
    UnrecognizedType {
        /// Leading type keyword, before any `(` or modifier.
        base: String,
        /// Full type as reported by the schema.
        raw:  String
    },

    /// A requested enum column does not exist in the table.
    #[error("field `{field}` not found in table `{table}`")]
    FieldNotFound {
        /// Table that was inspected.
        table: String,
        /// Missing column name.
        field: String
    },

    /// A row returned for enum generation lacks a requested column.
    #[error("row in table `{table}` has no value for `{field}`")]
    InvalidRow {
        /// Table the rows came from.
        table: String,
        /// Column absent from the row.
        field: String
    },

    /// Connection settings are incomplete.
    #[error("missing connection parameters: {}", .missing.join(", "))]
    MissingConnectionParameters {
        /// Names of every empty parameter.
        missing: Vec<&'static str>
    },

    /// A schema provider call failed.
    #[error("{stage} failed for `{target}`")]
    Query {
        /// Orchestrator stage of the failing call.
        stage:  Stage,
        /// Schema or table the call was about.
        target: String,
        /// Provider error.
        #[source]
        source: BoxError
    },

    /// A sink could not write a generated file.
    #[error("failed to write `{}`", .path.display())]
    Write {
        /// Destination path.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    }
}

impl ScaffoldError {
    /// Wrap a provider error raised during `stage`.
    pub fn query(
        stage: Stage,
        target: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static
    ) -> Self {
        Self::Query {
            stage,
            target: target.into(),
            source: Box::new(source)
        }
    }

    /// Stage of a failed provider call, if this is one.
    #[must_use]
    pub const fn stage(&self) -> Option<Stage> {
        match self {
            Self::Query { stage, .. } => Some(*stage),
            _ => None
        }
    }
}
