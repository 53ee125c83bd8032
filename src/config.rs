// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation configuration.
//!
//! [`GenerationConfig`] is a read-only snapshot shared by every component for
//! the duration of a run. It deserializes from JSON with every field optional:
//!
//! ```json
//! {
//!   "field_casing": "camelCase",
//!   "class_casing": "PascalCase",
//!   "constructor": "dictionary",
//!   "always_nullable": true,
//!   "ignored_databases": ["audit"],
//!   "namespace": "App\\Models",
//!   "output_dir": "generated/models"
//! }
//! ```
//!
//! # Defaults
//!
//! | Option | Default |
//! |--------|---------|
//! | `field_casing` | camel |
//! | `class_casing` | pascal |
//! | `strip_plural` | `true` |
//! | `parse_constraints` | `true` |
//! | `include_imports` | `true` |
//! | `shared_namespace` | `false` |
//! | `constructor` | positional |
//! | `overwrite` | `true` |
//! | `always_nullable` | `false` |
//! | `allow_dynamic_properties` | `false` |
//! | `ignored_databases` | empty |
//! | `save_after_create` | `true` |
//! | `namespace` | `App` |
//! | `output_dir` | `.` |
//! | `enum_helpers` | `true` |
//! | `line_dedup` | imports |

use std::{collections::BTreeSet, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{casing::Casing, naming};

/// An option value that does not name any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownOption {
    kind:  &'static str,
    value: String
}

impl UnknownOption {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string()
        }
    }
}

/// How generated classes are constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructorStyle {
    /// One parameter per field, assigned in declaration order.
    #[default]
    Positional,

    /// A single key-value input read by original column name.
    #[serde(alias = "array")]
    Dictionary
}

/// Scope of output line de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineDedup {
    /// Only the dependency list is de-duplicated.
    #[default]
    Imports,

    /// Every repeated line of the rendered class collapses to its first
    /// occurrence, including blank lines and coincidentally equal fields.
    /// Reproduces the legacy scaffolder output byte for byte.
    AllLines
}

/// Configuration snapshot for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Casing of field and constant names.
    pub field_casing: Casing,

    /// Casing of class names.
    pub class_casing: Casing,

    /// Singularize class names and outgoing relation fields.
    pub strip_plural: bool,

    /// Derive incoming relation names from constraint names. When off, the
    /// constraint name is used verbatim.
    pub parse_constraints: bool,

    /// Emit import/require statements for related classes.
    pub include_imports: bool,

    /// Generated classes share one namespace; related classes get fully
    /// qualified `use` statements.
    pub shared_namespace: bool,

    /// Constructor flavour.
    pub constructor: ConstructorStyle,

    /// Replace files that already exist.
    pub overwrite: bool,

    /// Declare every plain and outgoing field nullable.
    pub always_nullable: bool,

    /// Mark classes as accepting undeclared properties where the dialect
    /// needs it.
    pub allow_dynamic_properties: bool,

    /// Databases whose relations are skipped.
    pub ignored_databases: BTreeSet<String>,

    /// Hand every artifact to the sink as soon as it is rendered.
    pub save_after_create: bool,

    /// Namespace for dialects that have one.
    pub namespace: String,

    /// Directory generated files are written to.
    pub output_dir: PathBuf,

    /// Emit name/value lookup helpers on enums.
    pub enum_helpers: bool,

    /// Line de-duplication scope.
    pub line_dedup: LineDedup
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            field_casing:             Casing::Camel,
            class_casing:             Casing::Pascal,
            strip_plural:             true,
            parse_constraints:        true,
            include_imports:          true,
            shared_namespace:         false,
            constructor:              ConstructorStyle::Positional,
            overwrite:                true,
            always_nullable:          false,
            allow_dynamic_properties: false,
            ignored_databases:        BTreeSet::new(),
            save_after_create:        true,
            namespace:                "App".to_string(),
            output_dir:               PathBuf::from("."),
            enum_helpers:             true,
            line_dedup:               LineDedup::Imports
        }
    }
}

impl GenerationConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed documents or unknown
    /// option values.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Add a database to the ignore list.
    #[must_use]
    pub fn ignore_database(mut self, database: impl Into<String>) -> Self {
        self.ignored_databases.insert(database.into());
        self
    }

    /// Whether relations from `database` are skipped.
    #[must_use]
    pub fn is_ignored(&self, database: &str) -> bool {
        self.ignored_databases.contains(database)
    }

    /// Class name for a table: class casing, then plural stripping.
    #[must_use]
    pub fn class_name(&self, table: &str) -> String {
        let name = self.class_casing.convert(table);
        if self.strip_plural {
            naming::singularize(&name)
        } else {
            name
        }
    }

    /// Field name for a raw identifier.
    #[must_use]
    pub fn field_name(&self, raw: &str) -> String {
        self.field_casing.convert(raw)
    }
}
