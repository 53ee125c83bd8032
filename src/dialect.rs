// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output dialect selection.
//!
//! This module defines [`Dialect`], the tag that selects which language the
//! class and enum emitters render. Dialects share the structural planning
//! and differ only in syntax and their [`LanguageInfo`] tables.

use std::{fmt, str::FromStr};

use scaffold_core::{EnumSource, Result};
use serde::{Deserialize, Serialize};

use crate::{
    artifact::Artifact,
    config::{GenerationConfig, UnknownOption},
    emit::{self, Entity},
    enums,
    types::{JAVASCRIPT, LanguageInfo, PHP}
};

/// Output language for generated code.
///
/// # Supported Languages
///
/// | Dialect | Extension | Constructor styles | Enum helpers |
/// |---------|-----------|--------------------|--------------|
/// | PHP 8 | `.php` | positional, `array $input` | `toMap()`, `toArray()` |
/// | JavaScript (ES modules) | `.mjs` | positional, `data` object | `static toMap()`, `static toArray()` |
///
/// # Examples
///
/// ```rust
/// use schema_scaffold::Dialect;
///
/// assert_eq!("php".parse::<Dialect>().unwrap(), Dialect::Php);
/// assert_eq!("JS".parse::<Dialect>().unwrap(), Dialect::JavaScript);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Dialect {
    /// PHP 8 classes with typed properties.
    ///
    /// - Types: `int`, `string`, `bool`, `float`, `array`
    /// - Loading: `require_once`, optional `use`
    /// - Nullability: `?T`
    #[default]
    Php,

    /// JavaScript ES module classes documented with JSDoc.
    ///
    /// - Types: `number`, `string`, `boolean`, `Date`
    /// - Loading: `import { X } from './X.mjs'`
    /// - Nullability: `T|null` and a `null` initializer
    JavaScript
}

impl Dialect {
    /// Language table of this dialect.
    #[must_use]
    pub fn language(&self) -> &'static LanguageInfo {
        match self {
            Self::Php => &PHP,
            Self::JavaScript => &JAVASCRIPT
        }
    }

    /// File extension of generated files.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        self.language().extension
    }

    /// Render a data class for one entity.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::UnrecognizedType`] when a column type is unknown.
    ///
    /// [`ScaffoldError::UnrecognizedType`]: scaffold_core::ScaffoldError::UnrecognizedType
    pub fn emit_class(&self, entity: &Entity, config: &GenerationConfig) -> Result<Artifact> {
        emit::emit_class(*self, entity, config)
    }

    /// Render a constant class for enum rows.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::InvalidRow`] when a row lacks the name or value field.
    ///
    /// [`ScaffoldError::InvalidRow`]: scaffold_core::ScaffoldError::InvalidRow
    pub fn emit_enum(&self, source: &EnumSource, config: &GenerationConfig) -> Result<Artifact> {
        enums::emit_enum(*self, source, config)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language().name)
    }
}

impl FromStr for Dialect {
    type Err = UnknownOption;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "php" => Ok(Self::Php),
            "javascript" | "js" | "mjs" | "ecmascript" | "es" => Ok(Self::JavaScript),
            _ => Err(UnknownOption::new("dialect", value))
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = UnknownOption;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}
