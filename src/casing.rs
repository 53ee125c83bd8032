// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier casing.
//!
//! [`Casing`] turns a schema identifier into the naming convention of the
//! generated source. Whitespace runs are first collapsed into a single `_`.
//!
//! | Variant | `line_items` | `order date` | `lineItems` |
//! |---------|--------------|--------------|-------------|
//! | `Camel` | `lineItems` | `orderDate` | `lineItems` |
//! | `Pascal` | `LineItems` | `OrderDate` | `LineItems` |
//! | `Snake` | `line_items` | `order_date` | `line_items` |
//! | `None` | `line_items` | `order_date` | `lineItems` |
//!
//! Camel and Pascal only upper-case the first letter of each word and keep
//! the rest as written, so converting an already converted name is a no-op.

use std::{fmt, str::FromStr};

use convert_case::{Case, Casing as _};
use serde::{Deserialize, Serialize};

use crate::config::UnknownOption;

/// Naming convention applied to generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Casing {
    /// `lineItems`
    #[default]
    Camel,

    /// `LineItems`
    Pascal,

    /// `line_items`
    Snake,

    /// Left as declared, apart from whitespace normalization.
    None
}

impl Casing {
    /// Convert a raw identifier.
    ///
    /// Total for every input; never fails.
    #[must_use]
    pub fn convert(&self, raw: &str) -> String {
        let name = underscore_whitespace(raw);
        match self {
            Self::Camel => lower_first(&join_words(&name)),
            Self::Pascal => join_words(&name),
            Self::Snake => snake(&name),
            Self::None => name
        }
    }

    /// Canonical configuration name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Snake => "snake",
            Self::None => "none"
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = UnknownOption;

    /// Accepts `camel`, `camelCase`, `camel-case`, `PascalCase`,
    /// `snake_case`, `none` and similar spellings.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_case(Case::Snake).as_str() {
            "camel" | "camel_case" | "lower_camel" | "lower_camel_case" => Ok(Self::Camel),
            "pascal" | "pascal_case" | "upper_camel" | "upper_camel_case" => Ok(Self::Pascal),
            "snake" | "snake_case" => Ok(Self::Snake),
            "none" | "unchanged" | "as_is" => Ok(Self::None),
            _ => Err(UnknownOption::new("casing", value))
        }
    }
}

impl TryFrom<String> for Casing {
    type Error = UnknownOption;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Replace every whitespace run with a single underscore.
fn underscore_whitespace(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_whitespace = false;
    for c in raw.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Upper-case the first letter of every `_`-delimited word and drop the
/// delimiters.
fn join_words(name: &str) -> String {
    name.split('_').map(upper_first).collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new()
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new()
    }
}

/// Insert `_` before every interior ASCII capital, then lower-case.
fn snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}
