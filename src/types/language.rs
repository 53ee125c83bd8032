// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-dialect language tables.
//!
//! # Type Mapping Table
//!
//! | Column Type | PHP | JavaScript |
//! |-------------|-----|------------|
//! | `int`, `bigint` | `int` | `number` |
//! | `tinyint`, `bit` | `bool` | `boolean` |
//! | `decimal`, `double`, `float` | `float` | `number` |
//! | `varchar`, `longtext`, `text` | `string` | `string` |
//! | `timestamp`, `date` | `string` | `string` |
//! | `datetime` | `string` | `Date` |

/// Immutable description of one output language.
///
/// Injected into emitters instead of living in shared globals.
#[derive(Debug)]
pub struct LanguageInfo {
    /// Language name used in logs.
    pub name: &'static str,

    /// File extension of generated files, without the dot.
    pub extension: &'static str,

    /// Base column type to dialect type name.
    types: &'static [(&'static str, &'static str)],

    /// Type names resolved by the language itself; never imported.
    primitives: &'static [&'static str],

    /// Built-in classes. Never loaded from a generated file, but may need a
    /// `use` statement in namespaced dialects.
    builtin_classes: &'static [&'static str]
}

impl LanguageInfo {
    /// Dialect type for a lower-cased base column type.
    #[must_use]
    pub fn type_for(&self, base: &str) -> Option<&'static str> {
        self.types
            .iter()
            .find(|(column, _)| *column == base)
            .map(|(_, name)| *name)
    }

    /// Whether a type name is a language primitive.
    #[must_use]
    pub fn is_primitive(&self, name: &str) -> bool {
        self.primitives.contains(&name)
    }

    /// Whether a type name is a built-in class.
    #[must_use]
    pub fn is_builtin_class(&self, name: &str) -> bool {
        self.builtin_classes.contains(&name)
    }

    /// Whether a type name never needs to be loaded from a generated file.
    #[must_use]
    pub fn is_native(&self, name: &str) -> bool {
        self.is_primitive(name) || self.is_builtin_class(name)
    }
}

/// PHP 8 language table.
pub static PHP: LanguageInfo = LanguageInfo {
    name:            "php",
    extension:       "php",
    types:           &[
        ("int", "int"),
        ("bigint", "int"),
        ("tinyint", "bool"),
        ("bit", "bool"),
        ("decimal", "float"),
        ("double", "float"),
        ("float", "float"),
        ("varchar", "string"),
        ("longtext", "string"),
        ("text", "string"),
        ("timestamp", "string"),
        ("date", "string"),
        ("datetime", "string")
    ],
    primitives:      &["int", "string", "bool", "float", "array"],
    builtin_classes: &["DateTime", "Exception"]
};

/// ES module JavaScript language table.
pub static JAVASCRIPT: LanguageInfo = LanguageInfo {
    name:            "javascript",
    extension:       "mjs",
    types:           &[
        ("int", "number"),
        ("bigint", "number"),
        ("tinyint", "boolean"),
        ("bit", "boolean"),
        ("decimal", "number"),
        ("double", "number"),
        ("float", "number"),
        ("varchar", "string"),
        ("longtext", "string"),
        ("text", "string"),
        ("timestamp", "string"),
        ("date", "string"),
        ("datetime", "Date")
    ],
    primitives:      &["string", "number", "boolean"],
    builtin_classes: &["Date", "Array", "Object"]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn php_natives() {
        assert!(PHP.is_primitive("int"));
        assert!(PHP.is_primitive("array"));
        assert!(PHP.is_builtin_class("DateTime"));
        assert!(PHP.is_native("Exception"));
        assert!(!PHP.is_native("Customer"));
    }

    #[test]
    fn javascript_natives() {
        assert!(JAVASCRIPT.is_primitive("number"));
        assert!(JAVASCRIPT.is_builtin_class("Date"));
        assert!(!JAVASCRIPT.is_native("Customer"));
    }

    #[test]
    fn every_mapped_type_is_native() {
        for info in [&PHP, &JAVASCRIPT] {
            for (_, name) in info.types {
                assert!(info.is_native(name), "{} {name}", info.name);
            }
        }
    }

    #[test]
    fn extensions() {
        assert_eq!(PHP.extension, "php");
        assert_eq!(JAVASCRIPT.extension, "mjs");
    }
}
