// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! English plural handling for table-derived names.
//!
//! Only the last word of a cased name is inflected, so `order_statuses`,
//! `OrderStatuses` and `orderStatuses` all keep their leading words and
//! their casing. Word rules come from [`inflector`].

use inflector::Inflector;

/// Plural of the last word: collection field names.
///
/// Names that already read as plural are returned unchanged.
///
/// ```rust
/// use schema_scaffold::naming::pluralize;
///
/// assert_eq!(pluralize("orderAddress"), "orderAddresses");
/// assert_eq!(pluralize("lineItems"), "lineItems");
/// ```
#[must_use]
pub fn pluralize(name: &str) -> String {
    inflect_last_word(name, |word| word.to_plural())
}

/// Singular of the last word: class names and reference field names.
///
/// ```rust
/// use schema_scaffold::naming::singularize;
///
/// assert_eq!(singularize("OrderStatuses"), "OrderStatus");
/// assert_eq!(singularize("Address"), "Address");
/// ```
#[must_use]
pub fn singularize(name: &str) -> String {
    inflect_last_word(name, |word| word.to_singular())
}

fn inflect_last_word(name: &str, inflect: impl Fn(&str) -> String) -> String {
    let (head, word) = split_last_word(name);
    if word.is_empty() {
        return name.to_string();
    }

    let inflected = inflect(&word.to_lowercase());
    let first_upper = word.chars().next().is_some_and(char::is_uppercase);
    let all_upper = first_upper && word.len() > 1 && !word.chars().any(char::is_lowercase);

    let inflected = if all_upper {
        inflected.to_uppercase()
    } else if first_upper {
        capitalize(&inflected)
    } else {
        inflected
    };
    format!("{head}{inflected}")
}

/// Split before the last word: after the last separator or at the last
/// lower-to-upper case boundary.
fn split_last_word(name: &str) -> (&str, &str) {
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (index, c) in name.char_indices() {
        if !c.is_alphanumeric() {
            start = index + c.len_utf8();
        } else if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            start = index;
        }
        prev = Some(c);
    }
    name.split_at(start)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new()
    }
}
