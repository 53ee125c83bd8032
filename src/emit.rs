// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class emission.
//!
//! Turns one [`Entity`] into the source text of a data class.
//!
//! # Pipeline
//!
//! ```text
//! Entity ──► ClassPlan::build ──► php / javascript ──► line dedup ──► Artifact
//!              │
//!              ├─ map column types (fatal on unknown)
//!              ├─ drop relations from ignored databases
//!              ├─ collect dependencies (ordered, unique, no self, no natives)
//!              └─ name and type every member
//! ```
//!
//! Everything structural happens in [`plan`]; the dialect modules only
//! decide syntax.

mod javascript;
mod php;
mod plan;

use std::collections::HashSet;

use scaffold_core::{ColumnDescriptor, RelationDescriptor, Result};

use self::plan::ClassPlan;
use crate::{
    artifact::Artifact,
    config::{GenerationConfig, LineDedup},
    dialect::Dialect
};

/// Complete input for generating one class.
///
/// Built fresh per table and discarded once rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entity {
    /// Table name.
    pub name: String,

    /// Columns in declaration order.
    pub fields: Vec<ColumnDescriptor>,

    /// Foreign keys this table declares.
    pub outgoing: Vec<RelationDescriptor>,

    /// Foreign keys other tables hold on this one.
    pub incoming: Vec<RelationDescriptor>
}

impl Entity {
    /// Entity without relations.
    #[must_use]
    pub fn new(name: impl Into<String>, fields: Vec<ColumnDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
            ..Self::default()
        }
    }

    /// Attach resolved relations.
    #[must_use]
    pub fn with_relations(
        mut self,
        outgoing: Vec<RelationDescriptor>,
        incoming: Vec<RelationDescriptor>
    ) -> Self {
        self.outgoing = outgoing;
        self.incoming = incoming;
        self
    }
}

/// Render a class for `entity` in `dialect`.
pub(crate) fn emit_class(
    dialect: Dialect,
    entity: &Entity,
    config: &GenerationConfig
) -> Result<Artifact> {
    let plan = ClassPlan::build(entity, dialect.language(), config)?;

    let content = match dialect {
        Dialect::Php => php::render_class(&plan, config),
        Dialect::JavaScript => javascript::render_class(&plan, config)
    };
    let content = match config.line_dedup {
        LineDedup::Imports => content,
        LineDedup::AllLines => dedup_lines(&content)
    };

    Ok(Artifact::new(plan.class_name, dialect.extension(), content))
}

/// Keep only the first occurrence of every line.
///
/// Blank lines count as lines, so only the first one survives. A final
/// newline is kept.
pub(crate) fn dedup_lines(content: &str) -> String {
    let (body, newline) = match content.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (content, "")
    };

    let mut seen = HashSet::new();
    let mut out = body
        .split('\n')
        .filter(|line| seen.insert(*line))
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(newline);
    out
}

/// Single-quoted string literal, valid in both PHP and JavaScript.
pub(crate) fn single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c)
        }
    }
    out.push('\'');
    out
}
