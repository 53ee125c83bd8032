// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! ES module class rendering with JSDoc types.

use super::plan::{ClassPlan, Member, MemberKind};
use crate::config::{ConstructorStyle, GenerationConfig};

/// Render a complete `.mjs` module.
pub(super) fn render_class(plan: &ClassPlan, config: &GenerationConfig) -> String {
    let mut out = String::new();

    if config.include_imports && !plan.dependencies.is_empty() {
        for class in &plan.dependencies {
            out.push_str(&format!("import {{ {class} }} from './{class}.mjs';\n"));
        }
        out.push('\n');
    }

    out.push_str(&format!("export class {} {{\n", plan.class_name));
    out.push_str(&generate_fields(plan));
    if !plan.members.is_empty() {
        out.push('\n');
    }
    out.push_str(&generate_constructor(plan, config));
    out.push_str("}\n");

    out
}

fn generate_fields(plan: &ClassPlan) -> String {
    let mut out = String::new();
    for member in &plan.members {
        let note = match &member.kind {
            MemberKind::Column {
                annotation: Some(note),
                ..
            } => format!(" {note}"),
            _ => String::new()
        };
        out.push_str(&format!("    /** @type {{{}}}{note} */\n", jsdoc_type(member)));

        let init = if member.nullable { " = null" } else { "" };
        out.push_str(&format!("    {}{init};\n", member.name));
    }
    out
}

fn generate_constructor(plan: &ClassPlan, config: &GenerationConfig) -> String {
    let (params, assignments): (String, Vec<String>) = match config.constructor {
        ConstructorStyle::Positional => (
            plan.members
                .iter()
                .map(|m| m.name.clone())
                .collect::<Vec<_>>()
                .join(", "),
            plan.members
                .iter()
                .map(|m| format!("        this.{0} = {0};\n", m.name))
                .collect()
        ),
        ConstructorStyle::Dictionary => {
            let coalesce = if config.always_nullable { " ?? null" } else { "" };
            (
                "data".to_string(),
                plan.members
                    .iter()
                    .map(|m| format!("        this.{} = {}{coalesce};\n", m.name, access("data", &m.key)))
                    .collect()
            )
        }
    };

    format!(
        "    constructor({params}) {{\n{}    }}\n",
        assignments.concat()
    )
}

/// JSDoc type expression, `|null` suffixed when nullable.
fn jsdoc_type(member: &Member) -> String {
    let name = match &member.kind {
        MemberKind::Column { type_name, .. } => type_name.clone(),
        MemberKind::Reference { class } => class.clone(),
        MemberKind::Collection { class } => format!("{class}[]")
    };
    if member.nullable {
        format!("{name}|null")
    } else {
        name
    }
}

/// Property access on `object`, bracketed when `key` is not an identifier.
fn access(object: &str, key: &str) -> String {
    if is_identifier(key) {
        format!("{object}.{key}")
    } else {
        format!("{object}[{}]", super::single_quoted(key))
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false
    }
}
