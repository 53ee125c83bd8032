// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PHP 8 class rendering.
//!
//! ```php
//! <?php
//!
//! namespace App;
//!
//! require_once __DIR__ . '/Customer.php';
//!
//! class Order
//! {
//!     public int $id;
//!     public ?Customer $customer;
//!
//!     public function __construct(int $id, ?Customer $customer)
//!     {
//!         $this->id = $id;
//!         $this->customer = $customer;
//!     }
//! }
//! ```

use super::plan::{ClassPlan, Member, MemberKind};
use crate::config::{ConstructorStyle, GenerationConfig};

/// Render a complete PHP file.
pub(super) fn render_class(plan: &ClassPlan, config: &GenerationConfig) -> String {
    let mut out = String::from("<?php\n\n");

    if !config.namespace.is_empty() {
        out.push_str(&format!("namespace {};\n\n", config.namespace));
    }
    out.push_str(&generate_imports(plan, config));

    if config.allow_dynamic_properties {
        out.push_str("#[\\AllowDynamicProperties]\n");
    }
    out.push_str(&format!("class {}\n{{\n", plan.class_name));
    out.push_str(&generate_properties(plan));
    if !plan.members.is_empty() {
        out.push('\n');
    }
    out.push_str(&generate_constructor(plan, config));
    out.push_str("}\n");

    out
}

/// `use` and `require_once` blocks, each followed by a blank line.
fn generate_imports(plan: &ClassPlan, config: &GenerationConfig) -> String {
    let mut uses: Vec<String> = plan
        .builtins
        .iter()
        .map(|class| format!("use {class};"))
        .collect();
    if config.shared_namespace && !config.namespace.is_empty() {
        uses.extend(
            plan.dependencies
                .iter()
                .map(|class| format!("use {}\\{class};", config.namespace))
        );
    }

    let requires: Vec<String> = if config.include_imports {
        plan.dependencies
            .iter()
            .map(|class| format!("require_once __DIR__ . '/{class}.php';"))
            .collect()
    } else {
        Vec::new()
    };

    let mut out = String::new();
    for block in [uses, requires] {
        if !block.is_empty() {
            out.push_str(&block.join("\n"));
            out.push_str("\n\n");
        }
    }
    out
}

fn generate_properties(plan: &ClassPlan) -> String {
    let mut out = String::new();
    for member in &plan.members {
        match &member.kind {
            MemberKind::Column {
                annotation: Some(note),
                ..
            } => out.push_str(&format!("    /** {note} */\n")),
            MemberKind::Collection { class } => {
                out.push_str(&format!("    /** @var {class}[] */\n"));
            }
            _ => {}
        }
        out.push_str(&format!(
            "    public {} ${};\n",
            declared_type(member),
            member.name
        ));
    }
    out
}

fn generate_constructor(plan: &ClassPlan, config: &GenerationConfig) -> String {
    let (params, assignments): (String, Vec<String>) = match config.constructor {
        ConstructorStyle::Positional => (
            plan.members
                .iter()
                .map(|m| format!("{} ${}", declared_type(m), m.name))
                .collect::<Vec<_>>()
                .join(", "),
            plan.members
                .iter()
                .map(|m| format!("        $this->{0} = ${0};\n", m.name))
                .collect()
        ),
        ConstructorStyle::Dictionary => {
            let coalesce = if config.always_nullable { " ?? null" } else { "" };
            (
                "array $input".to_string(),
                plan.members
                    .iter()
                    .map(|m| {
                        format!(
                            "        $this->{} = $input[{}]{coalesce};\n",
                            m.name,
                            super::single_quoted(&m.key)
                        )
                    })
                    .collect()
            )
        }
    };

    format!(
        "    public function __construct({params})\n    {{\n{}    }}\n",
        assignments.concat()
    )
}

/// Property type with the `?` prefix when nullable.
fn declared_type(member: &Member) -> String {
    let name = match &member.kind {
        MemberKind::Column { type_name, .. } => type_name.as_str(),
        MemberKind::Reference { class } => class.as_str(),
        MemberKind::Collection { .. } => "array"
    };
    if member.nullable {
        format!("?{name}")
    } else {
        name.to_string()
    }
}
