// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PHP constant classes.

use super::EnumPlan;
use crate::{config::GenerationConfig, emit::single_quoted};

pub(super) fn render_enum(plan: &EnumPlan, config: &GenerationConfig) -> String {
    let mut out = String::from("<?php\n\n");
    if !config.namespace.is_empty() {
        out.push_str(&format!("namespace {};\n\n", config.namespace));
    }

    out.push_str(&format!("class {}\n{{\n", plan.class_name));
    for constant in &plan.constants {
        out.push_str(&format!(
            "    const {} = {};\n",
            constant.name, constant.literal
        ));
    }
    if config.enum_helpers {
        if !plan.constants.is_empty() {
            out.push('\n');
        }
        out.push_str(&generate_helpers(plan));
    }
    out.push_str("}\n");

    out
}

/// `toMap()` keyed by stored name, `toArray()` listing stored names.
fn generate_helpers(plan: &EnumPlan) -> String {
    let mut out = String::from("    public static function toMap(): array\n    {\n        return [\n");
    for constant in &plan.constants {
        out.push_str(&format!(
            "            {} => {},\n",
            single_quoted(&constant.label),
            constant.literal
        ));
    }
    out.push_str("        ];\n    }\n\n");

    out.push_str("    public static function toArray(): array\n    {\n        return [\n");
    for constant in &plan.constants {
        out.push_str(&format!("            {},\n", single_quoted(&constant.label)));
    }
    out.push_str("        ];\n    }\n");

    out
}
