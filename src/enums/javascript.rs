// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! ES module classes with static constants.

use super::EnumPlan;
use crate::{config::GenerationConfig, emit::single_quoted};

pub(super) fn render_enum(plan: &EnumPlan, config: &GenerationConfig) -> String {
    let mut out = format!("export class {} {{\n", plan.class_name);
    for constant in &plan.constants {
        out.push_str(&format!(
            "    static {} = {};\n",
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

fn generate_helpers(plan: &EnumPlan) -> String {
    let mut out = String::from("    static toMap() {\n        return {\n");
    for constant in &plan.constants {
        out.push_str(&format!(
            "            {}: {},\n",
            single_quoted(&constant.label),
            constant.literal
        ));
    }
    out.push_str("        };\n    }\n\n");

    out.push_str("    static toArray() {\n        return [\n");
    for constant in &plan.constants {
        out.push_str(&format!("            {},\n", single_quoted(&constant.label)));
    }
    out.push_str("        ];\n    }\n");

    out
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use scaffold_core::EnumSource;
    use serde_json::json;

    use super::*;

    #[test]
    fn static_constants_and_helpers() {
        let config = GenerationConfig::default();
        let rows = serde_json::from_value(json!([
            {"code": "EUR", "label": "euro"},
            {"code": "USD", "label": "dollar"}
        ]))
        .unwrap();
        let plan =
            EnumPlan::build(&EnumSource::new("currencies", rows, "code", "label"), &config)
                .unwrap();

        let expected = indoc! {"
            export class Currency {
                static eUR = 'euro';
                static uSD = 'dollar';

                static toMap() {
                    return {
                        'EUR': 'euro',
                        'USD': 'dollar',
                    };
                }

                static toArray() {
                    return [
                        'EUR',
                        'USD',
                    ];
                }
            }
        "};
        assert_eq!(render_enum(&plan, &config), expected);
    }

    #[test]
    fn empty_enum_without_helpers() {
        let config = GenerationConfig {
            enum_helpers: false,
            ..GenerationConfig::default()
        };
        let plan = EnumPlan::build(&EnumSource::new("flags", Vec::new(), "name", "id"), &config)
            .unwrap();
        assert_eq!(render_enum(&plan, &config), "export class Flag {\n}\n");
    }
}
