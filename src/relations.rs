// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relation resolution.
//!
//! Turns foreign-key constraints into [`RelationDescriptor`]s:
//!
//! | Direction | Source | Field name | Rendered as |
//! |-----------|--------|------------|-------------|
//! | outgoing | keys the table declares | referenced table name | single reference |
//! | incoming | keys other tables hold on it | derived from constraint name | collection |
//!
//! Both directions are always nullable. Relations are not filtered here;
//! ignored databases are dropped when the class plan is built.

use scaffold_core::{IncomingConstraint, OutgoingConstraint, RelationDescriptor};

/// Relations for the foreign keys a table declares.
#[must_use]
pub fn resolve_outgoing(constraints: &[OutgoingConstraint]) -> Vec<RelationDescriptor> {
    constraints
        .iter()
        .map(|c| RelationDescriptor {
            target_entity:   c.referenced_table.clone(),
            field_name:      c.referenced_table.clone(),
            nullable:        true,
            origin_database: c.database.clone()
        })
        .collect()
}

/// Relations for the foreign keys other tables hold on this one.
///
/// With `parse_constraints` the field name comes from
/// [`constraint_field_name`]; otherwise the constraint name is used as is.
#[must_use]
pub fn resolve_incoming(
    constraints: &[IncomingConstraint],
    parse_constraints: bool
) -> Vec<RelationDescriptor> {
    constraints
        .iter()
        .map(|c| {
            let field_name = if parse_constraints {
                constraint_field_name(&c.constraint_name)
            } else {
                c.constraint_name.clone()
            };
            if field_name.is_empty() {
                tracing::warn!(
                    constraint = %c.constraint_name,
                    table = %c.referencing_table,
                    "constraint name yields an empty field name"
                );
            }
            RelationDescriptor {
                target_entity: c.referencing_table.clone(),
                field_name,
                nullable: true,
                origin_database: c.database.clone()
            }
        })
        .collect()
}

/// Derive a collection field name from a foreign-key constraint name.
///
/// Works on `_`-delimited segments:
///
/// 1. drop every standalone `fk` segment;
/// 2. drop one trailing `id` segment;
/// 3. drop the final remaining segment (the referenced column or table).
///
/// ```text
/// line_items_fk_order_id  ->  line_items
/// line_items_order_id_fk  ->  line_items
/// fk_line_items_order     ->  line_items
/// orders_ibfk_1           ->  orders_ibfk
/// customer                ->  ""
/// ```
///
/// Best effort only. Names with a single segment come out empty and are
/// passed on as such.
#[must_use]
pub fn constraint_field_name(constraint: &str) -> String {
    let mut segments: Vec<&str> = constraint
        .split('_')
        .filter(|segment| *segment != "fk")
        .collect();

    if segments.last() == Some(&"id") {
        segments.pop();
    }
    segments.pop();

    segments.join("_")
}
