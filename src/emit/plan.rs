// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dialect-independent layout of a generated class.

use scaffold_core::{RelationDescriptor, Result};

use super::Entity;
use crate::{
    config::GenerationConfig,
    naming,
    types::{LanguageInfo, TypeMapper}
};

/// Everything a dialect renderer needs, already named and typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassPlan {
    /// Cased, singularized class name.
    pub class_name: String,

    /// Generated classes this one refers to, in first-use order.
    pub dependencies: Vec<String>,

    /// Built-in classes used by column types, in first-use order.
    pub builtins: Vec<String>,

    /// Properties in declaration order: columns, outgoing, incoming.
    pub members: Vec<Member>
}

/// One property of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Member {
    /// Cased property name.
    pub name: String,

    /// Raw key read by the dictionary constructor.
    pub key: String,

    pub kind: MemberKind,

    pub nullable: bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MemberKind {
    /// Plain column.
    Column {
        type_name:  String,
        annotation: Option<String>
    },

    /// Single related entity.
    Reference { class: String },

    /// Collection of entities referencing this one.
    Collection { class: String }
}

impl ClassPlan {
    /// Lay out `entity` for a dialect.
    ///
    /// # Errors
    ///
    /// The first unrecognized column type; no partial plan is returned.
    pub fn build(
        entity: &Entity,
        language: &LanguageInfo,
        config: &GenerationConfig
    ) -> Result<Self> {
        let columns = entity
            .fields
            .iter()
            .map(|column| language.map_column(column))
            .collect::<Result<Vec<_>>>()?;

        let outgoing = retained(&entity.outgoing, &entity.name, "outgoing", config);
        let incoming = retained(&entity.incoming, &entity.name, "incoming", config);

        let class_name = config.class_name(&entity.name);
        let mut dependencies = Vec::new();
        let mut builtins = Vec::new();

        for relation in outgoing.iter().chain(&incoming) {
            let class = config.class_name(&relation.target_entity);
            if class != class_name {
                push_unique(&mut dependencies, class);
            }
        }
        for column in &columns {
            let type_name = &column.mapped.type_name;
            if language.is_builtin_class(type_name) {
                push_unique(&mut builtins, type_name.clone());
            } else if !language.is_primitive(type_name) {
                push_unique(&mut dependencies, type_name.clone());
            }
        }

        let mut members = Vec::with_capacity(columns.len() + outgoing.len() + incoming.len());

        for column in columns {
            members.push(Member {
                name:     config.field_name(&column.name),
                key:      column.name,
                kind:     MemberKind::Column {
                    type_name:  column.mapped.type_name,
                    annotation: column.mapped.annotation
                },
                nullable: column.nullable || config.always_nullable
            });
        }
        for relation in outgoing {
            members.push(Member {
                name:     reference_name(&relation.field_name, config),
                key:      relation.field_name.clone(),
                kind:     MemberKind::Reference {
                    class: config.class_name(&relation.target_entity)
                },
                nullable: relation.nullable || config.always_nullable
            });
        }
        for relation in incoming {
            members.push(Member {
                name:     collection_name(&relation.field_name, config),
                key:      relation.field_name.clone(),
                kind:     MemberKind::Collection {
                    class: config.class_name(&relation.target_entity)
                },
                nullable: true
            });
        }

        Ok(Self {
            class_name,
            dependencies,
            builtins,
            members
        })
    }
}

/// Relations whose origin database is not ignored. Each dropped relation is
/// logged.
fn retained<'a>(
    relations: &'a [RelationDescriptor],
    table: &str,
    direction: &'static str,
    config: &GenerationConfig
) -> Vec<&'a RelationDescriptor> {
    relations
        .iter()
        .filter(|relation| {
            let ignored = config.is_ignored(&relation.origin_database);
            if ignored {
                tracing::info!(
                    table,
                    direction,
                    target = %relation.target_entity,
                    database = %relation.origin_database,
                    "skipping relation from ignored database"
                );
            }
            !ignored
        })
        .collect()
}

fn push_unique(list: &mut Vec<String>, name: String) {
    if !list.contains(&name) {
        list.push(name);
    }
}

/// Field name of an outgoing relation: singular when plural stripping is on.
fn reference_name(raw: &str, config: &GenerationConfig) -> String {
    let name = config.field_name(raw);
    if config.strip_plural {
        naming::singularize(&name)
    } else {
        name
    }
}

/// Field name of an incoming relation: always plural, never stripped.
fn collection_name(raw: &str, config: &GenerationConfig) -> String {
    let name = config.field_name(raw);
    naming::pluralize(&name)
}
