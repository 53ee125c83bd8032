// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation orchestrator.
//!
//! [`Scaffolder`] drives a [`SchemaProvider`] through the generation states,
//! hands each entity to the selected dialect and stores the result in a
//! [`Sink`].
//!
//! # States
//!
//! ```text
//! class mode:  ListingTables ─► per table: FetchingFields ─► FetchingOwnRelations
//!                                          ─► FetchingInverseRelations ─► Emitting
//!
//! enum mode:   ValidatingFields ─► QueryingRows ─► Emitting
//! ```
//!
//! Work is strictly sequential. Tables are generated in listing order and
//! the first failure ends the run; files already written stay written.

use scaffold_core::{
    EnumSource, Result, ScaffoldError, SchemaProvider, Sink, Stage, WriteOutcome
};

use crate::{
    artifact::Artifact,
    config::GenerationConfig,
    dialect::Dialect,
    emit::Entity,
    relations::{resolve_incoming, resolve_outgoing}
};

/// Schema-to-source generator.
///
/// # Examples
///
/// ```rust
/// use schema_scaffold::{
///     Dialect, GenerationConfig, MemorySchema, MemorySink, MemoryTable, Scaffolder
/// };
///
/// let schema = MemorySchema::new().with_table(
///     "shop",
///     MemoryTable::new("customers")
///         .column("id", "int(11)", false)
///         .column("name", "varchar(255)", false)
/// );
///
/// let mut scaffolder = Scaffolder::new(
///     schema,
///     MemorySink::new(),
///     GenerationConfig::default(),
///     Dialect::Php
/// );
/// let artifacts = scaffolder.scaffold("shop").unwrap();
///
/// assert_eq!(artifacts[0].file_name(), "Customer.php");
/// assert!(scaffolder.sink().get("./Customer.php").is_some());
/// ```
#[derive(Debug)]
pub struct Scaffolder<P, S> {
    provider: P,
    sink:     S,
    config:   GenerationConfig,
    dialect:  Dialect
}

impl<P: SchemaProvider, S: Sink> Scaffolder<P, S> {
    /// Create a scaffolder.
    pub fn new(provider: P, sink: S, config: GenerationConfig, dialect: Dialect) -> Self {
        Self {
            provider,
            sink,
            config,
            dialect
        }
    }

    /// Generate a class for every table of `schema`, in listing order.
    ///
    /// # Errors
    ///
    /// The first failure of any table; later tables are not attempted.
    pub fn scaffold(&mut self, schema: &str) -> Result<Vec<Artifact>> {
        let span = tracing::info_span!("scaffold", schema, dialect = %self.dialect);
        let _guard = span.enter();

        enter(Stage::ListingTables, schema);
        let tables = self
            .provider
            .list_tables(schema)
            .map_err(|err| ScaffoldError::query(Stage::ListingTables, schema, err))?;

        let mut artifacts = Vec::with_capacity(tables.len());
        for table in &tables {
            artifacts.push(self.generate_table(schema, table)?);
        }

        tracing::info!(count = artifacts.len(), "schema scaffolded");
        Ok(artifacts)
    }

    /// Generate a class for one table.
    ///
    /// # Errors
    ///
    /// Provider failures as [`ScaffoldError::Query`], unknown column types,
    /// and sink failures.
    pub fn scaffold_table(&mut self, schema: &str, table: &str) -> Result<Artifact> {
        let span = tracing::info_span!("scaffold", schema, dialect = %self.dialect);
        let _guard = span.enter();

        self.generate_table(schema, table)
    }

    /// Gather fields and both relation directions of a table.
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Query`] tagged with the stage of the failing call.
    pub fn load_entity(&mut self, schema: &str, table: &str) -> Result<Entity> {
        enter(Stage::FetchingFields, table);
        let fields = self
            .provider
            .list_columns(schema, table)
            .map_err(|err| ScaffoldError::query(Stage::FetchingFields, table, err))?;

        enter(Stage::FetchingOwnRelations, table);
        let outgoing = self
            .provider
            .list_outgoing_constraints(schema, table)
            .map_err(|err| ScaffoldError::query(Stage::FetchingOwnRelations, table, err))?;

        enter(Stage::FetchingInverseRelations, table);
        let incoming = self
            .provider
            .list_incoming_constraints(table)
            .map_err(|err| ScaffoldError::query(Stage::FetchingInverseRelations, table, err))?;

        Ok(Entity::new(table, fields).with_relations(
            resolve_outgoing(&outgoing),
            resolve_incoming(&incoming, self.config.parse_constraints)
        ))
    }

    /// Generate a constant class from the rows of a lookup table.
    ///
    /// Both columns are checked against the table's column list before any
    /// row is read.
    ///
    /// # Errors
    ///
    /// - [`ScaffoldError::FieldNotFound`] when either column is missing
    /// - [`ScaffoldError::InvalidRow`] when a row lacks a value
    /// - [`ScaffoldError::Query`] and sink failures
    pub fn scaffold_enum(
        &mut self,
        schema: &str,
        table: &str,
        name_field: &str,
        value_field: &str
    ) -> Result<Artifact> {
        let span = tracing::info_span!("scaffold_enum", schema, table, dialect = %self.dialect);
        let _guard = span.enter();

        enter(Stage::ValidatingFields, table);
        let columns = self
            .provider
            .list_columns(schema, table)
            .map_err(|err| ScaffoldError::query(Stage::ValidatingFields, table, err))?;
        for field in [name_field, value_field] {
            if !columns.iter().any(|column| column.name == field) {
                return Err(ScaffoldError::FieldNotFound {
                    table: table.to_string(),
                    field: field.to_string()
                });
            }
        }

        enter(Stage::QueryingRows, table);
        let rows = self
            .provider
            .query_rows(schema, table)
            .map_err(|err| ScaffoldError::query(Stage::QueryingRows, table, err))?;

        enter(Stage::Emitting, table);
        let source = EnumSource::new(table, rows, name_field, value_field);
        let artifact = self.dialect.emit_enum(&source, &self.config)?;
        self.save(artifact)
    }

    /// Active configuration.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Selected dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Schema provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Output sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Give back the provider and the sink.
    pub fn into_parts(self) -> (P, S) {
        (self.provider, self.sink)
    }

    fn generate_table(&mut self, schema: &str, table: &str) -> Result<Artifact> {
        let span = tracing::info_span!("table", table);
        let _guard = span.enter();

        self.try_generate_table(schema, table).inspect_err(|err| {
            tracing::error!(table, error = %err, "entity generation failed");
        })
    }

    fn try_generate_table(&mut self, schema: &str, table: &str) -> Result<Artifact> {
        let entity = self.load_entity(schema, table)?;

        enter(Stage::Emitting, table);
        let artifact = self.dialect.emit_class(&entity, &self.config)?;
        self.save(artifact)
    }

    /// Hand the artifact to the sink when saving is enabled.
    fn save(&mut self, artifact: Artifact) -> Result<Artifact> {
        if !self.config.save_after_create {
            tracing::info!(class = %artifact.class_name, "artifact generated");
            return Ok(artifact);
        }

        let path = artifact.path(&self.config.output_dir);
        let outcome = self
            .sink
            .write(&path, &artifact.content, self.config.overwrite)?;
        tracing::info!(
            class = %artifact.class_name,
            path = %path.display(),
            written = outcome == WriteOutcome::Written,
            "artifact generated"
        );
        Ok(artifact)
    }
}

fn enter(stage: Stage, target: &str) {
    tracing::debug!(%stage, target, "entering stage");
}
