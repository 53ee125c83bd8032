// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::{
    collections::BTreeMap,
    fmt, fs,
    sync::{Arc, Mutex}
};

use indoc::indoc;
use schema_scaffold::prelude::*;
use schema_scaffold::{LineDedup, MemorySchemaError};
use tracing::{
    Event, Subscriber,
    field::{Field, Visit}
};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

fn shop() -> MemorySchema {
    MemorySchema::new()
        .with_table(
            "shop",
            MemoryTable::new("customers")
                .column("id", "int(11)", false)
                .column("name", "varchar(255)", false)
        )
        .with_table(
            "shop",
            MemoryTable::new("orders")
                .column("id", "int(11)", false)
                .column("price", "decimal(10,2)", false)
                .column("customer_id", "int(11)", true)
                .foreign_key("orders_customer_id_fk", "customers")
        )
        .with_table(
            "shop",
            MemoryTable::new("line_items")
                .column("id", "int(11)", false)
                .column("order_id", "int(11)", false)
                .foreign_key("line_items_fk_order_id", "orders")
        )
}

fn php(config: GenerationConfig) -> Scaffolder<MemorySchema, MemorySink> {
    Scaffolder::new(shop(), MemorySink::new(), config, Dialect::Php)
}

#[test]
fn order_with_both_relation_directions() {
    let mut scaffolder = php(GenerationConfig::default());
    let artifact = scaffolder.scaffold_table("shop", "orders").unwrap();

    let expected = indoc! {r#"
        <?php

        namespace App;

        require_once __DIR__ . '/Customer.php';
        require_once __DIR__ . '/LineItem.php';

        class Order
        {
            public int $id;
            /** precision: 2 */
            public float $price;
            public ?int $customerId;
            public ?Customer $customer;
            /** @var LineItem[] */
            public ?array $lineItems;

            public function __construct(int $id, float $price, ?int $customerId, ?Customer $customer, ?array $lineItems)
            {
                $this->id = $id;
                $this->price = $price;
                $this->customerId = $customerId;
                $this->customer = $customer;
                $this->lineItems = $lineItems;
            }
        }
    "#};
    assert_eq!(artifact.file_name(), "Order.php");
    assert_eq!(artifact.content, expected);
    assert_eq!(scaffolder.sink().get("./Order.php"), Some(expected));
}

#[test]
fn whole_schema_in_listing_order() {
    let config = GenerationConfig {
        output_dir: "out".into(),
        ..GenerationConfig::default()
    };
    let mut scaffolder = Scaffolder::new(shop(), MemorySink::new(), config, Dialect::JavaScript);
    let artifacts = scaffolder.scaffold("shop").unwrap();

    let files: Vec<String> = artifacts.iter().map(Artifact::file_name).collect();
    assert_eq!(files, ["Customer.mjs", "Order.mjs", "LineItem.mjs"]);
    assert_eq!(scaffolder.sink().files().len(), 3);

    let customer = scaffolder.sink().get("out/Customer.mjs").unwrap();
    assert!(customer.contains("    /** @type {Order[]|null} */\n    orders = null;\n"));

    let line_item = scaffolder.sink().get("out/LineItem.mjs").unwrap();
    assert!(line_item.starts_with("import { Order } from './Order.mjs';\n\nexport class LineItem {\n"));
    assert!(line_item.contains("    /** @type {Order|null} */\n    order = null;\n"));
}

#[test]
fn raw_constraint_names_without_parsing() {
    let config = GenerationConfig {
        parse_constraints: false,
        ..GenerationConfig::default()
    };
    let artifact = php(config).scaffold_table("shop", "orders").unwrap();
    assert!(artifact.content.contains("public ?array $lineItemsFkOrderIds;"));
}

#[test]
fn ignored_database_relations_are_skipped() {
    let schema = shop().with_table(
        "audit",
        MemoryTable::new("order_events")
            .column("id", "int(11)", false)
            .foreign_key_in("order_events_order_id_fk", "shop", "orders")
    );
    let config = GenerationConfig::default().ignore_database("audit");
    let mut scaffolder = Scaffolder::new(schema, MemorySink::new(), config, Dialect::Php);

    let artifact = scaffolder.scaffold_table("shop", "orders").unwrap();
    assert!(!artifact.content.contains("OrderEvent"));
    assert!(artifact.content.contains("$lineItems"));
}

/// Fields of every event recorded while installed.
#[derive(Clone, Default)]
struct CapturedEvents(Arc<Mutex<Vec<BTreeMap<String, String>>>>);

impl CapturedEvents {
    fn with_message(&self, message: &str) -> Vec<BTreeMap<String, String>> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|fields| fields.get("message").map(String::as_str) == Some(message))
            .cloned()
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldMap::default();
        event.record(&mut fields);
        self.0.lock().unwrap().push(fields.0);
    }
}

#[derive(Default)]
struct FieldMap(BTreeMap<String, String>);

impl Visit for FieldMap {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

#[test]
fn ignored_database_relations_are_reported() {
    let schema = MemorySchema::new()
        .with_table(
            "shop",
            MemoryTable::new("orders")
                .column("id", "int(11)", false)
                .foreign_key_in("orders_ledger_id_fk", "audit", "ledgers")
        )
        .with_table(
            "audit",
            MemoryTable::new("ledgers").column("id", "int(11)", false)
        )
        .with_table(
            "audit",
            MemoryTable::new("order_events")
                .column("id", "int(11)", false)
                .foreign_key_in("order_events_order_id_fk", "shop", "orders")
        );
    let config = GenerationConfig::default().ignore_database("audit");
    let mut scaffolder = Scaffolder::new(schema, MemorySink::new(), config, Dialect::Php);

    let events = CapturedEvents::default();
    let subscriber = tracing_subscriber::registry().with(events.clone());
    let artifact = tracing::subscriber::with_default(subscriber, || {
        scaffolder.scaffold_table("shop", "orders").unwrap()
    });
    assert!(!artifact.content.contains("Ledger"));
    assert!(!artifact.content.contains("OrderEvent"));

    let skipped = events.with_message("skipping relation from ignored database");
    assert_eq!(skipped.len(), 2);

    let outgoing = &skipped[0];
    assert_eq!(outgoing["table"], "orders");
    assert_eq!(outgoing["direction"], "outgoing");
    assert_eq!(outgoing["target"], "ledgers");
    assert_eq!(outgoing["database"], "audit");

    let incoming = &skipped[1];
    assert_eq!(incoming["table"], "orders");
    assert_eq!(incoming["direction"], "incoming");
    assert_eq!(incoming["target"], "order_events");
    assert_eq!(incoming["database"], "audit");
}

#[test]
fn relations_from_other_databases_are_kept_by_default() {
    let schema = shop().with_table(
        "audit",
        MemoryTable::new("order_events")
            .column("id", "int(11)", false)
            .foreign_key_in("order_events_order_id_fk", "shop", "orders")
    );
    let mut scaffolder =
        Scaffolder::new(schema, MemorySink::new(), GenerationConfig::default(), Dialect::Php);

    let artifact = scaffolder.scaffold_table("shop", "orders").unwrap();
    assert!(artifact.content.contains("/** @var OrderEvent[] */\n    public ?array $orderEvents;"));
    assert!(artifact.content.contains("require_once __DIR__ . '/OrderEvent.php';"));
}

#[test]
fn first_failure_aborts_the_run() {
    let schema = shop().with_table(
        "shop",
        MemoryTable::new("regions")
            .column("id", "int(11)", false)
            .column("area", "polygon", false)
    );
    let schema = schema.with_table(
        "shop",
        MemoryTable::new("warehouses").column("id", "int(11)", false)
    );
    let mut scaffolder =
        Scaffolder::new(schema, MemorySink::new(), GenerationConfig::default(), Dialect::Php);

    let err = scaffolder.scaffold("shop").unwrap_err();
    assert!(matches!(
        err,
        ScaffoldError::UnrecognizedType { ref base, .. } if base == "polygon"
    ));

    let written: Vec<_> = scaffolder.sink().files().keys().cloned().collect();
    assert_eq!(written.len(), 3);
    assert!(scaffolder.sink().get("./Warehouse.php").is_none());
    assert!(
        !scaffolder
            .provider()
            .calls()
            .contains(&"list_columns shop.warehouses".to_string())
    );
}

#[test]
fn identical_lines_survive_structural_dedup() {
    let schema = MemorySchema::new().with_table(
        "shop",
        MemoryTable::new("contacts")
            .column("first_name", "varchar(255)", false)
            .column("last_name", "varchar(255)", false)
    );
    let config = GenerationConfig {
        namespace: String::new(),
        ..GenerationConfig::default()
    };
    let mut scaffolder = Scaffolder::new(schema, MemorySink::new(), config.clone(), Dialect::Php);
    let structural = scaffolder.scaffold_table("shop", "contacts").unwrap().content;
    assert_eq!(structural.matches("    /** max length: 255 */\n").count(), 2);
    assert!(structural.contains("    public string $lastName;\n\n"));

    let legacy_config = GenerationConfig {
        line_dedup: LineDedup::AllLines,
        ..config
    };
    let schema = scaffolder.into_parts().0;
    let mut legacy = Scaffolder::new(schema, MemorySink::new(), legacy_config, Dialect::Php);
    let collapsed = legacy.scaffold_table("shop", "contacts").unwrap().content;

    let expected = indoc! {r#"
        <?php

        class Contact
        {
            /** max length: 255 */
            public string $firstName;
            public string $lastName;
            public function __construct(string $firstName, string $lastName)
            {
                $this->firstName = $firstName;
                $this->lastName = $lastName;
            }
        }
    "#};
    assert_eq!(collapsed, expected);
}

#[test]
fn overwrite_disabled_keeps_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let existing = dir.path().join("Customer.php");
    fs::write(&existing, "// hand edited\n").unwrap();

    let config = GenerationConfig {
        overwrite: false,
        output_dir: dir.path().to_path_buf(),
        ..GenerationConfig::default()
    };
    let mut scaffolder = Scaffolder::new(shop(), FileSink, config, Dialect::Php);
    scaffolder.scaffold("shop").unwrap();

    assert_eq!(fs::read_to_string(&existing).unwrap(), "// hand edited\n");
    let order = fs::read_to_string(dir.path().join("Order.php")).unwrap();
    assert!(order.starts_with("<?php\n"));
}

#[test]
fn overwrite_enabled_replaces_files() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("generated/models");

    let config = GenerationConfig {
        output_dir: output_dir.clone(),
        ..GenerationConfig::default()
    };
    let mut scaffolder = Scaffolder::new(shop(), FileSink, config, Dialect::JavaScript);
    scaffolder.scaffold_table("shop", "customers").unwrap();
    fs::write(output_dir.join("Customer.mjs"), "stale").unwrap();
    scaffolder.scaffold_table("shop", "customers").unwrap();

    let content = fs::read_to_string(output_dir.join("Customer.mjs")).unwrap();
    assert!(content.starts_with("import { Order } from './Order.mjs';"));
}

#[test]
fn missing_connection_parameters_before_any_provider_call() {
    let settings = ConnectionSettings::new("localhost", "", "secret", "");
    let mut connected = false;
    let result = settings.open(|_| {
        connected = true;
        Ok::<_, MemorySchemaError>(shop())
    });

    match result {
        Err(ScaffoldError::MissingConnectionParameters { missing }) => {
            assert_eq!(missing, ["user", "database"]);
        }
        other => panic!("unexpected result: {other:?}")
    }
    assert!(!connected);
}

#[test]
fn singular_tables_ending_in_s_get_plural_collections() {
    let schema = shop().with_table(
        "shop",
        MemoryTable::new("order_address")
            .column("id", "int(11)", false)
            .column("order_id", "int(11)", false)
            .foreign_key("order_address_fk_order_id", "orders")
    );
    let mut scaffolder =
        Scaffolder::new(schema, MemorySink::new(), GenerationConfig::default(), Dialect::JavaScript);

    let artifact = scaffolder.scaffold_table("shop", "orders").unwrap();
    assert!(
        artifact
            .content
            .contains("    /** @type {OrderAddress[]|null} */\n    orderAddresses = null;\n")
    );
    assert!(artifact.content.contains("    lineItems = null;\n"));
}

#[test]
fn status_tables_keep_their_full_singular() {
    let schema = MemorySchema::new()
        .with_table(
            "shop",
            MemoryTable::new("order_statuses")
                .column("id", "int(11)", false)
                .column("label", "varchar(32)", false)
        )
        .with_table(
            "shop",
            MemoryTable::new("orders")
                .column("id", "int(11)", false)
                .column("order_status_id", "int(11)", true)
                .foreign_key("orders_fk_status_id", "order_statuses")
        );
    let mut scaffolder =
        Scaffolder::new(schema, MemorySink::new(), GenerationConfig::default(), Dialect::Php);

    let artifacts = scaffolder.scaffold("shop").unwrap();
    let files: Vec<String> = artifacts.iter().map(Artifact::file_name).collect();
    assert_eq!(files, ["OrderStatus.php", "Order.php"]);

    let order = scaffolder.sink().get("./Order.php").unwrap();
    assert!(order.contains("require_once __DIR__ . '/OrderStatus.php';"));
    assert!(order.contains("    public ?OrderStatus $orderStatus;\n"));

    let status = scaffolder.sink().get("./OrderStatus.php").unwrap();
    assert!(status.contains("class OrderStatus\n"));
    assert!(status.contains("    public ?array $orders;\n"));
}
