// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use pocketbook::cli;
use pocketbook::commands::exporter;
use pocketbook::ledger::{Ledger, NewTransaction};
use pocketbook::models::{PaymentMethod, TransactionType};
use pocketbook::store::SqliteStore;
use pocketbook::users;

fn setup() -> SqliteStore {
    let store = SqliteStore::open_in_memory().unwrap();
    let user = users::create_user(&store, "dana", "pw", "Dana").unwrap();
    users::login(&store, "dana", "pw").unwrap();

    let mut ledger = Ledger::load(&store, &user).unwrap();
    ledger
        .add_transaction(NewTransaction {
            amount: Decimal::from(120),
            category: "5".to_string(),
            description: "weekly shop".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
            r#type: TransactionType::Expense,
            payment_method: PaymentMethod::Cash,
        })
        .unwrap();
    store
}

#[test]
fn csv_export_writes_header_and_rows() {
    let store = setup();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("txs.csv");

    let matches = cli::build_cli().get_matches_from([
        "pocketbook",
        "export",
        "transactions",
        "--format",
        "csv",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&store, sub).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,type,category,description,amount,method"
    );
    let row = lines.next().unwrap();
    assert!(row.contains("2025-08-10"));
    assert!(row.contains("expense"));
    assert!(row.contains("Food"));
    assert!(row.contains("120"));
}

#[test]
fn json_export_resolves_category_names() {
    let store = setup();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("txs.json");

    let matches = cli::build_cli().get_matches_from([
        "pocketbook",
        "export",
        "transactions",
        "--format",
        "json",
        "--out",
        out.to_str().unwrap(),
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&store, sub).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let items: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["category"], "Food");
    assert_eq!(items[0]["type"], "expense");
}
