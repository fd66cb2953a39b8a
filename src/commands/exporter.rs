// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::catalog::category_name;
use crate::ledger::Ledger;
use crate::models::{PaymentMethod, TransactionType};
use crate::store::KvStore;
use crate::users;

pub fn handle(store: &dyn KvStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn type_label(t: TransactionType) -> &'static str {
    match t {
        TransactionType::Income => "income",
        TransactionType::Expense => "expense",
    }
}

fn method_label(m: PaymentMethod) -> &'static str {
    match m {
        PaymentMethod::Cash => "cash",
        PaymentMethod::Credit => "credit",
        PaymentMethod::BankTransfer => "bankTransfer",
        PaymentMethod::Other => "other",
    }
}

fn export_transactions(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "type",
                "category",
                "description",
                "amount",
                "method",
            ])?;
            for t in ledger.transactions() {
                wtr.write_record([
                    t.date.to_string(),
                    type_label(t.r#type).to_string(),
                    category_name(&t.category).to_string(),
                    t.description.clone(),
                    t.amount.to_string(),
                    method_label(t.payment_method).to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = ledger
                .transactions()
                .iter()
                .map(|t| {
                    json!({
                        "date": t.date,
                        "type": type_label(t.r#type),
                        "category": category_name(&t.category),
                        "description": t.description,
                        "amount": t.amount,
                        "method": method_label(t.payment_method),
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
