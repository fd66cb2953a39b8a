// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::catalog::category_name;
use crate::ledger::{Ledger, NewTransaction};
use crate::models::{PaymentMethod, Transaction, TransactionType};
use crate::store::KvStore;
use crate::summary::recent_transactions;
use crate::users;
use crate::utils::{date_in_month, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};

pub fn handle(store: &dyn KvStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("recent", sub)) => recent(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn parse_type(s: &str) -> Result<TransactionType> {
    match s {
        "income" => Ok(TransactionType::Income),
        "expense" => Ok(TransactionType::Expense),
        other => bail!("Unknown transaction type '{}'", other),
    }
}

pub fn parse_method(s: &str) -> Result<PaymentMethod> {
    match s {
        "cash" => Ok(PaymentMethod::Cash),
        "credit" => Ok(PaymentMethod::Credit),
        "bankTransfer" => Ok(PaymentMethod::BankTransfer),
        "other" => Ok(PaymentMethod::Other),
        unknown => bail!("Unknown payment method '{}'", unknown),
    }
}

fn add(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let user = users::require_current_user(store)?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount.is_sign_negative() {
        bail!("Amount must be non-negative; use --type expense for outflows");
    }
    let description = sub.get_one::<String>("description").unwrap();
    if description.trim().is_empty() {
        bail!("Description must not be empty");
    }
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let r#type = parse_type(sub.get_one::<String>("type").unwrap())?;
    let payment_method = parse_method(sub.get_one::<String>("method").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();

    let mut ledger = Ledger::load(store, &user)?;
    let tx = ledger.add_transaction(NewTransaction {
        amount,
        category,
        description: description.clone(),
        date,
        r#type,
        payment_method,
    })?;
    println!(
        "Recorded {} on {} '{}' (id: {})",
        tx.amount, tx.date, tx.description, tx.id
    );
    Ok(())
}

fn rows_for(transactions: &[Transaction]) -> Vec<Vec<String>> {
    transactions
        .iter()
        .map(|t| {
            vec![
                t.date.to_string(),
                match t.r#type {
                    TransactionType::Income => "income".to_string(),
                    TransactionType::Expense => "expense".to_string(),
                },
                category_name(&t.category).to_string(),
                t.description.clone(),
                t.amount.to_string(),
                t.id.clone(),
            ]
        })
        .collect()
}

fn list(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;

    let mut data: Vec<Transaction> = ledger.transactions().to_vec();
    if let Some(month) = sub.get_one::<String>("month") {
        let month = parse_month(month)?;
        data.retain(|t| date_in_month(t.date, &month));
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Description", "Amount", "Id"],
                rows_for(&data),
            )
        );
    }
    Ok(())
}

fn recent(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let count = *sub.get_one::<usize>("count").unwrap();
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;

    let data = recent_transactions(ledger.transactions(), count);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Description", "Amount", "Id"],
                rows_for(&data),
            )
        );
    }
    Ok(())
}

fn delete(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let user = users::require_current_user(store)?;
    let mut ledger = Ledger::load(store, &user)?;
    ledger.delete_transaction(id)?;
    println!("Deleted transaction {} (if it existed)", id);
    Ok(())
}
