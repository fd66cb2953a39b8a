// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::ledger::Ledger;
use crate::models::Summary;
use crate::monthly::MonthView;
use crate::store::KvStore;
use crate::summary::{cash_payment_summary, transactions_by_category};
use crate::users;
use crate::utils::{fmt_money, maybe_print_json, month_key, parse_month, pretty_table};

pub fn handle(store: &dyn KvStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(store, sub)?,
        Some(("cash", sub)) => cash(store, sub)?,
        Some(("month", sub)) => month(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary_rows(summary: &Summary, ccy: &str) -> Vec<Vec<String>> {
    vec![
        vec!["Income".to_string(), fmt_money(&summary.total_income, ccy)],
        vec!["Expense".to_string(), fmt_money(&summary.total_expense, ccy)],
        vec!["Saved".to_string(), fmt_money(&summary.total_saved, ccy)],
        vec![
            "Credit debt".to_string(),
            fmt_money(&summary.credit_debt, ccy),
        ],
        vec!["Cash spent".to_string(), fmt_money(&summary.cash_spent, ccy)],
    ]
}

pub fn handle_summary(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;

    if !maybe_print_json(json_flag, jsonl_flag, ledger.summary())? {
        println!(
            "{}",
            pretty_table(
                &["Metric", "Amount"],
                summary_rows(ledger.summary(), &ledger.settings().currency),
            )
        );
    }
    Ok(())
}

fn by_category(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;
    let ccy = ledger.settings().currency.clone();

    let totals = transactions_by_category(ledger.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let rows = totals
            .iter()
            .map(|(name, amount)| vec![name.clone(), fmt_money(amount, &ccy)])
            .collect();
        println!("{}", pretty_table(&["Category", "Total"], rows));
    }
    Ok(())
}

fn cash(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;
    let ccy = ledger.settings().currency.clone();

    let cash = cash_payment_summary(ledger.transactions());
    if !maybe_print_json(json_flag, jsonl_flag, &cash)? {
        let mut rows = vec![
            vec![
                "Total cash payments".to_string(),
                fmt_money(&cash.total_cash_payments, &ccy),
            ],
            vec![
                "Transactions".to_string(),
                cash.cash_transactions_count.to_string(),
            ],
            vec![
                "Average payment".to_string(),
                fmt_money(&cash.average_cash_payment, &ccy),
            ],
        ];
        for top in &cash.top_cash_categories {
            rows.push(vec![
                format!("Top: {}", top.category),
                fmt_money(&top.amount, &ccy),
            ]);
        }
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

fn month(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;

    let current = month_key(Utc::now().date_naive());
    let mut view = MonthView::new(&current, ledger.transactions(), ledger.budgets());
    if let Some(requested) = sub.get_one::<String>("month") {
        let requested = parse_month(requested)?;
        view.switch_to_month(&requested, ledger.budgets());
    }

    let data = view.current_data();
    if !maybe_print_json(json_flag, jsonl_flag, data)? {
        println!("Month: {}", data.month);
        println!(
            "{}",
            pretty_table(
                &["Metric", "Amount"],
                summary_rows(&data.summary, &ledger.settings().currency),
            )
        );
        println!("{} transaction(s) in bucket", data.transactions.len());
    }
    Ok(())
}
