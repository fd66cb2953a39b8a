// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::Utc;
use serde_json::json;

use crate::catalog::category_name;
use crate::ledger::{BudgetPatch, Ledger, NewBudget};
use crate::models::BudgetPeriod;
use crate::store::KvStore;
use crate::summary::{budget_amount_for, budget_percent_used, period_spent, Granularity};
use crate::users;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &dyn KvStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        Some(("status", sub)) => status(store, sub)?,
        Some(("period", sub)) => period(store, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn parse_period(s: &str) -> Result<BudgetPeriod> {
    match s {
        "daily" => Ok(BudgetPeriod::Daily),
        "weekly" => Ok(BudgetPeriod::Weekly),
        "monthly" => Ok(BudgetPeriod::Monthly),
        "yearly" => Ok(BudgetPeriod::Yearly),
        other => bail!("Unknown budget period '{}'", other),
    }
}

fn add(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let user = users::require_current_user(store)?;
    let category = sub.get_one::<String>("category").unwrap().clone();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let period = parse_period(sub.get_one::<String>("period").unwrap())?;

    let mut ledger = Ledger::load(store, &user)?;
    // One budget per category is a surface-level rule, enforced here rather
    // than in the ledger.
    if ledger.budgets().iter().any(|b| b.category == category) {
        bail!(
            "A budget already exists for category '{}'",
            category_name(&category)
        );
    }
    let budget = ledger.add_budget(NewBudget {
        category,
        amount,
        period,
    })?;
    println!(
        "Budget set for '{}': {} (id: {})",
        category_name(&budget.category),
        budget.amount,
        budget.id
    );
    Ok(())
}

fn update(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let user = users::require_current_user(store)?;

    let mut patch = BudgetPatch::default();
    if let Some(category) = sub.get_one::<String>("category") {
        patch.category = Some(category.clone());
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_decimal(amount)?);
    }
    if let Some(period) = sub.get_one::<String>("period") {
        patch.period = Some(parse_period(period)?);
    }

    let mut ledger = Ledger::load(store, &user)?;
    ledger.update_budget(id, patch)?;
    println!("Updated budget {} (if it existed)", id);
    Ok(())
}

fn delete(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let user = users::require_current_user(store)?;
    let mut ledger = Ledger::load(store, &user)?;
    ledger.delete_budget(id)?;
    println!("Deleted budget {} (if it existed)", id);
    Ok(())
}

fn status(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;
    let ccy = ledger.settings().currency.clone();

    let with_pct: Vec<serde_json::Value> = ledger
        .budgets()
        .iter()
        .map(|b| {
            json!({
                "id": b.id,
                "category": category_name(&b.category),
                "amount": b.amount,
                "period": b.period,
                "spent": b.spent,
                "percentUsed": budget_percent_used(b),
            })
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &with_pct)? {
        let rows = ledger
            .budgets()
            .iter()
            .map(|b| {
                vec![
                    category_name(&b.category).to_string(),
                    fmt_money(&b.amount, &ccy),
                    fmt_money(&b.spent, &ccy),
                    format!("{}%", budget_percent_used(b)),
                    b.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Budget", "Spent", "Used", "Id"], rows)
        );
    }
    Ok(())
}

fn period(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let granularity = match sub.get_one::<String>("granularity").unwrap().as_str() {
        "weekly" => Granularity::Weekly,
        _ => Granularity::Daily,
    };
    let today = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };

    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;
    let ccy = ledger.settings().currency.clone();

    let data: Vec<serde_json::Value> = ledger
        .budgets()
        .iter()
        .map(|b| {
            let equivalent = budget_amount_for(b, granularity);
            let spent = period_spent(b, ledger.transactions(), granularity, today);
            json!({
                "category": category_name(&b.category),
                "budget": equivalent.round_dp(2),
                "spent": spent,
                "remaining": (equivalent - spent).round_dp(2),
            })
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|v| {
                vec![
                    v["category"].as_str().unwrap_or_default().to_string(),
                    format!("{} {}", ccy, v["budget"].as_str().unwrap_or_default()),
                    format!("{} {}", ccy, v["spent"].as_str().unwrap_or_default()),
                    format!("{} {}", ccy, v["remaining"].as_str().unwrap_or_default()),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Budget", "Spent", "Remaining"], rows)
        );
    }
    Ok(())
}
