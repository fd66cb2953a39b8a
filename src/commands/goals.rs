// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use chrono::Utc;
use rust_decimal::Decimal;

use crate::ledger::{GoalPatch, Ledger, NewSavingsGoal};
use crate::store::KvStore;
use crate::summary::goal_progress;
use crate::users;
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &dyn KvStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => update(store, sub)?,
        Some(("delete", sub)) => delete(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let user = users::require_current_user(store)?;
    let name = sub.get_one::<String>("name").unwrap().clone();
    let target_amount = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    let deadline = parse_date(sub.get_one::<String>("deadline").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();
    let current_amount = parse_decimal(sub.get_one::<String>("initial").unwrap())?;

    let mut ledger = Ledger::load(store, &user)?;
    let goal = ledger.add_savings_goal(NewSavingsGoal {
        name,
        target_amount,
        current_amount,
        deadline,
        category,
    })?;
    println!("Created goal '{}' (id: {})", goal.name, goal.id);
    Ok(())
}

fn list(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;
    let ccy = ledger.settings().currency.clone();

    if !maybe_print_json(json_flag, jsonl_flag, &ledger.savings_goals())? {
        let rows = ledger
            .savings_goals()
            .iter()
            .map(|g| {
                vec![
                    g.name.clone(),
                    fmt_money(&g.current_amount, &ccy),
                    fmt_money(&g.target_amount, &ccy),
                    g.deadline.to_string(),
                    g.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Goal", "Saved", "Target", "Deadline", "Id"], rows)
        );
        let (current, target, percent) = goal_progress(ledger.savings_goals());
        println!(
            "Overall: {} of {} ({}%)",
            fmt_money(&current, &ccy),
            fmt_money(&target, &ccy),
            percent.round_dp(1)
        );
    }
    Ok(())
}

fn update(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let user = users::require_current_user(store)?;

    let mut patch = GoalPatch::default();
    if let Some(name) = sub.get_one::<String>("name") {
        patch.name = Some(name.clone());
    }
    if let Some(target) = sub.get_one::<String>("target") {
        patch.target_amount = Some(parse_decimal(target)?);
    }
    if let Some(current) = sub.get_one::<String>("current") {
        patch.current_amount = Some(parse_decimal(current)?);
    }
    if let Some(deadline) = sub.get_one::<String>("deadline") {
        patch.deadline = Some(parse_date(deadline)?);
    }
    if let Some(category) = sub.get_one::<String>("category") {
        patch.category = Some(category.clone());
    }

    let mut ledger = Ledger::load(store, &user)?;
    ledger.update_savings_goal(id, patch)?;
    println!("Updated goal {} (if it existed)", id);
    Ok(())
}

fn delete(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let user = users::require_current_user(store)?;
    let mut ledger = Ledger::load(store, &user)?;
    ledger.delete_savings_goal(id)?;
    println!("Deleted goal {} (if it existed)", id);
    Ok(())
}

/// The top-level `transfer` command. Enforces the positive-amount contract
/// before handing off to the ledger.
pub fn handle_transfer(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount <= Decimal::ZERO {
        bail!("Transfer amount must be positive");
    }
    let goal_id = sub.get_one::<String>("goal").map(|s| s.as_str());
    let today = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Utc::now().date_naive(),
    };

    let user = users::require_current_user(store)?;
    let mut ledger = Ledger::load(store, &user)?;
    let tx = ledger.transfer_to_savings(amount, goal_id, today)?;
    println!("{} (tx id: {})", tx.description, tx.id);
    Ok(())
}
