// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::{Ledger, SettingsPatch};
use crate::store::KvStore;
use crate::users;
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &dyn KvStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => show(store, sub)?,
        Some(("set", sub)) => set(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let user = users::require_current_user(store)?;
    let ledger = Ledger::load(store, &user)?;
    let s = ledger.settings();

    if !maybe_print_json(json_flag, jsonl_flag, s)? {
        let rows = vec![
            vec!["Display name".to_string(), s.display_name.clone()],
            vec!["Currency".to_string(), s.currency.clone()],
            vec![
                "Monthly income goal".to_string(),
                s.monthly_income_goal.to_string(),
            ],
            vec![
                "Monthly expense limit".to_string(),
                s.monthly_expense_limit.to_string(),
            ],
            vec![
                "Monthly savings goal".to_string(),
                s.monthly_savings_goal.to_string(),
            ],
        ];
        println!("{}", pretty_table(&["Setting", "Value"], rows));
    }
    Ok(())
}

fn set(store: &dyn KvStore, sub: &clap::ArgMatches) -> Result<()> {
    let user = users::require_current_user(store)?;

    let mut patch = SettingsPatch::default();
    if let Some(v) = sub.get_one::<String>("income-goal") {
        patch.monthly_income_goal = Some(parse_decimal(v)?);
    }
    if let Some(v) = sub.get_one::<String>("expense-limit") {
        patch.monthly_expense_limit = Some(parse_decimal(v)?);
    }
    if let Some(v) = sub.get_one::<String>("savings-goal") {
        patch.monthly_savings_goal = Some(parse_decimal(v)?);
    }
    if let Some(v) = sub.get_one::<String>("currency") {
        patch.currency = Some(v.to_uppercase());
    }
    if let Some(v) = sub.get_one::<String>("name") {
        patch.display_name = Some(v.clone());
    }

    let mut ledger = Ledger::load(store, &user)?;
    ledger.update_settings(patch)?;
    println!("Settings updated");
    Ok(())
}
