// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog::{categories_of_type, CATEGORIES};
use crate::commands::transactions::parse_type;
use crate::models::{Category, TransactionType};
use crate::utils::{maybe_print_json, pretty_table};

/// The catalog is seeded reference data, so this surface is read-only.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub),
        _ => Ok(()),
    }
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let cats: Vec<&Category> = match sub.get_one::<String>("type") {
        Some(t) => categories_of_type(parse_type(t)?),
        None => CATEGORIES.iter().collect(),
    };

    if !maybe_print_json(json_flag, jsonl_flag, &cats)? {
        let rows = cats
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    c.name.clone(),
                    match c.r#type {
                        TransactionType::Income => "income".to_string(),
                        TransactionType::Expense => "expense".to_string(),
                    },
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Category", "Type"], rows));
    }
    Ok(())
}
