// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::KvStore;
use crate::users;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(store: &dyn KvStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("create", sub)) => {
            let username = sub.get_one::<String>("username").unwrap();
            let password = sub.get_one::<String>("password").unwrap();
            let name = sub
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_else(|| username.clone());
            let user = users::create_user(store, username, password, &name)?;
            println!("Created user '{}' (id: {})", user.username, user.id);
        }
        Some(("login", sub)) => {
            let username = sub.get_one::<String>("username").unwrap();
            let password = sub.get_one::<String>("password").unwrap();
            let user = users::login(store, username, password)?;
            println!("Logged in as '{}'", user.display_name);
        }
        Some(("logout", _)) => {
            users::logout(store)?;
            println!("Logged out");
        }
        Some(("current", _)) => match users::current_user(store)? {
            Some(user) => println!("{} ({})", user.display_name, user.username),
            None => println!("No user is logged in"),
        },
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let all = users::list_users(store)?;
            if !maybe_print_json(json_flag, jsonl_flag, &all)? {
                let rows = all
                    .iter()
                    .map(|u| {
                        vec![
                            u.id.clone(),
                            u.username.clone(),
                            u.display_name.clone(),
                            u.created_at.clone(),
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Id", "Username", "Name", "Created"], rows)
                );
            }
        }
        Some(("delete", sub)) => {
            let id = sub.get_one::<String>("id").unwrap();
            users::delete_user(store, id)?;
            println!("Deleted user {}", id);
        }
        _ => {}
    }
    Ok(())
}
