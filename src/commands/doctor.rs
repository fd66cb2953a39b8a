// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::catalog::{category_by_id, SAVING_CATEGORY};
use crate::models::{User, UserData};
use crate::store::{read_slot, KvStore};
use crate::users::{self, user_data_key, USERS_KEY, USER_DATA_PREFIX};
use crate::utils::pretty_table;

/// Slot integrity check: corrupt documents, orphaned data slots, dangling
/// sessions, and transactions whose category id is not in the catalog.
pub fn handle(store: &dyn KvStore) -> Result<()> {
    let mut rows = Vec::new();

    let registry: Vec<User> = match read_slot(store, USERS_KEY) {
        Ok(list) => list.unwrap_or_default(),
        Err(e) => {
            rows.push(vec!["corrupt_slot".into(), format!("users: {}", e)]);
            Vec::new()
        }
    };

    // 1) Data slots that no registered user owns
    let known: Vec<String> = registry.iter().map(|u| user_data_key(&u.id)).collect();
    for key in store.keys()? {
        if key.starts_with(USER_DATA_PREFIX) && !known.contains(&key) {
            rows.push(vec!["orphan_data_slot".into(), key]);
        }
    }

    // 2) Session pointing at a deleted user
    if let Some(current) = users::current_user(store)? {
        if !registry.iter().any(|u| u.id == current.id) {
            rows.push(vec!["dangling_session".into(), current.id]);
        }
    }

    // 3) Per-user documents: parse failures and unknown category ids
    for user in &registry {
        let slot = user_data_key(&user.id);
        let data: UserData = match read_slot(store, &slot) {
            Ok(data) => data.unwrap_or_default(),
            Err(e) => {
                rows.push(vec!["corrupt_slot".into(), format!("{}: {}", slot, e)]);
                continue;
            }
        };
        for t in &data.transactions {
            if t.category != SAVING_CATEGORY && category_by_id(&t.category).is_none() {
                rows.push(vec![
                    "unknown_category".into(),
                    format!("{} tx {} category '{}'", user.username, t.id, t.category),
                ]);
            }
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
