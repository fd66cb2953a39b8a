// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Locally-stored multi-user registry and session. This is bookkeeping, not
//! security: credentials live in the same local store as the data they gate.

use anyhow::Result;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{User, UserData};
use crate::store::{read_slot, write_slot, KvStore};

pub const USERS_KEY: &str = "users";
const CURRENT_USER_KEY: &str = "current_user";
pub const USER_DATA_PREFIX: &str = "user_data_";

/// Slot holding a user's financial document.
pub fn user_data_key(user_id: &str) -> String {
    format!("{}{}", USER_DATA_PREFIX, user_id)
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("username '{0}' is already taken")]
    DuplicateUsername(String),
    #[error("invalid username or password")]
    BadCredentials,
    #[error("no user is logged in; run 'pocketbook user login' first")]
    NotLoggedIn,
}

pub fn list_users(store: &dyn KvStore) -> Result<Vec<User>> {
    Ok(read_slot(store, USERS_KEY)?.unwrap_or_default())
}

fn save_users(store: &dyn KvStore, users: &[User]) -> Result<()> {
    write_slot(store, USERS_KEY, &users)
}

/// Register a user and seed an empty data slot. Duplicate usernames are
/// rejected with a readable message rather than silently overwritten.
pub fn create_user(
    store: &dyn KvStore,
    username: &str,
    password: &str,
    display_name: &str,
) -> Result<User> {
    let mut users = list_users(store)?;
    if users.iter().any(|u| u.username == username) {
        return Err(UserError::DuplicateUsername(username.to_string()).into());
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        username: username.to_string(),
        password: password.to_string(),
        display_name: display_name.to_string(),
        created_at: Utc::now().to_rfc3339(),
    };
    users.push(user.clone());
    save_users(store, &users)?;
    write_slot(store, &user_data_key(&user.id), &UserData::default())?;
    Ok(user)
}

/// Check credentials and store the session on success.
pub fn login(store: &dyn KvStore, username: &str, password: &str) -> Result<User> {
    let users = list_users(store)?;
    let user = users
        .into_iter()
        .find(|u| u.username == username && u.password == password)
        .ok_or(UserError::BadCredentials)?;
    write_slot(store, CURRENT_USER_KEY, &user)?;
    Ok(user)
}

pub fn logout(store: &dyn KvStore) -> Result<()> {
    store.remove(CURRENT_USER_KEY)
}

pub fn current_user(store: &dyn KvStore) -> Result<Option<User>> {
    read_slot(store, CURRENT_USER_KEY)
}

/// The active user, or a readable error for command handlers.
pub fn require_current_user(store: &dyn KvStore) -> Result<User> {
    current_user(store)?.ok_or_else(|| UserError::NotLoggedIn.into())
}

/// Remove a user, their data slot, and their session if it was active.
/// Unknown ids are a silent no-op.
pub fn delete_user(store: &dyn KvStore, user_id: &str) -> Result<()> {
    let mut users = list_users(store)?;
    users.retain(|u| u.id != user_id);
    save_users(store, &users)?;
    store.remove(&user_data_key(user_id))?;

    if let Some(current) = current_user(store)? {
        if current.id == user_id {
            logout(store)?;
        }
    }
    Ok(())
}
