// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::store::{KvStore, SqliteStore};
use pocketbook::users;

#[test]
fn create_login_logout_cycle() {
    let store = SqliteStore::open_in_memory().unwrap();
    let user = users::create_user(&store, "dana", "secret", "Dana").unwrap();
    assert!(users::current_user(&store).unwrap().is_none());

    let logged_in = users::login(&store, "dana", "secret").unwrap();
    assert_eq!(logged_in.id, user.id);
    assert_eq!(
        users::current_user(&store).unwrap().unwrap().username,
        "dana"
    );

    users::logout(&store).unwrap();
    assert!(users::current_user(&store).unwrap().is_none());
}

#[test]
fn duplicate_username_is_rejected_with_readable_message() {
    let store = SqliteStore::open_in_memory().unwrap();
    users::create_user(&store, "dana", "a", "Dana").unwrap();
    let err = users::create_user(&store, "dana", "b", "Dana Two").unwrap_err();
    assert!(err.to_string().contains("already taken"));
    assert_eq!(users::list_users(&store).unwrap().len(), 1);
}

#[test]
fn bad_credentials_are_rejected() {
    let store = SqliteStore::open_in_memory().unwrap();
    users::create_user(&store, "dana", "secret", "Dana").unwrap();
    assert!(users::login(&store, "dana", "wrong").is_err());
    assert!(users::login(&store, "nobody", "secret").is_err());
    assert!(users::current_user(&store).unwrap().is_none());
}

#[test]
fn create_seeds_an_empty_data_slot() {
    let store = SqliteStore::open_in_memory().unwrap();
    let user = users::create_user(&store, "dana", "pw", "Dana").unwrap();
    let slot = users::user_data_key(&user.id);
    assert!(store.get(&slot).unwrap().is_some());
}

#[test]
fn delete_user_removes_registry_slot_and_session() {
    let store = SqliteStore::open_in_memory().unwrap();
    let user = users::create_user(&store, "dana", "pw", "Dana").unwrap();
    users::login(&store, "dana", "pw").unwrap();

    users::delete_user(&store, &user.id).unwrap();
    assert!(users::list_users(&store).unwrap().is_empty());
    assert!(store.get(&users::user_data_key(&user.id)).unwrap().is_none());
    assert!(users::current_user(&store).unwrap().is_none());
}

#[test]
fn delete_unknown_user_is_a_noop() {
    let store = SqliteStore::open_in_memory().unwrap();
    users::create_user(&store, "dana", "pw", "Dana").unwrap();
    users::delete_user(&store, "no-such-id").unwrap();
    assert_eq!(users::list_users(&store).unwrap().len(), 1);
}

#[test]
fn require_current_user_errors_when_logged_out() {
    let store = SqliteStore::open_in_memory().unwrap();
    let err = users::require_current_user(&store).unwrap_err();
    assert!(err.to_string().contains("logged in"));
}

#[test]
fn on_disk_store_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pocketbook.sqlite");

    {
        let store = SqliteStore::open_at(&path).unwrap();
        users::create_user(&store, "dana", "pw", "Dana").unwrap();
    }

    let store = SqliteStore::open_at(&path).unwrap();
    assert_eq!(users::list_users(&store).unwrap().len(), 1);
}
