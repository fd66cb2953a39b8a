// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod ledger;
pub mod models;
pub mod monthly;
pub mod store;
pub mod summary;
pub mod users;
pub mod utils;
