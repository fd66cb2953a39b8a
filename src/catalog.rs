// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;

use crate::models::{Category, TransactionType};

/// Display label for transactions whose category id is not in the catalog.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Category id carried by synthetic savings-transfer transactions.
pub const SAVING_CATEGORY: &str = "saving";

/// Seeded catalog; read-only and not persisted per-user.
///
/// "Other" appears twice (income id 4, expense id 13). Aggregations key on
/// the display name, so both ids land in one "Other" bucket. That collapse
/// is long-standing behavior and is kept as-is.
pub static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    let cat = |id: &str, name: &str, t: TransactionType| Category {
        id: id.to_string(),
        name: name.to_string(),
        r#type: t,
    };
    vec![
        cat("1", "Salary", TransactionType::Income),
        cat("2", "Gifts", TransactionType::Income),
        cat("3", "Investments", TransactionType::Income),
        cat("4", "Other", TransactionType::Income),
        cat("5", "Food", TransactionType::Expense),
        cat("6", "Transport", TransactionType::Expense),
        cat("7", "Entertainment", TransactionType::Expense),
        cat("8", "Shopping", TransactionType::Expense),
        cat("9", "Bills", TransactionType::Expense),
        cat("10", "Housing", TransactionType::Expense),
        cat("11", "Health", TransactionType::Expense),
        cat("12", "Education", TransactionType::Expense),
        cat("13", "Other", TransactionType::Expense),
    ]
});

pub fn category_by_id(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Resolve a category id to its display name, falling back to the sentinel.
pub fn category_name(id: &str) -> &'static str {
    category_by_id(id).map(|c| c.name.as_str()).unwrap_or(UNKNOWN_CATEGORY)
}

pub fn categories_of_type(t: TransactionType) -> Vec<&'static Category> {
    CATEGORIES.iter().filter(|c| c.r#type == t).collect()
}
