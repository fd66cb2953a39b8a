// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Month partitioning: calendar-month snapshot buckets over the canonical
//! collections, for browsing without mutating them.
//!
//! Switching to a month that has no bucket yet synthesizes an empty one; it
//! does not back-fill history by filtering the canonical transaction list.
//! Only the current month's bucket is refreshed when canonical data changes.
//! Month-to-month continuity is a known limitation, not something to patch
//! here without revisiting the product behavior.

use anyhow::Result;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{Budget, MonthlyData, Summary, Transaction};
use crate::summary::{budget_status, calculate_summary};
use crate::utils::{next_month_key, prev_month_key};

pub struct MonthView {
    current_month: String,
    months: HashMap<String, MonthlyData>,
}

impl MonthView {
    /// Seed a view at `month` from the live collections.
    pub fn new(month: &str, transactions: &[Transaction], budgets: &[Budget]) -> Self {
        let seed = MonthlyData {
            month: month.to_string(),
            transactions: transactions.to_vec(),
            budgets: budgets.to_vec(),
            summary: calculate_summary(transactions),
        };
        let mut months = HashMap::new();
        months.insert(month.to_string(), seed);
        MonthView {
            current_month: month.to_string(),
            months,
        }
    }

    pub fn current_month(&self) -> &str {
        &self.current_month
    }

    pub fn current_data(&self) -> &MonthlyData {
        // switch_to_month inserts before activating, so the key exists.
        &self.months[&self.current_month]
    }

    /// Activate a month, synthesizing an empty bucket the first time a key
    /// is visited: no transactions, budgets copied with `spent` reset, and
    /// a zeroed summary.
    pub fn switch_to_month(&mut self, month: &str, budgets: &[Budget]) {
        if !self.months.contains_key(month) {
            let blank_budgets = budgets
                .iter()
                .map(|b| Budget {
                    spent: Decimal::ZERO,
                    ..b.clone()
                })
                .collect();
            self.months.insert(
                month.to_string(),
                MonthlyData {
                    month: month.to_string(),
                    transactions: Vec::new(),
                    budgets: blank_budgets,
                    summary: Summary::default(),
                },
            );
        }
        self.current_month = month.to_string();
    }

    pub fn next_month(&mut self, budgets: &[Budget]) -> Result<()> {
        let month = next_month_key(&self.current_month)?;
        self.switch_to_month(&month, budgets);
        Ok(())
    }

    pub fn prev_month(&mut self, budgets: &[Budget]) -> Result<()> {
        let month = prev_month_key(&self.current_month)?;
        self.switch_to_month(&month, budgets);
        Ok(())
    }

    /// Rebuild the current month's bucket (only) from the canonical
    /// collections after they change.
    pub fn refresh(&mut self, transactions: &[Transaction], budgets: &[Budget]) {
        let updated = MonthlyData {
            month: self.current_month.clone(),
            transactions: transactions.to_vec(),
            budgets: budget_status(budgets, transactions),
            summary: calculate_summary(transactions),
        };
        self.months.insert(self.current_month.clone(), updated);
    }
}
