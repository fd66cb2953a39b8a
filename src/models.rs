// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    Cash,
    Credit,
    BankTransfer,
    Other,
}

/// An atomic financial event. Never mutated in place; removed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    /// Catalog category id; unknown ids resolve to a sentinel display name.
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub r#type: TransactionType,
    pub payment_method: PaymentMethod,
}

/// Seeded catalog entry, read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub r#type: TransactionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A recurring spending limit for one category.
///
/// `spent` is a projection recomputed from transactions on every load and
/// mutation; it is excluded from the persisted shape so a stale stored value
/// can never be trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub category: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
    #[serde(skip)]
    pub spent: Decimal,
}

/// A named savings target with progressive deposits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    /// Free-text label, not a catalog id.
    pub category: String,
    /// Presentation tag only; carries no meaning in the core.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSettings {
    pub monthly_income_goal: Decimal,
    pub monthly_expense_limit: Decimal,
    pub monthly_savings_goal: Decimal,
    pub currency: String,
    pub display_name: String,
}

impl Default for FinancialSettings {
    fn default() -> Self {
        FinancialSettings {
            monthly_income_goal: Decimal::from(8000),
            monthly_expense_limit: Decimal::from(6000),
            monthly_savings_goal: Decimal::from(2000),
            currency: "ILS".to_string(),
            display_name: String::new(),
        }
    }
}

/// Aggregate snapshot for a transaction set. Derived, never stored.
///
/// `total_saved` follows the income-minus-expense policy; every consumer
/// reads it from here so the rule stays uniform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub total_saved: Decimal,
    pub credit_debt: Decimal,
    pub cash_spent: Decimal,
}

/// Calendar-month snapshot bucket, an independent copy of the data it was
/// built from rather than a view onto it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyData {
    /// YYYY-MM key.
    pub month: String,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub summary: Summary,
}

/// Registry entry. Passwords are stored in clear text; real authentication
/// is an explicit non-goal for this local tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub display_name: String,
    pub created_at: String,
}

/// The full per-user document persisted in one key-value slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub settings: Option<FinancialSettings>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
}
