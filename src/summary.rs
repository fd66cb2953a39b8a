// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure derivations over transaction and budget lists. Nothing in here
//! touches the store or the clock; callers pass everything in.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::category_name;
use crate::models::{Budget, BudgetPeriod, PaymentMethod, SavingsGoal, Summary, Transaction, TransactionType};

/// Partition a transaction list into the aggregate snapshot.
///
/// `total_saved` is income minus expense. An alternate policy (sum of
/// transactions tagged with the saving category) exists in the product's
/// history; this build uses income-minus-expense everywhere.
pub fn calculate_summary(transactions: &[Transaction]) -> Summary {
    let total_income: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Income)
        .map(|t| t.amount)
        .sum();

    let total_expense: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
        .map(|t| t.amount)
        .sum();

    let credit_debt: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense && t.payment_method == PaymentMethod::Credit)
        .map(|t| t.amount)
        .sum();

    let cash_spent: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense && t.payment_method == PaymentMethod::Cash)
        .map(|t| t.amount)
        .sum();

    Summary {
        total_income,
        total_expense,
        total_saved: total_income - total_expense,
        credit_debt,
        cash_spent,
    }
}

/// Totals grouped by resolved category display name, income and expense
/// alike. Distinct catalog ids sharing a display name ("Other" exists as
/// both an income and an expense category) collapse into one bucket.
pub fn transactions_by_category(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    let mut result: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in transactions {
        let name = category_name(&t.category);
        *result.entry(name.to_string()).or_insert(Decimal::ZERO) += t.amount;
    }
    result
}

/// A copy of the most recent `count` transactions, newest first. The input
/// is never reordered; equal dates keep their original relative order.
pub fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(count);
    sorted
}

/// Recompute every budget's `spent` from the transaction list: the lifetime
/// sum of expense transactions in the budget's category. The budget's
/// `period` never scopes this figure; it only drives the per-period amount
/// conversions below.
pub fn budget_status(budgets: &[Budget], transactions: &[Transaction]) -> Vec<Budget> {
    budgets
        .iter()
        .map(|budget| {
            let spent = transactions
                .iter()
                .filter(|t| t.r#type == TransactionType::Expense && t.category == budget.category)
                .map(|t| t.amount)
                .sum();
            Budget {
                spent,
                ..budget.clone()
            }
        })
        .collect()
}

/// Percentage of the budget consumed, rounded half away from zero and
/// capped at 100. A zero-amount budget reads as 0%, never a division error.
pub fn budget_percent_used(budget: &Budget) -> u32 {
    if budget.amount.is_zero() {
        return 0;
    }
    let pct = (budget.spent / budget.amount * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .min(Decimal::from(100));
    pct.to_u32().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashCategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashPaymentSummary {
    pub total_cash_payments: Decimal,
    pub cash_transactions_count: usize,
    pub average_cash_payment: Decimal,
    pub top_cash_categories: Vec<CashCategoryTotal>,
}

/// Statistics over cash-method transactions: total, count, average (0 when
/// there are none), and the top three category buckets by amount.
pub fn cash_payment_summary(transactions: &[Transaction]) -> CashPaymentSummary {
    let cash: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.payment_method == PaymentMethod::Cash)
        .collect();

    let total: Decimal = cash.iter().map(|t| t.amount).sum();
    let count = cash.len();
    let average = if count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(count as u64)
    };

    let mut by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    for t in &cash {
        let name = category_name(&t.category);
        *by_category.entry(name.to_string()).or_insert(Decimal::ZERO) += t.amount;
    }
    let mut top: Vec<CashCategoryTotal> = by_category
        .into_iter()
        .map(|(category, amount)| CashCategoryTotal { category, amount })
        .collect();
    top.sort_by(|a, b| b.amount.cmp(&a.amount));
    top.truncate(3);

    CashPaymentSummary {
        total_cash_payments: total,
        cash_transactions_count: count,
        average_cash_payment: average,
        top_cash_categories: top,
    }
}

/// Target granularity for budget-amount conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Weekly,
}

/// Convert a budget's amount to a daily or weekly equivalent using fixed
/// calendar approximations (month = 30 days or 4 weeks, year = 365 days or
/// 52 weeks). The divisors are deliberately approximate and are part of the
/// observable contract; do not replace them with calendar-accurate math.
pub fn budget_amount_for(budget: &Budget, granularity: Granularity) -> Decimal {
    match (budget.period, granularity) {
        (BudgetPeriod::Daily, Granularity::Daily) => budget.amount,
        (BudgetPeriod::Daily, Granularity::Weekly) => budget.amount * Decimal::from(7),
        (BudgetPeriod::Weekly, Granularity::Daily) => budget.amount / Decimal::from(7),
        (BudgetPeriod::Weekly, Granularity::Weekly) => budget.amount,
        (BudgetPeriod::Monthly, Granularity::Daily) => budget.amount / Decimal::from(30),
        (BudgetPeriod::Monthly, Granularity::Weekly) => budget.amount / Decimal::from(4),
        (BudgetPeriod::Yearly, Granularity::Daily) => budget.amount / Decimal::from(365),
        (BudgetPeriod::Yearly, Granularity::Weekly) => budget.amount / Decimal::from(52),
    }
}

/// Expense total for the budget's category since the start of today (daily)
/// or since the most recent Sunday (weekly). `today` comes from the caller;
/// derivations never read the clock themselves.
pub fn period_spent(
    budget: &Budget,
    transactions: &[Transaction],
    granularity: Granularity,
    today: NaiveDate,
) -> Decimal {
    let start = match granularity {
        Granularity::Daily => today,
        Granularity::Weekly => {
            let back = today.weekday().num_days_from_sunday() as u64;
            today.checked_sub_days(Days::new(back)).unwrap_or(today)
        }
    };
    transactions
        .iter()
        .filter(|t| {
            t.r#type == TransactionType::Expense
                && t.category == budget.category
                && t.date >= start
        })
        .map(|t| t.amount)
        .sum()
}

/// Cumulative deposits, cumulative targets, and overall progress percentage
/// across all goals. Zero targets read as 0% progress.
pub fn goal_progress(goals: &[SavingsGoal]) -> (Decimal, Decimal, Decimal) {
    let current: Decimal = goals.iter().map(|g| g.current_amount).sum();
    let target: Decimal = goals.iter().map(|g| g.target_amount).sum();
    let percent = if target.is_zero() {
        Decimal::ZERO
    } else {
        current / target * Decimal::from(100)
    };
    (current, target, percent)
}
