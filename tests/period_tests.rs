// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use pocketbook::models::{
    Budget, BudgetPeriod, PaymentMethod, Transaction, TransactionType,
};
use pocketbook::summary::{budget_amount_for, period_spent, Granularity};

fn budget(period: BudgetPeriod, amount: i64) -> Budget {
    Budget {
        id: "b1".to_string(),
        category: "5".to_string(),
        amount: Decimal::from(amount),
        period,
        spent: Decimal::ZERO,
    }
}

fn expense(amount: i64, day: &str) -> Transaction {
    Transaction {
        id: day.to_string(),
        amount: Decimal::from(amount),
        category: "5".to_string(),
        description: "food".to_string(),
        date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
        r#type: TransactionType::Expense,
        payment_method: PaymentMethod::Cash,
    }
}

#[test]
fn daily_equivalents_use_fixed_divisors() {
    assert_eq!(
        budget_amount_for(&budget(BudgetPeriod::Daily, 30), Granularity::Daily),
        Decimal::from(30)
    );
    assert_eq!(
        budget_amount_for(&budget(BudgetPeriod::Weekly, 70), Granularity::Daily),
        Decimal::from(10)
    );
    assert_eq!(
        budget_amount_for(&budget(BudgetPeriod::Monthly, 300), Granularity::Daily),
        Decimal::from(10)
    );
    assert_eq!(
        budget_amount_for(&budget(BudgetPeriod::Yearly, 730), Granularity::Daily),
        Decimal::from(2)
    );
}

#[test]
fn weekly_equivalents_use_fixed_divisors() {
    assert_eq!(
        budget_amount_for(&budget(BudgetPeriod::Daily, 10), Granularity::Weekly),
        Decimal::from(70)
    );
    assert_eq!(
        budget_amount_for(&budget(BudgetPeriod::Weekly, 70), Granularity::Weekly),
        Decimal::from(70)
    );
    assert_eq!(
        budget_amount_for(&budget(BudgetPeriod::Monthly, 400), Granularity::Weekly),
        Decimal::from(100)
    );
    assert_eq!(
        budget_amount_for(&budget(BudgetPeriod::Yearly, 520), Granularity::Weekly),
        Decimal::from(10)
    );
}

#[test]
fn daily_spend_counts_only_today() {
    let b = budget(BudgetPeriod::Monthly, 300);
    // 2025-08-27 is a Wednesday
    let today = NaiveDate::from_ymd_opt(2025, 8, 27).unwrap();
    let txs = vec![expense(40, "2025-08-27"), expense(25, "2025-08-26")];
    assert_eq!(
        period_spent(&b, &txs, Granularity::Daily, today),
        Decimal::from(40)
    );
}

#[test]
fn weekly_spend_starts_on_sunday() {
    let b = budget(BudgetPeriod::Monthly, 300);
    let today = NaiveDate::from_ymd_opt(2025, 8, 27).unwrap();
    // Week started Sunday 2025-08-24
    let txs = vec![
        expense(40, "2025-08-25"),
        expense(30, "2025-08-24"),
        expense(99, "2025-08-23"),
    ];
    assert_eq!(
        period_spent(&b, &txs, Granularity::Weekly, today),
        Decimal::from(70)
    );
}

#[test]
fn spend_ignores_other_categories_and_income() {
    let b = budget(BudgetPeriod::Monthly, 300);
    let today = NaiveDate::from_ymd_opt(2025, 8, 27).unwrap();
    let mut other_cat = expense(50, "2025-08-27");
    other_cat.category = "6".to_string();
    let mut income = expense(70, "2025-08-27");
    income.r#type = TransactionType::Income;
    let txs = vec![other_cat, income, expense(5, "2025-08-27")];
    assert_eq!(
        period_spent(&b, &txs, Granularity::Daily, today),
        Decimal::from(5)
    );
}
