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
use pocketbook::monthly::MonthView;
use pocketbook::utils::{next_month_key, prev_month_key};

fn tx(id: &str, amount: i64, day: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::from(amount),
        category: "5".to_string(),
        description: "food".to_string(),
        date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
        r#type: TransactionType::Expense,
        payment_method: PaymentMethod::Cash,
    }
}

fn budget(id: &str, amount: i64, spent: i64) -> Budget {
    Budget {
        id: id.to_string(),
        category: "5".to_string(),
        amount: Decimal::from(amount),
        period: BudgetPeriod::Monthly,
        spent: Decimal::from(spent),
    }
}

#[test]
fn seed_bucket_carries_live_data() {
    let txs = vec![tx("1", 100, "2025-08-01")];
    let budgets = vec![budget("b1", 2000, 100)];
    let view = MonthView::new("2025-08", &txs, &budgets);

    assert_eq!(view.current_month(), "2025-08");
    let data = view.current_data();
    assert_eq!(data.transactions.len(), 1);
    assert_eq!(data.summary.total_expense, Decimal::from(100));
}

#[test]
fn switching_to_unseen_month_synthesizes_an_empty_bucket() {
    let txs = vec![tx("1", 100, "2025-08-01")];
    let budgets = vec![budget("b1", 2000, 100)];
    let mut view = MonthView::new("2025-08", &txs, &budgets);

    view.switch_to_month("2025-06", &budgets);
    let data = view.current_data();
    assert_eq!(data.month, "2025-06");
    assert!(data.transactions.is_empty());
    // Budgets are copied with spent reset, never inherited history
    assert_eq!(data.budgets.len(), 1);
    assert_eq!(data.budgets[0].spent, Decimal::ZERO);
    assert_eq!(data.summary.total_expense, Decimal::ZERO);
    assert_eq!(data.summary.total_saved, Decimal::ZERO);
}

#[test]
fn existing_buckets_survive_navigation() {
    let txs = vec![tx("1", 100, "2025-08-01")];
    let budgets = vec![budget("b1", 2000, 100)];
    let mut view = MonthView::new("2025-08", &txs, &budgets);

    view.switch_to_month("2025-06", &budgets);
    view.switch_to_month("2025-08", &budgets);
    assert_eq!(view.current_data().transactions.len(), 1);
}

#[test]
fn refresh_rebuilds_only_the_current_month() {
    let budgets = vec![budget("b1", 2000, 0)];
    let mut view = MonthView::new("2025-08", &[], &budgets);

    view.switch_to_month("2025-07", &budgets);
    view.switch_to_month("2025-08", &budgets);

    let txs = vec![tx("1", 150, "2025-08-05")];
    view.refresh(&txs, &budgets);
    assert_eq!(view.current_data().summary.total_expense, Decimal::from(150));
    assert_eq!(view.current_data().budgets[0].spent, Decimal::from(150));

    // The July bucket stays empty
    view.switch_to_month("2025-07", &budgets);
    assert!(view.current_data().transactions.is_empty());
}

#[test]
fn month_navigation_rolls_over_year_boundaries() {
    let mut view = MonthView::new("2025-12", &[], &[]);
    view.next_month(&[]).unwrap();
    assert_eq!(view.current_month(), "2026-01");

    let mut view = MonthView::new("2025-01", &[], &[]);
    view.prev_month(&[]).unwrap();
    assert_eq!(view.current_month(), "2024-12");
}

#[test]
fn month_key_arithmetic() {
    assert_eq!(next_month_key("2025-08").unwrap(), "2025-09");
    assert_eq!(next_month_key("2025-12").unwrap(), "2026-01");
    assert_eq!(prev_month_key("2025-01").unwrap(), "2024-12");
    assert_eq!(prev_month_key("2025-10").unwrap(), "2025-09");
    assert!(next_month_key("2025-13").is_err());
    assert!(prev_month_key("garbage").is_err());
}
