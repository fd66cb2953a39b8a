// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use pocketbook::models::{PaymentMethod, Transaction, TransactionType};
use pocketbook::summary::cash_payment_summary;

fn cash_tx(id: &str, amount: i64, category: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: Decimal::from(amount),
        category: category.to_string(),
        description: format!("cash {}", id),
        date: NaiveDate::from_ymd_opt(2025, 8, 10).unwrap(),
        r#type: TransactionType::Expense,
        payment_method: PaymentMethod::Cash,
    }
}

#[test]
fn empty_input_yields_zeroes_not_division_errors() {
    let s = cash_payment_summary(&[]);
    assert_eq!(s.total_cash_payments, Decimal::ZERO);
    assert_eq!(s.cash_transactions_count, 0);
    assert_eq!(s.average_cash_payment, Decimal::ZERO);
    assert!(s.top_cash_categories.is_empty());
}

#[test]
fn totals_average_and_top_categories() {
    // 100 Food, 200 Transport, 300 Food
    let txs = vec![
        cash_tx("1", 100, "5"),
        cash_tx("2", 200, "6"),
        cash_tx("3", 300, "5"),
    ];
    let s = cash_payment_summary(&txs);
    assert_eq!(s.total_cash_payments, Decimal::from(600));
    assert_eq!(s.cash_transactions_count, 3);
    assert_eq!(s.average_cash_payment, Decimal::from(200));
    assert_eq!(s.top_cash_categories.len(), 2);
    assert_eq!(s.top_cash_categories[0].category, "Food");
    assert_eq!(s.top_cash_categories[0].amount, Decimal::from(400));
    assert_eq!(s.top_cash_categories[1].category, "Transport");
    assert_eq!(s.top_cash_categories[1].amount, Decimal::from(200));
}

#[test]
fn non_cash_methods_are_ignored() {
    let mut credit = cash_tx("1", 500, "5");
    credit.payment_method = PaymentMethod::Credit;
    let txs = vec![credit, cash_tx("2", 100, "6")];
    let s = cash_payment_summary(&txs);
    assert_eq!(s.total_cash_payments, Decimal::from(100));
    assert_eq!(s.cash_transactions_count, 1);
}

#[test]
fn top_categories_truncate_to_three() {
    let txs = vec![
        cash_tx("1", 10, "5"),
        cash_tx("2", 40, "6"),
        cash_tx("3", 30, "7"),
        cash_tx("4", 20, "8"),
    ];
    let s = cash_payment_summary(&txs);
    assert_eq!(s.top_cash_categories.len(), 3);
    assert_eq!(s.top_cash_categories[0].category, "Transport");
    assert_eq!(s.top_cash_categories[1].category, "Entertainment");
    assert_eq!(s.top_cash_categories[2].category, "Shopping");
}
