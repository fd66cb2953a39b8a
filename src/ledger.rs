// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The aggregation store: canonical owner of the active user's collections
//! and the single mutation surface. Every mutation recomputes the derived
//! state and writes the whole document back to the user's slot in one step,
//! so readers never observe stale projections.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::SAVING_CATEGORY;
use crate::models::{
    Budget, BudgetPeriod, FinancialSettings, PaymentMethod, SavingsGoal, Summary, Transaction,
    TransactionType, User, UserData,
};
use crate::store::{read_slot, write_slot, KvStore};
use crate::summary::{budget_status, calculate_summary};
use crate::users::user_data_key;

/// Cosmetic tags handed to new savings goals, round-robin.
const GOAL_COLORS: [&str; 4] = ["blue", "green", "purple", "orange"];

pub struct NewTransaction {
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub r#type: TransactionType,
    pub payment_method: PaymentMethod,
}

pub struct NewBudget {
    pub category: String,
    pub amount: Decimal,
    pub period: BudgetPeriod,
}

#[derive(Default)]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub amount: Option<Decimal>,
    pub period: Option<BudgetPeriod>,
}

pub struct NewSavingsGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub category: String,
}

#[derive(Default)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub deadline: Option<NaiveDate>,
    pub category: Option<String>,
}

#[derive(Default)]
pub struct SettingsPatch {
    pub monthly_income_goal: Option<Decimal>,
    pub monthly_expense_limit: Option<Decimal>,
    pub monthly_savings_goal: Option<Decimal>,
    pub currency: Option<String>,
    pub display_name: Option<String>,
}

pub struct Ledger<'a> {
    store: &'a dyn KvStore,
    slot: String,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    settings: FinancialSettings,
    savings_goals: Vec<SavingsGoal>,
    summary: Summary,
}

impl<'a> Ledger<'a> {
    /// Load the user's document from its slot; an absent slot seeds empty
    /// collections and default settings. Derived state (`spent`, summary)
    /// is recomputed here rather than trusted from storage.
    pub fn load(store: &'a dyn KvStore, user: &User) -> Result<Self> {
        let slot = user_data_key(&user.id);
        let data: UserData = read_slot(store, &slot)?.unwrap_or_default();

        let settings = data.settings.unwrap_or_else(|| FinancialSettings {
            display_name: user.display_name.clone(),
            ..FinancialSettings::default()
        });

        let mut ledger = Ledger {
            store,
            slot,
            transactions: data.transactions,
            budgets: data.budgets,
            settings,
            savings_goals: data.savings_goals,
            summary: Summary::default(),
        };
        ledger.budgets = budget_status(&ledger.budgets, &ledger.transactions);
        ledger.summary = calculate_summary(&ledger.transactions);
        Ok(ledger)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn settings(&self) -> &FinancialSettings {
        &self.settings
    }

    pub fn savings_goals(&self) -> &[SavingsGoal] {
        &self.savings_goals
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Recompute projections and persist the full document. Called at the
    /// tail of every mutation so derived state and storage move together.
    fn commit(&mut self) -> Result<()> {
        self.budgets = budget_status(&self.budgets, &self.transactions);
        self.summary = calculate_summary(&self.transactions);
        let data = UserData {
            transactions: self.transactions.clone(),
            budgets: self.budgets.clone(),
            settings: Some(self.settings.clone()),
            savings_goals: self.savings_goals.clone(),
        };
        write_slot(self.store, &self.slot, &data)
    }

    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<Transaction> {
        let tx = Transaction {
            id: new_id(),
            amount: new.amount,
            category: new.category,
            description: new.description,
            date: new.date,
            r#type: new.r#type,
            payment_method: new.payment_method,
        };
        self.transactions.push(tx.clone());
        self.commit()?;
        Ok(tx)
    }

    /// Silent no-op when the id is unknown.
    pub fn delete_transaction(&mut self, id: &str) -> Result<()> {
        self.transactions.retain(|t| t.id != id);
        self.commit()
    }

    pub fn add_budget(&mut self, new: NewBudget) -> Result<Budget> {
        let budget = Budget {
            id: new_id(),
            category: new.category,
            amount: new.amount,
            period: new.period,
            spent: Decimal::ZERO,
        };
        self.budgets.push(budget.clone());
        self.commit()?;
        Ok(budget)
    }

    /// Silent no-op when the id is unknown.
    pub fn update_budget(&mut self, id: &str, patch: BudgetPatch) -> Result<()> {
        if let Some(budget) = self.budgets.iter_mut().find(|b| b.id == id) {
            if let Some(category) = patch.category {
                budget.category = category;
            }
            if let Some(amount) = patch.amount {
                budget.amount = amount;
            }
            if let Some(period) = patch.period {
                budget.period = period;
            }
        }
        self.commit()
    }

    /// Silent no-op when the id is unknown.
    pub fn delete_budget(&mut self, id: &str) -> Result<()> {
        self.budgets.retain(|b| b.id != id);
        self.commit()
    }

    pub fn add_savings_goal(&mut self, new: NewSavingsGoal) -> Result<SavingsGoal> {
        let color = GOAL_COLORS[self.savings_goals.len() % GOAL_COLORS.len()];
        let goal = SavingsGoal {
            id: new_id(),
            name: new.name,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            deadline: new.deadline,
            category: new.category,
            color: color.to_string(),
        };
        self.savings_goals.push(goal.clone());
        self.commit()?;
        Ok(goal)
    }

    /// Silent no-op when the id is unknown.
    pub fn update_savings_goal(&mut self, id: &str, patch: GoalPatch) -> Result<()> {
        if let Some(goal) = self.savings_goals.iter_mut().find(|g| g.id == id) {
            if let Some(name) = patch.name {
                goal.name = name;
            }
            if let Some(target) = patch.target_amount {
                goal.target_amount = target;
            }
            if let Some(current) = patch.current_amount {
                goal.current_amount = current;
            }
            if let Some(deadline) = patch.deadline {
                goal.deadline = deadline;
            }
            if let Some(category) = patch.category {
                goal.category = category;
            }
        }
        self.commit()
    }

    /// Silent no-op when the id is unknown.
    pub fn delete_savings_goal(&mut self, id: &str) -> Result<()> {
        self.savings_goals.retain(|g| g.id != id);
        self.commit()
    }

    /// Record a transfer into savings: one synthetic income transaction in
    /// the saving category, paid by bank transfer. When `goal_id` resolves,
    /// that goal's `current_amount` grows by the same amount (it may pass
    /// the goal's target; deposits are not clamped here).
    ///
    /// Contract: `amount` must be positive. The command layer guards this
    /// before calling in.
    pub fn transfer_to_savings(
        &mut self,
        amount: Decimal,
        goal_id: Option<&str>,
        today: NaiveDate,
    ) -> Result<Transaction> {
        let description = goal_id
            .and_then(|id| self.savings_goals.iter().find(|g| g.id == id))
            .map(|g| format!("Transfer to savings: {}", g.name))
            .unwrap_or_else(|| "Transfer to savings".to_string());

        if let Some(id) = goal_id {
            if let Some(goal) = self.savings_goals.iter_mut().find(|g| g.id == id) {
                goal.current_amount += amount;
            }
        }

        let tx = Transaction {
            id: new_id(),
            amount,
            category: SAVING_CATEGORY.to_string(),
            description,
            date: today,
            r#type: TransactionType::Income,
            payment_method: PaymentMethod::BankTransfer,
        };
        self.transactions.push(tx.clone());
        self.commit()?;
        Ok(tx)
    }

    /// Shallow-merge settings fields.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<()> {
        if let Some(v) = patch.monthly_income_goal {
            self.settings.monthly_income_goal = v;
        }
        if let Some(v) = patch.monthly_expense_limit {
            self.settings.monthly_expense_limit = v;
        }
        if let Some(v) = patch.monthly_savings_goal {
            self.settings.monthly_savings_goal = v;
        }
        if let Some(v) = patch.currency {
            self.settings.currency = v;
        }
        if let Some(v) = patch.display_name {
            self.settings.display_name = v;
        }
        self.commit()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}
