//! Ledger - the authoritative transaction and goal lists
//!
//! The ledger is the only owner of mutable state. It changes through a small
//! set of commands and hands out read-only slices; every derived view
//! (summary, categories, goal insights, advice) is recomputed from scratch by
//! the pure analytics layer.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisor::{Advisor, AdvisorOutput};
use crate::analytics::{
    goal_insights, group_by_category, summarize, summarize_over, CategorySummary,
    FinancialSummary, GoalInsights, PeriodWindow,
};
use crate::config::AuraConfig;
use crate::error::{Error, Result};
use crate::models::{
    Category, NewGoal, NewTransaction, Period, Priority, SavingsGoal, Transaction,
    TransactionKind, TransactionSource,
};
use crate::validate::{ensure_positive, DEFAULT_GOAL_NAME, MAX_AMOUNT};

/// Everything the dashboard renders for one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub period: Period,
    pub window: PeriodWindow,
    /// Nothing fell inside the window, so the full history was used
    pub window_fallback: bool,
    pub summary: FinancialSummary,
    pub categories: CategorySummary,
    pub goals: GoalInsights,
    pub advisor: AdvisorOutput,
}

/// In-memory transactions and goals, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    goals: Vec<SavingsGoal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from existing lists, checking the same rules the commands
    /// enforce
    pub fn from_parts(transactions: Vec<Transaction>, goals: Vec<SavingsGoal>) -> Result<Self> {
        let mut ledger = Self {
            transactions,
            goals,
        };
        ledger.check()?;
        Ok(ledger)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        &self.goals
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn goal(&self, id: &str) -> Option<&SavingsGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Record a transaction. Manual entries and simulated receipts both come
    /// through here.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<&Transaction> {
        let amount = ensure_positive(new.amount)?;
        let tx = Transaction {
            id: Uuid::new_v4().to_string(),
            kind: new.kind,
            amount,
            category: new.category,
            date: new.date,
            note: new.note.filter(|n| !n.trim().is_empty()),
            source: new.source,
        };

        tracing::debug!(
            id = %tx.id,
            kind = tx.kind.as_str(),
            category = tx.category.as_str(),
            source = tx.source.as_str(),
            "Adding transaction"
        );

        self.transactions.insert(0, tx);
        Ok(&self.transactions[0])
    }

    /// Remove a transaction by id
    pub fn remove_transaction(&mut self, id: &str) -> Result<Transaction> {
        let index = self
            .transactions
            .iter()
            .position(|tx| tx.id == id)
            .ok_or_else(|| Error::NotFound(format!("transaction {}", id)))?;

        tracing::debug!(id, "Removing transaction");
        Ok(self.transactions.remove(index))
    }

    /// Create a goal with nothing saved yet
    pub fn create_goal(&mut self, new: NewGoal) -> Result<&SavingsGoal> {
        let target_amount = ensure_positive(new.target_amount)?;
        let name = match new.name.trim() {
            "" => DEFAULT_GOAL_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };

        let goal = SavingsGoal {
            id: Uuid::new_v4().to_string(),
            name,
            target_amount,
            current_amount: Decimal::ZERO,
            target_date: new.target_date,
            priority: new.priority,
        };

        tracing::debug!(id = %goal.id, name = %goal.name, "Creating goal");

        self.goals.insert(0, goal);
        Ok(&self.goals[0])
    }

    /// Move a goal's saved amount by a signed delta, clamped to
    /// `[0, target_amount]`
    pub fn adjust_goal_progress(&mut self, id: &str, delta: Decimal) -> Result<&SavingsGoal> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| Error::NotFound(format!("goal {}", id)))?;

        goal.adjust_progress(delta);
        tracing::debug!(id, %delta, current = %goal.current_amount, "Adjusted goal progress");
        Ok(goal)
    }

    /// Dashboard with default configuration
    pub fn dashboard(&self, period: Period, today: NaiveDate) -> Dashboard {
        self.dashboard_with(&AuraConfig::default(), period, today)
    }

    /// Derive every dashboard view for `period` as of `today`
    pub fn dashboard_with(
        &self,
        config: &AuraConfig,
        period: Period,
        today: NaiveDate,
    ) -> Dashboard {
        let window = PeriodWindow::with_policy(period, today, config.dashboard.week_policy);
        let windowed = window.filter(&self.transactions);

        let (summary, categories, window_fallback) = if windowed.is_empty() {
            if !self.transactions.is_empty() {
                tracing::debug!(
                    period = period.as_str(),
                    "Window is empty, using full history"
                );
            }
            (
                summarize(&self.transactions),
                group_by_category(&self.transactions),
                true,
            )
        } else {
            (
                summarize_over(&windowed, window.elapsed_days()),
                group_by_category(&windowed),
                false,
            )
        };

        let advisor =
            Advisor::with_config(config.advisor).advise(&self.transactions, &self.goals, today);

        Dashboard {
            period,
            window,
            window_fallback,
            summary,
            categories,
            goals: goal_insights(&self.goals),
            advisor,
        }
    }

    /// Parse a JSON snapshot (`{"transactions": [...], "goals": [...]}`)
    pub fn from_snapshot(json: &str) -> Result<Self> {
        let mut ledger: Ledger = serde_json::from_str(json)?;
        ledger.check()?;
        Ok(ledger)
    }

    /// Read a JSON snapshot from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_snapshot(&content)
    }

    /// Serialize as a pretty JSON snapshot
    pub fn to_snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The preset data the dashboard starts with: one salary, four expenses
    /// early in the current month, and two goals.
    pub fn sample(today: NaiveDate) -> Self {
        let day = |d: u32| today.with_day(d).unwrap_or(today);
        let months_out = |m: u32| today.checked_add_months(Months::new(m)).unwrap_or(today);

        let tx = |id: &str, kind, amount: Decimal, category, date, note: &str| Transaction {
            id: id.to_string(),
            kind,
            amount,
            category,
            date,
            note: Some(note.to_string()),
            source: TransactionSource::Manual,
        };

        let transactions = vec![
            tx(
                "t-1",
                TransactionKind::Income,
                Decimal::from(3200),
                Category::Income,
                day(1),
                "Salary",
            ),
            tx(
                "t-2",
                TransactionKind::Expense,
                Decimal::from(680),
                Category::Housing,
                day(3),
                "Rent",
            ),
            tx(
                "t-3",
                TransactionKind::Expense,
                Decimal::from(120),
                Category::Food,
                day(6),
                "Groceries",
            ),
            tx(
                "t-4",
                TransactionKind::Expense,
                Decimal::from(90),
                Category::Transport,
                day(5),
                "Transit pass",
            ),
            tx(
                "t-5",
                TransactionKind::Expense,
                Decimal::from(210),
                Category::Shopping,
                day(7),
                "Household essentials",
            ),
        ];

        let goals = vec![
            SavingsGoal {
                id: "g-1".to_string(),
                name: "Emergency Fund".to_string(),
                target_amount: Decimal::from(5000),
                current_amount: Decimal::from(2100),
                target_date: months_out(4),
                priority: Priority::High,
            },
            SavingsGoal {
                id: "g-2".to_string(),
                name: "New Laptop".to_string(),
                target_amount: Decimal::from(1800),
                current_amount: Decimal::from(550),
                target_date: months_out(6),
                priority: Priority::Medium,
            },
        ];

        Self {
            transactions,
            goals,
        }
    }

    /// Reject data the commands could never have produced
    fn check(&mut self) -> Result<()> {
        {
            let mut ids = HashSet::new();
            for tx in &self.transactions {
                if tx.amount <= Decimal::ZERO {
                    return Err(Error::InvalidData(format!(
                        "transaction {} has non-positive amount {}",
                        tx.id, tx.amount
                    )));
                }
                if tx.amount > MAX_AMOUNT {
                    return Err(Error::InvalidData(format!(
                        "transaction {} amount {} exceeds {}",
                        tx.id, tx.amount, MAX_AMOUNT
                    )));
                }
                if !ids.insert(tx.id.as_str()) {
                    return Err(Error::InvalidData(format!(
                        "duplicate transaction id {}",
                        tx.id
                    )));
                }
            }
        }

        {
            let mut ids = HashSet::new();
            for goal in &self.goals {
                if goal.target_amount < Decimal::ZERO {
                    return Err(Error::InvalidData(format!(
                        "goal {} has negative target {}",
                        goal.id, goal.target_amount
                    )));
                }
                if goal.target_amount > MAX_AMOUNT {
                    return Err(Error::InvalidData(format!(
                        "goal {} target {} exceeds {}",
                        goal.id, goal.target_amount, MAX_AMOUNT
                    )));
                }
                if !ids.insert(goal.id.as_str()) {
                    return Err(Error::InvalidData(format!("duplicate goal id {}", goal.id)));
                }
            }
        }

        // Saved amounts outside [0, target] are pulled back into range
        for goal in &mut self.goals {
            goal.adjust_progress(Decimal::ZERO);
        }

        Ok(())
    }
}
