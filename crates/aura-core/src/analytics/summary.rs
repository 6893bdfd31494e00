//! Income/expense summary and burn rate

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind};

/// Divisor used for burn rate when no longer span can be derived
pub const MIN_ELAPSED_DAYS: u32 = 1;

/// Totals for a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    /// `income - expenses`
    pub balance: Decimal,
    /// Average expense per elapsed day
    pub burn_rate: Decimal,
}

/// Summarize using the span of the data itself: the number of distinct
/// calendar days present, or [`MIN_ELAPSED_DAYS`] with fewer than two
/// transactions.
pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
    summarize_over(transactions, data_elapsed_days(transactions))
}

/// Summarize with an explicit number of elapsed days (e.g. from a window).
///
/// Totals saturate at the `Decimal` limits instead of overflowing.
pub fn summarize_over(transactions: &[Transaction], elapsed_days: u32) -> FinancialSummary {
    let mut income = Decimal::ZERO;
    let mut expenses = Decimal::ZERO;

    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => income = income.saturating_add(tx.amount),
            TransactionKind::Expense => expenses = expenses.saturating_add(tx.amount),
        }
    }

    FinancialSummary {
        income,
        expenses,
        balance: income.saturating_sub(expenses),
        burn_rate: burn_rate(expenses, elapsed_days),
    }
}

/// `expenses / max(1, elapsed_days)`
pub fn burn_rate(expenses: Decimal, elapsed_days: u32) -> Decimal {
    let divisor = elapsed_days.max(MIN_ELAPSED_DAYS);
    expenses / Decimal::from(divisor)
}

/// Distinct calendar days in the data (falls back with fewer than 2 rows)
pub fn data_elapsed_days(transactions: &[Transaction]) -> u32 {
    if transactions.len() < 2 {
        return MIN_ELAPSED_DAYS;
    }
    let days: BTreeSet<_> = transactions.iter().map(|tx| tx.date).collect();
    u32::try_from(days.len())
        .unwrap_or(u32::MAX)
        .max(MIN_ELAPSED_DAYS)
}
