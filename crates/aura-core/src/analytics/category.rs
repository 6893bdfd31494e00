//! Per-category totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Category, Transaction};

/// Total and count for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
    pub count: usize,
}

/// Category totals in the order each category first appeared in the input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySummary {
    entries: Vec<CategoryTotal>,
}

impl CategorySummary {
    pub fn get(&self, category: Category) -> Option<&CategoryTotal> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every category total
    pub fn grand_total(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |sum, e| sum.saturating_add(e.total))
    }

    /// Sum of every category count
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Category with the largest total; ties keep the first-seen category
    pub fn largest(&self) -> Option<&CategoryTotal> {
        self.entries
            .iter()
            .fold(None, |best: Option<&CategoryTotal>, entry| match best {
                Some(b) if b.total >= entry.total => Some(b),
                _ => Some(entry),
            })
    }

    fn add(&mut self, category: Category, amount: Decimal) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => {
                entry.total = entry.total.saturating_add(amount);
                entry.count += 1;
            }
            None => self.entries.push(CategoryTotal {
                category,
                total: amount,
                count: 1,
            }),
        }
    }
}

impl<'a> IntoIterator for &'a CategorySummary {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Group transactions by category, summing amounts regardless of kind
pub fn group_by_category(transactions: &[Transaction]) -> CategorySummary {
    transactions
        .iter()
        .fold(CategorySummary::default(), |mut summary, tx| {
            summary.add(tx.category, tx.amount);
            summary
        })
}
