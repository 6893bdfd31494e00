//! Top Category Heuristic
//!
//! Names the category that took the largest share of spending over the
//! whole history. Only expense transactions count, and the Income category
//! is never called out even if something was miscategorised into it.

use rust_decimal::Decimal;

use crate::analytics::group_by_category;
use crate::models::{Category, Transaction};

use super::engine::{AdvisorContext, Heuristic};
use super::types::{format_money, format_percent, HeuristicKind};

pub struct TopCategoryHeuristic;

impl Heuristic for TopCategoryHeuristic {
    fn id(&self) -> HeuristicKind {
        HeuristicKind::TopCategory
    }

    fn name(&self) -> &'static str {
        "Top Category"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Vec<String> {
        let expenses = ctx.summary.expenses;
        if expenses <= Decimal::ZERO {
            return vec![];
        }

        let spending: Vec<Transaction> = ctx
            .transactions
            .iter()
            .filter(|tx| tx.is_expense() && tx.category != Category::Income)
            .cloned()
            .collect();

        let summary = group_by_category(&spending);
        let Some(top) = summary.largest() else {
            return vec![];
        };

        let share = top.total / expenses;
        if share < ctx.config.top_category_min_share {
            return vec![];
        }

        vec![format!(
            "{} is your largest spending category at {}, {}% of total expenses.",
            top.category,
            format_money(top.total),
            format_percent(share)
        )]
    }
}
