//! Savings Rate Heuristic
//!
//! Compares the share of income kept (balance / income) against the
//! configured benchmark. Silent when there is no income to compare against.

use rust_decimal::Decimal;

use super::engine::{AdvisorContext, Heuristic};
use super::types::{format_percent, HeuristicKind};

pub struct SavingsRateHeuristic;

impl SavingsRateHeuristic {
    /// `balance / income`, or `None` without income
    pub fn rate(ctx: &AdvisorContext<'_>) -> Option<Decimal> {
        let income = ctx.summary.income;
        if income <= Decimal::ZERO {
            return None;
        }
        // Only a deficit can outgrow the ratio range
        Some(ctx.summary.balance.checked_div(income).unwrap_or(Decimal::MIN))
    }
}

impl Heuristic for SavingsRateHeuristic {
    fn id(&self) -> HeuristicKind {
        HeuristicKind::SavingsRate
    }

    fn name(&self) -> &'static str {
        "Savings Rate"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Vec<String> {
        let Some(rate) = Self::rate(ctx) else {
            return vec![];
        };
        let target = ctx.config.savings_rate_target;

        let statement = if rate >= target {
            format!(
                "You're keeping {}% of your income, meeting the {}% savings benchmark.",
                format_percent(rate),
                format_percent(target)
            )
        } else if rate > Decimal::ZERO {
            format!(
                "You're keeping {}% of your income, below the {}% savings benchmark.",
                format_percent(rate),
                format_percent(target)
            )
        } else {
            format!(
                "None of your income is being saved yet; aim to keep {}% of it.",
                format_percent(target)
            )
        };
        vec![statement]
    }
}
