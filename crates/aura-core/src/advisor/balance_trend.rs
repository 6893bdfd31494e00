//! Balance Trend Heuristic

use rust_decimal::Decimal;

use super::engine::{AdvisorContext, Heuristic};
use super::types::{format_money, HeuristicKind};

pub struct BalanceTrendHeuristic;

impl Heuristic for BalanceTrendHeuristic {
    fn id(&self) -> HeuristicKind {
        HeuristicKind::BalanceTrend
    }

    fn name(&self) -> &'static str {
        "Balance Trend"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Vec<String> {
        let summary = &ctx.summary;
        let statement = if summary.balance > Decimal::ZERO {
            format!(
                "You're trending positive with {} left over. Consider moving part of it into your goals.",
                format_money(summary.balance)
            )
        } else {
            format!(
                "Spending of {} is at or above income. Reduce expenses, starting with discretionary categories, to get back in the green.",
                format_money(summary.expenses)
            )
        };
        vec![statement]
    }
}
