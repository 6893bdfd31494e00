//! Core types for the advisor

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::analytics::FinancialSummary;

/// Heuristics the advisor can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// Calls out the category with the largest spend
    TopCategory,
    /// Flags goals due soon that are under-funded
    GoalRisk,
    /// Encourages or corrects based on the net balance
    BalanceTrend,
    /// Compares the share of income kept against a benchmark
    SavingsRate,
}

impl HeuristicKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeuristicKind::TopCategory => "top_category",
            HeuristicKind::GoalRisk => "goal_risk",
            HeuristicKind::BalanceTrend => "balance_trend",
            HeuristicKind::SavingsRate => "savings_rate",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top_category" => Ok(HeuristicKind::TopCategory),
            "goal_risk" => Ok(HeuristicKind::GoalRisk),
            "balance_trend" => Ok(HeuristicKind::BalanceTrend),
            "savings_rate" => Ok(HeuristicKind::SavingsRate),
            _ => Err(format!("Unknown heuristic: {}", s)),
        }
    }
}

/// Thresholds used by the heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Goals due within this many days (inclusive) are checked for risk
    pub goal_risk_days: i64,
    /// Goals strictly below this completion ratio are at risk
    pub goal_risk_progress: Decimal,
    /// Benchmark share of income to keep
    pub savings_rate_target: Decimal,
    /// Minimum share of expenses before the top category is mentioned
    pub top_category_min_share: Decimal,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            goal_risk_days: 30,
            goal_risk_progress: Decimal::new(5, 1),
            savings_rate_target: Decimal::new(2, 1),
            top_category_min_share: Decimal::ZERO,
        }
    }
}

/// Everything the advisor produces for one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorOutput {
    pub headline: String,
    /// Totals over the full, unfiltered transaction history
    pub summary: FinancialSummary,
    /// Advisory sentences in heuristic order
    pub statements: Vec<String>,
}

/// `$1,234.50`-style money without the thousands separator: `$1234.50`
pub fn format_money(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Whole-number percentage of a ratio (0.425 -> "43")
pub fn format_percent(ratio: Decimal) -> String {
    ratio
        .saturating_mul(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// "1 day" / "3 days"
pub(crate) fn plural(count: i64, unit: &str) -> String {
    if count.abs() == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
