//! Advisor engine - runs the heuristic battery in order

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::analytics::{summarize, summary::data_elapsed_days, FinancialSummary};
use crate::models::{SavingsGoal, Transaction};

use super::types::{format_money, plural, AdvisorConfig, AdvisorOutput, HeuristicKind};
use super::{
    BalanceTrendHeuristic, GoalRiskHeuristic, SavingsRateHeuristic, TopCategoryHeuristic,
};

/// Headline shown before any transaction has been logged
pub const NO_DATA_HEADLINE: &str =
    "No activity yet. Your financial snapshot starts with the first transaction.";

/// The only statement produced when there are no transactions
pub const NO_DATA_STATEMENT: &str =
    "Log your first income or expense to unlock personalised guidance.";

/// Inputs shared by every heuristic during one evaluation
pub struct AdvisorContext<'a> {
    /// Full, unfiltered transaction history
    pub transactions: &'a [Transaction],
    pub goals: &'a [SavingsGoal],
    /// Reference date for goal deadlines
    pub today: NaiveDate,
    /// Summary over `transactions`
    pub summary: FinancialSummary,
    pub config: &'a AdvisorConfig,
}

/// A single rule in the advisor battery
pub trait Heuristic: Send + Sync {
    /// Unique identifier for this heuristic
    fn id(&self) -> HeuristicKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Zero or more sentences; most heuristics emit at most one
    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Vec<String>;
}

/// Deterministic rule evaluator producing headline and statements
pub struct Advisor {
    heuristics: Vec<Box<dyn Heuristic>>,
    config: AdvisorConfig,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

impl Advisor {
    /// Advisor with the built-in heuristics and default thresholds
    pub fn new() -> Self {
        Self::with_config(AdvisorConfig::default())
    }

    /// Advisor with the built-in heuristics and custom thresholds
    pub fn with_config(config: AdvisorConfig) -> Self {
        let mut advisor = Self {
            heuristics: vec![],
            config,
        };

        // Registration order is statement order
        advisor.register(Box::new(TopCategoryHeuristic));
        advisor.register(Box::new(GoalRiskHeuristic));
        advisor.register(Box::new(BalanceTrendHeuristic));
        advisor.register(Box::new(SavingsRateHeuristic));

        advisor
    }

    /// Advisor with no heuristics registered
    pub fn empty(config: AdvisorConfig) -> Self {
        Self {
            heuristics: vec![],
            config,
        }
    }

    /// Append a heuristic to the end of the battery
    pub fn register(&mut self, heuristic: Box<dyn Heuristic>) {
        self.heuristics.push(heuristic);
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Registered heuristics, in evaluation order
    pub fn heuristic_kinds(&self) -> Vec<HeuristicKind> {
        self.heuristics.iter().map(|h| h.id()).collect()
    }

    /// Evaluate every heuristic over the full history and goal list
    pub fn advise(
        &self,
        transactions: &[Transaction],
        goals: &[SavingsGoal],
        today: NaiveDate,
    ) -> AdvisorOutput {
        let summary = summarize(transactions);

        if transactions.is_empty() {
            tracing::debug!("No transactions, skipping heuristics");
            return AdvisorOutput {
                headline: NO_DATA_HEADLINE.to_string(),
                summary,
                statements: vec![NO_DATA_STATEMENT.to_string()],
            };
        }

        let ctx = AdvisorContext {
            transactions,
            goals,
            today,
            summary,
            config: &self.config,
        };

        let mut statements = vec![];
        for heuristic in &self.heuristics {
            let produced = heuristic.evaluate(&ctx);
            tracing::debug!(
                heuristic = heuristic.id().as_str(),
                count = produced.len(),
                "Heuristic evaluated"
            );
            statements.extend(produced);
        }

        AdvisorOutput {
            headline: headline(&summary, data_elapsed_days(transactions)),
            summary,
            statements,
        }
    }
}

/// Headline reflecting the sign and size of the overall balance
pub fn headline(summary: &FinancialSummary, days: u32) -> String {
    let span = plural(i64::from(days), "recorded day");
    if summary.balance > Decimal::ZERO {
        format!(
            "Net positive: you kept {} of {} earned across {}.",
            format_money(summary.balance),
            format_money(summary.income),
            span
        )
    } else if summary.balance < Decimal::ZERO {
        format!(
            "Net negative: spending exceeded income by {} across {}.",
            format_money(summary.balance.abs()),
            span
        )
    } else {
        format!(
            "Breaking even: income and spending both came to {} across {}.",
            format_money(summary.income),
            span
        )
    }
}

/// Run the default advisor
pub fn advise(
    transactions: &[Transaction],
    goals: &[SavingsGoal],
    today: NaiveDate,
) -> AdvisorOutput {
    Advisor::new().advise(transactions, goals, today)
}
