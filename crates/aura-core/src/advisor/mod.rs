//! Advisor - rule-based financial statements
//!
//! The advisor turns the full transaction history and goal list into a
//! headline plus an ordered list of plain-language statements. It is a fixed
//! battery of deterministic heuristics, not a model: the same inputs always
//! produce byte-identical output.
//!
//! ## Heuristics (in evaluation order)
//!
//! - **Top Category** - largest spending category and its share of expenses
//! - **Goal Risk** - goals due within the risk window that are under-funded
//! - **Balance Trend** - encouragement or a nudge to reduce expenses
//! - **Savings Rate** - share of income kept against a benchmark
//!
//! With no transactions at all, only [`NO_DATA_STATEMENT`] is produced.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aura_core::advisor::{Advisor, AdvisorConfig};
//!
//! let advisor = Advisor::with_config(AdvisorConfig::default());
//! let output = advisor.advise(ledger.transactions(), ledger.goals(), today);
//! ```

pub mod balance_trend;
pub mod engine;
pub mod goal_risk;
pub mod savings_rate;
pub mod top_category;
pub mod types;

pub use balance_trend::BalanceTrendHeuristic;
pub use engine::{
    advise, headline, Advisor, AdvisorContext, Heuristic, NO_DATA_HEADLINE, NO_DATA_STATEMENT,
};
pub use goal_risk::GoalRiskHeuristic;
pub use savings_rate::SavingsRateHeuristic;
pub use top_category::TopCategoryHeuristic;
pub use types::{format_money, format_percent, AdvisorConfig, AdvisorOutput, HeuristicKind};
