//! Pure analytics over transactions and goals
//!
//! Every function here borrows its input and returns a fresh snapshot value.
//! Nothing is cached between calls.
//!
//! - **period** - current-window selection (weekly/monthly)
//! - **summary** - income, expenses, balance and burn rate
//! - **category** - per-category totals in first-seen order
//! - **goals** - savings goal totals and average completion

pub mod category;
pub mod goals;
pub mod period;
pub mod summary;

pub use category::{group_by_category, CategorySummary, CategoryTotal};
pub use goals::{goal_insights, priority_label, progress_step, GoalInsights, GOAL_STEP_RATIO};
pub use period::{select_window, PeriodWindow};
pub use summary::{summarize, summarize_over, FinancialSummary};
