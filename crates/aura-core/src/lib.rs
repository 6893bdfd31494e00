//! Aura Core Library
//!
//! Analytics and advisory engine for the Aura personal finance dashboard:
//! - Weekly/monthly window selection over transactions
//! - Income, expense, balance and burn-rate summaries
//! - Per-category totals and savings goal statistics
//! - Rule-based advisor producing a headline and plain-language statements
//! - Ledger state container mutated only through commands
//! - Simulated receipt intake and CSV/JSON export
//!
//! The analytics and advisor layers are pure functions of borrowed input;
//! all mutable state lives in [`Ledger`].

pub mod advisor;
pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod receipt;
pub mod validate;

pub use advisor::{advise, Advisor, AdvisorConfig, AdvisorOutput, Heuristic, HeuristicKind};
pub use analytics::{
    goal_insights, group_by_category, priority_label, select_window, summarize, CategorySummary,
    CategoryTotal, FinancialSummary, GoalInsights, PeriodWindow,
};
pub use config::{AuraConfig, DashboardConfig};
pub use error::{Error, Result};
pub use export::{ExportDocument, ExportFormat};
pub use ledger::{Dashboard, Ledger};
pub use models::{
    Category, NewGoal, NewTransaction, Period, Priority, SavingsGoal, Transaction,
    TransactionKind, TransactionSource, WeekPolicy,
};
pub use receipt::{simulate_receipt, ReceiptExtraction};
