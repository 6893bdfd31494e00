//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Session loading and shared flag resolution
//! - `dashboard` - Dashboard, advisor and category views
//! - `export` - CSV/JSON export
//! - `goals` - Savings goal commands (list, add, adjust)
//! - `receipts` - Simulated receipt intake
//! - `transactions` - Transaction commands (list, add)

pub mod core;
pub mod dashboard;
pub mod export;
pub mod goals;
pub mod receipts;
pub mod transactions;

// Re-export command functions for main.rs
pub use core::*;
pub use dashboard::*;
pub use export::*;
pub use goals::*;
pub use receipts::*;
pub use transactions::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
