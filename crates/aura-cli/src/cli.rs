//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Aura - Personal finance dashboard and advisor
#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "Personal finance dashboard with rule-based advice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file (JSON) with transactions and goals
    ///
    /// When omitted, the built-in sample data is used. Snapshots are read
    /// only; changes made by commands are never written back.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Config file (defaults to ~/.config/aura/config.toml, then built-in)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference date as YYYY-MM-DD (defaults to the local date)
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show summary, categories, goals and advice for a period
    Dashboard {
        /// Period: weekly or monthly (defaults to config)
        #[arg(short, long)]
        period: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the advisor headline and statements
    Advise {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show per-category totals for a period
    Categories {
        /// Period: weekly or monthly (defaults to config)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Savings goal commands
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// List transactions, newest first
    Transactions {
        /// Maximum number to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Record a transaction and show the resulting dashboard
    Add {
        /// Amount (e.g. 42.50 or $1,200)
        amount: String,

        /// Type: income or expense
        #[arg(short, long)]
        kind: Option<String>,

        /// Category (Income, Housing, Food, Transport, Utilities, Shopping,
        /// Health, Entertainment, Other)
        #[arg(short, long)]
        category: Option<String>,

        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Simulate receipt extraction from a file name
    Receipt {
        /// Receipt file name (only the name is used)
        file: String,

        /// Simulated extraction delay in milliseconds
        #[arg(long, default_value = "1500")]
        delay_ms: u64,
    },

    /// Export transactions and goals
    Export {
        /// Export format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List goals with progress (default)
    List,

    /// Create a goal
    Add {
        /// Target amount
        target: String,

        /// Goal name (defaults to "New Goal")
        #[arg(short, long)]
        name: Option<String>,

        /// Target date as YYYY-MM-DD (defaults to three months out)
        #[arg(long)]
        by: Option<String>,

        /// Priority: high, medium, low
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Move a goal's saved amount by whole steps of 5% of its target
    Adjust {
        /// Goal ID
        id: String,

        /// Number of steps (negative to withdraw)
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        steps: i64,
    },
}
