//! Export of transactions and goals
//!
//! Supports:
//! - Spreadsheet-style CSV (one table for transactions, one for goals)
//! - A JSON document with metadata, transactions and goals
//!
//! Exports read the raw lists, never the derived summaries, and accept
//! empty lists.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{SavingsGoal, Transaction};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

/// Header row of the transactions table
pub const TRANSACTIONS_CSV_HEADER: &str = "date,type,category,amount,source,note";

/// Header row of the goals table
pub const GOALS_CSV_HEADER: &str = "name,target,saved,progress,target_date,priority";

/// Export metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Application version that created the export
    pub version: String,
    pub generated_at: NaiveDate,
    pub transaction_count: usize,
    pub goal_count: usize,
}

/// Full JSON export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub metadata: ExportMetadata,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<SavingsGoal>,
}

impl ExportDocument {
    pub fn new(
        transactions: &[Transaction],
        goals: &[SavingsGoal],
        generated_at: NaiveDate,
    ) -> Self {
        Self {
            metadata: ExportMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                generated_at,
                transaction_count: transactions.len(),
                goal_count: goals.len(),
            },
            transactions: transactions.to_vec(),
            goals: goals.to_vec(),
        }
    }
}

/// Transactions as CSV, in list order
pub fn export_transactions_csv(transactions: &[Transaction]) -> String {
    let mut csv = format!("{}\n", TRANSACTIONS_CSV_HEADER);

    for tx in transactions {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            tx.date,
            tx.kind,
            tx.category,
            money_field(tx.amount),
            tx.source,
            escape_csv_field(tx.note.as_deref().unwrap_or(""))
        ));
    }

    csv
}

/// Goals as CSV, in list order. Progress is the completion ratio.
pub fn export_goals_csv(goals: &[SavingsGoal]) -> String {
    let mut csv = format!("{}\n", GOALS_CSV_HEADER);

    for goal in goals {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            escape_csv_field(&goal.name),
            money_field(goal.target_amount),
            money_field(goal.current_amount),
            goal.progress()
                .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
            goal.target_date,
            goal.priority
        ));
    }

    csv
}

/// Transactions and goals as a pretty-printed JSON document
pub fn export_json(
    transactions: &[Transaction],
    goals: &[SavingsGoal],
    generated_at: NaiveDate,
) -> Result<String> {
    let document = ExportDocument::new(transactions, goals, generated_at);
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Write an export to disk, returning every file written.
///
/// JSON goes to `output` as-is. CSV writes transactions to `output` and goals
/// to a sibling file with `-goals` appended to the stem.
pub fn write_export(
    format: ExportFormat,
    transactions: &[Transaction],
    goals: &[SavingsGoal],
    output: &Path,
    generated_at: NaiveDate,
) -> Result<Vec<PathBuf>> {
    let written = match format {
        ExportFormat::Json => {
            fs::write(output, export_json(transactions, goals, generated_at)?)?;
            vec![output.to_path_buf()]
        }
        ExportFormat::Csv => {
            let goals_path = goals_csv_path(output);
            fs::write(output, export_transactions_csv(transactions))?;
            fs::write(&goals_path, export_goals_csv(goals))?;
            vec![output.to_path_buf(), goals_path]
        }
    };

    tracing::info!(
        format = format.as_str(),
        files = written.len(),
        transactions = transactions.len(),
        goals = goals.len(),
        "Export written"
    );
    Ok(written)
}

/// `report.csv` -> `report-goals.csv`
pub fn goals_csv_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "export".to_string());
    output.with_file_name(format!("{}-goals.csv", stem))
}

fn money_field(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Escape a field for CSV output
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
