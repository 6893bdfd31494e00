//! Transaction command implementations (list, add)

use anyhow::{Context, Result};
use aura_core::advisor::format_money;
use aura_core::validate::transaction_from_form;
use aura_core::{Transaction, TransactionSource};

use super::{render_dashboard, resolve_period, truncate, Session};

pub fn cmd_transactions_list(session: &Session, limit: usize) -> Result<()> {
    let transactions = session.ledger.transactions();

    if transactions.is_empty() {
        println!("No transactions found. Record one with:");
        println!("  aura add 42.50 --category Food");
        return Ok(());
    }

    println!();
    println!("📝 Recent Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions.iter().take(limit) {
        println!("{}", render_transaction(tx));
    }

    if transactions.len() > limit {
        println!("   … {} more", transactions.len() - limit);
    }

    Ok(())
}

pub fn cmd_add(
    session: &mut Session,
    amount: &str,
    kind: Option<&str>,
    category: Option<&str>,
    date: Option<&str>,
    note: Option<&str>,
) -> Result<()> {
    let new = transaction_from_form(amount, kind, category, date, note, session.today)
        .context("Invalid transaction")?;
    let tx = session.ledger.add_transaction(new)?;

    println!("✓ Recorded {}", render_transaction(tx).trim_start());

    let period = resolve_period(None, &session.config)?;
    let dashboard = session
        .ledger
        .dashboard_with(&session.config, period, session.today);
    print!("{}", render_dashboard(&dashboard));
    println!("  Note: changes are not persisted between runs");

    Ok(())
}

/// One transaction line; expenses in red, income in green
pub fn render_transaction(tx: &Transaction) -> String {
    let amount_str = if tx.is_expense() {
        format!("\x1b[31m-{}\x1b[0m", format_money(tx.amount)) // Red for expenses
    } else {
        format!("\x1b[32m+{}\x1b[0m", format_money(tx.amount)) // Green for income
    };
    let source = match tx.source {
        TransactionSource::Manual => "",
        TransactionSource::Receipt => " 🧾",
    };

    format!(
        "   {} │ {:>12} │ {:<13} │ {}{}",
        tx.date,
        amount_str,
        tx.category.as_str(),
        truncate(tx.note.as_deref().unwrap_or(""), 40),
        source
    )
}
