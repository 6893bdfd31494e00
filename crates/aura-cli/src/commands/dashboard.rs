//! Dashboard, advisor and category command implementations

use anyhow::Result;
use aura_core::advisor::{format_money, format_percent};
use aura_core::{Advisor, AdvisorOutput, CategorySummary, Dashboard};

use super::{resolve_period, Session};

pub fn cmd_dashboard(session: &Session, period: Option<&str>, json: bool) -> Result<()> {
    let period = resolve_period(period, &session.config)?;
    let dashboard = session
        .ledger
        .dashboard_with(&session.config, period, session.today);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render_dashboard(&dashboard));
    }
    Ok(())
}

pub fn cmd_advise(session: &Session, json: bool) -> Result<()> {
    let advice = Advisor::with_config(session.config.advisor).advise(
        session.ledger.transactions(),
        session.ledger.goals(),
        session.today,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        print!("{}", render_advice(&advice));
    }
    Ok(())
}

pub fn cmd_categories(session: &Session, period: Option<&str>) -> Result<()> {
    let period = resolve_period(period, &session.config)?;
    let dashboard = session
        .ledger
        .dashboard_with(&session.config, period, session.today);

    if dashboard.categories.is_empty() {
        println!("No transactions yet. Record one with:");
        println!("  aura add 12.50 --category Food");
        return Ok(());
    }

    println!();
    println!(
        "📊 Categories ({}, {} to {})",
        period, dashboard.window.start, dashboard.window.end
    );
    println!("   ─────────────────────────────────────────");
    print!("{}", render_categories(&dashboard.categories));
    Ok(())
}

/// Full dashboard as text
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let summary = &dashboard.summary;
    let mut out = String::from("\n");

    out.push_str("╭─────────────────────────────────────────╮\n");
    out.push_str("│           💰 Aura Dashboard             │\n");
    out.push_str("╰─────────────────────────────────────────╯\n\n");
    out.push_str(&format!(
        "  Period:      {} ({} to {})\n",
        dashboard.period, dashboard.window.start, dashboard.window.end
    ));
    if dashboard.window_fallback {
        out.push_str("  ℹ️  Nothing in this period yet, showing all activity\n");
    }
    out.push('\n');
    out.push_str(&format!("  Income:      {}\n", format_money(summary.income)));
    out.push_str(&format!("  Expenses:    {}\n", format_money(summary.expenses)));
    out.push_str(&format!("  Balance:     {}\n", format_money(summary.balance)));
    out.push_str(&format!(
        "  Burn rate:   {}/day\n",
        format_money(summary.burn_rate)
    ));

    if !dashboard.categories.is_empty() {
        out.push_str("\n  📊 Categories\n");
        out.push_str(&render_categories(&dashboard.categories));
    }

    let goals = &dashboard.goals;
    out.push_str(&format!(
        "\n  🎯 Goals: {} of {} saved ({}% average progress)\n",
        format_money(goals.total_saved),
        format_money(goals.total_target),
        format_percent(goals.average_progress)
    ));

    out.push_str(&render_advice(&dashboard.advisor));
    out
}

/// Category totals, one per line in first-seen order
pub fn render_categories(categories: &CategorySummary) -> String {
    let mut out = String::new();
    for entry in categories {
        let noun = if entry.count == 1 {
            "transaction"
        } else {
            "transactions"
        };
        out.push_str(&format!(
            "   {:<14} {:>12}  ({} {})\n",
            entry.category.as_str(),
            format_money(entry.total),
            entry.count,
            noun
        ));
    }
    out
}

/// Advisor headline and statements
pub fn render_advice(advice: &AdvisorOutput) -> String {
    let mut out = format!("\n  🤖 {}\n", advice.headline);
    for statement in &advice.statements {
        out.push_str(&format!("     • {}\n", statement));
    }
    out.push('\n');
    out
}
