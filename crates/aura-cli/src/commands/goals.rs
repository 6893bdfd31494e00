//! Savings goal command implementations (list, add, adjust)

use anyhow::{Context, Result};
use aura_core::advisor::{format_money, format_percent};
use aura_core::analytics::{goal_insights, priority_label, progress_step};
use aura_core::validate::goal_from_form;
use aura_core::SavingsGoal;
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::Session;

/// Width of the progress bar in characters
const BAR_WIDTH: usize = 20;

pub fn cmd_goals_list(session: &Session) -> Result<()> {
    let goals = session.ledger.goals();

    if goals.is_empty() {
        println!("No savings goals yet. Create one with:");
        println!("  aura goals add 1000 --name \"Emergency Fund\"");
        return Ok(());
    }

    let insights = goal_insights(goals);

    println!();
    println!("🎯 Savings Goals ({})", goals.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for goal in goals {
        println!("{}", render_goal(goal, session.today));
    }
    println!();
    println!(
        "   Total: {} of {} saved, {}% average progress",
        format_money(insights.total_saved),
        format_money(insights.total_target),
        format_percent(insights.average_progress)
    );
    println!();

    Ok(())
}

pub fn cmd_goals_add(
    session: &mut Session,
    target: &str,
    name: Option<&str>,
    by: Option<&str>,
    priority: Option<&str>,
) -> Result<()> {
    let new = goal_from_form(name, target, by, priority, session.today)
        .context("Invalid goal")?;
    let goal = session.ledger.create_goal(new)?;

    println!(
        "✓ Created goal {} ({}): {} by {}",
        goal.name,
        goal.id,
        format_money(goal.target_amount),
        goal.target_date
    );
    println!("  Note: changes are not persisted between runs");
    Ok(())
}

pub fn cmd_goals_adjust(session: &mut Session, id: &str, steps: i64) -> Result<()> {
    let step = session
        .ledger
        .goal(id)
        .map(progress_step)
        .with_context(|| format!("Goal not found: {}", id))?;

    let today = session.today;
    let goal = session
        .ledger
        .adjust_goal_progress(id, step.saturating_mul(Decimal::from(steps)))?;

    println!("{}", render_goal(goal, today));
    Ok(())
}

/// One goal line with progress bar
pub fn render_goal(goal: &SavingsGoal, today: NaiveDate) -> String {
    let progress = goal.progress();
    let filled = (progress * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH);

    format!(
        "   {:<18} [{}{}] {:>4}%  {} / {}  due {} ({} days)  {}\n   id: {}",
        goal.name,
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        format_percent(progress),
        format_money(goal.current_amount),
        format_money(goal.target_amount),
        goal.target_date,
        goal.days_until(today),
        priority_label(goal.priority),
        goal.id
    )
}
