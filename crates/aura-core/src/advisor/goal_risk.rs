//! Goal Risk Heuristic
//!
//! Flags savings goals that are due soon (or already overdue) while still
//! less than half funded. One statement per goal at risk, highest priority
//! first; goals of equal priority keep their list order.

use rust_decimal::Decimal;

use crate::analytics::priority_label;
use crate::models::SavingsGoal;

use super::engine::{AdvisorContext, Heuristic};
use super::types::{format_money, format_percent, plural, HeuristicKind};

pub struct GoalRiskHeuristic;

impl GoalRiskHeuristic {
    /// Goals inside the risk window, ordered for reporting
    pub fn at_risk<'a>(ctx: &AdvisorContext<'a>) -> Vec<&'a SavingsGoal> {
        let mut flagged: Vec<&SavingsGoal> = ctx
            .goals
            .iter()
            .filter(|goal| {
                goal.days_until(ctx.today) <= ctx.config.goal_risk_days
                    && goal.progress() < ctx.config.goal_risk_progress
            })
            .collect();

        // Stable sort keeps list order within a priority
        flagged.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        flagged
    }
}

impl Heuristic for GoalRiskHeuristic {
    fn id(&self) -> HeuristicKind {
        HeuristicKind::GoalRisk
    }

    fn name(&self) -> &'static str {
        "Goal Risk"
    }

    fn evaluate(&self, ctx: &AdvisorContext<'_>) -> Vec<String> {
        Self::at_risk(ctx)
            .into_iter()
            .map(|goal| describe(goal, ctx.today))
            .collect()
    }
}

fn describe(goal: &SavingsGoal, today: chrono::NaiveDate) -> String {
    let days = goal.days_until(today);
    let due = match days {
        0 => "due today".to_string(),
        d if d > 0 => format!("due in {}", plural(d, "day")),
        d => format!("{} overdue", plural(-d, "day")),
    };
    let remaining = goal
        .target_amount
        .saturating_sub(goal.current_amount)
        .max(Decimal::ZERO);

    format!(
        "{} ({}) is {} but only {}% funded; {} still needed.",
        goal.name,
        priority_label(goal.priority),
        due,
        format_percent(goal.progress()),
        format_money(remaining)
    )
}
