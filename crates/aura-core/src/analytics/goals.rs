//! Savings goal statistics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Priority, SavingsGoal};

/// Share of the target added or removed by one progress step in the dashboard
pub const GOAL_STEP_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Aggregate funding across all goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalInsights {
    pub total_target: Decimal,
    pub total_saved: Decimal,
    /// Mean of per-goal completion ratios, in `[0, 1]`
    pub average_progress: Decimal,
}

/// Reduce a goal list into totals and average completion.
///
/// A goal with a zero target contributes a progress of 0 but still counts
/// toward the mean.
pub fn goal_insights(goals: &[SavingsGoal]) -> GoalInsights {
    if goals.is_empty() {
        return GoalInsights::default();
    }

    let total_target = goals
        .iter()
        .fold(Decimal::ZERO, |sum, g| sum.saturating_add(g.target_amount));
    let total_saved = goals
        .iter()
        .fold(Decimal::ZERO, |sum, g| sum.saturating_add(g.current_amount));
    let progress_sum: Decimal = goals.iter().map(SavingsGoal::progress).sum();

    GoalInsights {
        total_target,
        total_saved,
        average_progress: progress_sum / Decimal::from(goals.len()),
    }
}

/// Display label for a goal priority
pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High priority",
        Priority::Medium => "Medium priority",
        Priority::Low => "Low priority",
    }
}

/// Amount one dashboard step moves a goal by
pub fn progress_step(goal: &SavingsGoal) -> Decimal {
    goal.target_amount * GOAL_STEP_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn goal(target: Decimal, current: Decimal) -> SavingsGoal {
        SavingsGoal {
            id: format!("g-{}", target),
            name: "Goal".to_string(),
            target_amount: target,
            current_amount: current,
            target_date: NaiveDate::from_ymd_opt(2027, 2, 17).unwrap(),
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_two_goal_scenario() {
        let goals = vec![goal(dec!(5000), dec!(2100)), goal(dec!(1800), dec!(550))];
        let insights = goal_insights(&goals);

        assert_eq!(insights.total_target, dec!(6800));
        assert_eq!(insights.total_saved, dec!(2650));
        // mean(0.42, 0.30555...) = 0.3627...
        assert_eq!(insights.average_progress.round_dp(3), dec!(0.363));
    }

    #[test]
    fn test_empty_goals() {
        assert_eq!(goal_insights(&[]), GoalInsights::default());
    }

    #[test]
    fn test_zero_target_counts_as_no_progress() {
        let goals = vec![goal(Decimal::ZERO, Decimal::ZERO), goal(dec!(100), dec!(100))];
        let insights = goal_insights(&goals);
        assert_eq!(insights.average_progress, dec!(0.5));
    }

    #[test]
    fn test_average_progress_is_bounded() {
        // Out-of-range snapshot values are still reported inside [0, 1]
        let goals = vec![goal(dec!(100), dec!(250)), goal(dec!(100), dec!(-20))];
        let avg = goal_insights(&goals).average_progress;
        assert!(avg >= Decimal::ZERO && avg <= Decimal::ONE);
        assert_eq!(avg, dec!(0.5));
    }

    #[test]
    fn test_totals_saturate_at_decimal_max() {
        let goals = vec![
            goal(Decimal::MAX, Decimal::MAX),
            goal(Decimal::MAX, Decimal::ZERO),
        ];
        let insights = goal_insights(&goals);
        assert_eq!(insights.total_target, Decimal::MAX);
        assert_eq!(insights.total_saved, Decimal::MAX);
        assert_eq!(insights.average_progress, dec!(0.5));
    }

    #[test]
    fn test_priority_labels_are_distinct() {
        let labels = [
            priority_label(Priority::High),
            priority_label(Priority::Medium),
            priority_label(Priority::Low),
        ];
        assert_eq!(labels[0], "High priority");
        assert_ne!(labels[0], labels[1]);
        assert_ne!(labels[1], labels[2]);
    }

    #[test]
    fn test_progress_step_is_five_percent() {
        assert_eq!(GOAL_STEP_RATIO, dec!(0.05));
        assert_eq!(progress_step(&goal(dec!(1800), Decimal::ZERO)), dec!(90));
    }
}
