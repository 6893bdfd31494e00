//! Integration tests for aura-core
//!
//! These tests exercise the full ledger → dashboard → advisor workflow and
//! the properties every analytics function must hold.

use aura_core::{
    advisor::{NO_DATA_HEADLINE, NO_DATA_STATEMENT},
    advise, goal_insights, group_by_category, select_window, simulate_receipt, summarize,
    AuraConfig, Category, GoalInsights, Ledger, NewTransaction, Period, Priority, SavingsGoal,
    Transaction, TransactionKind, TransactionSource,
};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

fn tx(kind: TransactionKind, category: Category, amount: Decimal, date: NaiveDate) -> Transaction {
    Transaction {
        id: format!("{}-{}-{}", category, amount, date),
        kind,
        amount,
        category,
        date,
        note: None,
        source: TransactionSource::Manual,
    }
}

fn goal(target: Decimal, current: Decimal) -> SavingsGoal {
    SavingsGoal {
        id: format!("g-{}-{}", target, current),
        name: "Goal".to_string(),
        target_amount: target,
        current_amount: current,
        target_date: today() + Duration::days(90),
        priority: Priority::Medium,
    }
}

/// A spread of transaction lists: empty, single, mixed kinds, odd cents,
/// repeated days and a long generated history
fn fixture_lists() -> Vec<Vec<Transaction>> {
    let d = |day: u32| NaiveDate::from_ymd_opt(2026, 10, day).unwrap();

    let mut long = vec![];
    for i in 0..60u32 {
        let kind = if i % 7 == 0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        let category = Category::all()[(i as usize) % Category::all().len()];
        let amount = Decimal::new(i64::from(i * 137 % 9_999 + 1), 2);
        long.push(tx(kind, category, amount, today() - Duration::days(i64::from(i))));
    }

    vec![
        vec![],
        vec![tx(TransactionKind::Income, Category::Income, dec!(3200), d(1))],
        vec![
            tx(TransactionKind::Expense, Category::Food, dec!(0.10), d(2)),
            tx(TransactionKind::Expense, Category::Food, dec!(0.20), d(2)),
            tx(TransactionKind::Income, Category::Other, dec!(0.30), d(3)),
        ],
        vec![
            tx(TransactionKind::Expense, Category::Housing, dec!(680), d(3)),
            tx(TransactionKind::Income, Category::Income, dec!(3200), d(1)),
            tx(TransactionKind::Expense, Category::Shopping, dec!(210.99), d(7)),
        ],
        long,
    ]
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_balance_is_income_minus_expenses() {
    for list in fixture_lists() {
        let summary = summarize(&list);
        assert_eq!(summary.balance, summary.income - summary.expenses);
    }
}

#[test]
fn test_exact_decimal_sums() {
    let d = NaiveDate::from_ymd_opt(2026, 10, 2).unwrap();
    let list = vec![
        tx(TransactionKind::Expense, Category::Food, dec!(0.10), d),
        tx(TransactionKind::Expense, Category::Food, dec!(0.20), d),
    ];
    assert_eq!(summarize(&list).expenses, dec!(0.30));
}

#[test]
fn test_category_totals_cover_every_transaction() {
    for list in fixture_lists() {
        let categories = group_by_category(&list);
        let amount_sum: Decimal = list.iter().map(|t| t.amount).sum();
        let total_sum: Decimal = categories.iter().map(|c| c.total).sum();
        let count_sum: usize = categories.iter().map(|c| c.count).sum();

        assert_eq!(total_sum, amount_sum);
        assert_eq!(count_sum, list.len());
    }
}

#[test]
fn test_average_progress_is_bounded() {
    let lists = vec![
        vec![],
        vec![goal(dec!(5000), dec!(2100)), goal(dec!(1800), dec!(550))],
        vec![goal(dec!(100), dec!(100)), goal(dec!(100), dec!(0))],
        vec![goal(Decimal::ZERO, Decimal::ZERO)],
        vec![goal(dec!(10), dec!(50)), goal(dec!(10), dec!(-5))],
    ];
    for goals in lists {
        let avg = goal_insights(&goals).average_progress;
        assert!(avg >= Decimal::ZERO, "{}", avg);
        assert!(avg <= Decimal::ONE, "{}", avg);
    }
    assert_eq!(goal_insights(&[]).average_progress, Decimal::ZERO);
}

#[test]
fn test_analytics_are_idempotent() {
    let goals = vec![goal(dec!(5000), dec!(2100)), goal(dec!(1800), dec!(550))];
    for list in fixture_lists() {
        assert_eq!(summarize(&list), summarize(&list));
        assert_eq!(group_by_category(&list), group_by_category(&list));
        assert_eq!(
            select_window(&list, Period::Weekly, today()),
            select_window(&list, Period::Weekly, today())
        );
        assert_eq!(advise(&list, &goals, today()), advise(&list, &goals, today()));
    }
    assert_eq!(goal_insights(&goals), goal_insights(&goals));
}

#[test]
fn test_adding_expense_never_decreases_expenses() {
    for mut list in fixture_lists() {
        let before = summarize(&list).expenses;
        list.push(tx(
            TransactionKind::Expense,
            Category::Health,
            dec!(0.01),
            today(),
        ));
        assert!(summarize(&list).expenses >= before);
    }
}

#[test]
fn test_window_is_subset_in_input_order() {
    for list in fixture_lists() {
        for period in [Period::Weekly, Period::Monthly] {
            let windowed = select_window(&list, period, today());
            let positions: Vec<usize> = windowed
                .iter()
                .map(|w| list.iter().position(|t| t == w).unwrap())
                .collect();
            assert!(positions.windows(2).all(|p| p[0] < p[1]));
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_scenario_single_income() {
    let list = vec![tx(
        TransactionKind::Income,
        Category::Income,
        dec!(3200),
        today(),
    )];
    let summary = summarize(&list);
    assert_eq!(summary.income, dec!(3200));
    assert_eq!(summary.expenses, Decimal::ZERO);
    assert_eq!(summary.balance, dec!(3200));
}

#[test]
fn test_scenario_same_category_grouping() {
    let list = vec![
        tx(TransactionKind::Expense, Category::Food, dec!(120), today()),
        tx(TransactionKind::Expense, Category::Food, dec!(30), today()),
    ];
    let categories = group_by_category(&list);
    assert_eq!(categories.len(), 1);
    let food = categories.get(Category::Food).unwrap();
    assert_eq!(food.total, dec!(150));
    assert_eq!(food.count, 2);
}

#[test]
fn test_scenario_two_goals() {
    let insights = goal_insights(&[goal(dec!(5000), dec!(2100)), goal(dec!(1800), dec!(550))]);
    assert_eq!(insights.total_target, dec!(6800));
    assert_eq!(insights.total_saved, dec!(2650));
    assert_eq!(insights.average_progress.round_dp(3), dec!(0.363));
}

#[test]
fn test_scenario_empty_everything() {
    let summary = summarize(&[]);
    assert_eq!(summary.income, Decimal::ZERO);
    assert_eq!(summary.expenses, Decimal::ZERO);
    assert_eq!(summary.balance, Decimal::ZERO);
    assert_eq!(summary.burn_rate, Decimal::ZERO);
    assert!(group_by_category(&[]).is_empty());
    assert_eq!(goal_insights(&[]), GoalInsights::default());

    let output = advise(&[], &[], today());
    assert_eq!(output.headline, NO_DATA_HEADLINE);
    assert_eq!(output.statements, vec![NO_DATA_STATEMENT.to_string()]);
}

#[test]
fn test_scenario_zero_target_goal() {
    let insights = goal_insights(&[goal(Decimal::ZERO, Decimal::ZERO), goal(dec!(200), dec!(50))]);
    assert_eq!(insights.average_progress, dec!(0.125));
}

// =============================================================================
// Workflow
// =============================================================================

#[test]
fn test_sample_ledger_advice() {
    let ledger = Ledger::sample(today());
    let output = advise(ledger.transactions(), ledger.goals(), today());

    // 5 distinct days of sample activity
    assert_eq!(
        output.headline,
        "Net positive: you kept $2100.00 of $3200.00 earned across 5 recorded days."
    );
    assert_eq!(
        output.statements,
        vec![
            "Housing is your largest spending category at $680.00, 62% of total expenses.",
            "You're trending positive with $2100.00 left over. Consider moving part of it into your goals.",
            "You're keeping 66% of your income, meeting the 20% savings benchmark.",
        ]
    );
}

#[test]
fn test_goal_risk_through_ledger() {
    let mut ledger = Ledger::sample(today());
    ledger
        .create_goal(aura_core::NewGoal {
            name: "Holiday Gifts".to_string(),
            target_amount: dec!(400),
            target_date: today() + Duration::days(30),
            priority: Priority::Low,
        })
        .unwrap();

    let dashboard = ledger.dashboard(Period::Monthly, today());
    assert!(dashboard.advisor.statements.contains(
        &"Holiday Gifts (Low priority) is due in 30 days but only 0% funded; $400.00 still needed."
            .to_string()
    ));
    assert_eq!(dashboard.goals.total_target, dec!(7200));
}

#[test]
fn test_receipt_goes_through_add_transaction() {
    let mut ledger = Ledger::new();
    let extraction = simulate_receipt("coffee_4.75.png", today()).unwrap();
    let added = ledger.add_transaction(extraction.transaction).unwrap().clone();

    assert_eq!(added.source, TransactionSource::Receipt);
    assert_eq!(added.amount, dec!(4.75));

    let dashboard = ledger.dashboard(Period::Weekly, today());
    assert!(!dashboard.window_fallback);
    assert_eq!(dashboard.summary.expenses, dec!(4.75));
    // Only one day elapsed in the data, advice is still produced
    assert!(dashboard.advisor.headline.starts_with("Net negative"));
}

#[test]
fn test_manual_and_receipt_share_ledger_rules() {
    let mut ledger = Ledger::new();
    let manual = NewTransaction::manual(
        TransactionKind::Expense,
        dec!(4.75),
        Category::Food,
        today(),
    );
    ledger.add_transaction(manual).unwrap();
    ledger
        .add_transaction(simulate_receipt("coffee_4.75.png", today()).unwrap().transaction)
        .unwrap();

    for tx in ledger.transactions() {
        assert!(tx.amount > Decimal::ZERO);
        assert_eq!(tx.kind, TransactionKind::Expense);
    }
}

#[test]
fn test_configured_thresholds_flow_into_dashboard() {
    let ledger = Ledger::sample(today());
    let mut config = AuraConfig::default();
    // Emergency Fund is due in ~4 months at 42%
    config.advisor.goal_risk_days = 200;

    let dashboard = ledger.dashboard_with(&config, Period::Monthly, today());
    assert!(dashboard
        .advisor
        .statements
        .iter()
        .any(|s| s.starts_with("Emergency Fund (High priority) is due in")));
}

#[test]
fn test_engine_stays_total_at_decimal_limits() {
    let huge = dec!(60000000000000000000000000000);
    let txs = vec![
        tx(TransactionKind::Income, Category::Income, dec!(0.01), today()),
        tx(TransactionKind::Expense, Category::Food, huge, today()),
        tx(TransactionKind::Expense, Category::Food, huge, today() - Duration::days(1)),
    ];
    let goals = vec![goal(dec!(0.01), Decimal::MAX)];

    let summary = summarize(&txs);
    assert_eq!(summary.expenses, Decimal::MAX);
    assert!(summary.balance < Decimal::ZERO);

    let output = advise(&txs, &goals, today());
    assert!(output.headline.starts_with("Net negative"));
    assert!(output
        .statements
        .contains(&"None of your income is being saved yet; aim to keep 20% of it.".to_string()));
    assert_eq!(goal_insights(&goals).average_progress, Decimal::ONE);
}

#[test]
fn test_validation_caps_amounts_before_the_ledger() {
    let cap = aura_core::validate::MAX_AMOUNT;
    let mut ledger = Ledger::new();

    ledger
        .add_transaction(NewTransaction::manual(
            TransactionKind::Expense,
            cap,
            Category::Food,
            today(),
        ))
        .unwrap();
    assert!(ledger
        .add_transaction(NewTransaction::manual(
            TransactionKind::Expense,
            cap + dec!(0.01),
            Category::Food,
            today(),
        ))
        .is_err());
    assert_eq!(ledger.transactions().len(), 1);

    let dashboard = ledger.dashboard(Period::Weekly, today());
    assert_eq!(dashboard.summary.expenses, cap);
}
