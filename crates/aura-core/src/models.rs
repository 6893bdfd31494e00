//! Domain models for Aura

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction source - how it was created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSource {
    /// Entered through the manual form
    #[default]
    Manual,
    /// Produced by the receipt intake simulator
    Receipt,
}

impl TransactionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Receipt => "receipt",
        }
    }
}

impl std::str::FromStr for TransactionSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "receipt" => Ok(Self::Receipt),
            _ => Err(format!("Unknown transaction source: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed set of spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    Income,
    Housing,
    Food,
    Transport,
    Utilities,
    Shopping,
    Health,
    Entertainment,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// All categories in form order
    pub fn all() -> &'static [Category] {
        &[
            Self::Income,
            Self::Housing,
            Self::Food,
            Self::Transport,
            Self::Utilities,
            Self::Shopping,
            Self::Health,
            Self::Entertainment,
            Self::Other,
        ]
    }

    /// Categories that describe spending (everything except Income)
    pub fn spending() -> &'static [Category] {
        &Self::all()[1..]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded transaction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Always positive; direction comes from `kind`
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub source: TransactionSource,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// A new transaction to be added to the ledger (before validation)
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub source: TransactionSource,
}

impl NewTransaction {
    /// Manually entered transaction with no note
    pub fn manual(
        kind: TransactionKind,
        amount: Decimal,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category,
            date,
            note: None,
            source: TransactionSource::Manual,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() {
            None
        } else {
            Some(note)
        };
        self
    }
}

/// Qualitative urgency of a savings goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Numeric rank for sorting (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A savings goal. `current_amount` stays within `[0, target_amount]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    #[serde(alias = "targetAmount")]
    pub target_amount: Decimal,
    #[serde(alias = "currentAmount", default)]
    pub current_amount: Decimal,
    #[serde(alias = "targetDate")]
    pub target_date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
}

impl SavingsGoal {
    /// Completion ratio in `[0, 1]`; a zero target counts as no progress
    pub fn progress(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO || self.current_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        if self.current_amount >= self.target_amount {
            return Decimal::ONE;
        }
        self.current_amount / self.target_amount
    }

    /// Add a signed delta and re-clamp to `[0, target_amount]`
    pub fn adjust_progress(&mut self, delta: Decimal) {
        let ceiling = self.target_amount.max(Decimal::ZERO);
        self.current_amount = self
            .current_amount
            .saturating_add(delta)
            .clamp(Decimal::ZERO, ceiling);
    }

    /// Whole days from `today` until the target date (negative when overdue)
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }

    pub fn is_complete(&self) -> bool {
        self.target_amount > Decimal::ZERO && self.current_amount >= self.target_amount
    }
}

/// A new savings goal (before validation)
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    pub priority: Priority,
}

/// Dashboard period granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Weekly,
    Monthly,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// The other period (the dashboard's view toggle)
    pub fn toggle(&self) -> Self {
        match self {
            Self::Weekly => Self::Monthly,
            Self::Monthly => Self::Weekly,
        }
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            _ => Err(format!("Unknown period: {}", s)),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a weekly window is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeekPolicy {
    /// The 7 days ending today, inclusive
    #[default]
    Trailing,
    /// Monday through Sunday of the week containing today
    Calendar,
}

impl std::str::FromStr for WeekPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trailing" => Ok(Self::Trailing),
            "calendar" => Ok(Self::Calendar),
            _ => Err(format!("Unknown week policy: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    fn goal(target: Decimal, current: Decimal) -> SavingsGoal {
        SavingsGoal {
            id: "g-1".to_string(),
            name: "Emergency Fund".to_string(),
            target_amount: target,
            current_amount: current,
            target_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            priority: Priority::High,
        }
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_str(category.as_str()).unwrap(), *category);
        }
        assert_eq!(Category::from_str("food").unwrap(), Category::Food);
        assert!(Category::from_str("Groceries").is_err());
        assert!(!Category::spending().contains(&Category::Income));
    }

    #[test]
    fn test_transaction_json_shape() {
        let json = r#"{
            "id": "t-1",
            "type": "income",
            "amount": 3200,
            "category": "Income",
            "date": "2026-10-01",
            "note": "Salary"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.is_income());
        assert_eq!(tx.amount, dec!(3200));
        assert_eq!(tx.source, TransactionSource::Manual);
    }

    #[test]
    fn test_goal_accepts_camel_case_fields() {
        let json = r#"{
            "id": "g-1",
            "name": "New Laptop",
            "targetAmount": 1800,
            "currentAmount": 550,
            "targetDate": "2027-04-17",
            "priority": "medium"
        }"#;
        let goal: SavingsGoal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.target_amount, dec!(1800));
        assert_eq!(goal.current_amount, dec!(550));
    }

    #[test]
    fn test_goal_progress_clamps() {
        assert_eq!(goal(dec!(5000), dec!(2100)).progress(), dec!(0.42));
        assert_eq!(goal(dec!(100), dec!(150)).progress(), Decimal::ONE);
        assert_eq!(goal(Decimal::ZERO, dec!(10)).progress(), Decimal::ZERO);
        assert_eq!(goal(dec!(0.01), Decimal::MAX).progress(), Decimal::ONE);
        assert_eq!(goal(dec!(0.01), Decimal::MIN).progress(), Decimal::ZERO);
    }

    #[test]
    fn test_adjust_progress_stays_in_bounds() {
        let mut g = goal(dec!(1000), dec!(900));
        g.adjust_progress(dec!(250));
        assert_eq!(g.current_amount, dec!(1000));
        assert!(g.is_complete());

        g.adjust_progress(dec!(-1500));
        assert_eq!(g.current_amount, Decimal::ZERO);
    }

    #[test]
    fn test_adjust_progress_with_extreme_delta() {
        let mut g = goal(dec!(1000), dec!(900));
        g.adjust_progress(Decimal::MAX);
        assert_eq!(g.current_amount, dec!(1000));

        g.adjust_progress(Decimal::MIN);
        assert_eq!(g.current_amount, Decimal::ZERO);
    }

    #[test]
    fn test_days_until() {
        let g = goal(dec!(1000), Decimal::ZERO);
        let today = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
        assert_eq!(g.days_until(today), 30);
        let later = NaiveDate::from_ymd_opt(2026, 6, 3).unwrap();
        assert_eq!(g.days_until(later), -2);
    }

    #[test]
    fn test_period_parse_and_toggle() {
        assert_eq!(Period::from_str("Monthly").unwrap(), Period::Monthly);
        assert_eq!(Period::Weekly.toggle(), Period::Monthly);
        assert!(Period::from_str("daily").is_err());
    }
}
