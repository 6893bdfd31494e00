//! Input validation for form-style entry
//!
//! Amounts arrive as free text. Anything that is not a positive number is
//! rejected here so the analytics layer only ever sees well-formed values.

use std::str::FromStr;

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{Category, NewGoal, NewTransaction, Priority, TransactionKind};

/// Goal name used when the form leaves it blank
pub const DEFAULT_GOAL_NAME: &str = "New Goal";

/// Months ahead of today used when a goal has no target date
pub const DEFAULT_GOAL_HORIZON_MONTHS: u32 = 3;

/// Largest accepted amount or goal target (one trillion)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Parse a user-entered amount, accepting an optional leading `$` and
/// thousands separators. Zero, negative and non-numeric input is rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(Error::InvalidAmount("amount is required".to_string()));
    }

    let amount = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| Error::InvalidAmount(format!("'{}' is not a number", raw.trim())))?;

    ensure_positive(amount)
}

/// Reject zero, negative and out-of-range amounts
pub fn ensure_positive(amount: Decimal) -> Result<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "{} must be greater than zero",
            amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(Error::InvalidAmount(format!(
            "{} exceeds the maximum of {}",
            amount, MAX_AMOUNT
        )));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| Error::InvalidData(format!("invalid date '{}': {}", raw.trim(), e)))
}

/// Build a transaction from raw form fields, applying the form defaults
/// (expense, Other, today).
pub fn transaction_from_form(
    amount: &str,
    kind: Option<&str>,
    category: Option<&str>,
    date: Option<&str>,
    note: Option<&str>,
    today: NaiveDate,
) -> Result<NewTransaction> {
    let amount = parse_amount(amount)?;

    let kind = match kind.filter(|k| !k.trim().is_empty()) {
        Some(k) => TransactionKind::from_str(k).map_err(Error::InvalidData)?,
        None => TransactionKind::default(),
    };
    let category = match category.filter(|c| !c.trim().is_empty()) {
        Some(c) => Category::from_str(c).map_err(Error::InvalidData)?,
        None => Category::default(),
    };
    let date = match date.filter(|d| !d.trim().is_empty()) {
        Some(d) => parse_date(d)?,
        None => today,
    };

    Ok(NewTransaction::manual(kind, amount, category, date).with_note(note.unwrap_or("")))
}

/// Build a goal from raw form fields, applying the form defaults
/// ("New Goal", three months out, medium priority).
pub fn goal_from_form(
    name: Option<&str>,
    target_amount: &str,
    target_date: Option<&str>,
    priority: Option<&str>,
    today: NaiveDate,
) -> Result<NewGoal> {
    let target_amount = parse_amount(target_amount)?;

    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_GOAL_NAME)
        .to_string();

    let target_date = match target_date.filter(|d| !d.trim().is_empty()) {
        Some(d) => parse_date(d)?,
        None => today
            .checked_add_months(Months::new(DEFAULT_GOAL_HORIZON_MONTHS))
            .ok_or_else(|| Error::InvalidData("target date out of range".to_string()))?,
    };

    let priority = match priority.filter(|p| !p.trim().is_empty()) {
        Some(p) => Priority::from_str(p).map_err(Error::InvalidData)?,
        None => Priority::default(),
    };

    Ok(NewGoal {
        name,
        target_amount,
        target_date,
        priority,
    })
}
