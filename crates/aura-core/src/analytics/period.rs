//! Temporal window selection
//!
//! Weekly windows default to the trailing 7 days ending today. The
//! calendar-week variant (Monday..=Sunday) is available through
//! [`WeekPolicy::Calendar`]. Monthly windows always cover the calendar month
//! containing today.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Period, Transaction, WeekPolicy};

/// Days covered by a weekly window
pub const WEEK_DAYS: i64 = 7;

/// Date bounds of the "current" window for a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub period: Period,
    /// First day of the window (inclusive)
    pub start: NaiveDate,
    /// Last day of the window (inclusive)
    pub end: NaiveDate,
    /// The reference date the window was built around
    pub today: NaiveDate,
}

impl PeriodWindow {
    /// Window for `period` around `today` using the default week policy
    pub fn new(period: Period, today: NaiveDate) -> Self {
        Self::with_policy(period, today, WeekPolicy::default())
    }

    /// Window for `period` around `today` with an explicit week policy
    pub fn with_policy(period: Period, today: NaiveDate, policy: WeekPolicy) -> Self {
        let (start, end) = match (period, policy) {
            (Period::Weekly, WeekPolicy::Trailing) => {
                (today - Duration::days(WEEK_DAYS - 1), today)
            }
            (Period::Weekly, WeekPolicy::Calendar) => {
                let offset = i64::from(today.weekday().num_days_from_monday());
                let monday = today - Duration::days(offset);
                (monday, monday + Duration::days(WEEK_DAYS - 1))
            }
            (Period::Monthly, _) => month_bounds(today),
        };

        Self {
            period,
            start,
            end,
            today,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Transactions dated inside the window, in input order
    pub fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.contains(tx.date))
            .cloned()
            .collect()
    }

    /// Days elapsed from the window start through today, inclusive (min 1)
    pub fn elapsed_days(&self) -> u32 {
        let last = self.today.min(self.end);
        let days = (last - self.start).num_days() + 1;
        u32::try_from(days.max(1)).unwrap_or(u32::MAX)
    }
}

/// First and last day of the calendar month containing `date`
fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date);
    (first, last)
}

/// Select the transactions in the current window for `period`.
///
/// Returns an empty list when nothing falls inside the window; falling back
/// to the full history is the caller's decision.
pub fn select_window(
    transactions: &[Transaction],
    period: Period,
    today: NaiveDate,
) -> Vec<Transaction> {
    PeriodWindow::new(period, today).filter(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionKind, TransactionSource};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx_on(id: &str, date: NaiveDate) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind: TransactionKind::Expense,
            amount: dec!(10),
            category: Category::Food,
            date,
            note: None,
            source: TransactionSource::Manual,
        }
    }

    fn ids(txs: &[Transaction]) -> Vec<&str> {
        txs.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_trailing_week_boundaries() {
        // Saturday
        let today = date(2026, 10, 17);
        let txs = vec![
            tx_on("too-old", date(2026, 10, 10)),
            tx_on("first-day", date(2026, 10, 11)),
            tx_on("today", today),
            tx_on("tomorrow", date(2026, 10, 18)),
        ];

        let selected = select_window(&txs, Period::Weekly, today);
        assert_eq!(ids(&selected), vec!["first-day", "today"]);
    }

    #[test]
    fn test_calendar_week_boundaries() {
        // Saturday 2026-10-17 sits in the week Mon 12th..=Sun 18th
        let today = date(2026, 10, 17);
        let window = PeriodWindow::with_policy(Period::Weekly, today, WeekPolicy::Calendar);
        assert_eq!(window.start, date(2026, 10, 12));
        assert_eq!(window.end, date(2026, 10, 18));

        let txs = vec![
            tx_on("prev-sunday", date(2026, 10, 11)),
            tx_on("monday", date(2026, 10, 12)),
            tx_on("sunday", date(2026, 10, 18)),
        ];
        assert_eq!(ids(&window.filter(&txs)), vec!["monday", "sunday"]);
        assert_eq!(window.elapsed_days(), 6);
    }

    #[test]
    fn test_policies_disagree_on_monday() {
        // Monday: the calendar week has just started, the trailing week has not
        let today = date(2026, 10, 12);
        let txs = vec![tx_on("last-friday", date(2026, 10, 9))];

        let trailing = PeriodWindow::with_policy(Period::Weekly, today, WeekPolicy::Trailing);
        let calendar = PeriodWindow::with_policy(Period::Weekly, today, WeekPolicy::Calendar);

        assert_eq!(trailing.filter(&txs).len(), 1);
        assert!(calendar.filter(&txs).is_empty());
        assert_eq!(trailing.elapsed_days(), 7);
        assert_eq!(calendar.elapsed_days(), 1);
    }

    #[test]
    fn test_monthly_window_covers_calendar_month() {
        let today = date(2024, 2, 10);
        let window = PeriodWindow::new(Period::Monthly, today);
        assert_eq!(window.start, date(2024, 2, 1));
        assert_eq!(window.end, date(2024, 2, 29));
        assert_eq!(window.elapsed_days(), 10);

        let txs = vec![
            tx_on("jan-31", date(2024, 1, 31)),
            tx_on("feb-1", date(2024, 2, 1)),
            tx_on("feb-29", date(2024, 2, 29)),
            tx_on("mar-1", date(2024, 3, 1)),
        ];
        assert_eq!(ids(&window.filter(&txs)), vec!["feb-1", "feb-29"]);
    }

    #[test]
    fn test_december_month_end() {
        let window = PeriodWindow::new(Period::Monthly, date(2026, 12, 31));
        assert_eq!(window.end, date(2026, 12, 31));
        assert_eq!(window.elapsed_days(), 31);
    }

    #[test]
    fn test_empty_input() {
        assert!(select_window(&[], Period::Monthly, date(2026, 1, 1)).is_empty());
    }
}
