//! Simulated receipt intake
//!
//! There is no OCR. A receipt "upload" is reduced to its file name: the first
//! number in the name becomes the amount, and anything the name cannot supply
//! is derived from a SHA-256 digest of it so the same file always yields the
//! same transaction.

use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::models::{Category, NewTransaction, TransactionKind, TransactionSource};

/// Smallest fallback amount, in cents
const FALLBACK_MIN_CENTS: u64 = 2_000;

/// Width of the fallback range, in cents ($20.00 up to, not including, $140.00)
const FALLBACK_SPAN_CENTS: u64 = 12_000;

static AMOUNT_RE: OnceLock<Regex> = OnceLock::new();

fn amount_regex() -> Result<&'static Regex> {
    if let Some(re) = AMOUNT_RE.get() {
        return Ok(re);
    }
    let re = Regex::new(r"\d+(?:\.\d+)?")?;
    Ok(AMOUNT_RE.get_or_init(|| re))
}

/// Where the amount of a simulated receipt came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSource {
    /// A number found in the file name
    FileName,
    /// Derived from the file name's digest
    Digest,
}

/// Result of one simulated extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptExtraction {
    /// Ready to pass to [`crate::Ledger::add_transaction`]
    pub transaction: NewTransaction,
    pub amount_source: AmountSource,
    /// Hex SHA-256 of the file name
    pub fingerprint: String,
}

/// Turn a receipt file name into one expense transaction dated `today`
pub fn simulate_receipt(file_name: &str, today: NaiveDate) -> Result<ReceiptExtraction> {
    let digest = Sha256::digest(file_name.as_bytes());

    let (amount, amount_source) = match amount_from_name(file_name)? {
        Some(amount) => (amount, AmountSource::FileName),
        None => (fallback_amount(&digest), AmountSource::Digest),
    };
    let category = category_from_digest(&digest);

    tracing::debug!(
        file = file_name,
        %amount,
        category = category.as_str(),
        from_name = amount_source == AmountSource::FileName,
        "Simulated receipt extraction"
    );

    let transaction = NewTransaction {
        kind: TransactionKind::Expense,
        amount,
        category,
        date: today,
        note: Some(format!("Auto parsed from {}", file_name)),
        source: TransactionSource::Receipt,
    };

    Ok(ReceiptExtraction {
        transaction,
        amount_source,
        fingerprint: hex::encode(digest),
    })
}

/// First decimal number in the name, if it is positive
pub fn amount_from_name(file_name: &str) -> Result<Option<Decimal>> {
    let found = amount_regex()?
        .find(file_name)
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
        .filter(|amount| *amount > Decimal::ZERO);
    Ok(found)
}

fn fallback_amount(digest: &[u8]) -> Decimal {
    let cents = FALLBACK_MIN_CENTS + leading_u64(digest) % FALLBACK_SPAN_CENTS;
    Decimal::new(cents as i64, 2)
}

fn category_from_digest(digest: &[u8]) -> Category {
    let choices = Category::spending();
    let index = digest.get(8).copied().unwrap_or(0) as usize % choices.len();
    choices[index]
}

fn leading_u64(digest: &[u8]) -> u64 {
    digest
        .iter()
        .take(8)
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}
