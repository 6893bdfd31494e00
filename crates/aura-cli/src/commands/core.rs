//! Shared command utilities
//!
//! This module contains:
//! - `Session` - ledger, config and reference date for one invocation
//! - `open_session` - build a session from the global flags
//! - `resolve_period` - period flag with config fallback

use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use aura_core::validate::parse_date;
use aura_core::{AuraConfig, Ledger, Period};
use chrono::{Local, NaiveDate};

/// Everything a command needs. Lives for a single CLI invocation.
pub struct Session {
    pub ledger: Ledger,
    pub config: AuraConfig,
    pub today: NaiveDate,
}

impl Session {
    pub fn new(ledger: Ledger, config: AuraConfig, today: NaiveDate) -> Self {
        Self {
            ledger,
            config,
            today,
        }
    }
}

/// Load config and data for this run. Without `--data` the sample ledger is
/// used.
pub fn open_session(
    data: Option<&Path>,
    config: Option<&Path>,
    today: Option<&str>,
) -> Result<Session> {
    let today = resolve_today(today)?;
    let config = AuraConfig::load(config).context("Failed to load config")?;

    let ledger = match data {
        Some(path) => Ledger::load(path)
            .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
        None => {
            tracing::debug!("No --data given, using sample ledger");
            Ledger::sample(today)
        }
    };

    tracing::debug!(
        transactions = ledger.transactions().len(),
        goals = ledger.goals().len(),
        %today,
        "Session ready"
    );

    Ok(Session::new(ledger, config, today))
}

/// `--today` if given, otherwise the local date
pub fn resolve_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => Ok(parse_date(raw)?),
        None => Ok(Local::now().date_naive()),
    }
}

/// `--period` if given, otherwise the configured default
pub fn resolve_period(raw: Option<&str>, config: &AuraConfig) -> Result<Period> {
    match raw {
        Some(raw) => Period::from_str(raw).map_err(|e| anyhow!(e)),
        None => Ok(config.dashboard.default_period),
    }
}
