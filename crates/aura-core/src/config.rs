//! Aura configuration
//!
//! Advisor thresholds and dashboard defaults are read from TOML.
//!
//! ## Configuration Resolution
//!
//! 1. An explicit path (the CLI's `--config`), if given
//! 2. Override in the config dir (~/.config/aura/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::advisor::AdvisorConfig;
use crate::error::{Error, Result};
use crate::models::{Period, WeekPolicy};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/aura.toml");

/// Dashboard presentation defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub default_period: Period,
    pub week_policy: WeekPolicy,
}

/// Resolved configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuraConfig {
    pub dashboard: DashboardConfig,
    pub advisor: AdvisorConfig,
}

impl AuraConfig {
    /// Load with the usual resolution order
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        load_config(explicit)
    }

    /// The embedded defaults
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("aura").join("config.toml"))
}

/// Load configuration (explicit path, then override, then default).
///
/// An explicit path that does not exist is an error; a missing override in
/// the config dir is not.
pub fn load_config(explicit: Option<&Path>) -> Result<AuraConfig> {
    let content = match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading config");
            fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?
        }
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading config override");
                fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?
            }
            None => {
                tracing::debug!("Using embedded default config");
                return AuraConfig::embedded();
            }
        },
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    dashboard: Option<RawDashboard>,
    advisor: Option<RawAdvisor>,
}

#[derive(Debug, Deserialize)]
struct RawDashboard {
    default_period: Option<String>,
    week_policy: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAdvisor {
    goal_risk_days: Option<i64>,
    goal_risk_progress: Option<f64>,
    savings_rate_target: Option<f64>,
    top_category_min_share: Option<f64>,
}

/// Parse config from TOML content
pub fn parse_config(content: &str) -> Result<AuraConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = AuraConfig::default();

    if let Some(dashboard) = raw.dashboard {
        if let Some(period) = dashboard.default_period {
            config.dashboard.default_period = Period::from_str(&period).map_err(Error::Config)?;
        }
        if let Some(policy) = dashboard.week_policy {
            config.dashboard.week_policy = WeekPolicy::from_str(&policy).map_err(Error::Config)?;
        }
    }

    if let Some(advisor) = raw.advisor {
        if let Some(days) = advisor.goal_risk_days {
            if days < 0 {
                return Err(Error::Config(format!(
                    "goal_risk_days must not be negative, got {}",
                    days
                )));
            }
            config.advisor.goal_risk_days = days;
        }
        if let Some(value) = advisor.goal_risk_progress {
            config.advisor.goal_risk_progress = ratio("goal_risk_progress", value)?;
        }
        if let Some(value) = advisor.savings_rate_target {
            config.advisor.savings_rate_target = ratio("savings_rate_target", value)?;
        }
        if let Some(value) = advisor.top_category_min_share {
            config.advisor.top_category_min_share = ratio("top_category_min_share", value)?;
        }
    }

    Ok(config)
}

/// Convert a TOML float into an exact ratio in `[0, 1]`
fn ratio(key: &str, value: f64) -> Result<Decimal> {
    // Going through the shortest decimal repr keeps 0.2 as exactly 0.2
    let decimal = Decimal::from_str(&value.to_string())
        .map_err(|_| Error::Config(format!("{} is not a valid number: {}", key, value)))?;

    if decimal < Decimal::ZERO || decimal > Decimal::ONE {
        return Err(Error::Config(format!(
            "{} must be between 0 and 1, got {}",
            key, value
        )));
    }
    Ok(decimal)
}
