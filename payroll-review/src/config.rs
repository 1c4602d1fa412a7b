//! # Dashboard Configuration
//!
//! YAML-backed settings for the payroll review engine. The file path comes
//! from `PAYROLL_REVIEW_CONFIG` and defaults to `payroll_review.yaml`.
//!
//! ## YAML Format
//!
//! ```yaml
//! currency: GBP
//! roster:
//!   size: 100
//!   seed: 42
//!   period_start: 2025-03-01
//! tag_rules:
//!   salary_change_threshold: 100.0
//!   net_difference_percent: 5.0
//! filter_rules:
//!   equality_tolerance: 0.01
//! ```
//!
//! Every section is optional; missing keys fall back to the defaults above.

use anyhow::{anyhow, bail, Context, Result};
use iso_currency::Currency;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::{FilterRules, RosterConfig, TagRules};

pub const CONFIG_PATH_ENV: &str = "PAYROLL_REVIEW_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "payroll_review.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// ISO 4217 currency code used for display
    pub currency: String,
    pub roster: RosterConfig,
    pub tag_rules: TagRules,
    pub filter_rules: FilterRules,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency: "GBP".to_string(),
            roster: RosterConfig::default(),
            tag_rules: TagRules::default(),
            filter_rules: FilterRules::default(),
        }
    }
}

impl DashboardConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let yaml_content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: DashboardConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        config.validate()?;
        debug!("Loaded dashboard config from {:?}", path);
        Ok(config)
    }

    /// Load from the path named by `PAYROLL_REVIEW_CONFIG`
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        self.currency()?;
        if self.roster.size == 0 {
            bail!("roster.size must be greater than zero");
        }
        ensure_non_negative("tag_rules.salary_change_threshold", self.tag_rules.salary_change_threshold)?;
        ensure_non_negative("tag_rules.net_difference_percent", self.tag_rules.net_difference_percent)?;
        ensure_non_negative("filter_rules.equality_tolerance", self.filter_rules.equality_tolerance)?;
        Ok(())
    }

    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency.to_uppercase())
            .ok_or_else(|| anyhow!("Unknown currency code '{}'", self.currency))
    }
}

fn ensure_non_negative(key: &str, value: f64) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        bail!("{} must be non-negative, got {}", key, value);
    }
    Ok(())
}
