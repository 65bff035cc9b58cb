//! Planner configuration
//!
//! Tunable constants for the plan calculator: the debt payment cap, the
//! emergency fund range, and how strictly balances are validated.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for override in data dir (~/.local/share/finplan/config/planner.toml)
//!    or an explicitly given path
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/planner.toml");

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannerConfig {
    /// Share of disposable income the debt payment may take
    pub debt_payment_cap_ratio: f64,
    /// Lower bound of the emergency fund, in months of expenses
    pub emergency_fund_min_months: u32,
    /// Upper bound of the emergency fund, in months of expenses
    pub emergency_fund_max_months: u32,
    /// Reject zero savings and zero debt as well
    pub require_positive_balances: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            debt_payment_cap_ratio: 0.3,
            emergency_fund_min_months: 3,
            emergency_fund_max_months: 6,
            require_positive_balances: false,
        }
    }
}

impl PlannerConfig {
    /// Load from the default override location, else the embedded defaults
    pub fn load() -> Result<Self> {
        load_config(None)
    }

    /// Load from `path` if it exists, else the embedded defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config(Some(path))
    }

    /// The embedded defaults
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }

    /// Parse config from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Serialize back to the config file layout
    pub fn to_toml(&self) -> Result<String> {
        let raw = RawConfig {
            debt: Some(RawDebt {
                payment_cap_ratio: Some(self.debt_payment_cap_ratio),
            }),
            emergency_fund: Some(RawEmergencyFund {
                min_months: Some(self.emergency_fund_min_months),
                max_months: Some(self.emergency_fund_max_months),
            }),
            validation: Some(RawValidation {
                require_positive_balances: Some(self.require_positive_balances),
            }),
        };
        toml::to_string(&raw).map_err(|e| Error::Config(format!("Failed to write config: {}", e)))
    }

    fn validate(&self) -> Result<()> {
        let ratio = self.debt_payment_cap_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(Error::Config(format!(
                "debt.payment_cap_ratio must be in (0, 1], got {}",
                ratio
            )));
        }
        if self.emergency_fund_min_months == 0 {
            return Err(Error::Config(
                "emergency_fund.min_months must be at least 1".to_string(),
            ));
        }
        if self.emergency_fund_min_months > self.emergency_fund_max_months {
            return Err(Error::Config(format!(
                "emergency_fund.min_months ({}) exceeds max_months ({})",
                self.emergency_fund_min_months, self.emergency_fund_max_months
            )));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("finplan").join("config").join("planner.toml"))
}

/// Load configuration (override first, then default)
fn load_config(override_path: Option<&Path>) -> Result<PlannerConfig> {
    let path = match override_path {
        Some(path) => {
            if !path.exists() {
                warn!(path = %path.display(), "Config file not found, using defaults");
            }
            Some(path.to_path_buf())
        }
        None => default_config_path(),
    };

    let content = match path {
        Some(ref path) if path.exists() => {
            debug!(path = %path.display(), "Loading planner config");
            fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
        }
        _ => DEFAULT_CONFIG.to_string(),
    };

    parse_config(&content)
}

/// Raw config structure for TOML parsing
#[derive(Debug, Serialize, Deserialize)]
struct RawConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    debt: Option<RawDebt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emergency_fund: Option<RawEmergencyFund>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<RawValidation>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawDebt {
    payment_cap_ratio: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawEmergencyFund {
    min_months: Option<u32>,
    max_months: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawValidation {
    require_positive_balances: Option<bool>,
}

fn parse_config(content: &str) -> Result<PlannerConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = PlannerConfig::default();

    if let Some(debt) = raw.debt {
        if let Some(ratio) = debt.payment_cap_ratio {
            config.debt_payment_cap_ratio = ratio;
        }
    }

    if let Some(fund) = raw.emergency_fund {
        if let Some(min) = fund.min_months {
            config.emergency_fund_min_months = min;
        }
        if let Some(max) = fund.max_months {
            config.emergency_fund_max_months = max;
        }
    }

    if let Some(validation) = raw.validation {
        if let Some(strict) = validation.require_positive_balances {
            config.require_positive_balances = strict;
        }
    }

    config.validate()?;
    Ok(config)
}
