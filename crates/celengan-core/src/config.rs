//! Advisor configuration
//!
//! Controls how recommendations are presented: currency symbol and digit
//! grouping, the cadence used when none is given, and message markup.
//!
//! ## Configuration Resolution
//!
//! 1. An explicit path (`--config`), which must exist
//! 2. The override in the data dir (~/.local/share/celengan/config/advisor.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::advisor::{Cadence, CurrencyFormat, Markup};
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/advisor.toml");

/// Resolved advisor settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub currency: CurrencyFormat,
    pub default_cadence: Cadence,
    pub markup: Markup,
}

impl AdvisorConfig {
    /// Load from `path` if given, else the override file, else the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading advisor config");
                fs::read_to_string(path)?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(default_path) => {
                    debug!(path = %default_path.display(), "Loading advisor config override");
                    fs::read_to_string(&default_path)?
                }
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// Parse a TOML document; keys it leaves out keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("celengan").join("config").join("advisor.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    currency: Option<RawCurrency>,
    advisor: Option<RawAdvisor>,
    display: Option<RawDisplay>,
}

#[derive(Debug, Deserialize)]
struct RawCurrency {
    symbol: Option<String>,
    grouping_separator: Option<String>,
    symbol_spacing: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawAdvisor {
    default_cadence: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    markup: Option<String>,
}

fn parse_config(content: &str) -> Result<AdvisorConfig> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::InvalidData(format!("Invalid config TOML: {}", e)))?;

    let mut config = AdvisorConfig::default();

    if let Some(currency) = raw.currency {
        if let Some(symbol) = currency.symbol {
            config.currency.symbol = symbol;
        }
        if let Some(separator) = currency.grouping_separator {
            config.currency.grouping_separator = separator;
        }
        if let Some(spacing) = currency.symbol_spacing {
            config.currency.symbol_spacing = spacing;
        }
    }

    if let Some(cadence) = raw.advisor.and_then(|a| a.default_cadence) {
        config.default_cadence = cadence.parse().map_err(Error::InvalidData)?;
    }

    if let Some(markup) = raw.display.and_then(|d| d.markup) {
        config.markup = markup.parse().map_err(Error::InvalidData)?;
    }

    Ok(config)
}
