//! Application configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tessel_core::{HostLocale, LocaleError, LocaleId, LocaleSeparators, NumberFormat, SortOrder};
use thiserror::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "TESSEL_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Number formatting configuration, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Locale to probe instead of the environment's (e.g. `de-DE`).
    pub locale: Option<String>,
    /// Separators to use without probing any locale.
    pub separators: Option<LocaleSeparators>,
    /// Fractional digits in formatted output.
    pub precision: usize,
    /// Whether formatted output uses group separators.
    pub grouped: bool,
    pub order: SortOrder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            separators: None,
            precision: 2,
            grouped: true,
            order: SortOrder::Ascending,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// The formatter this configuration selects.
    ///
    /// Explicit separators win over a configured locale, which wins over the
    /// environment. Locale-derived separators become the process-wide ones.
    pub fn number_format(&self) -> Result<NumberFormat, LocaleError> {
        if let Some(LocaleSeparators { decimal, group }) = self.separators {
            return Ok(NumberFormat::new(LocaleSeparators::try_new(decimal, group)?));
        }
        let facility = match &self.locale {
            Some(locale) => HostLocale::with_locale(LocaleId::new(locale)),
            None => HostLocale::new(),
        };
        let separators = LocaleSeparators::init_global(&facility)?;
        Ok(NumberFormat::new(*separators))
    }
}
