//! Tessel Application
//!
//! Command-line front end that formats, parses and sorts numbers with the
//! locale conventions of `tessel-core`.

mod commands;
mod config;

pub use commands::{Command, RunSummary, run};
pub use config::{AppConfig, CONFIG_ENV, ConfigError};

use thiserror::Error;

/// Errors that end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage: tessel [--config <path>] <format|sort>")]
    Usage,
    #[error("{0}")]
    Command(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Locale error: {0}")]
    Locale(#[from] tessel_core::LocaleError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
