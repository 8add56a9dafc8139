//! Locale decimal and group separators.
//!
//! The separators are discovered once by formatting [`PROBE`] through a
//! [`LocaleFacility`] and reading the characters at fixed offsets. The result
//! is immutable and can be injected into a [`NumberFormat`](crate::NumberFormat)
//! or installed process-wide with [`LocaleSeparators::init_global`].

mod host;
#[cfg(windows)]
mod win32;

pub use host::{
    FixedLocale, HostLocale, LocaleFacility, LocaleId, NumberConvention, convention_for,
    user_locale_from,
};

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Probe value formatted to discover the separators.
pub const PROBE: &str = "1000.00";

/// Char offset of the group separator in the formatted probe (`1,000.00`).
const GROUP_OFFSET: usize = 1;
/// Char offset of the decimal separator in the formatted probe (`1,000.00`).
const DECIMAL_OFFSET: usize = 5;
/// Expected char length of the formatted probe.
const PROBE_LEN: usize = 8;

static GLOBAL: OnceLock<LocaleSeparators> = OnceLock::new();

/// Locale discovery errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Locale facility cannot format {0:?}")]
    InvalidProbe(String),
    #[error("Formatted probe {0:?} does not have the shape of 1,000.00")]
    UnexpectedProbeShape(String),
    #[error("No number convention known for locale {0}")]
    UnknownLocale(String),
    #[error("Host locale call failed: {0}")]
    Host(String),
    #[error("Invalid separators: decimal {decimal:?}, group {group:?}")]
    InvalidSeparators { decimal: char, group: char },
}

/// Decimal and group separator characters of the active locale.
///
/// The two are distinct and neither is a digit or a minus sign, so formatted
/// numbers parse back unambiguously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeparatorFields")]
pub struct LocaleSeparators {
    pub decimal: char,
    pub group: char,
}

#[derive(Deserialize)]
struct SeparatorFields {
    decimal: char,
    group: char,
}

impl TryFrom<SeparatorFields> for LocaleSeparators {
    type Error = LocaleError;

    fn try_from(fields: SeparatorFields) -> Result<Self, Self::Error> {
        Self::try_new(fields.decimal, fields.group)
    }
}

impl Default for LocaleSeparators {
    fn default() -> Self {
        Self {
            decimal: '.',
            group: ',',
        }
    }
}

impl LocaleSeparators {
    /// Separators known to be valid, e.g. constants.
    ///
    /// Use [`try_new`](Self::try_new) for separators from outside the program.
    pub fn new(decimal: char, group: char) -> Self {
        Self { decimal, group }
    }

    /// Validated separators: distinct, and neither a digit nor `-`.
    pub fn try_new(decimal: char, group: char) -> Result<Self, LocaleError> {
        let reserved = |c: char| c.is_ascii_digit() || c == '-';
        if reserved(decimal) || reserved(group) || decimal == group {
            return Err(LocaleError::InvalidSeparators { decimal, group });
        }
        Ok(Self { decimal, group })
    }

    /// Discover the separators of `locale` by formatting [`PROBE`].
    pub fn probe(facility: &dyn LocaleFacility, locale: &LocaleId) -> Result<Self, LocaleError> {
        let formatted = facility.format_number(PROBE, locale)?;
        Self::from_probe_output(&formatted)
    }

    /// Extract the separators from a formatted probe, checking that it has the
    /// `1,000.00` shape the offsets assume.
    pub fn from_probe_output(formatted: &str) -> Result<Self, LocaleError> {
        let chars: Vec<char> = formatted.chars().collect();
        let shape_error = || LocaleError::UnexpectedProbeShape(formatted.to_string());

        if chars.len() != PROBE_LEN {
            return Err(shape_error());
        }
        let digits_match = chars
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != GROUP_OFFSET && *i != DECIMAL_OFFSET)
            .map(|(_, c)| *c)
            .eq("100000".chars());
        if !digits_match {
            return Err(shape_error());
        }
        Self::try_new(chars[DECIMAL_OFFSET], chars[GROUP_OFFSET]).map_err(|_| shape_error())
    }

    /// Install the process-wide separators, probing the facility's user locale.
    ///
    /// Only the first successful call installs a value; later calls return it
    /// without probing.
    pub fn init_global(facility: &dyn LocaleFacility) -> Result<&'static Self, LocaleError> {
        if let Some(separators) = GLOBAL.get() {
            return Ok(separators);
        }
        let locale = facility.user_default_locale();
        let separators = Self::probe(facility, &locale)?;
        log::debug!(
            "Locale {}: decimal separator {:?}, group separator {:?}",
            locale,
            separators.decimal,
            separators.group
        );
        Ok(GLOBAL.get_or_init(|| separators))
    }

    /// The process-wide separators, discovered from [`HostLocale`] on first use.
    ///
    /// # Panics
    ///
    /// Panics if the host locale cannot be probed. Formatting has no defined
    /// meaning without separators, so this is a fatal startup error.
    pub fn global() -> &'static Self {
        match Self::init_global(&HostLocale::new()) {
            Ok(separators) => separators,
            Err(e) => panic!("Failed to discover locale separators: {e}"),
        }
    }

    /// The decimal separator as a string.
    pub fn decimal_str(&self) -> String {
        self.decimal.to_string()
    }

    /// The group separator as a string.
    pub fn group_str(&self) -> String {
        self.group.to_string()
    }
}
