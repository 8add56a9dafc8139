//! Locale-aware number formatting and parsing.
//!
//! Values are first rendered in canonical form (`.` decimal point, no
//! grouping, `NaN`/`+Inf`/`-Inf` for non-finite values), then localized with
//! the separators held by a [`NumberFormat`].

mod rational;

pub use rational::{Rational, RationalError};

use crate::locale::LocaleSeparators;
use std::num::ParseFloatError;
use thiserror::Error;

/// Canonical renderings of non-finite values, passed through unlocalized.
const SENTINELS: [&str; 3] = ["NaN", "-Inf", "+Inf"];

/// Failure to parse user input as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid number {text:?}: {source}")]
pub struct ParseNumberError {
    /// The input as given, before trimming.
    pub text: String,
    #[source]
    pub source: ParseFloatError,
}

/// Formats and parses numbers with a fixed set of separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFormat {
    separators: LocaleSeparators,
}

impl NumberFormat {
    pub fn new(separators: LocaleSeparators) -> Self {
        Self { separators }
    }

    /// Formatter using the process-wide separators.
    pub fn global() -> Self {
        Self::new(*LocaleSeparators::global())
    }

    pub fn separators(&self) -> LocaleSeparators {
        self.separators
    }

    /// Format `value` with `precision` fractional digits, without grouping.
    pub fn format(&self, value: f64, precision: usize) -> String {
        self.format_with(value, precision, false)
    }

    /// Format `value` with `precision` fractional digits and group separators.
    pub fn format_grouped(&self, value: f64, precision: usize) -> String {
        self.format_with(value, precision, true)
    }

    pub fn format_with(&self, value: f64, precision: usize, grouped: bool) -> String {
        self.localize(&canonical_float(value, precision), grouped)
    }

    /// Format the exact value of `value` with `precision` fractional digits.
    pub fn format_rational(&self, value: &Rational, precision: usize) -> String {
        self.localize(&value.float_string(precision), false)
    }

    pub fn format_rational_grouped(&self, value: &Rational, precision: usize) -> String {
        self.localize(&value.float_string(precision), true)
    }

    /// Parse user input written in this format's convention.
    ///
    /// Group separators are ignored wherever they appear.
    pub fn parse(&self, text: &str) -> Result<f64, ParseNumberError> {
        let probe = self.format_grouped(1000.0, 2);
        let is_separator = |c: &char| !c.is_ascii_digit();
        let group = probe.chars().find(is_separator);
        let decimal = probe.chars().rev().find(is_separator);

        let mut canonical = text.trim().to_string();
        if let Some(group) = group {
            canonical = canonical.replace(group, "");
        }
        if let Some(decimal) = decimal {
            canonical = canonical.replace(decimal, ".");
        }

        canonical.parse::<f64>().map_err(|source| ParseNumberError {
            text: text.to_string(),
            source,
        })
    }

    /// Localize a canonical decimal string, optionally grouping the integer part.
    fn localize(&self, canonical: &str, grouped: bool) -> String {
        if SENTINELS.contains(&canonical) {
            return canonical.to_string();
        }

        let (sign, digits) = match canonical.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", canonical),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits, None),
        };

        let mut out = String::with_capacity(canonical.len() + int_part.len() / 3 * 3);
        out.push_str(sign);
        if grouped {
            push_grouped(&mut out, int_part, self.separators.group);
        } else {
            out.push_str(int_part);
        }
        if let Some(frac_part) = frac_part {
            out.push(self.separators.decimal);
            out.push_str(frac_part);
        }
        out
    }
}

/// Append `digits` split into a leading remainder group and three-digit
/// groups, with `group` between adjacent groups.
fn push_grouped(out: &mut String, digits: &str, group: char) {
    let lead = digits.len() % 3;
    out.push_str(&digits[..lead]);

    let mut start = lead;
    while start < digits.len() {
        if start > 0 {
            out.push(group);
        }
        out.push_str(&digits[start..start + 3]);
        start += 3;
    }
}

/// Fixed-point rendering with `.` as decimal point.
fn canonical_float(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "+Inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        format!("{value:.precision$}")
    }
}

/// Format with the process-wide separators, without grouping.
pub fn format_float(value: f64, precision: usize) -> String {
    NumberFormat::global().format(value, precision)
}

/// Format with the process-wide separators and grouping.
pub fn format_float_grouped(value: f64, precision: usize) -> String {
    NumberFormat::global().format_grouped(value, precision)
}

/// Parse with the process-wide separators.
pub fn parse_float(text: &str) -> Result<f64, ParseNumberError> {
    NumberFormat::global().parse(text)
}
