//! Host locale-formatting facilities.
//!
//! The separators are discovered by asking a [`LocaleFacility`] to format a
//! fixed probe value. [`HostLocale`] answers from the operating system,
//! [`FixedLocale`] from an injected convention.

use super::LocaleError;
use std::fmt;

/// Identifier of a regional convention, in `language-REGION` form (e.g. `de-DE`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId(String);

impl LocaleId {
    /// The locale used when the environment names none.
    pub const DEFAULT: &'static str = "en-US";

    /// Create a locale ID, normalizing POSIX spellings like `de_DE.UTF-8@euro`.
    pub fn new(name: &str) -> Self {
        let name = name.split(['.', '@']).next().unwrap_or_default().trim();
        match name {
            "" | "C" | "POSIX" => Self(Self::DEFAULT.to_string()),
            _ => Self(name.replace('_', "-")),
        }
    }

    /// The language part, e.g. `de` for `de-CH`.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocaleId {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Group and decimal characters of a regional number convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberConvention {
    pub group: char,
    pub decimal: char,
}

impl NumberConvention {
    pub const fn new(group: char, decimal: char) -> Self {
        Self { group, decimal }
    }

    /// Render a canonical decimal string (`-1234.5`) in this convention,
    /// grouping the integer part in threes.
    pub fn render(&self, value: &str) -> Result<String, LocaleError> {
        let invalid = || LocaleError::InvalidProbe(value.to_string());

        let (negative, digits) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits, None),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() || !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
            return Err(invalid());
        }

        let mut out = String::with_capacity(value.len() + int_part.len() / 3 * 3);
        if negative {
            out.push('-');
        }
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(self.group);
            }
            out.push(digit);
        }
        if let Some(frac_part) = frac_part {
            out.push(self.decimal);
            out.push_str(frac_part);
        }
        Ok(out)
    }
}

/// Built-in conventions keyed by locale ID, used where the host has no number
/// formatting API to ask. The first entry of a language is its fallback.
const CONVENTIONS: &[(&str, NumberConvention)] = &[
    ("en-US", NumberConvention::new(',', '.')),
    ("en-GB", NumberConvention::new(',', '.')),
    ("de-DE", NumberConvention::new('.', ',')),
    ("de-CH", NumberConvention::new('\u{2019}', '.')),
    ("fr-FR", NumberConvention::new('\u{202f}', ',')),
    ("fr-CA", NumberConvention::new('\u{a0}', ',')),
    ("es-ES", NumberConvention::new('.', ',')),
    ("es-MX", NumberConvention::new(',', '.')),
    ("it-IT", NumberConvention::new('.', ',')),
    ("nl-NL", NumberConvention::new('.', ',')),
    ("pt-BR", NumberConvention::new('.', ',')),
    ("pt-PT", NumberConvention::new('\u{a0}', ',')),
    ("da-DK", NumberConvention::new('.', ',')),
    ("nb-NO", NumberConvention::new('\u{a0}', ',')),
    ("sv-SE", NumberConvention::new('\u{a0}', ',')),
    ("fi-FI", NumberConvention::new('\u{a0}', ',')),
    ("cs-CZ", NumberConvention::new('\u{a0}', ',')),
    ("sk-SK", NumberConvention::new('\u{a0}', ',')),
    ("pl-PL", NumberConvention::new('\u{a0}', ',')),
    ("hu-HU", NumberConvention::new('\u{a0}', ',')),
    ("ro-RO", NumberConvention::new('.', ',')),
    ("el-GR", NumberConvention::new('.', ',')),
    ("tr-TR", NumberConvention::new('.', ',')),
    ("ru-RU", NumberConvention::new('\u{a0}', ',')),
    ("uk-UA", NumberConvention::new('\u{a0}', ',')),
    ("id-ID", NumberConvention::new('.', ',')),
    ("he-IL", NumberConvention::new(',', '.')),
    ("ja-JP", NumberConvention::new(',', '.')),
    ("ko-KR", NumberConvention::new(',', '.')),
    ("zh-CN", NumberConvention::new(',', '.')),
    ("th-TH", NumberConvention::new(',', '.')),
    ("hi-IN", NumberConvention::new(',', '.')),
];

/// Look up the built-in convention for a locale, falling back to the first
/// entry with the same language.
pub fn convention_for(locale: &LocaleId) -> Result<NumberConvention, LocaleError> {
    if let Some((_, convention)) = CONVENTIONS.iter().find(|(id, _)| *id == locale.as_str()) {
        return Ok(*convention);
    }
    let (id, convention) = CONVENTIONS
        .iter()
        .find(|(id, _)| id.split('-').next() == Some(locale.language()))
        .ok_or_else(|| LocaleError::UnknownLocale(locale.to_string()))?;
    log::debug!("Using number convention of {} for locale {}", id, locale);
    Ok(*convention)
}

/// Resolve the user's number locale with POSIX precedence: `LC_ALL`, then
/// `LC_NUMERIC`, then `LANG`. Empty values are skipped.
pub fn user_locale_from(lookup: impl Fn(&str) -> Option<String>) -> LocaleId {
    ["LC_ALL", "LC_NUMERIC", "LANG"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|value| !value.is_empty())
        .map(|value| LocaleId::new(&value))
        .unwrap_or_default()
}

/// The host's locale-aware number formatting, consulted only to discover
/// separators.
pub trait LocaleFacility {
    /// Format a canonical decimal string in the given locale.
    fn format_number(&self, value: &str, locale: &LocaleId) -> Result<String, LocaleError>;

    /// The locale the user has chosen for number formatting.
    fn user_default_locale(&self) -> LocaleId;
}

/// Locale facility of the host system.
///
/// On Windows numbers are formatted by `GetNumberFormatEx`, honoring the
/// user's regional settings. Elsewhere the user locale comes from the
/// environment (see [`user_locale_from`]) and is formatted with the built-in
/// conventions; a locale whose language is not among them is an error.
#[derive(Debug, Clone, Default)]
pub struct HostLocale {
    /// Overrides the user default locale when set.
    pub locale: Option<LocaleId>,
}

impl HostLocale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `locale` instead of the user default.
    pub fn with_locale(locale: LocaleId) -> Self {
        Self {
            locale: Some(locale),
        }
    }
}

#[cfg(windows)]
impl LocaleFacility for HostLocale {
    fn format_number(&self, value: &str, locale: &LocaleId) -> Result<String, LocaleError> {
        super::win32::format_number(value, locale)
    }

    fn user_default_locale(&self) -> LocaleId {
        if let Some(locale) = &self.locale {
            return locale.clone();
        }
        super::win32::user_default_locale().unwrap_or_else(|| {
            log::warn!("GetUserDefaultLocaleName failed, using {}", LocaleId::DEFAULT);
            LocaleId::default()
        })
    }
}

#[cfg(not(windows))]
impl LocaleFacility for HostLocale {
    fn format_number(&self, value: &str, locale: &LocaleId) -> Result<String, LocaleError> {
        convention_for(locale)?.render(value)
    }

    fn user_default_locale(&self) -> LocaleId {
        match &self.locale {
            Some(locale) => locale.clone(),
            None => user_locale_from(|key| std::env::var(key).ok()),
        }
    }
}

/// Locale facility that always formats with one convention.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocale(pub NumberConvention);

impl LocaleFacility for FixedLocale {
    fn format_number(&self, value: &str, _locale: &LocaleId) -> Result<String, LocaleError> {
        self.0.render(value)
    }

    fn user_default_locale(&self) -> LocaleId {
        LocaleId::default()
    }
}
