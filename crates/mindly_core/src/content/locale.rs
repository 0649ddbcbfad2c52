//! Locale code normalization.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static LOCALE_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)([a-z]{2,3})(?:[-_][a-z0-9]{1,8})*$").expect("valid locale tag regex")
});

/// Locales with bundled quote and activity tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    En,
    Vi,
}

impl Locale {
    pub const DEFAULT: Self = Self::En;

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }

    /// Resolves a BCP 47-style tag (`vi-VN`, `en_US`, `EN`) to a bundled
    /// locale. Unsupported or malformed tags resolve to `Locale::DEFAULT`.
    pub fn resolve(tag: &str) -> Self {
        let Some(captures) = LOCALE_TAG_RE.captures(tag.trim()) else {
            return Self::DEFAULT;
        };
        match captures[1].to_ascii_lowercase().as_str() {
            "vi" => Self::Vi,
            "en" => Self::En,
            _ => Self::DEFAULT,
        }
    }
}

/// Lowercase code of the bundled locale `tag` resolves to.
pub fn normalize_locale(tag: &str) -> &'static str {
    Locale::resolve(tag).code()
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}
