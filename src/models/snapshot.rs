//! Persisted project snapshot and editor settings

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_AUTOSAVE: &str = "30";
pub const DEFAULT_THEME: &str = "light";
pub const DEFAULT_EXTENSION_NAME: &str = "My Chrome Extension";
pub const DEFAULT_EXTENSION_VERSION: &str = "1.0.0";

/// What the persistence collaborator stores. Only `files` has to survive a
/// round trip exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub files: BTreeMap<String, String>,

    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Autosave interval in seconds, kept as the text the user typed.
    pub autosave: String,
    pub theme: String,
    pub default_name: String,
    pub default_version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            autosave: DEFAULT_AUTOSAVE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            default_name: DEFAULT_EXTENSION_NAME.to_string(),
            default_version: DEFAULT_EXTENSION_VERSION.to_string(),
        }
    }
}

impl Settings {
    /// Replace blank values with the defaults.
    pub fn with_fallbacks(self) -> Self {
        let defaults = Settings::default();
        let pick = |value: String, fallback: String| if value.is_empty() { fallback } else { value };
        Self {
            autosave: pick(self.autosave, defaults.autosave),
            theme: pick(self.theme, defaults.theme),
            default_name: pick(self.default_name, defaults.default_name),
            default_version: pick(self.default_version, defaults.default_version),
        }
    }

    /// `None` disables autosave (zero, negative or non-numeric input).
    pub fn autosave_interval(&self) -> Option<Duration> {
        parse_leading_int(&self.autosave)
            .filter(|secs| *secs > 0)
            .map(|secs| Duration::from_secs(secs as u64))
    }
}

/// Integer prefix of a string after leading whitespace, e.g. `" 45s"` -> 45.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| n * sign)
}
