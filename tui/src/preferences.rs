//! User preferences persistence.
//!
//! Stores user preferences in `~/.ponyterm/preferences.json`; the source
//! text lives beside it in `~/.ponyterm/source.txt`. Every accepted settings
//! change is written through immediately. A missing or unreadable store
//! degrades to the hardcoded defaults, and save failures are swallowed by
//! callers (the worst case is a stale display, never a crash).

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Accepted bounds for the reveal speed (characters per key press).
pub const SPEED_RANGE: RangeInclusive<u16> = 1..=20;
/// Accepted bounds for the display font size, in pixels.
pub const FONT_SIZE_RANGE: RangeInclusive<u16> = 8..=40;

/// User preferences.
///
/// Field names double as the storage keys; each falls back to its own
/// hardcoded default when absent.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Preferences {
    #[serde(default = "default_speed")]
    pub speed: u16,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_font_size")]
    pub font_size: u16,
    #[serde(default = "default_font")]
    pub font: String,
}

fn default_speed() -> u16 {
    3
}

fn default_color() -> String {
    "#00ff00".to_string()
}

fn default_font_size() -> u16 {
    13
}

fn default_font() -> String {
    "Courier".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            color: default_color(),
            font_size: default_font_size(),
            font: default_font(),
        }
    }
}

/// Parse and bounds-check a numeric settings input.
///
/// Returns `None` for non-numeric or out-of-range input; the caller keeps
/// the prior value and persists nothing.
pub fn validate_numeric(raw: &str, range: &RangeInclusive<u16>) -> Option<u16> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let value: u16 = raw.parse().ok()?;
    range.contains(&value).then_some(value)
}

pub fn validate_speed(raw: &str) -> Option<u16> {
    validate_numeric(raw, &SPEED_RANGE)
}

pub fn validate_font_size(raw: &str) -> Option<u16> {
    validate_numeric(raw, &FONT_SIZE_RANGE)
}

/// Loose hex-color check: `#` followed by 3 to 9 hex digits.
pub fn is_hex_color(raw: &str) -> bool {
    let Some(digits) = raw.strip_prefix('#') else {
        return false;
    };
    (3..=9).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Get the preferences file path (`~/.ponyterm/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".ponyterm").join("preferences.json"))
}

/// Get the saved source text path (`~/.ponyterm/source.txt`).
pub fn source_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".ponyterm").join("source.txt"))
}

/// Load preferences from disk.
///
/// Returns default preferences if the file doesn't exist or can't be read;
/// fields missing from the file get their individual defaults.
pub fn load_preferences() -> Preferences {
    let path = match preferences_path() {
        Ok(p) => p,
        Err(_) => return Preferences::default(),
    };

    if !path.exists() {
        return Preferences::default();
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Preferences::default(),
    };

    serde_json::from_str(&contents).unwrap_or_default()
}

/// Save preferences to disk.
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    let path = preferences_path()?;

    // Ensure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(&path, json)?;

    Ok(())
}

/// Load the persisted source text, if any.
///
/// Absent, unreadable or empty files count as "no saved source"; the
/// startup fetch kicks in instead.
pub fn load_source() -> Option<String> {
    let path = source_path().ok()?;
    let text = std::fs::read_to_string(path).ok()?;
    if text.is_empty() { None } else { Some(text) }
}

/// Save the source text to disk.
pub fn save_source(text: &str) -> Result<(), PreferencesError> {
    let path = source_path()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&path, text)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_speed_in_range() {
        assert_eq!(validate_speed("3"), Some(3));
        assert_eq!(validate_speed("1"), Some(1));
        assert_eq!(validate_speed("20"), Some(20));
        assert_eq!(validate_speed(" 7 "), Some(7));
    }

    #[test]
    fn test_validate_speed_rejects_out_of_range() {
        // the classic: a huge value must be dropped, not clamped
        assert_eq!(validate_speed("999"), None);
        assert_eq!(validate_speed("0"), None);
        assert_eq!(validate_speed("21"), None);
    }

    #[test]
    fn test_validate_speed_rejects_non_numeric() {
        assert_eq!(validate_speed(""), None);
        assert_eq!(validate_speed("fast"), None);
        assert_eq!(validate_speed("3x"), None);
        assert_eq!(validate_speed("-3"), None);
        assert_eq!(validate_speed("3.5"), None);
    }

    #[test]
    fn test_validate_font_size() {
        assert_eq!(validate_font_size("13"), Some(13));
        assert_eq!(validate_font_size("8"), Some(8));
        assert_eq!(validate_font_size("40"), Some(40));
        assert_eq!(validate_font_size("7"), None);
        assert_eq!(validate_font_size("41"), None);
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#00ff00"));
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#ff00ff80"));
        assert!(is_hex_color("#ABCDEF"));

        assert!(!is_hex_color("00ff00"));
        assert!(!is_hex_color("#ff"));
        assert!(!is_hex_color("#0123456789"));
        assert!(!is_hex_color("#gg0000"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_partial_store_falls_back_per_field() {
        // only a color was persisted; everything else gets its default
        let prefs: Preferences = serde_json::from_str(r##"{"color": "#ff00ff"}"##).unwrap();
        assert_eq!(prefs.color, "#ff00ff");
        assert_eq!(prefs.speed, 3);
        assert_eq!(prefs.font_size, 13);
        assert_eq!(prefs.font, "Courier");
    }

    #[test]
    fn test_empty_store_is_all_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        let defaults = Preferences::default();
        assert_eq!(prefs.speed, defaults.speed);
        assert_eq!(prefs.color, defaults.color);
        assert_eq!(prefs.font_size, defaults.font_size);
        assert_eq!(prefs.font, defaults.font);
    }

    #[test]
    fn test_preferences_round_trip() {
        let prefs = Preferences {
            speed: 5,
            color: "#ffb000".to_string(),
            font_size: 16,
            font: "VT323".to_string(),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back.speed, 5);
        assert_eq!(back.color, "#ffb000");
        assert_eq!(back.font_size, 16);
        assert_eq!(back.font, "VT323");
    }
}
