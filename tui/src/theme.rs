//! Theme color handling.
//!
//! The theme is a single user-chosen phosphor color stored as a loose hex
//! string; everything on screen (text, cursor, borders, hints) derives
//! from it.

use ratatui::style::Color;

/// Preset swatches offered in the settings overlay, classic green first.
pub const PRESETS: [&str; 6] = [
    "#00ff00", // phosphor green
    "#ffb000", // amber
    "#33ccff", // cyan
    "#ff2b4a", // red
    "#ff00ff", // magenta
    "#e0e0e0", // paper white
];

/// Font families offered in the settings overlay.
pub const FONT_CHOICES: [&str; 6] = [
    "Courier",
    "Roboto Mono",
    "Source Code Pro",
    "Fira Code",
    "VT323",
    "IBM Plex Mono",
];

/// Parse a `#rgb`, `#rrggbb` or `#rrggbbaa` hex color (alpha ignored).
///
/// The storage validation is looser than this on purpose; stored strings
/// that don't parse simply render with the default green.
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let digits = raw.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok();
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            Some(Color::Rgb(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(Color::Rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Dimmed companion color for borders, footers and hints.
pub fn dim(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r / 3, g / 3, b / 3),
        _ => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        assert_eq!(parse_hex_color("#00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#ffb000"), Some(Color::Rgb(255, 176, 0)));
        assert_eq!(parse_hex_color("#ABCDEF"), Some(Color::Rgb(171, 205, 239)));
    }

    #[test]
    fn test_parse_short_form_expands() {
        assert_eq!(parse_hex_color("#0f0"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_ignores_alpha() {
        assert_eq!(parse_hex_color("#00ff0080"), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hex_color("00ff00"), None);
        assert_eq!(parse_hex_color("#00ff0"), None);
        assert_eq!(parse_hex_color("#zzz"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_presets_all_parse() {
        for preset in PRESETS {
            assert!(parse_hex_color(preset).is_some(), "bad preset: {}", preset);
        }
    }

    #[test]
    fn test_dim_keeps_hue_direction() {
        assert_eq!(dim(Color::Rgb(0, 255, 0)), Color::Rgb(0, 85, 0));
        assert_eq!(dim(Color::Green), Color::DarkGray);
    }
}
