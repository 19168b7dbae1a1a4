//! Color palettes for the TUI, one per theme.
//!
//! The config file may override individual colors under `[colors.light]`
//! and `[colors.dark]`; anything not overridden comes from the built-in
//! palette for that theme. Which palette is active is decided by the
//! persisted theme preference, not by this config.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

use crate::domain::Theme;

/// Per-theme color overrides from the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    light: PaletteOverrides,
    dark: PaletteOverrides,
}

impl ColorConfig {
    pub fn palette(&self, theme: Theme) -> Palette {
        match theme {
            Theme::Light => self.light.apply(Palette::light()),
            Theme::Dark => self.dark.apply(Palette::dark()),
        }
    }
}

/// One resolved set of TUI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub active_border: Color,
    pub inactive_border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub reading_book: Color,
    pub finished_book: Color,
    pub favorite: Color,
    pub rating: Color,
    pub metadata: Color,
    pub status_fg: Color,
    pub status_bg: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            active_border: Color::Blue,
            inactive_border: Color::Gray,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            reading_book: Color::Black,
            finished_book: Color::DarkGray,
            favorite: Color::Magenta,
            rating: Color::Yellow,
            metadata: Color::DarkGray,
            status_fg: Color::Black,
            status_bg: Color::Gray,
        }
    }

    pub fn dark() -> Self {
        Self {
            active_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            reading_book: Color::White,
            finished_book: Color::DarkGray,
            favorite: Color::LightMagenta,
            rating: Color::Yellow,
            metadata: Color::Yellow,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PaletteOverrides {
    #[serde(deserialize_with = "deserialize_opt_color")]
    active_border: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    inactive_border: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    selection_bg: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    selection_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    reading_book: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    finished_book: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    favorite: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    rating: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    metadata: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    status_fg: Option<Color>,
    #[serde(deserialize_with = "deserialize_opt_color")]
    status_bg: Option<Color>,
}

impl PaletteOverrides {
    fn apply(&self, base: Palette) -> Palette {
        Palette {
            active_border: self.active_border.unwrap_or(base.active_border),
            inactive_border: self.inactive_border.unwrap_or(base.inactive_border),
            selection_bg: self.selection_bg.unwrap_or(base.selection_bg),
            selection_fg: self.selection_fg.unwrap_or(base.selection_fg),
            reading_book: self.reading_book.unwrap_or(base.reading_book),
            finished_book: self.finished_book.unwrap_or(base.finished_book),
            favorite: self.favorite.unwrap_or(base.favorite),
            rating: self.rating.unwrap_or(base.rating),
            metadata: self.metadata.unwrap_or(base.metadata),
            status_fg: self.status_fg.unwrap_or(base.status_fg),
            status_bg: self.status_bg.unwrap_or(base.status_bg),
        }
    }
}

/// Custom deserializer for Color that supports named colors and hex codes.
fn deserialize_opt_color<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map(Some).map_err(de::Error::custom)
}

/// Parse a color string into a ratatui Color.
///
/// Supports:
/// - Named colors: "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "Gray",
///   "DarkGray", "LightRed", "LightGreen", "LightYellow", "LightBlue", "LightMagenta",
///   "LightCyan", "White", "Reset"
/// - Hex colors: "#RRGGBB" or "#RGB"
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("Unknown color: {}", s)),
    }
}

/// Parse a hex color string into a ratatui Color.
///
/// Supports "#RRGGBB" and "#RGB" formats.
fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let g = u8::from_str_radix(&hex[2..4], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let b = u8::from_str_radix(&hex[4..6], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            Ok(Color::Rgb(r, g, b))
        }
        3 => {
            // Expand #RGB to #RRGGBB
            let r = u8::from_str_radix(&hex[0..1], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let g = u8::from_str_radix(&hex[1..2], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            let b = u8::from_str_radix(&hex[2..3], 16)
                .map_err(|_| format!("Invalid hex color: {}", s))?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        _ => Err(format!("Invalid hex color format: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color_string("Cyan").unwrap(), Color::Cyan);
        assert_eq!(parse_color_string("cyan").unwrap(), Color::Cyan);
        assert_eq!(parse_color_string("CYAN").unwrap(), Color::Cyan);
        assert_eq!(parse_color_string("DarkGray").unwrap(), Color::DarkGray);
        assert_eq!(parse_color_string("darkgray").unwrap(), Color::DarkGray);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(
            parse_color_string("#FF0000").unwrap(),
            Color::Rgb(255, 0, 0)
        );
        assert_eq!(
            parse_color_string("#00ff00").unwrap(),
            Color::Rgb(0, 255, 0)
        );
        assert_eq!(
            parse_color_string("#0000FF").unwrap(),
            Color::Rgb(0, 0, 255)
        );
    }

    #[test]
    fn test_parse_short_hex_colors() {
        assert_eq!(parse_color_string("#F00").unwrap(), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color_string("#0F0").unwrap(), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color_string("#00F").unwrap(), Color::Rgb(0, 0, 255));
        assert_eq!(
            parse_color_string("#FFF").unwrap(),
            Color::Rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_parse_invalid_colors() {
        assert!(parse_color_string("invalid").is_err());
        assert!(parse_color_string("#GGGGGG").is_err());
        assert!(parse_color_string("#12345").is_err());
    }

    #[test]
    fn test_default_palettes_differ_by_theme() {
        let config = ColorConfig::default();
        assert_eq!(config.palette(Theme::Light).active_border, Color::Blue);
        assert_eq!(config.palette(Theme::Dark).active_border, Color::Cyan);
    }

    #[test]
    fn test_override_applies_to_one_theme_only() {
        let config: ColorConfig = toml::from_str(
            r##"
[dark]
active_border = "#FF0000"
"##,
        )
        .unwrap();
        assert_eq!(
            config.palette(Theme::Dark).active_border,
            Color::Rgb(255, 0, 0)
        );
        // Non-overridden fields keep the base palette.
        assert_eq!(config.palette(Theme::Dark).rating, Color::Yellow);
        assert_eq!(config.palette(Theme::Light).active_border, Color::Blue);
    }
}
