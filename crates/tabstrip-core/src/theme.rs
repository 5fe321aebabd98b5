//! Color theme for the tab control
//!
//! Themes only carry color fields. They can be loaded from TOML or built
//! from one of the presets.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Complete tab control theme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabTheme {
    /// Theme display name
    pub name: String,
    /// Color palette
    pub colors: TabColors,
}

/// Colors used when painting a tab control
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabColors {
    /// Control background behind the header strip
    #[serde(with = "color_serde")]
    pub background: Color,
    /// Pen for the outer border, separator and button edges
    #[serde(with = "color_serde")]
    pub border: Color,
    /// Fill of the selected page's button
    #[serde(with = "color_serde")]
    pub active_tab: Color,
    /// Fill of the selected page's button under the pointer
    #[serde(with = "color_serde")]
    pub active_tab_hover: Color,
    /// Fill of unselected buttons
    #[serde(with = "color_serde")]
    pub inactive_tab: Color,
    /// Fill of unselected buttons under the pointer
    #[serde(with = "color_serde")]
    pub inactive_tab_hover: Color,
    /// Button label color
    #[serde(with = "color_serde")]
    pub text: Color,
    /// Fill of the scroll buttons
    #[serde(with = "color_serde")]
    pub nav_background: Color,
    /// Scroll button arrow color
    #[serde(with = "color_serde")]
    pub nav_arrow: Color,
}

/// Serde codec for ratatui colors: named, `#rrggbb` or `indexed:N`
mod color_serde {
    use ratatui::style::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    const NAMED: [(&str, Color); 17] = [
        ("reset", Color::Reset),
        ("black", Color::Black),
        ("red", Color::Red),
        ("green", Color::Green),
        ("yellow", Color::Yellow),
        ("blue", Color::Blue),
        ("magenta", Color::Magenta),
        ("cyan", Color::Cyan),
        ("gray", Color::Gray),
        ("darkgray", Color::DarkGray),
        ("lightred", Color::LightRed),
        ("lightgreen", Color::LightGreen),
        ("lightyellow", Color::LightYellow),
        ("lightblue", Color::LightBlue),
        ("lightmagenta", Color::LightMagenta),
        ("lightcyan", Color::LightCyan),
        ("white", Color::White),
    ];

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        decode(&raw).map_err(serde::de::Error::custom)
    }

    pub(super) fn encode(color: Color) -> String {
        match color {
            Color::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
            Color::Indexed(i) => format!("indexed:{i}"),
            named => NAMED
                .iter()
                .find(|(_, c)| *c == named)
                .map(|(name, _)| (*name).to_string())
                .unwrap_or_else(|| "reset".to_string()),
        }
    }

    pub(super) fn decode(raw: &str) -> Result<Color, String> {
        let lowered = raw.trim().to_lowercase();
        let name = lowered.replace("grey", "gray");

        if let Some((_, color)) = NAMED.iter().find(|(n, _)| *n == name) {
            return Ok(*color);
        }
        if let Some(hex) = name.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| format!("invalid hex color: {raw}"));
        }
        if let Some(index) = name.strip_prefix("indexed:") {
            return index
                .parse::<u8>()
                .map(Color::Indexed)
                .map_err(|_| format!("invalid indexed color: {raw}"));
        }
        Err(format!("unknown color: {raw}"))
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TabTheme {
    /// Light desktop palette with grey borders and white active tabs
    pub fn classic() -> Self {
        TabTheme {
            name: "Classic".to_string(),
            colors: TabColors {
                background: Color::Rgb(240, 240, 240),
                border: Color::Rgb(172, 172, 172),
                active_tab: Color::White,
                active_tab_hover: Color::White,
                inactive_tab: Color::Rgb(240, 240, 240),
                inactive_tab_hover: Color::Rgb(223, 238, 252),
                text: Color::Black,
                nav_background: Color::Rgb(225, 225, 225),
                nav_arrow: Color::Black,
            },
        }
    }

    /// Dark terminal palette
    pub fn dark() -> Self {
        TabTheme {
            name: "Dark".to_string(),
            colors: TabColors {
                background: Color::Rgb(24, 26, 32),
                border: Color::Rgb(92, 99, 112),
                active_tab: Color::Rgb(40, 44, 52),
                active_tab_hover: Color::Rgb(50, 56, 66),
                inactive_tab: Color::Rgb(30, 33, 39),
                inactive_tab_hover: Color::Rgb(44, 62, 80),
                text: Color::Rgb(220, 223, 228),
                nav_background: Color::Rgb(40, 44, 52),
                nav_arrow: Color::Rgb(97, 175, 239),
            },
        }
    }

    /// Looks a preset up by (case-insensitive) name
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" => Some(TabTheme::classic()),
            "dark" => Some(TabTheme::dark()),
            _ => None,
        }
    }

    /// Parses a theme from TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML string is malformed or contains invalid colors.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes the theme to TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for TabTheme {
    fn default() -> Self {
        TabTheme::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_theme_palette() {
        let theme = TabTheme::classic();
        assert_eq!(theme.name, "Classic");
        assert_eq!(theme.colors.border, Color::Rgb(172, 172, 172));
        assert_eq!(theme.colors.inactive_tab_hover, Color::Rgb(223, 238, 252));
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(TabTheme::default(), TabTheme::classic());
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(TabTheme::preset("DARK"), Some(TabTheme::dark()));
        assert_eq!(TabTheme::preset("solarized"), None);
    }

    #[test]
    fn test_dark_theme_survives_toml() {
        let original = TabTheme::dark();
        let toml_str = original.to_toml().expect("serialization should work");
        let parsed = TabTheme::from_toml(&toml_str).expect("parsing should work");
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_mixed_color_notations() {
        let toml_str = r##"
            name = "Mixed"

            [colors]
            background = "black"
            border = "#ACACAC"
            active_tab = "white"
            active_tab_hover = "indexed:15"
            inactive_tab = "Grey"
            inactive_tab_hover = "darkgrey"
            text = "reset"
            nav_background = "indexed:8"
            nav_arrow = "lightblue"
        "##;
        let theme = TabTheme::from_toml(toml_str).expect("should parse colors");
        assert_eq!(theme.colors.border, Color::Rgb(172, 172, 172));
        assert_eq!(theme.colors.active_tab_hover, Color::Indexed(15));
        assert_eq!(theme.colors.inactive_tab, Color::Gray);
        assert_eq!(theme.colors.inactive_tab_hover, Color::DarkGray);
        assert_eq!(theme.colors.nav_arrow, Color::LightBlue);
    }

    #[test]
    fn test_bad_colors_are_rejected() {
        assert!(color_serde::decode("#12345").is_err());
        assert!(color_serde::decode("indexed:300").is_err());
        assert!(color_serde::decode("chartreuse").is_err());
    }

    #[test]
    fn test_encode_named_and_rgb() {
        assert_eq!(color_serde::encode(Color::LightCyan), "lightcyan");
        assert_eq!(color_serde::encode(Color::Rgb(1, 2, 255)), "#0102ff");
        assert_eq!(color_serde::encode(Color::Indexed(9)), "indexed:9");
    }
}
