//! Configuration for tab controls
//!
//! [`TabControlConfig`] gathers every tunable the tab control reads at
//! construction time: initial geometry, the metrics of the header strip and
//! the color theme. It is stored as TOML, by default under the user's
//! config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::geometry::Padding;
use crate::theme::TabTheme;

/// Labels drawn on the two scroll buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavIcons {
    pub left: String,
    pub right: String,
}

impl Default for NavIcons {
    fn default() -> Self {
        NavIcons {
            left: "◀".to_string(),
            right: "▶".to_string(),
        }
    }
}

/// Tab control configuration
///
/// Every field has a default, so a config file only needs to name the
/// values it changes.
///
/// # Example
///
/// ```
/// use tabstrip_core::TabControlConfig;
///
/// let config = TabControlConfig::from_toml("item_height = 3\nnav_button_size = 1").unwrap();
/// assert_eq!(config.item_height, 3);
/// assert_eq!(config.width, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabControlConfig {
    /// Initial control width
    pub width: u16,
    /// Initial control height
    pub height: u16,
    /// Width given to newly created header buttons
    pub item_width: u16,
    /// Height of the header strip
    pub item_height: u16,
    /// Edge length of the square scroll buttons
    pub nav_button_size: u16,
    /// Space kept between the header panel and the scroll buttons
    pub nav_gap: u16,
    /// How far unselected buttons sit below the top of the strip
    pub inactive_inset: u16,
    /// Extra width added around a label when fitting a button to its text
    pub label_padding: u16,
    /// Inset of the page content area
    pub padding: Padding,
    pub nav_icons: NavIcons,
    pub theme: TabTheme,
}

impl Default for TabControlConfig {
    fn default() -> Self {
        TabControlConfig {
            width: 200,
            height: 100,
            item_width: 42,
            item_height: 30,
            nav_button_size: 16,
            nav_gap: 2,
            inactive_inset: 2,
            label_padding: 12,
            padding: Padding::uniform(3),
            nav_icons: NavIcons::default(),
            theme: TabTheme::default(),
        }
    }
}

impl TabControlConfig {
    /// Metrics suited to a character-cell terminal.
    ///
    /// One-cell scroll buttons, a three-row header and no inset for
    /// unselected buttons.
    pub fn terminal() -> Self {
        TabControlConfig {
            width: 80,
            height: 24,
            item_width: 12,
            item_height: 3,
            nav_button_size: 1,
            nav_gap: 1,
            inactive_inset: 0,
            label_padding: 4,
            padding: Padding::uniform(1),
            nav_icons: NavIcons::default(),
            theme: TabTheme::dark(),
        }
    }

    /// Parses and validates a config from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Toml`] for malformed input and
    /// [`CoreError::InvalidConfig`] when validation fails.
    pub fn from_toml(toml_str: &str) -> CoreResult<Self> {
        let config: TabControlConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ConfigSerialize`] if serialization fails.
    pub fn to_toml(&self) -> CoreResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that the values describe a usable control.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.item_height == 0 {
            return Err(CoreError::InvalidConfig(
                "item_height must be at least 1".to_string(),
            ));
        }
        if self.nav_button_size == 0 {
            return Err(CoreError::InvalidConfig(
                "nav_button_size must be at least 1".to_string(),
            ));
        }
        if self.inactive_inset >= self.item_height {
            return Err(CoreError::InvalidConfig(format!(
                "inactive_inset ({}) must be smaller than item_height ({})",
                self.inactive_inset, self.item_height
            )));
        }
        Ok(())
    }

    /// Loads a config file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ConfigRead`] if the file cannot be read, or any
    /// error from [`TabControlConfig::from_toml`].
    pub fn load(path: &Path) -> CoreResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Loads a config file, falling back to `fallback` when the file is
    /// missing or invalid.
    pub fn load_or(path: &Path, fallback: TabControlConfig) -> Self {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return fallback;
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config at {:?}: {}", path, e);
                fallback
            }
        }
    }

    /// Writes the config to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Default location: `<config dir>/tabstrip/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tabstrip").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_defaults_match_desktop_metrics() {
        let config = TabControlConfig::default();
        assert_eq!((config.width, config.height), (200, 100));
        assert_eq!((config.item_width, config.item_height), (42, 30));
        assert_eq!(config.padding, Padding::uniform(3));
        assert_eq!(config.nav_button_size, 16);
        assert_eq!(config.nav_gap, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_terminal_preset_is_valid() {
        let config = TabControlConfig::terminal();
        assert!(config.validate().is_ok());
        assert_eq!(config.item_height, 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TabControlConfig::from_toml(
            r##"
            width = 120
            padding = { left = 1, top = 2, right = 1, bottom = 2 }

            [theme]
            name = "Custom"

            [theme.colors]
            background = "black"
            border = "gray"
            active_tab = "white"
            active_tab_hover = "white"
            inactive_tab = "darkgray"
            inactive_tab_hover = "blue"
            text = "white"
            nav_background = "darkgray"
            nav_arrow = "yellow"
            "##,
        )
        .expect("should parse");
        assert_eq!(config.width, 120);
        assert_eq!(config.height, 100);
        assert_eq!(config.padding, Padding::new(1, 2, 1, 2));
        assert_eq!(config.theme.name, "Custom");
        assert_eq!(config.theme.colors.nav_arrow, Color::Yellow);
    }

    #[test]
    fn test_zero_item_height_is_rejected() {
        let result = TabControlConfig::from_toml("item_height = 0");
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_inset_must_fit_in_strip() {
        let result = TabControlConfig::from_toml("item_height = 2\ninactive_inset = 2");
        assert!(matches!(result, Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = TabControlConfig::from_toml("width = \"wide\"");
        assert!(matches!(result, Err(CoreError::Toml(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let config = TabControlConfig::terminal();
        config.save(&path).expect("save should work");

        let loaded = TabControlConfig::load(&path).expect("load should work");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = TabControlConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CoreError::ConfigRead { .. })));
    }

    #[test]
    fn test_load_or_falls_back_on_invalid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "item_height = 0").expect("write");

        let config = TabControlConfig::load_or(&path, TabControlConfig::terminal());
        assert_eq!(config, TabControlConfig::terminal());
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        if let Some(path) = TabControlConfig::default_path() {
            assert!(path.ends_with("tabstrip/config.toml"));
        }
    }
}
