//! Configuration for the chart screens.
//!
//! Loaded from TOML; every field has a default so a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation: AnimationConfig,
    pub layout: LayoutConfig,
    pub theme: ThemeConfig,
}

impl Config {
    pub const FILE_NAME: &'static str = "time_charts.toml";

    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./time_charts.toml`
    /// 2. `<config dir>/time_charts/config.toml`
    ///
    /// Returns default config if no file is found. A file that exists but
    /// fails to parse is logged and skipped.
    pub fn load_default() -> Self {
        let candidates = std::iter::once(Self::default_path()).chain(
            dirs::config_dir().map(|dir| dir.join("time_charts").join("config.toml")),
        );

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(err) => tracing::warn!(path = %path.display(), %err, "ignoring config file"),
            }
        }

        tracing::debug!("no config file found, using defaults");
        Self::default()
    }

    /// Write the configuration as TOML.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }
}

/// Animation timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Duration of the zoom in/out transition in milliseconds. Zero disables it.
    pub zoom_duration_ms: u64,
}

impl AnimationConfig {
    pub fn zoom_duration(&self) -> Duration {
        Duration::from_millis(self.zoom_duration_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            zoom_duration_ms: 800,
        }
    }
}

/// Sizes of the chart rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the zoomable area chart.
    pub area_chart_height: f32,
    /// Height of each compact row chart (cycles, scrub charts).
    pub row_chart_height: f32,
    /// Width of the title column left of each row chart.
    pub title_width: f32,
    /// Space between screens in the gallery.
    pub section_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            area_chart_height: 300.0,
            row_chart_height: 100.0,
            title_width: 120.0,
            section_spacing: 48.0,
        }
    }
}

/// Theme selection by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Light".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Resolve the theme name against Iced's built-in themes, falling back to light.
    pub fn theme(&self) -> iced::Theme {
        iced::Theme::ALL
            .iter()
            .find(|theme| theme.to_string().eq_ignore_ascii_case(&self.name))
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(name = %self.name, "unknown theme, using Light");
                iced::Theme::Light
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_chart_sizes() {
        let config = Config::default();
        assert_eq!(config.animation.zoom_duration(), Duration::from_millis(800));
        assert_eq!(config.layout.area_chart_height, 300.0);
        assert_eq!(config.layout.row_chart_height, 100.0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse(
            r#"
            [animation]
            zoom_duration_ms = 250

            [theme]
            name = "dark"
            "#,
        )
        .unwrap();
        assert_eq!(config.animation.zoom_duration_ms, 250);
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.theme.theme(), iced::Theme::Dark);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("[animation\nzoom_duration_ms = 1").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn saved_config_loads_back() {
        let path = std::env::temp_dir().join(format!("time_charts_{}.toml", std::process::id()));
        let mut config = Config::default();
        config.animation.zoom_duration_ms = 120;
        config.theme.name = "Dark".to_string();

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load("/nonexistent/time_charts.toml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let theme = ThemeConfig {
            name: "Neon".to_string(),
        };
        assert_eq!(theme.theme(), iced::Theme::Light);
    }
}
