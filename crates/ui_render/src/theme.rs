//! Render-scoped theme snapshot and its configuration loaders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot used when no ancestor provided one: light scheme, no color overrides.
pub static DEFAULT_THEME: ThemeSnapshot = ThemeSnapshot {
    dark_mode: false,
    color_overrides: BTreeMap::new(),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Color scheme selected for a render pass.
pub enum ColorScheme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl ColorScheme {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", default)]
/// Immutable presentation configuration shared by every widget in one render pass.
pub struct ThemeSnapshot {
    dark_mode: bool,
    color_overrides: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
/// Theme configuration load failures.
pub enum ThemeConfigError {
    /// The JSON document could not be parsed into a [`ThemeSnapshot`].
    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),
    /// The TOML document could not be parsed into a [`ThemeSnapshot`].
    #[error("invalid theme toml: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ThemeSnapshot {
    /// Light snapshot without overrides.
    pub fn light() -> Self {
        Self::default()
    }

    /// Dark snapshot without overrides.
    pub fn dark() -> Self {
        Self {
            dark_mode: true,
            ..Self::default()
        }
    }

    /// Returns a copy with one color override added. Override tokens for `color_key` are
    /// appended after the palette tokens of widgets using that color.
    pub fn with_color_override(
        mut self,
        color_key: impl Into<String>,
        tokens: impl Into<String>,
    ) -> Self {
        self.color_overrides.insert(color_key.into(), tokens.into());
        self
    }

    /// Color scheme of this snapshot.
    ///
    /// Exposed as an enum rather than a flag so it cannot be fed straight into
    /// [`crate::ClassBuilder::add_if`]; widgets emit dark tokens unconditionally.
    pub fn color_scheme(&self) -> ColorScheme {
        if self.dark_mode {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Override tokens registered for a color key.
    pub fn color_override(&self, color_key: &str) -> Option<&str> {
        self.color_overrides.get(color_key).map(String::as_str)
    }

    /// All color overrides keyed by color.
    pub fn color_overrides(&self) -> &BTreeMap<String, String> {
        &self.color_overrides
    }

    /// Parses a snapshot from JSON. Missing keys fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeConfigError::Json`] when the document is malformed.
    pub fn from_json_str(raw: &str) -> Result<Self, ThemeConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses a snapshot from TOML. Missing keys fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeConfigError::Toml`] when the document is malformed.
    pub fn from_toml_str(raw: &str) -> Result<Self, ThemeConfigError> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn default_snapshot_is_light_without_overrides() {
        assert_eq!(DEFAULT_THEME.color_scheme(), ColorScheme::Light);
        assert!(DEFAULT_THEME.color_overrides().is_empty());
        assert_eq!(DEFAULT_THEME, ThemeSnapshot::default());
    }

    #[test]
    fn json_config_uses_kebab_case_keys() {
        let theme = ThemeSnapshot::from_json_str(
            &json!({
                "dark-mode": true,
                "color-overrides": { "blue": "bg-sky-100" }
            })
            .to_string(),
        )
        .expect("parse theme json");

        assert_eq!(theme.color_scheme(), ColorScheme::Dark);
        assert_eq!(theme.color_override("blue"), Some("bg-sky-100"));
        assert_eq!(theme.color_override("red"), None);
    }

    #[test]
    fn toml_config_defaults_missing_keys() {
        let theme = ThemeSnapshot::from_toml_str("[color-overrides]\ngreen = \"text-lime-700\"\n")
            .expect("parse theme toml");

        assert_eq!(theme.color_scheme(), ColorScheme::Light);
        assert_eq!(theme.color_override("green"), Some("text-lime-700"));
    }

    #[test]
    fn malformed_config_reports_source_format() {
        assert!(matches!(
            ThemeSnapshot::from_json_str("{\"dark-mode\": \"yes\"}"),
            Err(ThemeConfigError::Json(_))
        ));
        assert!(matches!(
            ThemeSnapshot::from_toml_str("dark-mode = ["),
            Err(ThemeConfigError::Toml(_))
        ));
    }

    #[test]
    fn builder_helpers_compose() {
        let theme = ThemeSnapshot::dark().with_color_override("red", "ring-rose-300");
        assert_eq!(theme.color_scheme().token(), "dark");
        assert_eq!(theme.color_override("red"), Some("ring-rose-300"));
        assert_eq!(ThemeSnapshot::light().color_scheme().token(), "light");
    }
}
