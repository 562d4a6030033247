//! `[site.theme]` configuration.
//!
//! Controls the color-theme bootstrap script and the `<html>` font classes.

use serde::{Deserialize, Serialize};

/// Color theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow `prefers-color-scheme`.
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme used when no preference is persisted (or storage is unavailable).
    pub default: Theme,
    /// Browser storage key holding the visitor's preference.
    pub storage_key: String,
    /// Class added to `<html>` in dark mode.
    ///
    /// The bundled stylesheet keys its `dark:` utilities on `.dark`.
    pub dark_class: String,
    /// Sans-serif font class on `<html>`.
    pub font_sans: Option<String>,
    /// Monospace font class on `<html>`.
    pub font_mono: Option<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: Theme::System,
            storage_key: "theme".into(),
            dark_class: "dark".into(),
            font_sans: Some("geist-sans".into()),
            font_mono: Some("geist-mono".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.theme.default, Theme::System);
        assert_eq!(config.site.theme.storage_key, "theme");
        assert_eq!(config.site.theme.dark_class, "dark");
    }

    #[test]
    fn test_parse_theme() {
        let config = test_parse_config("[site.theme]\ndefault = \"dark\"\nfont_mono = \"mono\"");
        assert_eq!(config.site.theme.default, Theme::Dark);
        assert_eq!(config.site.theme.font_mono.as_deref(), Some("mono"));
        assert_eq!(config.site.theme.font_sans.as_deref(), Some("geist-sans"));
    }

    #[test]
    fn test_theme_as_str() {
        assert_eq!(Theme::System.as_str(), "system");
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
