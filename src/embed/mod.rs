//! Embedded static resources for gitto.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `theme` - Theme bootstrap script (inlined into `<head>`)
//! - `css` - Global stylesheet (inlined into `<head>`)
//!
//! Both resources are minified by `build.rs` and land in `OUT_DIR`.
//!
//! # Usage
//!
//! ```ignore
//! use embed::theme::{THEME_JS, ThemeVars};
//!
//! let js = THEME_JS.render(&ThemeVars::from_config(&config.site.theme));
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod theme {
    use super::{Template, TemplateVars};
    use crate::config::section::{Theme, ThemeConfig};

    /// Variables for theme.js.
    ///
    /// Values are substituted as JSON literals so the script source stays
    /// self-contained once inlined.
    pub struct ThemeVars {
        /// Storage key holding the persisted preference.
        pub storage_key: String,
        /// Class toggled on `<html>` when dark mode is active.
        pub dark_class: String,
        /// Fallback when nothing (readable) is persisted.
        pub default_theme: Theme,
    }

    impl ThemeVars {
        /// Build theme script variables from site config.
        pub fn from_config(config: &ThemeConfig) -> Self {
            Self {
                storage_key: config.storage_key.clone(),
                dark_class: config.dark_class.clone(),
                default_theme: config.default,
            }
        }
    }

    impl TemplateVars for ThemeVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__GITTO_THEME_KEY__", &js_string(&self.storage_key))
                .replace("__GITTO_DARK_CLASS__", &js_string(&self.dark_class))
                .replace(
                    "__GITTO_DEFAULT_THEME__",
                    &js_string(self.default_theme.as_str()),
                )
        }
    }

    /// Quote a value as a JS string literal.
    ///
    /// `</` is split so the literal can never close the surrounding `<script>`.
    fn js_string(value: &str) -> String {
        serde_json::to_string(value)
            .unwrap_or_else(|_| "\"\"".into())
            .replace("</", "<\\/")
    }

    /// Theme bootstrap script, minified at build time.
    pub const THEME_JS: Template<ThemeVars> =
        Template::new(include_str!(concat!(env!("OUT_DIR"), "/theme.min.js")));

}

pub mod css {
    /// Global stylesheet, minified at build time.
    pub const GLOBAL_CSS: &str = include_str!(concat!(env!("OUT_DIR"), "/global.min.css"));
}
