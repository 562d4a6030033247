//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Gitto Blog"
//! description = "Gitto Blog"
//! contact_email = "gittoyong@gmail.com"
//! url = "https://blog.example.com"
//!
//! [site.nav]
//! links = [{ label = "home", href = "/" }, { label = "blog", href = "/blog" }]
//!
//! [site.verification]
//! google = "..."
//! naver = "..."
//!
//! [site.widgets]
//! analytics = true
//! speed_insights = true
//!
//! [site.theme]
//! default = "system"
//! ```

mod info;
mod nav;
mod theme;
mod verification;
mod widgets;

pub use info::{DEFAULT_KEYWORDS, SiteInfoConfig, check_site_url};
pub use nav::{NavConfig, NavLink};
pub use theme::{Theme, ThemeConfig};
pub use verification::VerificationConfig;
pub use widgets::WidgetsConfig;

use serde::{Deserialize, Serialize};

/// Site section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site identity (title, description, contact, url).
    pub info: SiteInfoConfig,

    /// Navigation bar links.
    pub nav: NavConfig,

    /// Search-console verification tokens.
    pub verification: VerificationConfig,

    /// Observability widgets.
    pub widgets: WidgetsConfig,

    /// Color theme bootstrap.
    pub theme: ThemeConfig,
}
