//! Configuration section definitions.
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[site]`   | Identity, nav, verification, widgets, theme    |
//! | `[build]`  | Content/output paths, sitemap                  |
//! | `[serve]`  | Local preview server                           |

mod build;
mod serve;
pub mod site;

pub use build::{BuildConfig, SitemapConfig};
pub use serve::ServeConfig;
pub use site::{
    NavConfig, NavLink, SiteInfoConfig, SiteSectionConfig, Theme, ThemeConfig,
    VerificationConfig, WidgetsConfig,
};
