//! Root document shell shared by every page.

use super::component::{Analytics, Footer, Nav, SpeedInsights};
use crate::{
    config::SiteConfig,
    cx,
    embed::{
        css::GLOBAL_CSS,
        theme::{THEME_JS, ThemeVars},
    },
    seo::{
        PageMetadata,
        head::{PageHead, render_head_tags},
    },
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Base classes on `<html>`; the `dark:` variants key off the theme class.
const HTML_BASE_CLASS: &str = "text-black bg-white dark:text-white dark:bg-black";
const BODY_CLASS: &str = "antialiased";

/// Composes `<html>`, `<head>` and `<body>` around a page's content.
///
/// The theme script is rendered once per layout and inlined as a blocking
/// script, so the stored theme is applied before the body is parsed.
pub struct RootLayout<'a> {
    config: &'a SiteConfig,
    metadata: &'a PageMetadata,
    theme_script: String,
    year: i32,
}

impl<'a> RootLayout<'a> {
    pub fn new(config: &'a SiteConfig, metadata: &'a PageMetadata, year: i32) -> Self {
        Self {
            config,
            metadata,
            theme_script: THEME_JS.render(&ThemeVars::from_config(&config.site.theme)),
            year,
        }
    }

    /// Class list for `<html>`: base colors plus the configured font classes.
    pub fn html_class(&self) -> String {
        let theme = &self.config.site.theme;
        cx!(HTML_BASE_CLASS, theme.font_sans, theme.font_mono)
    }

    /// Render a full document. `content` is placed as-is between the
    /// navigation and the footer.
    pub fn render(&self, page: &PageHead<'_>, content: Markup) -> Markup {
        let site = &self.config.site;

        html! {
            (DOCTYPE)
            html lang=(site.info.language) class=(self.html_class()) {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    (render_head_tags(self.metadata, page))
                    @for (name, token) in site.verification.meta_tags() {
                        meta name=(name) content=(token);
                    }
                    script { (PreEscaped(&self.theme_script)) }
                    style { (PreEscaped(GLOBAL_CSS)) }
                }
                body class=(BODY_CLASS) {
                    main {
                        (Nav {
                            links: &site.nav.links,
                            base_url: &self.metadata.metadata_base,
                        })
                        (content)
                        (Footer { info: &site.info, year: self.year })
                        @if site.widgets.analytics {
                            (Analytics)
                        }
                        @if site.widgets.speed_insights {
                            (SpeedInsights)
                        }
                    }
                }
            }
        }
    }
}
