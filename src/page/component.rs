//! Page fragments shared by every document: navigation, footer and the
//! Vercel observability widgets.
//!
//! Each fragment implements [`maud::Render`], so layouts splice them in with
//! `(fragment)`.

use crate::config::{
    BaseUrl,
    section::{NavLink, SiteInfoConfig},
};
use maud::{Markup, PreEscaped, Render, html};

/// Top navigation bar. Site-relative links keep the base path.
pub struct Nav<'a> {
    pub links: &'a [NavLink],
    pub base_url: &'a BaseUrl,
}

impl Render for Nav<'_> {
    fn render(&self) -> Markup {
        html! {
            aside class="site-nav" {
                nav id="nav" {
                    @for link in self.links {
                        a href=(self.base_url.href(&link.href)) { (link.label) }
                    }
                }
            }
        }
    }
}

/// Footer with contact address and copyright line.
pub struct Footer<'a> {
    pub info: &'a SiteInfoConfig,
    pub year: i32,
}

impl Render for Footer<'_> {
    fn render(&self) -> Markup {
        let owner = if self.info.author.is_empty() {
            &self.info.title
        } else {
            &self.info.author
        };

        html! {
            footer class="site-footer" {
                ul {
                    li {
                        a href={ "mailto:" (self.info.contact_email) } { (self.info.contact_email) }
                    }
                }
                p { "© " (self.year) " " (owner) }
            }
        }
    }
}

/// Queue stub so calls made before the script loads are kept.
const ANALYTICS_QUEUE: &str =
    "window.va=window.va||function(){(window.vaq=window.vaq||[]).push(arguments)};";
const SPEED_INSIGHTS_QUEUE: &str =
    "window.si=window.si||function(){(window.siq=window.siq||[]).push(arguments)};";

/// Vercel Web Analytics.
pub struct Analytics;

impl Render for Analytics {
    fn render(&self) -> Markup {
        html! {
            script { (PreEscaped(ANALYTICS_QUEUE)) }
            script defer src="/_vercel/insights/script.js" data-sdkn="gitto" {}
        }
    }
}

/// Vercel Speed Insights.
pub struct SpeedInsights;

impl Render for SpeedInsights {
    fn render(&self) -> Markup {
        html! {
            script { (PreEscaped(SPEED_INSIGHTS_QUEUE)) }
            script defer src="/_vercel/speed-insights/script.js" data-sdkn="gitto" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn render_nav(extra: &str, base: &str) -> String {
        let config = test_parse_config(extra);
        let base_url = BaseUrl::parse(base).unwrap();
        Nav {
            links: &config.site.nav.links,
            base_url: &base_url,
        }
        .render()
        .into_string()
    }

    #[test]
    fn test_nav_links() {
        let html = render_nav("", "https://example.com");
        assert!(html.contains(r#"<a href="/">home</a>"#));
        assert!(html.contains(r#"<a href="/blog">blog</a>"#));
    }

    #[test]
    fn test_nav_links_under_sub_path() {
        let html = render_nav(
            r#"[site.nav]
links = [
    { label = "home", href = "/" },
    { label = "github", href = "https://github.com/gitto" },
]"#,
            "https://user.github.io/site",
        );
        assert!(html.contains(r#"<a href="/site/">home</a>"#));
        assert!(html.contains(r#"<a href="https://github.com/gitto">github</a>"#));
    }

    #[test]
    fn test_footer_contact() {
        let config = test_parse_config("");
        let html = Footer {
            info: &config.site.info,
            year: 2024,
        }
        .render()
        .into_string();

        assert!(html.contains(r#"href="mailto:test@example.com""#));
        assert!(html.contains("© 2024 Test"));
    }

    #[test]
    fn test_widgets_load_deferred() {
        let analytics = Analytics.render().into_string();
        let speed = SpeedInsights.render().into_string();
        assert!(analytics.contains(r#"<script defer src="/_vercel/insights/script.js""#));
        assert!(speed.contains(r#"<script defer src="/_vercel/speed-insights/script.js""#));
    }
}
