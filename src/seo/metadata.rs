//! Page metadata assembly.
//!
//! [`PageMetadata`] is a pure function of `[site.info]` and the resolved
//! [`BaseUrl`]: every field is either copied from config or a fixed literal.
//! It serializes to the same key layout search consoles document
//! (`metadataBase`, `openGraph`, `googleBot`, `max-snippet`, ...), which is
//! what `gitto query` prints.

use crate::config::{BaseUrl, section::SiteInfoConfig};
use serde::Serialize;

/// Title pattern applied to sub-page titles.
const TITLE_TEMPLATE: &str = "%s";

/// Site-wide metadata shared by every rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub metadata_base: BaseUrl,
    pub title: TitleConfig,
    pub description: String,
    pub keywords: String,
    pub open_graph: OpenGraph,
    pub robots: Robots,
}

/// Default title plus the pattern used for sub-pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleConfig {
    pub default: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: BaseUrl,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Crawler directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    pub max_video_preview: i32,
    pub max_image_preview: &'static str,
    pub max_snippet: i32,
}

impl PageMetadata {
    /// Assemble site metadata.
    ///
    /// `metadata_base` and `open_graph.url` are the same resolved value.
    pub fn assemble(info: &SiteInfoConfig, base_url: &BaseUrl) -> Self {
        Self {
            metadata_base: base_url.clone(),
            title: TitleConfig {
                default: info.title.clone(),
                template: TITLE_TEMPLATE.to_owned(),
            },
            description: info.description.clone(),
            keywords: info.keywords.clone(),
            open_graph: OpenGraph {
                title: info.title.clone(),
                description: info.description.clone(),
                url: base_url.clone(),
                site_name: info.title.clone(),
                locale: info.locale.clone(),
                kind: "website",
            },
            robots: Robots::INDEX_ALL,
        }
    }
}

impl TitleConfig {
    /// Title for a page: the default title, or `page` through the template.
    pub fn format(&self, page: Option<&str>) -> String {
        match page {
            Some(page) => self.template.replace("%s", page),
            None => self.default.clone(),
        }
    }
}

impl Robots {
    /// Index and follow everything, no preview limits.
    pub const INDEX_ALL: Self = Self {
        index: true,
        follow: true,
        google_bot: GoogleBot {
            index: true,
            follow: true,
            max_video_preview: -1,
            max_image_preview: "large",
            max_snippet: -1,
        },
    };

    /// `index, follow` style directive string.
    pub fn directive(&self) -> String {
        format!("{}, {}", index_word(self.index), follow_word(self.follow))
    }
}

impl GoogleBot {
    pub fn directive(&self) -> String {
        format!(
            "{}, {}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            index_word(self.index),
            follow_word(self.follow),
            self.max_video_preview,
            self.max_image_preview,
            self.max_snippet
        )
    }
}

const fn index_word(index: bool) -> &'static str {
    if index { "index" } else { "noindex" }
}

const fn follow_word(follow: bool) -> &'static str {
    if follow { "follow" } else { "nofollow" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn assemble_with(extra: &str, url: &str) -> PageMetadata {
        let config = test_parse_config(extra);
        PageMetadata::assemble(&config.site.info, &BaseUrl::parse(url).unwrap())
    }

    #[test]
    fn test_title_and_description_verbatim() {
        let config = test_parse_config("");
        let mut info = config.site.info.clone();
        info.title = "Gitto Blog".into();
        info.description = "Notes on  Rust ".into();
        let meta = PageMetadata::assemble(&info, &BaseUrl::parse("https://example.com").unwrap());

        assert_eq!(meta.title.default, "Gitto Blog");
        assert_eq!(meta.description, "Notes on  Rust ");
        assert_eq!(meta.open_graph.title, "Gitto Blog");
        assert_eq!(meta.open_graph.site_name, "Gitto Blog");
        assert_eq!(meta.open_graph.description, "Notes on  Rust ");
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let first = assemble_with("", "https://example.com");
        let second = assemble_with("", "https://example.com");
        assert_eq!(first, second);
    }

    #[test]
    fn test_base_url_drives_both_fields() {
        let a = assemble_with("", "https://a.example.com");
        let b = assemble_with("", "https://b.example.com/blog");

        assert_eq!(a.metadata_base, a.open_graph.url);
        assert_eq!(b.metadata_base, b.open_graph.url);
        assert_eq!(b.metadata_base.as_str(), "https://b.example.com/blog/");
        assert_ne!(a.metadata_base, b.metadata_base);
    }

    #[test]
    fn test_literal_defaults() {
        let meta = assemble_with("", "https://example.com");
        assert_eq!(meta.title.template, "%s");
        assert_eq!(meta.open_graph.kind, "website");
        assert_eq!(meta.open_graph.locale, "en_US");
        assert_eq!(meta.robots, Robots::INDEX_ALL);
        assert!(meta.keywords.contains("Web Development"));
    }

    #[test]
    fn test_title_format() {
        let meta = assemble_with("", "https://example.com");
        assert_eq!(meta.title.format(None), "Test");
        assert_eq!(meta.title.format(Some("Hello")), "Hello");

        let title = TitleConfig {
            default: "Blog".into(),
            template: "%s | Blog".into(),
        };
        assert_eq!(title.format(Some("Post")), "Post | Blog");
    }

    #[test]
    fn test_robots_directives() {
        assert_eq!(Robots::INDEX_ALL.directive(), "index, follow");
        assert_eq!(
            Robots::INDEX_ALL.google_bot.directive(),
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        );
    }

    #[test]
    fn test_serialized_keys() {
        let meta = assemble_with("", "https://example.com");
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["metadataBase"], "https://example.com/");
        assert_eq!(json["title"]["default"], "Test");
        assert_eq!(json["openGraph"]["siteName"], "Test");
        assert_eq!(json["openGraph"]["type"], "website");
        assert_eq!(json["openGraph"]["url"], json["metadataBase"]);
        assert_eq!(json["robots"]["googleBot"]["max-video-preview"], -1);
        assert_eq!(json["robots"]["googleBot"]["max-image-preview"], "large");
        assert_eq!(json["robots"]["googleBot"]["max-snippet"], -1);
    }
}
