//! `<head>` tags for [`PageMetadata`].

use super::PageMetadata;
use maud::{Markup, html};

/// Per-page overrides on top of the site metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageHead<'a> {
    /// Page title, run through the title template.
    pub title: Option<&'a str>,
    /// Page description; the site description when absent.
    pub description: Option<&'a str>,
    /// Site-relative permalink (`/blog/hello/`); the site root when absent.
    pub permalink: Option<&'a str>,
}

/// Render title, description, canonical link, Open Graph and robots tags.
pub fn render_head_tags(meta: &PageMetadata, page: &PageHead<'_>) -> Markup {
    let title = meta.title.format(page.title);
    let description = page.description.unwrap_or(&meta.description);
    let canonical = match page.permalink {
        Some(permalink) => meta.metadata_base.join(permalink),
        None => meta.metadata_base.to_string(),
    };
    let og = &meta.open_graph;
    let og_title = page.title.map_or(og.title.as_str(), |_| title.as_str());

    html! {
        title { (title) }
        meta name="description" content=(description);
        @if !meta.keywords.is_empty() {
            meta name="keywords" content=(meta.keywords);
        }
        link rel="canonical" href=(canonical);
        meta property="og:title" content=(og_title);
        meta property="og:description" content=(description);
        meta property="og:url" content=(canonical);
        meta property="og:site_name" content=(og.site_name);
        meta property="og:locale" content=(og.locale);
        meta property="og:type" content=(og.kind);
        meta name="robots" content=(meta.robots.directive());
        meta name="googlebot" content=(meta.robots.google_bot.directive());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, test_parse_config};

    fn metadata() -> PageMetadata {
        let config = test_parse_config("");
        PageMetadata::assemble(
            &config.site.info,
            &BaseUrl::parse("https://example.com").unwrap(),
        )
    }

    #[test]
    fn test_site_root_tags() {
        let html = render_head_tags(&metadata(), &PageHead::default()).into_string();

        assert!(html.contains("<title>Test</title>"));
        assert!(html.contains(r#"<meta name="description" content="Test">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://example.com/">"#));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(r#"<meta name="robots" content="index, follow">"#));
        assert!(html.contains("max-image-preview:large"));
    }

    #[test]
    fn test_page_overrides() {
        let page = PageHead {
            title: Some("Hello <World>"),
            description: Some("first post"),
            permalink: Some("/blog/hello/"),
        };
        let html = render_head_tags(&metadata(), &page).into_string();

        assert!(html.contains("<title>Hello &lt;World&gt;</title>"));
        assert!(html.contains(r#"content="first post""#));
        assert!(html.contains(r#"href="https://example.com/blog/hello/""#));
        assert!(html.contains(r#"<meta property="og:title" content="Hello &lt;World&gt;">"#));
    }
}
