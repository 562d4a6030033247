//! Page rendering.
//!
//! - `layout` - [`RootLayout`], the document shell
//! - `component` - navigation, footer and widget fragments
//! - `landing` - landing page, blog index and post page content
//! - `post` - Markdown posts with front matter

pub mod component;
pub mod landing;
pub mod layout;
pub mod post;

pub use layout::RootLayout;
pub use post::{Post, load_posts};

use crate::{seo::head::PageHead, site::Site};
use chrono::NaiveDate;

/// A fully rendered document and where it lives.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Site-relative URL, always ending in `/`.
    pub permalink: String,
    pub html: String,
    pub lastmod: Option<NaiveDate>,
}

impl RenderedPage {
    /// Output path relative to the output directory.
    pub fn output_path(&self) -> std::path::PathBuf {
        std::path::Path::new(self.permalink.trim_matches('/')).join("index.html")
    }
}

/// Render every page of the site: `/`, `/blog/` and one page per post.
pub fn render_pages(site: &Site<'_>) -> Vec<RenderedPage> {
    let layout = site.layout();
    let newest = site.posts.first().and_then(Post::published);

    let mut pages = Vec::with_capacity(site.posts.len() + 2);

    pages.push(RenderedPage {
        permalink: "/".into(),
        html: layout
            .render(
                &PageHead::default(),
                landing::landing(&site.config.site.info, &site.posts, &site.base_url),
            )
            .into_string(),
        lastmod: newest,
    });

    pages.push(RenderedPage {
        permalink: "/blog/".into(),
        html: layout
            .render(
                &PageHead {
                    title: Some("Blog"),
                    permalink: Some("/blog/"),
                    ..PageHead::default()
                },
                landing::blog_index(&site.posts, &site.base_url),
            )
            .into_string(),
        lastmod: newest,
    });

    for post in &site.posts {
        let permalink = post.permalink();
        let head = PageHead {
            title: Some(&post.meta.title),
            description: post.meta.summary.as_deref(),
            permalink: Some(&permalink),
        };
        let html = layout.render(&head, landing::post_page(post)).into_string();
        pages.push(RenderedPage {
            html,
            lastmod: post.published(),
            permalink,
        });
    }

    pages
}

/// `404.html`, served for unknown paths. Not part of the sitemap.
pub fn render_not_found(site: &Site<'_>) -> String {
    let head = PageHead {
        title: Some("Not Found"),
        ..PageHead::default()
    };
    site.layout()
        .render(&head, landing::not_found())
        .into_string()
}
