//! Everything a render needs, assembled once at startup.

use crate::{
    config::{BaseUrl, SiteConfig},
    debug,
    page::{Post, RootLayout, load_posts},
    seo::PageMetadata,
};
use anyhow::Result;
use chrono::Datelike;

/// Loaded site: config, resolved base URL, metadata and posts.
///
/// Built by `main` and passed by reference to build, serve and query.
pub struct Site<'a> {
    pub config: &'a SiteConfig,
    pub base_url: BaseUrl,
    pub metadata: PageMetadata,
    pub posts: Vec<Post>,
    /// Copyright year shown in the footer.
    pub year: i32,
}

impl<'a> Site<'a> {
    /// Assemble metadata and load posts from `build.content/build.posts`.
    pub fn load(config: &'a SiteConfig, base_url: BaseUrl) -> Result<Self> {
        let posts = load_posts(&config.build.posts_dir())?;
        debug!("posts"; "loaded {} posts", posts.len());

        let year = chrono::Local::now().year();
        Ok(Self::with_posts(config, base_url, posts, year))
    }

    pub fn with_posts(
        config: &'a SiteConfig,
        base_url: BaseUrl,
        posts: Vec<Post>,
        year: i32,
    ) -> Self {
        let metadata = PageMetadata::assemble(&config.site.info, &base_url);
        Self {
            config,
            base_url,
            metadata,
            posts,
            year,
        }
    }

    pub fn layout(&self) -> RootLayout<'_> {
        RootLayout::new(self.config, &self.metadata, self.year)
    }
}
