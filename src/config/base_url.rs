//! Base-URL resolution.
//!
//! Every absolute link the site emits (`metadataBase`, `og:url`, canonical
//! link, sitemap entries) is derived from a single [`BaseUrl`], resolved once
//! at startup.

use super::{ConfigError, SiteConfig, section::site::check_site_url};
use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

/// Absolute http(s) site URL whose path always ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parse an absolute site URL.
    ///
    /// Relative, hostless or non-http(s) URLs are configuration errors.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut url = check_site_url(raw.trim())
            .map_err(|reason| ConfigError::BaseUrl(raw.to_string(), reason))?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self(url))
    }

    /// Resolve the base URL for a loaded config.
    ///
    /// Uses `site.info.url` (already overridden by `--site-url` or the serve
    /// address during loading), falling back to the local serve address.
    pub fn resolve(config: &SiteConfig) -> Result<Self, ConfigError> {
        match config.site.info.url.as_deref() {
            Some(url) => Self::parse(url),
            None => {
                let local = config.serve.local_url();
                crate::log!("warning"; "site.info.url is not set, using {}", local);
                Self::parse(&local)
            }
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Root-relative href for a site link, keeping the base path.
    ///
    /// `/blog/` under `https://user.github.io/site` becomes `/site/blog/`.
    /// Anything not starting with a single `/` (absolute URLs, `mailto:`,
    /// `//host`, fragments) is returned unchanged.
    pub fn href(&self, link: &str) -> String {
        if !link.starts_with('/') || link.starts_with("//") {
            return link.to_owned();
        }
        format!("{}{}", self.0.path(), link.trim_start_matches('/'))
    }

    /// Absolute URL for a site-relative permalink such as `/blog/hello/`.
    pub fn join(&self, permalink: &str) -> String {
        let relative = permalink.trim_start_matches('/');
        self.0
            .join(relative)
            .map(String::from)
            .unwrap_or_else(|_| format!("{}{}", self.0, relative))
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BaseUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
