//! `[site.nav]` configuration.

use serde::{Deserialize, Serialize};

/// One navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Navigation bar links, rendered in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub links: Vec<NavLink>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            links: vec![NavLink::new("home", "/"), NavLink::new("blog", "/blog")],
        }
    }
}
