//! `[site.widgets]` configuration.
//!
//! Passive observability scripts appended after the footer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetsConfig {
    /// Vercel Web Analytics.
    pub analytics: bool,
    /// Vercel Speed Insights.
    pub speed_insights: bool,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            analytics: true,
            speed_insights: true,
        }
    }
}
