//! `[site.verification]` configuration.
//!
//! Search-console ownership tokens, emitted verbatim as `<meta>` tags.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// `google-site-verification` token.
    pub google: Option<String>,
    /// `naver-site-verification` token.
    pub naver: Option<String>,
}

impl VerificationConfig {
    /// `(meta name, token)` pairs for every configured console.
    pub fn meta_tags(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("google-site-verification", self.google.as_deref()),
            ("naver-site-verification", self.naver.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, token)| token.filter(|t| !t.is_empty()).map(|t| (name, t)))
    }
}
