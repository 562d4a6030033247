//! `[site.info]` configuration.
//!
//! The site identity record: title, description and contact address, plus
//! the public URL every absolute link is resolved against.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Keywords used when `[site.info] keywords` is not set.
pub const DEFAULT_KEYWORDS: &str =
    "Next.js, TypeScript, JavaScript, React.js, Web Development, Programming";

/// Site identity metadata.
///
/// Loaded once at startup and never mutated afterwards; every renderer
/// receives it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Contact email shown in the footer.
    #[serde(alias = "email")]
    pub contact_email: String,

    /// Author name.
    pub author: String,

    /// Public site URL (e.g., "https://blog.example.com").
    pub url: Option<String>,

    /// Language code for `<html lang>`.
    pub language: String,

    /// Open Graph locale.
    pub locale: String,

    /// `<meta name="keywords">` content.
    pub keywords: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            contact_email: String::new(),
            author: String::new(),
            url: None,
            language: "en".into(),
            locale: "en_US".into(),
            keywords: DEFAULT_KEYWORDS.into(),
        }
    }
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.info.title");
    pub const DESCRIPTION: FieldPath = FieldPath::new("site.info.description");
    pub const CONTACT_EMAIL: FieldPath = FieldPath::new("site.info.contact_email");
    pub const URL: FieldPath = FieldPath::new("site.info.url");

    /// Validate site identity.
    ///
    /// # Checks
    /// - `title`, `description`, `contact_email` must be non-blank
    /// - `url`, when set, must be an absolute http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let required = [
            (Self::TITLE, &self.title, "title = \"My Blog\""),
            (Self::DESCRIPTION, &self.description, "description = \"A personal blog\""),
            (Self::CONTACT_EMAIL, &self.contact_email, "contact_email = \"me@example.com\""),
        ];
        for (field, value, example) in required {
            if value.trim().is_empty() {
                diag.error_with_hint(
                    field,
                    "required field is missing or empty",
                    format!("add to [site.info]: {example}"),
                );
            }
        }

        if !self.contact_email.trim().is_empty() && !self.contact_email.contains('@') {
            diag.warn(
                Self::CONTACT_EMAIL,
                format!("'{}' does not look like an email address", self.contact_email),
            );
        }

        if let Some(url) = &self.url
            && let Err(reason) = check_site_url(url)
        {
            diag.error_with_hint(Self::URL, reason, "use format like https://example.com");
        }
    }
}

/// Check that a site URL is absolute, http(s), and has a host.
pub fn check_site_url(url_str: &str) -> Result<url::Url, String> {
    let parsed = url::Url::parse(url_str).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".into());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_info() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.title, "Test");
        assert_eq!(config.site.info.contact_email, "test@example.com");
        assert_eq!(config.site.info.language, "en");
        assert_eq!(config.site.info.locale, "en_US");
        assert_eq!(config.site.info.keywords, DEFAULT_KEYWORDS);
    }

    #[test]
    fn test_email_alias() {
        let info: SiteInfoConfig = toml::from_str("email = \"a@b.c\"").unwrap();
        assert_eq!(info.contact_email, "a@b.c");
    }

    #[test]
    fn test_missing_required_fields() {
        let info = SiteInfoConfig::default();
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert_eq!(diag.len(), 3);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field).collect();
        assert!(fields.contains(&SiteInfoConfig::TITLE));
        assert!(fields.contains(&SiteInfoConfig::DESCRIPTION));
        assert!(fields.contains(&SiteInfoConfig::CONTACT_EMAIL));
    }

    #[test]
    fn test_blank_title_rejected() {
        let info = SiteInfoConfig {
            title: "   ".into(),
            description: "d".into(),
            contact_email: "a@b.c".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::TITLE);
    }

    #[test]
    fn test_suspicious_email_is_warning() {
        let info = SiteInfoConfig {
            title: "Gitto Blog".into(),
            description: "Gitto Blog".into(),
            contact_email: "gittoyong.gmail.com".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_check_site_url() {
        assert!(check_site_url("https://example.com").is_ok());
        assert!(check_site_url("http://localhost:3000/blog").is_ok());
        assert!(check_site_url("example.com").is_err());
        assert!(check_site_url("ftp://example.com").is_err());
        assert!(check_site_url("/relative/path").is_err());
    }

    #[test]
    fn test_invalid_url_is_error() {
        let info = SiteInfoConfig {
            title: "t".into(),
            description: "d".into(),
            contact_email: "a@b.c".into(),
            url: Some("not a url".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::URL);
    }
}
