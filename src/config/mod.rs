//! Site configuration management for `gitto.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── serve      # [serve]
//! │   └── site/      # [site.info], [site.nav], [site.theme], ...
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── base_url.rs    # BaseUrl resolution
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config is loaded once by `main` and handed to every consumer by
//! reference. Nothing mutates it after [`SiteConfig::load`] returns.

mod base_url;
pub mod section;
pub mod types;
mod util;

pub use base_url::BaseUrl;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use section::{BuildConfig, ServeConfig, SiteSectionConfig};
use util::find_config_file;

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing gitto.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity, navigation, theme
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Local preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; the project root is the
    /// config file's parent directory. Any problem is fatal.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = crate::utils::path::normalize_path(&config_path);
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.root = root.clone();
        self.normalize_paths(&root, cli);
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                self.apply_serve_options(*interface, *port, build_args.site_url.is_some());
            }
            Commands::Query { site_url, .. } => {
                if let Some(url) = site_url {
                    self.site.info.url = Some(url.clone());
                }
            }
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        self.build.clean = args.clean;
        Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());

        if let Some(ref url) = args.site_url {
            self.site.info.url = Some(url.clone());
        }
    }

    /// Apply serve-specific options.
    ///
    /// Unless `--site-url` was given, links point at the local server so the
    /// preview is navigable.
    fn apply_serve_options(
        &mut self,
        interface: Option<std::net::IpAddr>,
        port: Option<u16>,
        explicit_url: bool,
    ) {
        Self::update_option(&mut self.serve.interface, interface.as_ref());
        Self::update_option(&mut self.serve.port, port.as_ref());

        if !explicit_url {
            self.site.info.url = Some(self.serve.local_url());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize content/output paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path, cli: &Cli) {
        use crate::utils::path::normalize_path;

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        self.build.content = normalize_path(&root.join(&self.build.content));
        self.build.output = normalize_path(&root.join(&self.build.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.info.validate(&mut diag);

        if self.build.output == self.build.content {
            diag.error(
                FieldPath::new("build.output"),
                "output directory must differ from the content directory",
            );
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\ncontact_email = \"test@example.com\"\nurl = \"https://example.com\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn write_site(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("gitto.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\ntitle = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.info.title, "");
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.info.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_validate_reports_missing_identity() {
        let config = SiteConfig::from_str("[site.info]\ntitle = \"Only title\"").unwrap();
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_ok() {
        let mut config = test_parse_config("");
        config.build.content = PathBuf::from("/site/content");
        config.build.output = PathBuf::from("/site/public");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_build_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_site(
            dir.path(),
            "[site.info]\ntitle = \"Gitto Blog\"\ndescription = \"Gitto Blog\"\ncontact_email = \"g@example.com\"\n",
        );

        let cli = Cli::parse_from([
            "gitto",
            "--config",
            path.to_str().unwrap(),
            "build",
            "--site-url",
            "https://blog.example.com",
            "--clean",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.site.info.url.as_deref(), Some("https://blog.example.com"));
        assert!(config.build.clean);
        assert!(config.build.output.ends_with("public"));
        assert!(config.build.output.is_absolute());
    }

    #[test]
    fn test_load_serve_points_at_local_server() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_site(
            dir.path(),
            "[site.info]\ntitle = \"t\"\ndescription = \"d\"\ncontact_email = \"a@b.c\"\nurl = \"https://blog.example.com\"\n",
        );

        let cli = Cli::parse_from(["gitto", "-C", path.to_str().unwrap(), "serve", "-p", "4000"]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.serve.port, 4000);
        assert_eq!(config.site.info.url.as_deref(), Some("http://127.0.0.1:4000"));
    }

    #[test]
    fn test_load_missing_config_is_fatal() {
        let cli = Cli::parse_from(["gitto", "-C", "/nonexistent/gitto/gitto.toml", "build"]);
        assert!(SiteConfig::load(&cli).is_err());
    }

    #[test]
    fn test_load_invalid_url_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_site(
            dir.path(),
            "[site.info]\ntitle = \"t\"\ndescription = \"d\"\ncontact_email = \"a@b.c\"\nurl = \"blog.example.com\"\n",
        );
        let cli = Cli::parse_from(["gitto", "-C", path.to_str().unwrap(), "build"]);
        assert!(SiteConfig::load(&cli).is_err());
    }
}
