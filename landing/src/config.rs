//! Site configuration.
//!
//! Product naming, the advertised CLI package and repository links live in
//! `site.toml`, which is embedded into the bundle at build time. Every field
//! has a default, so a partial file (or a broken one) still yields a usable
//! site.

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

const EMBEDDED: &str = include_str!("../site.toml");

static SITE: Lazy<SiteConfig> = Lazy::new(|| load_embedded().unwrap_or_default());

/// Errors raised while loading [`SiteConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name used in the header, footer and page copy.
    pub product_name: String,
    /// Package name passed to `pip install`.
    pub cli_package: String,
    /// Executable name shown in run/usage commands.
    pub cli_binary: String,
    pub repository_url: String,
    pub version: String,
    /// `tracing` level directive (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            product_name: "Insight".into(),
            cli_package: "insight-cli-sarang".into(),
            cli_binary: "insight-cli-sarang".into(),
            repository_url: "https://github.com/XplnHUB/Insight-Py".into(),
            version: "v0.3.0".into(),
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Unknown level strings fall back to `INFO`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.trim().parse().unwrap_or(LevelFilter::INFO)
    }

    pub fn install_command(&self) -> String {
        format!("pip install {}", self.cli_package)
    }

    pub fn clone_command(&self) -> String {
        format!("git clone {}.git", self.repository_url)
    }

    /// `cd` into the directory `git clone` creates for the repository.
    pub fn cd_command(&self) -> String {
        let dir = self
            .repository_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();
        format!("cd {dir}")
    }

    pub fn docs_url(&self) -> String {
        format!("{}/blob/main/README.md", self.repository_url)
    }

    pub fn issues_url(&self) -> String {
        format!("{}/issues", self.repository_url)
    }

    pub fn new_issue_url(&self) -> String {
        format!("{}/issues/new", self.repository_url)
    }

    pub fn discussions_url(&self) -> String {
        format!("{}/discussions", self.repository_url)
    }
}

/// Parses the `site.toml` compiled into the bundle.
pub fn load_embedded() -> Result<SiteConfig, ConfigError> {
    SiteConfig::parse(EMBEDDED)
}

/// The process-wide configuration. Falls back to [`SiteConfig::default`]
/// when the embedded file is invalid.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = load_embedded().expect("site.toml must stay valid");
        assert_eq!(config.cli_package, "insight-cli-sarang");
        assert_eq!(config.product_name, "Insight");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = SiteConfig::parse(r#"product_name = "Insight Nightly""#).unwrap();
        assert_eq!(config.product_name, "Insight Nightly");
        assert_eq!(config.cli_binary, SiteConfig::default().cli_binary);
        assert_eq!(config.repository_url, SiteConfig::default().repository_url);
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let err = SiteConfig::parse("product_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse site config"));
    }

    #[test]
    fn level_filter_falls_back_to_info() {
        let mut config = SiteConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.level_filter(), LevelFilter::DEBUG);
        config.log_level = "chatty".into();
        assert_eq!(config.level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn derived_links_follow_repository_url() {
        let config = SiteConfig::default();
        assert_eq!(
            config.clone_command(),
            "git clone https://github.com/XplnHUB/Insight-Py.git"
        );
        assert_eq!(config.cd_command(), "cd Insight-Py");
        assert_eq!(config.install_command(), "pip install insight-cli-sarang");
        assert_eq!(
            config.discussions_url(),
            "https://github.com/XplnHUB/Insight-Py/discussions"
        );
    }
}
