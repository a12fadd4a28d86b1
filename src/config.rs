//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SITE_URL` - Public base URL used for canonical links, robots.txt and the
//!   sitemap (default: `http://localhost:3000`)
//! - `DEFAULT_COUNTRY` - Country preselected in the form (default: `ID`)
//! - `COUNTRY_TABLE_PATH` - JSON file replacing the bundled country table
//! - `PHONE_SEPARATORS` - `strip` or `keep` separators in phone numbers (default: `strip`)
//! - `RATE_LIMIT` - Per-IP rate limiting on `/api` (default: `true`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)

use crate::utils::SeparatorPolicy;
use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Public base URL without a trailing slash.
    pub site_url: String,
    pub default_country: String,
    /// When set, replaces the country table compiled into the binary.
    pub country_table_path: Option<String>,
    pub separator_policy: SeparatorPolicy,
    /// When true, `/api` routes are rate limited per client IP.
    pub rate_limit: bool,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PHONE_SEPARATORS` holds an unknown policy.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let site_url = env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        let default_country = env::var("DEFAULT_COUNTRY").unwrap_or_else(|_| "ID".to_string());

        let country_table_path = env::var("COUNTRY_TABLE_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty());

        let separator_policy = match env::var("PHONE_SEPARATORS") {
            Ok(value) => value
                .parse::<SeparatorPolicy>()
                .context("Invalid PHONE_SEPARATORS")?,
            Err(_) => SeparatorPolicy::default(),
        };

        let rate_limit = env::var("RATE_LIMIT")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            site_url,
            default_country,
            country_table_path,
            separator_policy,
            rate_limit,
            static_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `site_url` is not an absolute HTTP/HTTPS URL
    /// - `default_country` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let site_url = Url::parse(&self.site_url)
            .with_context(|| format!("SITE_URL is not a valid URL: '{}'", self.site_url))?;
        if site_url.scheme() != "http" && site_url.scheme() != "https" {
            anyhow::bail!(
                "SITE_URL must start with 'http://' or 'https://', got '{}'",
                self.site_url
            );
        }

        if self.default_country.trim().is_empty() {
            anyhow::bail!("DEFAULT_COUNTRY must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Site URL: {}", self.site_url);
        tracing::info!("  Default country: {}", self.default_country);

        match self.country_table_path {
            Some(ref path) => tracing::info!("  Country table: {}", path),
            None => tracing::info!("  Country table: bundled"),
        }

        tracing::info!("  Phone separators: {}", self.separator_policy);
        tracing::info!(
            "  Rate limit: {}",
            if self.rate_limit { "enabled" } else { "disabled" }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 9] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "SITE_URL",
        "DEFAULT_COUNTRY",
        "COUNTRY_TABLE_PATH",
        "PHONE_SEPARATORS",
        "RATE_LIMIT",
        "STATIC_DIR",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            site_url: "https://wa.example.com".to_string(),
            default_country: "ID".to_string(),
            country_table_path: None,
            separator_policy: SeparatorPolicy::Strip,
            rate_limit: true,
            static_dir: "static".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.site_url = "ftp://wa.example.com".to_string();
        assert!(config.validate().is_err());

        config.site_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.site_url = "https://wa.example.com".to_string();

        config.default_country = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.site_url, "http://localhost:3000");
        assert_eq!(config.default_country, "ID");
        assert_eq!(config.separator_policy, SeparatorPolicy::Strip);
        assert!(config.country_table_path.is_none());
        assert!(config.rate_limit);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SITE_URL", "https://wa.example.com/");
            env::set_var("PHONE_SEPARATORS", "keep");
            env::set_var("RATE_LIMIT", "false");
            env::set_var("COUNTRY_TABLE_PATH", "/etc/wa/countries.json");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.site_url, "https://wa.example.com");
        assert_eq!(config.separator_policy, SeparatorPolicy::Keep);
        assert!(!config.rate_limit);
        assert_eq!(
            config.country_table_path.as_deref(),
            Some("/etc/wa/countries.json")
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_separator_policy() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PHONE_SEPARATORS", "digits-only");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_table_path_is_ignored() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("COUNTRY_TABLE_PATH", "  ");
        }

        assert!(Config::from_env().unwrap().country_table_path.is_none());

        clear_env();
    }
}
