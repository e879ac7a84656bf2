//! Storefront configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_core::catalog::DEFAULT_COLLECTION_LIMIT;
use storefront_core::store::DEFAULT_STORAGE_PREFIX;
use storefront_core::{Currency, Locale};
use storefront_data::DEFAULT_CATALOG_URL;
use storefront_observability::{LogFormat, LogLevel, SessionId, StructuredLogger};

/// Client configuration. Every field has a default, so an empty document is
/// a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog service endpoint.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Namespace for durable storage slots.
    #[serde(default = "default_storage_prefix")]
    pub storage_prefix: String,

    /// Quiet period before a search recomputes the product grid.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    #[serde(default = "default_collection_limit")]
    pub featured_limit: usize,

    #[serde(default = "default_collection_limit")]
    pub new_arrivals_limit: usize,

    /// How long the newsletter confirmation stays visible.
    #[serde(default = "default_newsletter_message_ms")]
    pub newsletter_message_ms: u64,

    /// Locale used when none is persisted.
    #[serde(default = "default_locale")]
    pub default_locale: String,

    /// Currency used when none is persisted.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logger settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_min_level")]
    pub min_level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            storage_prefix: default_storage_prefix(),
            search_debounce_ms: default_search_debounce_ms(),
            featured_limit: default_collection_limit(),
            new_arrivals_limit: default_collection_limit(),
            newsletter_message_ms: default_newsletter_message_ms(),
            default_locale: default_locale(),
            default_currency: default_currency(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            min_level: default_min_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_storage_prefix() -> String {
    DEFAULT_STORAGE_PREFIX.to_string()
}

fn default_search_debounce_ms() -> u64 {
    250
}

fn default_collection_limit() -> usize {
    DEFAULT_COLLECTION_LIMIT
}

fn default_newsletter_message_ms() -> u64 {
    4000
}

fn default_locale() -> String {
    Locale::default().code().to_string()
}

fn default_currency() -> String {
    Currency::REFERENCE.code().to_string()
}

fn default_min_level() -> LogLevel {
    LogLevel::Info
}

impl StorefrontConfig {
    /// Load config from a file, JSON or TOML by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content).context("Failed to parse JSON config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject codes outside the locale and rate tables.
    pub fn validate(&self) -> Result<()> {
        if Locale::from_code(&self.default_locale).is_none() {
            bail!("Unknown default_locale: {}", self.default_locale);
        }
        if Currency::from_code(&self.default_currency).is_none() {
            bail!("Unknown default_currency: {}", self.default_currency);
        }
        if self.storage_prefix.is_empty() {
            bail!("storage_prefix must not be empty");
        }
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        Locale::from_code(&self.default_locale).unwrap_or_default()
    }

    pub fn currency(&self) -> Currency {
        Currency::from_code_or_reference(&self.default_currency)
    }

    /// Build the root logger for a fresh page session.
    pub fn build_logger(&self) -> StructuredLogger {
        StructuredLogger::new(SessionId::generate())
            .with_min_level(self.logging.min_level)
            .with_format(self.logging.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.newsletter_message_ms, 4000);
        assert_eq!(config.featured_limit, 4);
        assert_eq!(config.catalog_url, "https://fakestoreapi.com/products");
        assert_eq!(config.logging.min_level, LogLevel::Info);
    }

    #[test]
    fn test_toml_overrides() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            storage_prefix = "lumiere"
            search_debounce_ms = 100
            default_locale = "ar"
            default_currency = "egp"

            [logging]
            min_level = "debug"
            format = "human"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage_prefix, "lumiere");
        assert_eq!(config.search_debounce_ms, 100);
        assert_eq!(config.locale(), Locale::Ar);
        assert_eq!(config.currency(), Currency::EGP);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.featured_limit, 4);
    }

    #[test]
    fn test_json_config() {
        let config =
            StorefrontConfig::from_json_str(r#"{"new_arrivals_limit": 8, "logging": {}}"#).unwrap();
        assert_eq!(config.new_arrivals_limit, 8);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_rejects_unknown_codes() {
        let err = StorefrontConfig::from_toml_str(r#"default_currency = "JPY""#).unwrap_err();
        assert!(err.to_string().contains("JPY"));
        assert!(StorefrontConfig::from_toml_str(r#"default_locale = "fr""#).is_err());
        assert!(StorefrontConfig::from_toml_str(r#"storage_prefix = """#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("storefront-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("storefront.json");
        std::fs::write(&path, r#"{"default_currency": "GBP"}"#).unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.currency(), Currency::GBP);

        let missing = StorefrontConfig::load(dir.join("absent.toml")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read config file"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
