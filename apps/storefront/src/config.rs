//! # Storefront Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOEZ_STORE_NAME, SHOEZ_LANGUAGE, SHOEZ_DB_PATH,                   │
//! │     SHOEZ_CATALOG_URL, SHOEZ_CATALOG_TIMEOUT_SECS                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.shoezshop.storefront/ (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Shoezshop"
//! currency_symbol = "$"
//! currency_decimals = 2
//! default_language = "en"
//!
//! [storage]
//! database_path = "/var/lib/shoez/shoez.db"
//!
//! [catalog]
//! endpoint = "https://template-03-api.vercel.app/api/products"
//! timeout_secs = 10
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shoez_catalog::{CatalogConfig, CatalogError};
use shoez_core::i18n::Language;
use shoez_core::Money;
use thiserror::Error;
use tracing::{debug, info, warn};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

/// Database file name in the platform data directory.
pub const DATABASE_FILE_NAME: &str = "shoez.db";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config file: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

/// `[store]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Minor-unit digits shown; amounts are always held in cents.
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: u8,

    #[serde(default)]
    pub default_language: Language,
}

fn default_store_name() -> String {
    "Shoezshop".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_decimals() -> u8 {
    2
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
            default_language: Language::default(),
        }
    }
}

/// `[storage]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// SQLite file. Unset means the platform data directory.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl StorefrontConfig {
    /// Loads defaults, then the TOML file, then environment overrides.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Writes the configuration as TOML.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Invalid("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(ConfigError::Invalid("store.name must not be empty".into()));
        }

        if self.store.currency_decimals > 4 {
            return Err(ConfigError::Invalid(
                "store.currency_decimals must be at most 4".into(),
            ));
        }

        self.catalog.validate()?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `SHOEZ_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("SHOEZ_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(lang) = lookup("SHOEZ_LANGUAGE") {
            match lang.parse() {
                Ok(parsed) => {
                    debug!(language = %lang, "Overriding default language from environment");
                    self.store.default_language = parsed;
                }
                Err(_) => warn!(language = %lang, "Unknown language in environment"),
            }
        }

        if let Some(path) = lookup("SHOEZ_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(url) = lookup("SHOEZ_CATALOG_URL") {
            debug!(url = %url, "Overriding catalog endpoint from environment");
            self.catalog.endpoint = url;
        }

        if let Some(secs) = lookup("SHOEZ_CATALOG_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.catalog.timeout_secs = s,
                Err(_) => warn!(value = %secs, "Invalid catalog timeout in environment"),
            }
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "shoezshop", "storefront")
    }

    /// Platform config file location.
    pub fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Where the SQLite file lives, creating the data directory if needed.
    pub fn database_path(&self) -> ConfigResult<PathBuf> {
        if let Some(path) = &self.storage.database_path {
            return Ok(path.clone());
        }

        let dirs = Self::project_dirs()
            .ok_or_else(|| ConfigError::Invalid("Could not determine app data directory".into()))?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }

    /// Formats an amount with the store's symbol and decimals.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let symbol = &self.store.currency_symbol;
        let whole = (cents / 100).abs();
        let frac = (cents % 100).abs();

        match self.store.currency_decimals {
            0 => format!("{sign}{symbol}{}", whole + i64::from(frac >= 50)),
            d => {
                let width = d as usize;
                let scaled = frac * 10_i64.pow(u32::from(d).saturating_sub(2));
                let shown = if d < 2 { frac / 10 } else { scaled };
                format!("{sign}{symbol}{whole}.{shown:0width$}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.store.name, "Shoezshop");
        assert_eq!(config.store.default_language, Language::En);
        assert_eq!(config.catalog.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
            [store]
            name = "Shoez Lahore"
            default_language = "fr"

            [catalog]
            timeout_secs = 3
            "#,
        )
        .unwrap();

        let config = StorefrontConfig::load(Some(path)).unwrap();
        assert_eq!(config.store.name, "Shoez Lahore");
        assert_eq!(config.store.default_language, Language::Fr);
        assert_eq!(config.store.currency_symbol, "$");
        assert_eq!(config.catalog.timeout_secs, 3);
    }

    #[test]
    fn test_invalid_file_is_rejected_and_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[catalog]\ntimeout_secs = 0\n").unwrap();

        assert!(StorefrontConfig::load(Some(path.clone())).is_err());
        assert_eq!(
            StorefrontConfig::load_or_default(Some(path)).catalog.timeout_secs,
            10
        );
    }

    #[test]
    fn test_unknown_language_in_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[store]\ndefault_language = \"ur\"\n").unwrap();

        assert!(matches!(
            StorefrontConfig::load(Some(path)),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SHOEZ_LANGUAGE", "es"),
            ("SHOEZ_DB_PATH", "/tmp/shoez-test.db"),
            ("SHOEZ_CATALOG_URL", "http://127.0.0.1:9000/products"),
            ("SHOEZ_CATALOG_TIMEOUT_SECS", "nope"),
        ]
        .into_iter()
        .collect();

        let mut config = StorefrontConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store.default_language, Language::Es);
        assert_eq!(
            config.database_path().unwrap(),
            PathBuf::from("/tmp/shoez-test.db")
        );
        assert_eq!(config.catalog.endpoint, "http://127.0.0.1:9000/products");
        assert_eq!(config.catalog.timeout_secs, 10);
    }

    #[test]
    fn test_format_currency() {
        let mut config = StorefrontConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(-700_000)), "-$7000.00");

        config.store.currency_symbol = "Rs ".to_string();
        config.store.currency_decimals = 0;
        assert_eq!(config.format_currency(Money::from_cents(450_050)), "Rs 4501");

        config.store.currency_decimals = 3;
        assert_eq!(config.format_currency(Money::from_cents(1234)), "Rs 12.340");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = StorefrontConfig::default();
        config.store.name = "Shoez Karachi".to_string();
        config.save(Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("[store]"));
        assert!(contents.contains("[catalog]"));
        assert_eq!(
            StorefrontConfig::load(Some(path)).unwrap().store.name,
            "Shoez Karachi"
        );
    }
}
