//! # Config Commands

use serde::Serialize;
use shoez_core::i18n::Language;
use tracing::debug;

use crate::state::ConfigState;

/// What the UI needs to know about the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    pub store_name: String,
    pub currency_symbol: String,
    pub currency_decimals: u8,
    pub default_language: Language,
    pub catalog_endpoint: String,
}

/// Store settings for the UI (read-only).
pub fn get_config(config: &ConfigState) -> StoreInfo {
    debug!("get_config command");
    let config = config.inner();
    StoreInfo {
        store_name: config.store.name.clone(),
        currency_symbol: config.store.currency_symbol.clone(),
        currency_decimals: config.store.currency_decimals,
        default_language: config.store.default_language,
        catalog_endpoint: config.catalog.endpoint.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;

    #[test]
    fn test_get_config() {
        let mut config = StorefrontConfig::default();
        config.store.default_language = Language::Es;

        let info = get_config(&ConfigState::new(config));
        assert_eq!(info.store_name, "Shoezshop");
        assert_eq!(info.default_language, Language::Es);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["defaultLanguage"], "es");
        assert_eq!(json["currencySymbol"], "$");
    }
}
