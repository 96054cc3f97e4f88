//! # Configuration State
//!
//! The loaded [`StorefrontConfig`], read-only after startup.

use crate::config::StorefrontConfig;

#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    config: StorefrontConfig,
}

impl ConfigState {
    pub fn new(config: StorefrontConfig) -> Self {
        ConfigState { config }
    }

    pub fn inner(&self) -> &StorefrontConfig {
        &self.config
    }
}
