//! # Language State
//!
//! The active UI language. Reads far outnumber switches, so the translator
//! sits behind an `RwLock`.

use std::sync::RwLock;

use shoez_core::i18n::{Language, Translator};

#[derive(Debug, Default)]
pub struct LanguageState {
    translator: RwLock<Translator>,
}

impl LanguageState {
    pub fn new(language: Language) -> Self {
        LanguageState {
            translator: RwLock::new(Translator::new(language)),
        }
    }

    /// Copy of the current translator.
    pub fn translator(&self) -> Translator {
        *self.translator.read().unwrap_or_else(|p| p.into_inner())
    }

    pub fn set_language(&self, language: Language) {
        self.translator
            .write()
            .unwrap_or_else(|p| p.into_inner())
            .set_language(language);
    }
}
