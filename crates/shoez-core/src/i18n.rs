//! # Translator
//!
//! Storefront UI strings in English, Spanish and French.
//!
//! The translator is a plain value owned by whoever renders; there is no
//! process-wide language. A language switch is `set_language` on that value.
//!
//! ```text
//! Translator { current_language: Es }
//!     │
//!     ├── translate(TranslationKey::Home)  ──► "Inicio"
//!     ├── lookup("searchPlaceholder")      ──► "Buscar..."
//!     └── lookup("checkoutTitle")          ──► "checkoutTitle"   (unknown key)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Language
// =============================================================================

/// A supported UI language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    /// Every supported language, in switcher order.
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Fr];

    /// Two-letter tag ("en", "es", "fr").
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Name of the language in that language, for the switcher.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    /// Parses a tag, ignoring case and any region suffix ("es-MX" → Es).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let tag = normalized.split(['-', '_']).next().unwrap_or("");
        match tag {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            _ => Err(ValidationError::InvalidFormat {
                field: "language".to_string(),
                reason: format!("unsupported language '{}'", value.trim()),
            }),
        }
    }
}

// =============================================================================
// Keys
// =============================================================================

/// Known translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum TranslationKey {
    Home,
    Products,
    About,
    Contact,
    SearchPlaceholder,
    NoResults,
    VoucherApplied,
    InvalidVoucher,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 8] = [
        TranslationKey::Home,
        TranslationKey::Products,
        TranslationKey::About,
        TranslationKey::Contact,
        TranslationKey::SearchPlaceholder,
        TranslationKey::NoResults,
        TranslationKey::VoucherApplied,
        TranslationKey::InvalidVoucher,
    ];

    /// The key as the UI spells it.
    pub const fn as_str(self) -> &'static str {
        match self {
            TranslationKey::Home => "home",
            TranslationKey::Products => "products",
            TranslationKey::About => "about",
            TranslationKey::Contact => "contact",
            TranslationKey::SearchPlaceholder => "searchPlaceholder",
            TranslationKey::NoResults => "noResults",
            TranslationKey::VoucherApplied => "voucherApplied",
            TranslationKey::InvalidVoucher => "invalidVoucher",
        }
    }

    /// Finds the key spelled `key`, exact case.
    pub fn from_key(key: &str) -> Option<Self> {
        TranslationKey::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

fn message(language: Language, key: TranslationKey) -> &'static str {
    use TranslationKey::*;

    match language {
        Language::En => match key {
            Home => "Home",
            Products => "Products",
            About => "About",
            Contact => "Contact",
            SearchPlaceholder => "Search...",
            NoResults => "No results found",
            VoucherApplied => "Voucher applied successfully!",
            InvalidVoucher => "Invalid voucher code. Please try again.",
        },
        Language::Es => match key {
            Home => "Inicio",
            Products => "Productos",
            About => "Acerca de",
            Contact => "Contacto",
            SearchPlaceholder => "Buscar...",
            NoResults => "No se encontraron resultados",
            VoucherApplied => "¡Cupón aplicado correctamente!",
            InvalidVoucher => "Código de cupón no válido. Inténtalo de nuevo.",
        },
        Language::Fr => match key {
            Home => "Accueil",
            Products => "Produits",
            About => "À propos",
            Contact => "Contact",
            SearchPlaceholder => "Chercher...",
            NoResults => "Aucun résultat trouvé",
            VoucherApplied => "Bon d'achat appliqué avec succès !",
            InvalidVoucher => "Code de bon d'achat invalide. Veuillez réessayer.",
        },
    }
}

// =============================================================================
// Translator
// =============================================================================

/// `{ current_language, lookup(key) }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    current_language: Language,
}

impl Translator {
    pub fn new(current_language: Language) -> Self {
        Translator { current_language }
    }

    pub fn current_language(&self) -> Language {
        self.current_language
    }

    pub fn set_language(&mut self, language: Language) {
        self.current_language = language;
    }

    /// Message for a known key.
    pub fn translate(&self, key: TranslationKey) -> &'static str {
        message(self.current_language, key)
    }

    /// Message for a key spelled as text; unknown keys come back unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use shoez_core::i18n::{Language, Translator};
    ///
    /// let t = Translator::new(Language::Fr);
    /// assert_eq!(t.lookup("home"), "Accueil");
    /// assert_eq!(t.lookup("checkoutTitle"), "checkoutTitle");
    /// ```
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        match TranslationKey::from_key(key) {
            Some(known) => self.translate(known),
            None => key,
        }
    }
}
