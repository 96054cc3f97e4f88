//! # Language Commands
//!
//! The navbar language switcher. A switch also re-localizes the messages of
//! a mounted checkout.

use serde::Serialize;
use shoez_core::checkout::CheckoutMessages;
use shoez_core::i18n::Language;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::{CheckoutState, LanguageState};

/// One entry of the language dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: Language,
    pub name: &'static str,
    pub selected: bool,
}

pub fn get_language(language: &LanguageState) -> Language {
    language.translator().current_language()
}

pub fn list_languages(language: &LanguageState) -> Vec<LanguageOption> {
    let current = get_language(language);
    Language::ALL
        .iter()
        .map(|&lang| LanguageOption {
            code: lang,
            name: lang.native_name(),
            selected: lang == current,
        })
        .collect()
}

/// Switches the UI language from a tag such as `"fr"` or `"es-MX"`.
pub fn set_language(
    language: &LanguageState,
    checkout: &CheckoutState,
    tag: &str,
) -> ApiResult<Language> {
    let parsed: Language = tag.parse()?;
    debug!(tag = %tag, language = %parsed, "set_language command");

    language.set_language(parsed);
    let messages = CheckoutMessages::from_translator(&language.translator());
    checkout.with_session_mut(|session, _| session.set_messages(messages));

    info!(language = %parsed, "Language switched");
    Ok(parsed)
}

/// Looks up a UI string; unknown keys come back unchanged.
pub fn translate(language: &LanguageState, key: &str) -> String {
    language.translator().lookup(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::checkout::{apply_voucher, get_checkout};
    use crate::error::ErrorCode;
    use shoez_core::checkout::CheckoutSession;

    #[test]
    fn test_switch_and_translate() {
        let language = LanguageState::default();
        let checkout = CheckoutState::default();
        assert_eq!(translate(&language, "home"), "Home");

        assert_eq!(set_language(&language, &checkout, "fr-CA").unwrap(), Language::Fr);
        assert_eq!(get_language(&language), Language::Fr);
        assert_eq!(translate(&language, "home"), "Accueil");
        assert_eq!(translate(&language, "checkoutTitle"), "checkoutTitle");
    }

    #[test]
    fn test_unknown_language_rejected() {
        let language = LanguageState::new(Language::Es);
        let err = set_language(&language, &CheckoutState::default(), "ur").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_language(&language), Language::Es);
    }

    #[test]
    fn test_list_marks_current() {
        let language = LanguageState::new(Language::Es);
        let options = list_languages(&language);
        assert_eq!(options.len(), 3);
        assert!(options.iter().any(|o| o.selected && o.code == Language::Es));
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }

    #[test]
    fn test_switch_relocalizes_mounted_checkout() {
        let language = LanguageState::default();
        let checkout = CheckoutState::default();
        checkout.mount(CheckoutSession::new(Vec::new()));

        set_language(&language, &checkout, "fr").unwrap();
        apply_voucher(&checkout, "BADCODE").unwrap_err();
        assert_eq!(
            get_checkout(&checkout).unwrap().error_message.as_deref(),
            Some("Code de bon d'achat invalide. Veuillez réessayer.")
        );
    }
}
