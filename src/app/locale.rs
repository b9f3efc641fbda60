//! Locale context: which translation table labels are read from.

use dioxus::prelude::*;

use super::storage;
use crate::i18n::{translate, Locale};

const LOCALE_KEY: &str = "locale";

#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub current: Signal<Locale>,
}

impl LocaleContext {
    pub fn get(&self) -> Locale {
        (self.current)()
    }

    pub fn set(&self, locale: Locale) {
        let mut current = self.current;
        current.set(locale);
        storage::save(LOCALE_KEY, locale.as_str());
    }

    /// Translate `key` in the current locale (subscribes the caller)
    pub fn t(&self, key: &str) -> String {
        translate(self.get(), key).to_string()
    }
}

/// Initialize locale context provider - call once at app root
pub fn use_locale_provider() {
    let mut current = use_signal(Locale::default);

    use_context_provider(|| LocaleContext { current });

    use_effect(move || {
        if let Some(saved) = storage::load(LOCALE_KEY) {
            current.set(Locale::parse(&saved));
        }
    });
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
}
