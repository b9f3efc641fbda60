//! Theme and locale switchers for the top bar.

use dioxus::prelude::*;

use super::{Button, ButtonSize, ButtonVariant};
use crate::app::locale::use_locale;
use crate::app::theme::use_theme;
use crate::i18n::Locale;

/// Flips between light and dark; labelled with the theme it switches to.
#[component]
pub fn ThemeSwitcher() -> Element {
    let theme = use_theme();
    let locale = use_locale();
    let next = theme.get().toggled();

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Sm,
            class: "theme-switcher".to_string(),
            onclick: move |_| theme.set(next),
            {locale.t(next.label_key())}
        }
    }
}

#[component]
pub fn LocaleSwitcher() -> Element {
    let locale = use_locale();
    let current = locale.get();

    rsx! {
        select {
            class: "locale-switcher",
            value: current.as_str(),
            onchange: move |e| locale.set(Locale::parse(&e.value())),
            option { value: "en", selected: current == Locale::En, "English" }
            option { value: "zh", selected: current == Locale::Zh, "中文" }
        }
    }
}
