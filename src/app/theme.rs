//! Theme management with localStorage persistence.
//!
//! Light or dark. A browser with no stored preference is switched to dark
//! and the choice is written back.

use dioxus::prelude::*;

use super::storage;

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Translation key for the theme's name
    pub fn label_key(&self) -> &'static str {
        match self {
            Theme::Light => "theme.light",
            Theme::Dark => "theme.dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        (self.current)()
    }

    /// Set, persist and apply to the document
    pub fn set(&self, theme: Theme) {
        let mut current = self.current;
        current.set(theme);
        storage::save(THEME_KEY, theme.as_str());
        apply_theme_to_dom(theme);
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() {
    let mut current = use_signal(Theme::default);

    use_context_provider(|| ThemeContext { current });

    use_effect(move || {
        let theme = match storage::load(THEME_KEY) {
            Some(saved) => Theme::parse(&saved),
            None => {
                storage::save(THEME_KEY, Theme::Dark.as_str());
                Theme::Dark
            }
        };
        current.set(theme);
        apply_theme_to_dom(theme);
    });
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_to_dom(_theme: Theme) {}
