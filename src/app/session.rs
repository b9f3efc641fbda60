//! Login session shared via context.
//!
//! Holds the signed-in username, mirrored to localStorage so a reload keeps
//! the user signed in. `loaded` stays false until the browser copy has been
//! read, so guards do not redirect during hydration.

use dioxus::prelude::*;

use super::storage;

const SESSION_KEY: &str = "session_user";

#[derive(Clone, Copy)]
pub struct SessionContext {
    user: Signal<Option<String>>,
    loaded: Signal<bool>,
}

impl SessionContext {
    pub fn is_loaded(&self) -> bool {
        (self.loaded)()
    }

    pub fn user(&self) -> Option<String> {
        (self.user)()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn login(&self, username: String) {
        storage::save(SESSION_KEY, &username);
        let mut user = self.user;
        user.set(Some(username));
    }

    pub fn logout(&self) {
        storage::remove(SESSION_KEY);
        let mut user = self.user;
        user.set(None);
    }
}

/// Initialize session context provider - call once at app root
pub fn use_session_provider() {
    let mut user = use_signal(|| None::<String>);
    let mut loaded = use_signal(|| false);

    use_context_provider(|| SessionContext { user, loaded });

    use_effect(move || {
        if let Some(saved) = storage::load(SESSION_KEY) {
            user.set(Some(saved));
        }
        loaded.set(true);
    });
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
