//! Login page component.

use dioxus::prelude::*;

use crate::app::api;
use crate::app::components::{Button, ButtonState, ErrorAlert, LocaleSwitcher, ThemeSwitcher};
use crate::app::locale::use_locale;
use crate::app::session::use_session;
use crate::app::Route;
use crate::auth::LoginRequest;

#[component]
pub fn Login() -> Element {
    let locale = use_locale();
    let session = use_session();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut button_state = use_signal(|| None::<ButtonState>);
    let mut failed = use_signal(|| false);

    // Already signed in (e.g. stored session): go straight to the dashboard
    use_effect(move || {
        if session.is_loaded() && session.is_logged_in() {
            navigator.replace(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = LoginRequest {
            username: username(),
            password: password(),
        };
        button_state.set(Some(ButtonState::Loading));
        failed.set(false);

        spawn(async move {
            match api::login(&request).await {
                Ok(resp) => {
                    tracing::info!("Signed in as {}", resp.username);
                    button_state.set(Some(ButtonState::Success));
                    session.login(resp.username);
                    navigator.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    button_state.set(Some(ButtonState::Error));
                    password.set(String::new());
                    failed.set(true);
                }
            }
        });
    };

    let title = locale.t("app.title");

    rsx! {
        document::Title { "{title}" }

        div { class: "login-screen",
            div { class: "login-toolbar",
                LocaleSwitcher {}
                ThemeSwitcher {}
            }
            form { class: "login-card", onsubmit: on_submit,
                h1 { {locale.t("login.heading")} }

                if failed() {
                    ErrorAlert {
                        message: locale.t("login.failed"),
                        on_dismiss: move |_| failed.set(false),
                    }
                }

                label { r#for: "username", {locale.t("login.username")} }
                input {
                    id: "username",
                    class: "input",
                    r#type: "text",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }

                label { r#for: "password", {locale.t("login.password")} }
                input {
                    id: "password",
                    class: "input",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }

                Button {
                    submit: true,
                    state: button_state,
                    class: "login-submit".to_string(),
                    {locale.t("login.submit")}
                }
            }
        }
    }
}
