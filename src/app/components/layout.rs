//! Main layout: sidebar, top bar and routed content.

use dioxus::prelude::*;

use super::nav::Nav;
use super::{Button, ButtonSize, ButtonVariant, Icon, LocaleSwitcher, ThemeSwitcher};
use crate::app::locale::use_locale;
use crate::app::nav_context::{use_nav, NavContext};
use crate::app::session::use_session;
use crate::app::Route;
use crate::nav::{NavIcon, NavUiState};

fn sidebar_class(state: NavUiState) -> String {
    let mut class = "sidebar".to_string();
    if state.panel_open || state.expanded_by_user {
        class.push_str(" is-expanded");
    }
    if state.expanded_by_default {
        class.push_str(" is-expanded-wide");
    }
    if state.panel_open {
        class.push_str(" is-open");
    }
    class
}

/// Menu button: pins the bar open on wide screens, opens the drawer elsewhere.
fn on_menu_button(nav: NavContext) {
    let state = nav.get();
    if state.expanded_by_default {
        nav.toggle_user_expanded();
    } else {
        nav.set_panel_open(!state.panel_open);
    }
}

#[component]
pub fn MainLayout() -> Element {
    let nav = use_nav();
    let locale = use_locale();
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if session.is_loaded() && !session.is_logged_in() {
            tracing::info!("No session, redirecting to login");
            navigator.replace(Route::Login {});
        }
    });

    let state = nav.get();
    let version = env!("ADMIN_VERSION");
    let git_sha = env!("ADMIN_GIT_SHA");
    let title = locale.t("app.title");
    let user = session.user().unwrap_or_default();

    rsx! {
        document::Title { "{title}" }

        div { class: "shell",
            aside { class: sidebar_class(state),
                div { class: "sidebar-brand",
                    Link { to: Route::Dashboard {}, "{title}" }
                }
                Nav {}
            }
            if state.panel_open {
                div {
                    class: "backdrop",
                    onclick: move |_| nav.set_panel_open(false),
                }
            }
            div { class: "content",
                header { class: "topbar",
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        class: "menu-button".to_string(),
                        onclick: move |_| on_menu_button(nav),
                        Icon { icon: NavIcon::Bars }
                        span { class: "sr-only", {locale.t("header.toggle_nav")} }
                    }
                    div { class: "topbar-actions",
                        span { class: "topbar-user", "{user}" }
                        LocaleSwitcher {}
                        ThemeSwitcher {}
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            onclick: move |_| {
                                session.logout();
                                navigator.replace(Route::Login {});
                            },
                            {locale.t("header.logout")}
                        }
                    }
                }
                main { class: "page",
                    Outlet::<Route> {}
                }
                footer { class: "footer",
                    small { class: "text-muted", "Admin Console v{version} ({git_sha})" }
                }
            }
        }
    }
}
