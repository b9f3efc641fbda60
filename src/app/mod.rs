//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod locale;
pub mod nav_context;
pub mod pages;
pub mod session;
pub mod storage;
pub mod theme;
pub mod timer;

use components::MainLayout;
use locale::use_locale_provider;
use nav_context::use_nav_provider;
use pages::{Dashboard, DetailPage, Login, NotFound};
use session::use_session_provider;
use theme::use_theme_provider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Theme context (localStorage + <html> class)
    use_theme_provider();

    use_locale_provider();

    // Signed-in user, read back from localStorage after hydration
    use_session_provider();

    // Sidebar flags shared by every nav item
    use_nav_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Application routes
///
/// Every sidebar target has a route; unknown paths fall through to
/// `NotFound`, which replaces the location with `/`.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/2", DetailPage)]
        Section2 {},
        #[route("/2-1", DetailPage)]
        Section2_1 {},
        #[route("/2-2", DetailPage)]
        Section2_2 {},
        #[route("/3-1", DetailPage)]
        Section3_1 {},
        #[route("/3-2", DetailPage)]
        Section3_2 {},
        #[route("/3-2-1", DetailPage)]
        Section3_2_1 {},
        #[route("/3-2-2", DetailPage)]
        Section3_2_2 {},
        #[route("/d2", DetailPage)]
        D2 {},
        #[route("/d2-2", DetailPage)]
        D2_2 {},
        #[route("/d3-2-1", DetailPage)]
        D3_2_1 {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
