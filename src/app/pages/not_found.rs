//! Catch-all route: any unknown path is replaced by the dashboard.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(Route::Dashboard {});
    });

    tracing::debug!("Unknown path /{}, redirecting to /", segments.join("/"));

    rsx! {}
}
