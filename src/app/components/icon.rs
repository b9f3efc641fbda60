//! Inline SVG icon.

use dioxus::prelude::*;

use crate::nav::NavIcon;

/// Render a registry icon as an inline SVG sized by CSS.
#[component]
pub fn Icon(
    icon: NavIcon,
    #[props(default = "icon".to_string())] class: String,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 512 512",
            fill: "currentColor",
            "aria-hidden": "true",
            "data-icon": icon.name(),
            path { d: icon.path() }
        }
    }
}
