//! Detail page shared by the numbered menu destinations.

use dioxus::prelude::*;

use crate::app::locale::use_locale;
use crate::app::Route;
use crate::nav::{default_menu, resolve_ancestor_chain};

#[component]
pub fn DetailPage() -> Element {
    let locale = use_locale();
    let path = use_route::<Route>().to_string();
    let crumbs: Vec<String> = resolve_ancestor_chain(default_menu(), &path)
        .into_iter()
        .map(|node| locale.t(&node.label))
        .collect();

    rsx! {
        if !crumbs.is_empty() {
            nav { class: "breadcrumb", "aria-label": "breadcrumb",
                ol {
                    for (i, crumb) in crumbs.iter().enumerate() {
                        li { key: "{i}", "{crumb}" }
                    }
                }
            }
        }
        h1 { {locale.t("detail.heading")} }
        p {
            strong { {locale.t("detail.path")} }
            " "
            code { "{path}" }
        }
    }
}
