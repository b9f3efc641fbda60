//! Sortable data-table column header.

use dioxus::prelude::*;

use super::{Button, ButtonVariant, Icon};
use crate::app::locale::use_locale;
use crate::table::ColumnSort;

/// Header cell content: plain title for fixed columns, a ghost button with a
/// direction icon for sortable ones.
#[component]
pub fn DataTableColumnHeader(
    /// Translation key of the column title
    title: String,
    sort: ColumnSort,
    /// Called when a sortable header is clicked
    on_toggle: EventHandler<()>,
    #[props(default)] class: String,
) -> Element {
    let locale = use_locale();
    let text = locale.t(&title);

    if !sort.can_sort {
        return rsx! {
            div { class: "{class}", "{text}" }
        };
    }

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "column-header".to_string(),
            onclick: move |_| on_toggle.call(()),
            "{text}"
            Icon { icon: sort.icon(), class: "icon column-sort-icon".to_string() }
        }
    }
}
