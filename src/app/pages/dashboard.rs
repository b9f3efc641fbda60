//! Dashboard page component.
//!
//! Lists every menu destination in a sortable table.

use dioxus::prelude::*;
use std::cmp::Ordering;

use crate::app::components::DataTableColumnHeader;
use crate::app::locale::use_locale;
use crate::nav::{default_menu, MenuNode, NavForest};
use crate::table::{SortDirection, TableSort};

const COLUMNS: &[(&str, bool)] = &[("id", false), ("label", true), ("path", true), ("depth", false)];

/// A clickable menu entry flattened out of the tree
#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    pub id: String,
    pub label: String,
    pub path: String,
    pub depth: usize,
}

/// Every node with a target, in pre-order, with its depth below the roots.
pub fn destinations(forest: &NavForest) -> Vec<Destination> {
    fn visit(nodes: &[MenuNode], depth: usize, out: &mut Vec<Destination>) {
        for node in nodes {
            if let Some(path) = &node.target {
                out.push(Destination {
                    id: node.id.clone(),
                    label: node.label.clone(),
                    path: path.clone(),
                    depth,
                });
            }
            visit(&node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    visit(forest.roots(), 0, &mut out);
    out
}

/// Order rows by the active column; `label_of` maps a label key to display text.
pub fn sort_destinations(
    rows: &mut [Destination],
    active: Option<(&str, SortDirection)>,
    label_of: impl Fn(&str) -> String,
) {
    let Some((key, dir)) = active else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = match key {
            "label" => label_of(&a.label).cmp(&label_of(&b.label)),
            "path" => a.path.cmp(&b.path),
            _ => Ordering::Equal,
        };
        dir.apply(ordering)
    });
}

#[component]
pub fn Dashboard() -> Element {
    let locale = use_locale();
    let mut sort = use_signal(|| TableSort::new(COLUMNS));

    let mut rows = destinations(default_menu());
    sort_destinations(&mut rows, sort.read().active(), |key| locale.t(key));

    rsx! {
        h1 { {locale.t("dashboard.heading")} }

        section {
            h2 { {locale.t("dashboard.destinations")} }
            table { class: "data-table",
                thead {
                    tr {
                        for (key, _) in COLUMNS.iter() {
                            th {
                                DataTableColumnHeader {
                                    title: format!("table.{key}"),
                                    sort: sort.read().column(key),
                                    on_toggle: move |_| sort.write().on_header_click(key),
                                }
                            }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.id}",
                            td { "{row.id}" }
                            td { {locale.t(&row.label)} }
                            td {
                                Link { to: row.path.clone(), "{row.path}" }
                            }
                            td { "{row.depth}" }
                        }
                    }
                }
            }
        }
    }
}
