//! Sidebar navigation tree.
//!
//! `Nav` resolves the current path against the menu once, when it mounts,
//! and hands the resulting id set to every `NavItem`. Each branch seeds its
//! open state from that set and owns it afterwards, so later route changes
//! neither re-open nor collapse anything.

use dioxus::prelude::*;

use super::Icon;
use crate::app::locale::use_locale;
use crate::app::nav_context::use_nav;
use crate::nav::{default_menu, expanded_ids, ExpandedIdSet, MenuNode, NavIcon, NavUiState};

/// Labels are shown when the drawer is open or the user expanded the bar.
fn labels_visible(state: NavUiState) -> bool {
    state.panel_open || state.expanded_by_user
}

/// Class list for a label or branch body; `is-wide` applies only at the
/// wide-screen breakpoint in CSS.
fn reveal_class(base: &str, state: NavUiState) -> String {
    let mut class = base.to_string();
    if labels_visible(state) {
        class.push_str(" is-revealed");
    }
    if state.expanded_by_default {
        class.push_str(" is-revealed-wide");
    }
    class
}

fn leaf_class(is_active: bool, state: NavUiState) -> String {
    let mut class = "nav-link".to_string();
    if is_active {
        class.push_str(" is-active");
        if labels_visible(state) {
            class.push_str(" has-highlight");
        }
        if state.expanded_by_default {
            class.push_str(" has-highlight-wide");
        }
    }
    class
}

/// Current location as the sidebar compares it: the path without any query
/// string or fragment.
fn path_only(location: &str) -> &str {
    location
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(location)
}

/// Read the router's location and subscribe the caller to changes.
fn use_current_path() -> String {
    let router = use_router();
    path_only(&router.full_route_string()).to_string()
}

#[component]
pub fn Nav() -> Element {
    let path = use_current_path();
    let expanded = use_hook(|| {
        let ids = expanded_ids(default_menu(), &path);
        tracing::debug!("Nav mounted at {}, expanding {:?}", path, ids);
        ids
    });

    rsx! {
        nav { class: "nav-tree",
            for node in default_menu().roots() {
                NavItem { key: "{node.id}", node: node.clone(), expanded: expanded.clone() }
            }
        }
    }
}

#[component]
pub fn NavItem(node: MenuNode, expanded: ExpandedIdSet) -> Element {
    let nav = use_nav();
    let locale = use_locale();
    let path = use_current_path();
    let mut open = use_signal(|| expanded.contains(&node.id));

    let state = nav.get();
    let label = locale.t(&node.label);
    let icon = NavIcon::from_name(&node.icon);

    if node.is_leaf() {
        let Some(target) = node.target.clone() else {
            // Decorative entry: nothing to navigate to
            return rsx! {
                div { class: "nav-item nav-static", "data-id": "{node.id}",
                    span { class: "nav-icon", Icon { icon } }
                    span { class: reveal_class("nav-label", state), "{label}" }
                }
            };
        };
        let is_active = path == target;

        return rsx! {
            div { class: "nav-item", "data-id": "{node.id}",
                Link {
                    to: target,
                    class: leaf_class(is_active, state),
                    onclick: move |_| nav.on_leaf_activated(),
                    span { class: "nav-icon", Icon { icon } }
                    span { class: reveal_class("nav-label", state), "{label}" }
                }
            }
        };
    }

    rsx! {
        div { class: "nav-item nav-branch", "data-id": "{node.id}", "data-open": open(),
            button {
                r#type: "button",
                class: "nav-trigger",
                "aria-expanded": open(),
                onclick: move |_| open.toggle(),
                span { class: "nav-icon", Icon { icon } }
                span { class: reveal_class("nav-label", state), "{label}" }
                span { class: "nav-chevron", "▾" }
            }
            if open() {
                div { class: reveal_class("nav-children", state),
                    for child in node.children.iter() {
                        NavItem { key: "{child.id}", node: child.clone(), expanded: expanded.clone() }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(user: bool, default: bool, panel: bool) -> NavUiState {
        NavUiState {
            expanded_by_user: user,
            expanded_by_default: default,
            panel_open: panel,
        }
    }

    #[test]
    fn labels_follow_user_or_panel() {
        assert!(!labels_visible(state(false, true, false)));
        assert!(labels_visible(state(true, false, false)));
        assert!(labels_visible(state(false, false, true)));
    }

    #[test]
    fn reveal_class_combines_flags() {
        assert_eq!(reveal_class("nav-label", state(false, false, false)), "nav-label");
        assert_eq!(
            reveal_class("nav-label", state(true, true, false)),
            "nav-label is-revealed is-revealed-wide"
        );
    }

    #[test]
    fn inactive_leaf_is_plain() {
        assert_eq!(leaf_class(false, state(true, true, true)), "nav-link");
    }

    #[test]
    fn active_leaf_highlight_depends_on_flags() {
        assert_eq!(leaf_class(true, state(false, false, false)), "nav-link is-active");
        assert_eq!(
            leaf_class(true, state(false, false, true)),
            "nav-link is-active has-highlight"
        );
        assert_eq!(
            leaf_class(true, state(false, true, false)),
            "nav-link is-active has-highlight-wide"
        );
    }

    #[test]
    fn path_only_drops_query_and_fragment() {
        assert_eq!(path_only("/d2"), "/d2");
        assert_eq!(path_only("/d2?tab=1"), "/d2");
        assert_eq!(path_only("/3-1#top"), "/3-1");
        assert_eq!(path_only(""), "");
    }

    #[cfg(feature = "server")]
    mod rendered {
        use super::*;
        use crate::app::locale::use_locale_provider;
        use crate::app::nav_context::{use_nav_provider, NavContext};
        use dioxus::history::MemoryHistory;
        use dioxus::router::root_router;
        use std::rc::Rc;

        #[derive(Clone, Routable, Debug, PartialEq)]
        #[rustfmt::skip]
        enum SidebarRoute {
            #[route("/:..segments")]
            Sidebar { segments: Vec<String> },
        }

        #[component]
        fn Sidebar(segments: Vec<String>) -> Element {
            let _ = segments;
            rsx! {
                Nav {}
                aside { class: "extra",
                    NavItem {
                        node: MenuNode::new("deco", "deco", "faCircle"),
                        expanded: ExpandedIdSet::default(),
                    }
                }
            }
        }

        #[allow(non_snake_case)]
        fn Root() -> Element {
            use_locale_provider();
            use_nav_provider();
            rsx! {
                Router::<SidebarRoute> {}
            }
        }

        fn mount(path: &str) -> VirtualDom {
            let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
            let mut dom = VirtualDom::new(Root).with_root_context(history);
            dom.rebuild_in_place();
            dom
        }

        fn navigate(dom: &mut VirtualDom, path: &str) {
            dom.in_scope(ScopeId::APP, || {
                let router = root_router().expect("router mounted");
                let route: SidebarRoute = path.parse().expect("internal route");
                router.push(route);
            });
            dom.render_immediate_to_vec();
        }

        fn rendered_ids(html: &str) -> Vec<String> {
            html.split("data-id=\"")
                .skip(1)
                .filter_map(|rest| rest.split('"').next())
                .map(str::to_string)
                .collect()
        }

        #[test]
        fn branches_on_the_active_path_start_open() {
            let dom = mount("/d2");
            let ids = rendered_ids(&dioxus::ssr::render(&dom));

            // Branch 2 is open so its children render; branch 3 is closed
            for id in ["1", "2", "2-1", "2-2", "3"] {
                assert!(ids.contains(&id.to_string()), "{id} missing from {ids:?}");
            }
            assert!(!ids.contains(&"3-1".to_string()), "3 should be closed: {ids:?}");
        }

        #[test]
        fn later_navigation_does_not_reopen_or_collapse_branches() {
            let mut dom = mount("/d2");
            navigate(&mut dom, "/3-1");

            let html = dioxus::ssr::render(&dom);
            let ids = rendered_ids(&html);
            assert!(ids.contains(&"2-1".to_string()), "2 should stay open: {ids:?}");
            assert!(!ids.contains(&"3-1".to_string()), "3 should stay closed: {ids:?}");
        }

        #[test]
        fn leaf_activation_clears_user_flags_in_shared_state() {
            let dom = mount("/d2");

            let after = dom.in_scope(ScopeId::APP, || {
                let nav = consume_context::<NavContext>();
                nav.toggle_user_expanded();
                nav.set_panel_open(true);
                nav.set_default_expanded(true);
                nav.on_leaf_activated();
                nav.get()
            });

            assert!(!after.expanded_by_user);
            assert!(!after.panel_open);
            assert!(after.expanded_by_default);
        }

        #[test]
        fn targetless_leaf_renders_without_a_link() {
            let dom = mount("/");
            let html = dioxus::ssr::render(&dom);

            let start = html.find("data-id=\"deco\"").expect("decorative row rendered");
            let row = &html[start..];
            let row = &row[..row.find("</div>").expect("row closes")];
            assert!(!row.contains("<a"), "decorative row should not link: {row}");
            assert!(!row.contains("href"), "decorative row should not link: {row}");

            // Real leaves still link to their targets
            assert!(html.contains("href=\"/d2\""));
        }
    }
}
