//! Column sorting and label translation through the public API.

use admin_console::i18n::{translate, Locale};
use admin_console::nav::{default_menu, NavIcon};
use admin_console::table::{ColumnSort, SortDirection, TableSort};

#[test]
fn header_click_sequence_matches_table_library_toggle() {
    let mut col = ColumnSort::sortable();
    let mut seen = Vec::new();
    for _ in 0..4 {
        col.on_header_click();
        seen.push(col.sorted);
    }
    assert_eq!(
        seen,
        vec![
            Some(SortDirection::Asc),
            Some(SortDirection::Desc),
            Some(SortDirection::Asc),
            Some(SortDirection::Desc),
        ]
    );
}

#[test]
fn icons_track_sort_state() {
    let mut table = TableSort::new(&[("label", true), ("path", true)]);
    assert_eq!(table.column("label").icon(), NavIcon::Sort);
    table.on_header_click("label");
    assert_eq!(table.column("label").icon(), NavIcon::ArrowUp);
    table.on_header_click("label");
    assert_eq!(table.column("label").icon(), NavIcon::ArrowDown);
    table.on_header_click("path");
    assert_eq!(table.column("label").icon(), NavIcon::Sort);
}

#[test]
fn every_menu_label_has_an_english_and_chinese_entry() {
    for node in default_menu().iter() {
        for locale in [Locale::En, Locale::Zh] {
            let text = translate(locale, &node.label);
            assert!(!text.is_empty(), "{} empty in {:?}", node.label, locale);
        }
        assert_ne!(
            translate(Locale::Zh, &node.label),
            node.label,
            "{} has no Chinese entry",
            node.label
        );
    }
}

#[test]
fn unknown_label_renders_as_key() {
    assert_eq!(translate(Locale::Zh, "menu.not-there"), "menu.not-there");
}

#[test]
fn every_menu_icon_resolves_without_error() {
    // KanbanSquare is not in the registry and falls back
    let icons: Vec<NavIcon> = default_menu()
        .iter()
        .map(|n| NavIcon::from_name(&n.icon))
        .collect();
    assert_eq!(icons[0], NavIcon::Home);
    assert_eq!(icons[1], NavIcon::Sitemap);
    assert_eq!(icons[4], NavIcon::Circle);
}
