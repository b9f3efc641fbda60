//! Menu forest definition.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One entry in the navigation hierarchy, leaf or branch.
///
/// A node is a leaf when it has no children, whether or not it carries a
/// `target`. Ids are expected to be unique across the whole forest; this is
/// not checked at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: String,
    /// Translation key, resolved through `crate::i18n`
    pub label: String,
    /// Symbolic icon name (see `NavIcon::from_name`)
    pub icon: String,
    /// URL path this entry navigates to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            target: None,
            children: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Ordered set of root-level menu nodes.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavForest {
    roots: Vec<MenuNode>,
}

impl NavForest {
    pub fn new(roots: Vec<MenuNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pre-order iterator over every node in the forest.
    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> {
        let mut stack: Vec<&MenuNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

static DEFAULT_MENU: LazyLock<NavForest> = LazyLock::new(|| {
    NavForest::new(vec![
        MenuNode::new("1", "Home", "faHome").with_target("/"),
        MenuNode::new("2", "2-0", "faSitemap").with_children(vec![
            MenuNode::new("2-1", "2-1", "faSitemap").with_target("/d2"),
            MenuNode::new("2-2", "2-2", "faSitemap").with_target("/d2-2"),
        ]),
        MenuNode::new("3", "3-0", "KanbanSquare").with_children(vec![
            MenuNode::new("3-1", "3-1", "KanbanSquare").with_target("/3-1"),
            MenuNode::new("3-2", "3-2", "KanbanSquare")
                .with_target("/3-2")
                .with_children(vec![
                    MenuNode::new("3-2-1", "3-2-1", "KanbanSquare").with_target("/d3-2-1"),
                    MenuNode::new("3-2-2", "3-2-2", "KanbanSquare").with_target("/3-2-2"),
                ]),
        ]),
    ])
});

/// The application's built-in sidebar menu.
pub fn default_menu() -> &'static NavForest {
    &DEFAULT_MENU
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn leaf_classification_ignores_target() {
        let decorative = MenuNode::new("x", "x", "faCircle");
        assert!(decorative.is_leaf());

        let branch_with_target = MenuNode::new("3-2", "3-2", "KanbanSquare")
            .with_target("/3-2")
            .with_children(vec![MenuNode::new("3-2-1", "3-2-1", "KanbanSquare")]);
        assert!(!branch_with_target.is_leaf());
    }

    #[test]
    fn default_menu_ids_are_unique() {
        let ids: Vec<&str> = default_menu().iter().map(|n| n.id.as_str()).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn iter_is_pre_order() {
        let ids: Vec<&str> = default_menu().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["1", "2", "2-1", "2-2", "3", "3-1", "3-2", "3-2-1", "3-2-2"]
        );
    }

    #[test]
    fn deserializes_from_json_without_optional_fields() {
        let json = r#"[
            {"id": "1", "label": "Home", "icon": "faHome", "target": "/"},
            {"id": "2", "label": "Group", "icon": "faSitemap", "children": [
                {"id": "2-1", "label": "Child", "icon": "faSitemap", "target": "/c"}
            ]}
        ]"#;
        let forest: NavForest = serde_json::from_str(json).unwrap();
        assert_eq!(forest.roots().len(), 2);
        assert!(forest.roots()[0].is_leaf());
        assert_eq!(forest.roots()[1].target, None);
        assert_eq!(forest.roots()[1].children[0].target.as_deref(), Some("/c"));
    }
}
