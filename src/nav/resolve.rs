//! Ancestor-chain resolution for the current URL path.
//!
//! The sidebar asks, once per mount, which branches lead to the page being
//! shown and opens exactly those. Later navigation inside the same mounted
//! sidebar does not re-run the lookup, so branches the user collapsed stay
//! collapsed.

use std::collections::BTreeSet;

use super::tree::{MenuNode, NavForest};

/// Find the root-to-node path ending at the first node whose `target`
/// equals `target_path`.
///
/// Depth-first, pre-order, left to right. A node whose own target matches
/// ends the search immediately, even if it also has children. Paths are
/// compared verbatim. Returns an empty chain when nothing matches.
pub fn resolve_ancestor_chain<'a>(forest: &'a NavForest, target_path: &str) -> Vec<&'a MenuNode> {
    let mut chain = Vec::new();
    walk(forest.roots(), target_path, &mut chain);
    chain
}

fn walk<'a>(nodes: &'a [MenuNode], target_path: &str, chain: &mut Vec<&'a MenuNode>) -> bool {
    for node in nodes {
        if node.target.as_deref() == Some(target_path) {
            chain.push(node);
            return true;
        }
        if !node.children.is_empty() {
            chain.push(node);
            if walk(&node.children, target_path, chain) {
                return true;
            }
            chain.pop();
        }
    }
    false
}

/// Set of node ids that should render expanded when the sidebar mounts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedIdSet(BTreeSet<String>);

impl ExpandedIdSet {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandedIdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Ids of the ancestor chain for `target_path`.
pub fn expanded_ids(forest: &NavForest, target_path: &str) -> ExpandedIdSet {
    resolve_ancestor_chain(forest, target_path)
        .into_iter()
        .map(|node| node.id.as_str())
        .collect()
}
