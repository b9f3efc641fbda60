//! Navigation model for the sidebar.
//!
//! - `tree` - the static menu forest (`MenuNode`, `NavForest`)
//! - `resolve` - ancestor-chain lookup seeding which branches start expanded
//! - `state` - the shared sidebar flags (user expanded, default expanded, panel open)
//! - `icon` - symbolic icon names resolved against a closed registry
//!
//! Everything here is plain data and pure functions so it can be tested on
//! the host. The Dioxus side (`crate::app`) wraps it in signals and context.

pub mod icon;
pub mod resolve;
pub mod state;
pub mod tree;

pub use icon::NavIcon;
pub use resolve::{expanded_ids, resolve_ancestor_chain, ExpandedIdSet};
pub use state::NavUiState;
pub use tree::{default_menu, MenuNode, NavForest};
