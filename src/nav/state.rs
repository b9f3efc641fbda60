//! Sidebar UI flags shared by every rendered nav item.

/// The three sidebar flags.
///
/// They are independent booleans; how they combine into a visual state
/// (e.g. "labels visible if expanded by user or by default") is decided by
/// the rendering layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavUiState {
    /// Toggled by the user (hamburger / pin button)
    pub expanded_by_user: bool,
    /// Follows the viewport breakpoint
    pub expanded_by_default: bool,
    /// Mobile drawer is open
    pub panel_open: bool,
}

impl NavUiState {
    pub fn toggle_user_expanded(&mut self) {
        self.expanded_by_user = !self.expanded_by_user;
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    pub fn set_default_expanded(&mut self, expanded: bool) {
        self.expanded_by_default = expanded;
    }

    /// A destination leaf was clicked: close the drawer and drop manual expansion.
    pub fn on_leaf_activated(&mut self) {
        self.expanded_by_user = false;
        self.panel_open = false;
    }
}
