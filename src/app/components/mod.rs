//! Shared UI components for the Dioxus fullstack web UI.

pub mod button;
pub mod column_header;
pub mod error_alert;
pub mod icon;
pub mod layout;
pub mod nav;
pub mod theme;

pub use button::{Button, ButtonSize, ButtonState, ButtonVariant};
pub use column_header::DataTableColumnHeader;
pub use error_alert::ErrorAlert;
pub use icon::Icon;
pub use layout::MainLayout;
pub use nav::{Nav, NavItem};
pub use theme::{LocaleSwitcher, ThemeSwitcher};
