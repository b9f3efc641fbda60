//! Page components rendered by the router.

mod dashboard;
mod detail;
mod login;
mod not_found;

pub use dashboard::Dashboard;
pub use detail::DetailPage;
pub use login::Login;
pub use not_found::NotFound;
