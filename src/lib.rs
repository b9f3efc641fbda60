//! Admin Console
//!
//! Administrative dashboard web front end built on Dioxus fullstack.
//!
//! This library provides:
//! - The sidebar navigation model (menu forest, active-path resolution, shared flags)
//! - Label translation and a column sort model for data tables
//! - Login credential checks and the `/api/login` endpoint
//! - The Dioxus app: router, layout, sidebar, pages

pub mod app;
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod i18n;
pub mod nav;
pub mod table;
