//! # journal-api
//!
//! Axum HTTP surface for the EasyJournal presentation layer: the page
//! routes rendered through the plugin-aware pipeline, plugin introspection
//! for the admin view, and the login notification seam from the external
//! backend.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
