//! # journal-core
//!
//! Shared foundation for the EasyJournal presentation layer: the unified
//! [`error::AppError`] type, the [`result::AppResult`] alias, and the
//! layered TOML/environment [`config`] schemas.

pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
