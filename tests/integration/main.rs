//! Integration tests exercising the full stack: plugin discovery,
//! hook dispatch, template overrides, and the HTTP surface.

mod helpers;

mod auth_test;
mod hooks_test;
mod pages_test;
mod plugins_test;
