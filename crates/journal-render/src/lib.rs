//! # journal-render
//!
//! The render pipeline — the plugin system's only consumer. For each page:
//! resolve the content file (plugin overrides first), read it, run the
//! `beforeContentRender` hook chain over the content, and emit the result.

pub mod pipeline;

pub use pipeline::RenderPipeline;
