//! Query JSON File MCP tool surface.
//!
//! Request schemas, façades and protocol dispatch live in separate submodules so the envelope
//! contract stays in one place.

pub mod catalog;
mod diagnostics;
mod dispatch;
mod schemas;
mod toolkit;

pub use dispatch::QueryJsonFileService;
