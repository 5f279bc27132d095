//! pkgcode - package source editing session
//!
//! Module layout:
//! - core: host-agnostic keys and commands
//! - models: file tree data model
//! - kernel: session state, actions, reducer store, services (remote API, runtime, settings)
//! - views: headless view models (file tree, tab strip, quick-open, editor binding)
//! - app: `EditorSession` host facade

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod views;
