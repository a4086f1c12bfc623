//! Client-side state management for a synced todo list.
//!
//! The store keeps one immutable [`store::AppState`] snapshot in a
//! [`store::StateContainer`]; pure setters produce patches, pure
//! getters derive read-only views, and the async actions in [`sync`]
//! reconcile local edits with a remote `/todos` collection. The
//! [`store::Store`] façade binds all of it together for a presentation
//! layer, which subscribes to snapshot changes and re-renders.

pub mod config;
pub mod logging;
pub mod store;
pub mod sync;

pub use config::Config;
pub use store::Store;
