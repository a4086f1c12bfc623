//! Remote synchronization: the `/todos` client, reconciliation
//! planning, and the async actions driving the store.

mod actions;
pub mod client;
pub mod error;
pub mod plan;

pub use client::{TaskClient, TaskRecord};
pub use error::SyncError;
pub use plan::{plan_reconcile, task_differs, SyncOp};
