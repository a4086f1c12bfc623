//! Reconciliation planning.
//!
//! Diffs the local task list against a freshly fetched remote baseline
//! and produces the ordered sequence of remote calls that converges the
//! collection to the local state: updates and deletes in baseline
//! order, then creates in local order. Planning is pure; executing the
//! plan is the action's job.

use crate::store::Task;
use crate::sync::client::TaskRecord;

/// One remote mutation to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOp {
    /// `PUT` the record over the existing remote task with the same id.
    Update(TaskRecord),
    /// `DELETE` the remote task with this id.
    Delete(String),
    /// `POST` the record as a new task.
    Create(TaskRecord),
}

/// Compute the calls needed to make the remote collection match
/// `local`, using `baseline` as the just-fetched remote state.
pub fn plan_reconcile(baseline: &[TaskRecord], local: &[Task]) -> Vec<SyncOp> {
    let mut ops = Vec::new();

    for existing in baseline {
        match local.iter().find(|task| task.id == existing.id) {
            Some(ours) if task_differs(ours, existing) => {
                ops.push(SyncOp::Update(TaskRecord::from(ours)));
            }
            Some(_) => {}
            None => ops.push(SyncOp::Delete(existing.id.clone())),
        }
    }

    for ours in local {
        if !baseline.iter().any(|existing| existing.id == ours.id) {
            ops.push(SyncOp::Create(TaskRecord::from(ours)));
        }
    }

    ops
}

/// Shallow field comparison between the local task and its remote copy.
///
/// A task in edit mode always counts as changed: the remote copy has no
/// notion of the edit flag, so the local one cannot match it.
pub fn task_differs(local: &Task, remote: &TaskRecord) -> bool {
    local.text != remote.text || local.done != remote.done || local.editing
}
