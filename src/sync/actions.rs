//! Synchronization actions: fetch and save against the remote
//! collection.
//!
//! Both actions run the same status machine, Idle → Loading → Idle,
//! and always come back to Idle whatever the remote did. Failures are
//! logged and shown to the user only as a generic transient message.
//! Overlapping invocations serialize on the store's sync gate, so two
//! in-flight actions never interleave their remote calls.

use crate::store::{Message, Status, Store, Task};
use crate::sync::error::SyncError;
use crate::sync::plan::{plan_reconcile, SyncOp};

impl Store {
    /// Replace the local task list with the remote collection.
    ///
    /// On failure the local list is left untouched.
    pub async fn fetch_todos(&self) {
        let _gate = self.sync_gate.lock().await;
        self.set_status(Status::Loading);

        match self.client.list().await {
            Ok(records) => {
                let tasks: Vec<Task> = records.into_iter().map(Task::from).collect();
                tracing::debug!(count = tasks.len(), "remote collection fetched");
                self.set_tasks(tasks);
                self.set_message(Some(Message::success("Todos received")));
            }
            Err(err) => {
                tracing::error!(error = %err, "fetching todos failed");
                self.set_message(Some(Message::error("Something went wrong")));
            }
        }

        self.set_status(Status::Idle);
        self.schedule_message_clear();
    }

    /// Reconcile the remote collection to `local`: fetch the baseline,
    /// then issue one update/delete/create call per difference,
    /// strictly in sequence.
    ///
    /// A failure mid-plan leaves earlier calls applied; no rollback is
    /// attempted.
    pub async fn save_todos(&self, local: &[Task]) {
        let _gate = self.sync_gate.lock().await;
        self.set_status(Status::Loading);

        match self.reconcile(local).await {
            Ok(applied) => {
                tracing::debug!(operations = applied, "remote collection reconciled");
                self.set_message(Some(Message::success("Todos saved")));
            }
            Err(err) => {
                tracing::error!(error = %err, "saving todos failed");
                self.set_message(Some(Message::error("Something went wrong")));
            }
        }

        self.set_status(Status::Idle);
        self.schedule_message_clear();
    }

    async fn reconcile(&self, local: &[Task]) -> Result<usize, SyncError> {
        let baseline = self.client.list().await?;
        let ops = plan_reconcile(&baseline, local);
        let count = ops.len();

        for op in ops {
            match op {
                SyncOp::Update(record) => self.client.update(&record).await?,
                SyncOp::Delete(id) => self.client.delete(&id).await?,
                SyncOp::Create(record) => self.client.create(&record).await?,
            }
        }

        Ok(count)
    }

    /// Schedule the transient message to clear after the configured
    /// linger. A pending clear from an earlier action is aborted, so a
    /// newer message is never wiped by an older timer.
    fn schedule_message_clear(&self) {
        let mut slot = self.pending_clear.lock().expect("clear slot poisoned");
        if let Some(previous) = slot.take() {
            previous.abort();
        }

        let store = self.clone();
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(store.message_linger).await;
            store.set_message(None);
        }));
    }
}
