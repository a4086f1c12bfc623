//! The reactive store: container, pure transitions, derivations, and
//! the façade binding them together.
//!
//! # Architecture
//!
//! ```text
//! setter ──→ patch ──→ container ──→ snapshot ──→ subscribers
//!    ↑                                   │
//!    └────────────── getters ←───────────┘
//! ```
//!
//! Setters produce patches from the snapshot current at call time;
//! the container merges them and fans the new snapshot out; getters
//! recompute their derivations from an explicit snapshot on every read.
//! The async sync actions live in [`crate::sync`] and drive the same
//! setters.

pub mod container;
pub mod getters;
pub mod setters;
pub mod state;

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

pub use container::StateContainer;
pub use state::{
    normalize_text, AppState, Filter, Message, MessageKind, StatePatch, Status,
    Task, TaskChanges, TaskStats,
};

use crate::config::Config;
use crate::sync::TaskClient;

/// Access façade handed to the presentation layer: snapshot accessor,
/// setters, getters, actions and change subscription in one cloneable
/// value. Constructed once by the application entry point.
#[derive(Clone)]
pub struct Store {
    pub(crate) container: StateContainer,
    pub(crate) client: TaskClient,
    pub(crate) message_linger: Duration,
    /// Pending scheduled message clear; a new message aborts it.
    pub(crate) pending_clear: Arc<Mutex<Option<JoinHandle<()>>>>,
    /// Serializes fetch/save so their remote calls never interleave.
    pub(crate) sync_gate: Arc<tokio::sync::Mutex<()>>,
}

impl Store {
    pub fn new(config: &Config) -> Self {
        Self {
            container: StateContainer::default(),
            client: TaskClient::new(&config.server.base_url, &config.sync),
            message_linger: config.sync.message_linger(),
            pending_clear: Arc::new(Mutex::new(None)),
            sync_gate: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    // ---- snapshot access ------------------------------------------------

    pub fn snapshot(&self) -> AppState {
        self.container.get()
    }

    /// Receive every snapshot applied from now on.
    pub fn subscribe(&self) -> Receiver<AppState> {
        self.container.subscribe()
    }

    // ---- setters, bound to the live container ---------------------------

    pub fn set_status(&self, status: Status) {
        self.container
            .update(|state| setters::set_status(state, status));
    }

    pub fn set_message(&self, message: Option<Message>) {
        self.container
            .update(|state| setters::set_message(state, message));
    }

    pub fn set_filter(&self, filter: Filter) {
        self.container
            .update(|state| setters::set_filter(state, filter));
    }

    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.container
            .update(|state| setters::set_tasks(state, tasks));
    }

    pub fn add_task(&self, task: Task) {
        self.container.update(|state| setters::add_task(state, task));
    }

    pub fn update_task(&self, id: &str, changes: TaskChanges) {
        self.container
            .update(|state| setters::update_task(state, id, &changes));
    }

    pub fn remove_task(&self, id: &str) {
        self.container
            .update(|state| setters::remove_task(state, id));
    }

    pub fn complete_all(&self) {
        self.container.update(setters::complete_all);
    }

    pub fn clear_completed(&self) {
        self.container.update(setters::clear_completed);
    }

    // ---- creation / edit rules ------------------------------------------

    /// Normalize `text` and append a fresh task with a new opaque id.
    /// Whitespace-only input creates nothing.
    pub fn create_task(&self, text: &str) -> Option<Task> {
        let text = normalize_text(text);
        if text.is_empty() {
            return None;
        }

        let task = Task::new(uuid::Uuid::new_v4().simple().to_string(), text);
        self.add_task(task.clone());
        Some(task)
    }

    /// Finish editing a task. Empty normalized text deletes the task
    /// instead of leaving it blank; otherwise the text is replaced and
    /// the edit flag cleared.
    pub fn finish_edit(&self, id: &str, text: &str) {
        let text = normalize_text(text);
        if text.is_empty() {
            self.remove_task(id);
            return;
        }

        self.update_task(
            id,
            TaskChanges {
                text: Some(text),
                editing: Some(false),
                ..TaskChanges::default()
            },
        );
    }

    // ---- getters, one snapshot per read ---------------------------------

    pub fn all_tasks(&self) -> Vec<Task> {
        getters::all_tasks(&self.snapshot())
    }

    pub fn task_by_id(&self, id: &str) -> Option<Task> {
        getters::task_by_id(&self.snapshot(), id).cloned()
    }

    pub fn total_tasks(&self) -> usize {
        getters::total_tasks(&self.snapshot())
    }

    pub fn active_tasks(&self) -> Vec<Task> {
        getters::active_tasks(&self.snapshot())
    }

    pub fn completed_tasks(&self) -> Vec<Task> {
        getters::completed_tasks(&self.snapshot())
    }

    pub fn filtered_tasks(&self) -> Vec<Task> {
        getters::filtered_tasks(&self.snapshot())
    }

    pub fn filter(&self) -> Filter {
        getters::filter(&self.snapshot())
    }

    pub fn status(&self) -> Status {
        getters::status(&self.snapshot())
    }

    pub fn message(&self) -> Option<Message> {
        getters::message(&self.snapshot())
    }

    pub fn task_stats(&self) -> TaskStats {
        getters::task_stats(&self.snapshot())
    }
}
