//! State model for the todo store.
//!
//! All types here are plain values: snapshots are cloned, never mutated
//! in place. A [`StatePatch`] describes a partial next state; applying
//! it replaces the touched top-level fields wholesale.

/// A single todo item.
///
/// `editing` is presentation state local to this client and never
/// crosses the wire; the remote collection only knows `id`, `text` and
/// `done` (see [`crate::sync::TaskRecord`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Opaque unique token, externally generated.
    pub id: String,
    pub text: String,
    pub done: bool,
    pub editing: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done: false,
            editing: false,
        }
    }
}

/// Shallow field merge for [`Task`]: `None` fields keep the current
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub text: Option<String>,
    pub done: Option<bool>,
    pub editing: Option<bool>,
}

impl TaskChanges {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn done(done: bool) -> Self {
        Self {
            done: Some(done),
            ..Self::default()
        }
    }

    pub fn editing(editing: bool) -> Self {
        Self {
            editing: Some(editing),
            ..Self::default()
        }
    }

    pub(crate) fn merge_into(&self, task: &Task) -> Task {
        Task {
            id: task.id.clone(),
            text: self.text.clone().unwrap_or_else(|| task.text.clone()),
            done: self.done.unwrap_or(task.done),
            editing: self.editing.unwrap_or(task.editing),
        }
    }
}

/// Which tasks the presentation layer shows. Never mutates `done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

/// Gates the loading indicator while a sync action is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// Transient user notification. Cleared automatically after the
/// configured linger by the action that set it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Derived counters over the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    /// Share of still-active tasks, rounded. 0 for an empty list.
    pub percent: u32,
}

/// Root state aggregate. Owned exclusively by the state container;
/// insertion order of `tasks` is display order under [`Filter::All`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub filter: Filter,
    pub status: Status,
    pub message: Option<Message>,
}

impl AppState {
    /// Merge a patch over this snapshot, replacing touched fields
    /// wholesale, and return the next snapshot.
    pub fn apply(&self, patch: StatePatch) -> AppState {
        AppState {
            tasks: patch.tasks.unwrap_or_else(|| self.tasks.clone()),
            filter: patch.filter.unwrap_or(self.filter),
            status: patch.status.unwrap_or(self.status),
            message: match patch.message {
                Some(next) => next,
                None => self.message.clone(),
            },
        }
    }
}

/// Partial next state produced by a setter.
///
/// `None` leaves the snapshot's field untouched. The message field is
/// doubly optional: the outer option says whether the field is touched,
/// the inner one is the new value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatePatch {
    pub tasks: Option<Vec<Task>>,
    pub filter: Option<Filter>,
    pub status: Option<Status>,
    pub message: Option<Option<Message>>,
}

/// Collapse whitespace runs to single spaces and trim the ends.
///
/// The only text validation the store performs; emptiness after
/// normalization is what creation/edit handling checks.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
