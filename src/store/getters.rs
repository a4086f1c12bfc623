//! Pure derivations over a snapshot.
//!
//! Every getter takes `&AppState` explicitly, so derived getters can
//! call other getters against the same consistent snapshot. Results are
//! recomputed on each read; nothing here caches.

use crate::store::state::{AppState, Filter, Message, Status, Task, TaskStats};

pub fn all_tasks(state: &AppState) -> Vec<Task> {
    state.tasks.clone()
}

pub fn task_by_id<'a>(state: &'a AppState, id: &str) -> Option<&'a Task> {
    state.tasks.iter().find(|task| task.id == id)
}

pub fn total_tasks(state: &AppState) -> usize {
    state.tasks.len()
}

pub fn active_tasks(state: &AppState) -> Vec<Task> {
    state
        .tasks
        .iter()
        .filter(|task| !task.done)
        .cloned()
        .collect()
}

pub fn completed_tasks(state: &AppState) -> Vec<Task> {
    state
        .tasks
        .iter()
        .filter(|task| task.done)
        .cloned()
        .collect()
}

pub fn filter(state: &AppState) -> Filter {
    state.filter
}

pub fn status(state: &AppState) -> Status {
    state.status
}

pub fn message(state: &AppState) -> Option<Message> {
    state.message.clone()
}

/// The visible task list under the snapshot's filter. `All` returns the
/// full list unfiltered, editing flags included.
pub fn filtered_tasks(state: &AppState) -> Vec<Task> {
    match filter(state) {
        Filter::All => all_tasks(state),
        Filter::Active => active_tasks(state),
        Filter::Completed => completed_tasks(state),
    }
}

pub fn task_stats(state: &AppState) -> TaskStats {
    let total = total_tasks(state);
    let completed = completed_tasks(state).len();
    let active = active_tasks(state).len();

    let percent = if total == 0 {
        0
    } else {
        ((active as f64 / total as f64) * 100.0).round() as u32
    };

    TaskStats {
        total,
        completed,
        active,
        percent,
    }
}
