//! Pure state transitions.
//!
//! Each setter takes the current snapshot plus its arguments and
//! returns the patch to merge over it. Setters are total: an id that
//! matches nothing leaves the list unchanged rather than erroring.
//! Applying the patch is the container's job.

use crate::store::state::{
    AppState, Filter, Message, StatePatch, Status, Task, TaskChanges,
};

pub fn set_status(_state: &AppState, status: Status) -> StatePatch {
    StatePatch {
        status: Some(status),
        ..StatePatch::default()
    }
}

pub fn set_message(_state: &AppState, message: Option<Message>) -> StatePatch {
    StatePatch {
        message: Some(message),
        ..StatePatch::default()
    }
}

pub fn set_filter(_state: &AppState, filter: Filter) -> StatePatch {
    StatePatch {
        filter: Some(filter),
        ..StatePatch::default()
    }
}

/// Replace the entire task list. Used after a fetch.
pub fn set_tasks(_state: &AppState, tasks: Vec<Task>) -> StatePatch {
    StatePatch {
        tasks: Some(tasks),
        ..StatePatch::default()
    }
}

/// Append a task. The caller guarantees a fresh unique id.
pub fn add_task(state: &AppState, task: Task) -> StatePatch {
    let mut tasks = state.tasks.clone();
    tasks.push(task);
    StatePatch {
        tasks: Some(tasks),
        ..StatePatch::default()
    }
}

/// Shallow-merge `changes` into the task matching `id`.
pub fn update_task(state: &AppState, id: &str, changes: &TaskChanges) -> StatePatch {
    let tasks = state
        .tasks
        .iter()
        .map(|task| {
            if task.id == id {
                changes.merge_into(task)
            } else {
                task.clone()
            }
        })
        .collect();
    StatePatch {
        tasks: Some(tasks),
        ..StatePatch::default()
    }
}

/// Drop the task matching `id`.
pub fn remove_task(state: &AppState, id: &str) -> StatePatch {
    let tasks = state
        .tasks
        .iter()
        .filter(|task| task.id != id)
        .cloned()
        .collect();
    StatePatch {
        tasks: Some(tasks),
        ..StatePatch::default()
    }
}

/// Mark every task done.
pub fn complete_all(state: &AppState) -> StatePatch {
    let tasks = state
        .tasks
        .iter()
        .map(|task| Task {
            done: true,
            ..task.clone()
        })
        .collect();
    StatePatch {
        tasks: Some(tasks),
        ..StatePatch::default()
    }
}

/// Drop every completed task.
pub fn clear_completed(state: &AppState) -> StatePatch {
    let tasks = state
        .tasks
        .iter()
        .filter(|task| !task.done)
        .cloned()
        .collect();
    StatePatch {
        tasks: Some(tasks),
        ..StatePatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::state::MessageKind;

    fn state_with(tasks: Vec<Task>) -> AppState {
        AppState {
            tasks,
            ..AppState::default()
        }
    }

    #[test]
    fn set_status_touches_only_status() {
        let state = AppState::default();
        let patch = set_status(&state, Status::Loading);
        assert_eq!(patch.status, Some(Status::Loading));
        assert_eq!(patch.tasks, None);
        assert_eq!(patch.filter, None);
        assert_eq!(patch.message, None);
    }

    #[test]
    fn set_message_and_clear() {
        let state = AppState::default();
        let patch = set_message(&state, Some(Message::success("Todos saved")));
        let next = state.apply(patch);
        assert_eq!(next.message.as_ref().map(|m| m.kind), Some(MessageKind::Success));

        let cleared = next.apply(set_message(&next, None));
        assert_eq!(cleared.message, None);
    }

    #[test]
    fn add_then_remove_restores_original_list() {
        let original = state_with(vec![Task::new("a1", "buy milk")]);
        let added = original.apply(add_task(&original, Task::new("b2", "walk dog")));
        assert_eq!(added.tasks.len(), 2);

        let removed = added.apply(remove_task(&added, "b2"));
        assert_eq!(removed.tasks, original.tasks);
    }

    #[test]
    fn add_appends_at_the_end() {
        let state = state_with(vec![Task::new("a1", "first")]);
        let next = state.apply(add_task(&state, Task::new("b2", "second")));
        assert_eq!(next.tasks[1].id, "b2");
    }

    #[test]
    fn update_merges_changes_into_matching_task() {
        let state = state_with(vec![Task::new("a1", "old"), Task::new("b2", "other")]);
        let next = state.apply(update_task(&state, "a1", &TaskChanges::text("new")));

        assert_eq!(next.tasks[0].text, "new");
        assert!(!next.tasks[0].done);
        assert_eq!(next.tasks[1], state.tasks[1]);
    }

    #[test]
    fn update_unknown_id_leaves_list_unchanged() {
        let state = state_with(vec![Task::new("a1", "buy milk")]);
        let next = state.apply(update_task(&state, "zzzzz", &TaskChanges::done(true)));
        assert_eq!(next.tasks, state.tasks);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let state = state_with(vec![Task::new("a1", "buy milk")]);
        let next = state.apply(remove_task(&state, "zzzzz"));
        assert_eq!(next.tasks, state.tasks);
    }

    #[test]
    fn complete_all_marks_every_task_done() {
        let state = state_with(vec![Task::new("a1", "one"), Task::new("b2", "two")]);
        let next = state.apply(complete_all(&state));
        assert!(next.tasks.iter().all(|task| task.done));
    }

    #[test]
    fn clear_completed_is_idempotent() {
        let mut done = Task::new("a1", "done");
        done.done = true;
        let state = state_with(vec![done, Task::new("b2", "open")]);

        let once = state.apply(clear_completed(&state));
        let twice = once.apply(clear_completed(&once));

        assert_eq!(once.tasks.len(), 1);
        assert_eq!(once.tasks[0].id, "b2");
        assert_eq!(twice.tasks, once.tasks);
    }
}
