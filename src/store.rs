//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Tasks live
//! in memory for the client session; there is no persistence layer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::models::{Task, TaskError};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All tasks, in creation order
    pub tasks: Vec<Task>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Check a candidate task before it enters the store: the title must be
/// non-blank and every tag reference must exist in the catalog.
pub fn validate_new_task(task: &Task) -> Result<(), TaskError> {
    if task.title.trim().is_empty() {
        return Err(TaskError::EmptyTitle);
    }
    catalog::validate_tags(&task.tags)
}

// ========================
// Store Helper Functions
// ========================

/// Validate and add a task to the store
pub fn store_add_task(store: &AppStore, task: Task) -> Result<(), TaskError> {
    validate_new_task(&task)?;
    store.tasks().write().push(task);
    Ok(())
}

/// Flip a task's done flag by position
pub fn store_toggle_task(store: &AppStore, index: usize) {
    if let Some(task) = store.tasks().write().get_mut(index) {
        task.done = !task.done;
    }
}

/// Remove a task from the store by position
pub fn store_remove_task(store: &AppStore, index: usize) {
    let tasks = store.tasks();
    let mut tasks = tasks.write();
    if index < tasks.len() {
        tasks.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(title: &str, tags: &[&str]) -> Task {
        Task {
            title: title.to_string(),
            description: String::new(),
            done: false,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_task() {
        assert!(validate_new_task(&make_task("Buy groceries", &["family"])).is_ok());
        assert!(validate_new_task(&make_task("Untagged", &[])).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        assert_eq!(
            validate_new_task(&make_task("", &[])),
            Err(TaskError::EmptyTitle)
        );
        assert_eq!(
            validate_new_task(&make_task("   ", &["work"])),
            Err(TaskError::EmptyTitle)
        );
    }

    #[test]
    fn test_store_helpers_update_tasks() {
        let store = Store::new(AppState::default());

        store_add_task(&store, make_task("Pack lunches", &["family"])).expect("add failed");
        store_add_task(&store, make_task("Read chapter", &["study"])).expect("add failed");
        assert!(store_add_task(&store, make_task("", &[])).is_err());
        assert_eq!(store.tasks().get_untracked().len(), 2);

        store_toggle_task(&store, 0);
        assert!(store.tasks().get_untracked()[0].done);
        store_toggle_task(&store, 0);
        assert!(!store.tasks().get_untracked()[0].done);

        store_remove_task(&store, 0);
        let tasks = store.tasks().get_untracked();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Read chapter");

        // Out-of-range positions are ignored
        store_remove_task(&store, 5);
        store_toggle_task(&store, 5);
        assert_eq!(store.tasks().get_untracked().len(), 1);
    }

    #[test]
    fn test_validate_rejects_unknown_tag_reference() {
        assert_eq!(
            validate_new_task(&make_task("Plan trip", &["family", "travel"])),
            Err(TaskError::UnknownTag("travel".to_string()))
        );
    }
}
