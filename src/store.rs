//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is a
//! mirror of the task list owned by `TodoContext`; views read only from here.

use leptos::prelude::*;
use reactive_stores::Store;

use blog_todo_core::domain::{is_completed, Task, TaskFilter};

/// Todo page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All tasks in display order
    pub tasks: Vec<Task>,
    /// Active filter button
    pub filter: TaskFilter,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a task to the store
pub fn store_push_task(store: &TodoStore, task: Task) {
    store.tasks().write().push(task);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &TodoStore, updated_task: Task) {
    if let Some(task) = store.tasks().write().iter_mut().find(|task| task.id == updated_task.id) {
        *task = updated_task;
    }
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &TodoStore, task_id: &str) {
    store.tasks().write().retain(|task| task.id != task_id);
}

/// Completion flag of one task; false once it is gone
pub fn store_task_completed(store: &TodoStore, task_id: &str) -> bool {
    store.tasks().with(|tasks| is_completed(tasks, task_id))
}

/// Tasks passing the active filter
pub fn visible_tasks(store: &TodoStore) -> Vec<Task> {
    let filter = store.filter().get();
    store.tasks().with(|tasks| filter.apply(tasks))
}
