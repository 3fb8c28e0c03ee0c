//! Task Row Component
//!
//! One table row: checkbox, title, delete button. Completion is read from the
//! store so a toggle patches the row in place.

use leptos::prelude::*;

use blog_todo_core::domain::Task;

use crate::context::TodoContext;
use crate::store::{store_task_completed, use_todo_store};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let todo = use_context::<TodoContext>().expect("TodoContext should be provided");
    let store = use_todo_store();

    let Task { id, title, .. } = task;
    let completed = {
        let id = id.clone();
        Memo::new(move |_| store_task_completed(&store, &id))
    };
    let toggle_id = id.clone();
    let delete_id = id;

    view! {
        <tr class="task-row">
            <td class="task-done">
                <input
                    type="checkbox"
                    prop:checked=move || completed.get()
                    on:change=move |_| todo.toggle(&toggle_id)
                />
            </td>
            <td class=move || if completed.get() { "task-title line-through" } else { "task-title" }>
                {title}
            </td>
            <td class="task-actions">
                <button
                    class="ghost delete-btn"
                    title="Delete task"
                    aria-label="Delete task"
                    on:click=move |_| todo.delete(&delete_id)
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
