//! Todo Page Component
//!
//! Filter buttons, the task table and the add dialog.

use leptos::prelude::*;

use crate::components::{FilterBar, NewTaskDialog, TaskRow};
use crate::store::{use_todo_store, visible_tasks};

#[component]
pub fn TodoPage() -> impl IntoView {
    let store = use_todo_store();

    // Recomputed from the live list on every change
    let visible = Memo::new(move |_| visible_tasks(&store));

    view! {
        <div class="page">
            <h1>"Todo List"</h1>

            <FilterBar />

            <div class="task-table-wrapper">
                <table class="task-table">
                    <thead>
                        <tr>
                            <th class="task-done">"Done"</th>
                            <th>"Task"</th>
                            <th class="task-actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !visible.get().is_empty()
                            fallback=|| view! {
                                <tr>
                                    <td colspan="3" class="empty-state">"No tasks found"</td>
                                </tr>
                            }
                        >
                            <For
                                each=move || visible.get()
                                key=|task| task.id.clone()
                                children=move |task| view! { <TaskRow task=task /> }
                            />
                        </Show>
                    </tbody>
                </table>
            </div>

            <NewTaskDialog />
        </div>
    }
}
