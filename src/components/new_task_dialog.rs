//! New Task Dialog Component
//!
//! "Add New Task" button plus the modal used to enter a title.

use leptos::prelude::*;

use crate::context::TodoContext;

#[component]
pub fn NewTaskDialog() -> impl IntoView {
    let todo = use_context::<TodoContext>().expect("TodoContext should be provided");

    let (open, set_open) = signal(false);
    let (new_title, set_new_title) = signal(String::new());

    // Blank titles keep the dialog open
    let submit = move || {
        if todo.add(&new_title.get_untracked()) {
            set_new_title.set(String::new());
            set_open.set(false);
        }
    };

    let cancel = move || {
        set_open.set(false);
        set_new_title.set(String::new());
    };

    view! {
        <div class="add-task">
            <button class="primary wide" on:click=move |_| set_open.set(true)>
                "Add New Task"
            </button>

            <Show when=move || open.get()>
                <div class="dialog-backdrop">
                    <div class="dialog" role="dialog" aria-modal="true">
                        <h2>"Add New Task"</h2>
                        <p class="dialog-description">"Enter the title of your new task below."</p>
                        <input
                            type="text"
                            placeholder="Task title"
                            prop:value=move || new_title.get()
                            on:input=move |ev| set_new_title.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    submit();
                                }
                            }
                        />
                        <div class="dialog-footer">
                            <button class="outline" on:click=move |_| cancel()>"Cancel"</button>
                            <button class="primary" on:click=move |_| submit()>"Add Task"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
