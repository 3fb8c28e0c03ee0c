//! Filter Bar Component

use leptos::prelude::*;

use blog_todo_core::domain::TaskFilter;

use crate::store::{use_todo_store, TodoStateStoreFields};

/// All / Pending / Completed buttons; the active one is highlighted
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_todo_store();

    view! {
        <div class="filter-bar">
            {TaskFilter::ALL.into_iter().map(|mode| {
                let is_active = move || store.filter().get() == mode;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn outline" }
                        on:click=move |_| store.filter().set(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
