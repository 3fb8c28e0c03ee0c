//! Blog & Todo Frontend App
//!
//! Main application component: navigation bar plus one page at a time.

use leptos::prelude::*;
use reactive_stores::Store;

use blog_todo_core::repository::JsonTaskRepository;
use blog_todo_core::tasks::{ClockIdGenerator, TaskList};

use crate::api::BrowserStore;
use crate::components::{NavBar, PostDetailView, PostList, TodoPage};
use crate::config::load_app_config;
use crate::context::{AppContext, Page, TodoContext};
use crate::store::TodoState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_app_config();

    // State
    let (page, set_page) = signal(Page::Blog);
    let todo_store = Store::new(TodoState::default());

    // Tasks are read from storage once per session
    let repo = JsonTaskRepository::new(BrowserStore::open(), config.storage_key.clone());
    let tasks = TaskList::load(repo, ClockIdGenerator::default());

    // Provide context to all children
    provide_context(todo_store);
    provide_context(TodoContext::new(tasks, todo_store));
    provide_context(AppContext::new((page, set_page), config));

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Blog => view! { <PostList /> }.into_any(),
                    Page::Post(post_id) => view! { <PostDetailView post_id=post_id /> }.into_any(),
                    Page::Todo => view! { <TodoPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
