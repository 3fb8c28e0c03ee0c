//! Navigation Bar Component
//!
//! Top bar switching between the blog and the todo list.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let is_blog = move || matches!(ctx.page.get(), Page::Blog | Page::Post(_));
    let is_todo = move || ctx.page.get() == Page::Todo;

    view! {
        <nav class="nav-bar">
            <button
                class=move || if is_blog() { "nav-link active" } else { "nav-link" }
                on:click=move |_| ctx.navigate(Page::Blog)
            >
                "Blog"
            </button>
            <button
                class=move || if is_todo() { "nav-link active" } else { "nav-link" }
                on:click=move |_| ctx.navigate(Page::Todo)
            >
                "Todo"
            </button>
        </nav>
    }
}
