//! Post Card Component
//!
//! One entry in the blog list: title plus body excerpt.

use leptos::prelude::*;

use blog_todo_core::domain::Post;

use crate::context::{AppContext, Page};

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = post.id;
    let excerpt = post.excerpt();

    view! {
        <div class="post-card" on:click=move |_| ctx.navigate(Page::Post(id))>
            <h2 class="post-title">{post.title}</h2>
            <p class="post-excerpt">{excerpt}</p>
        </div>
    }
}
