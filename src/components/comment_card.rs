use leptos::prelude::*;

use blog_todo_core::domain::Comment;

#[component]
pub fn CommentCard(comment: Comment) -> impl IntoView {
    view! {
        <div class="comment-card">
            <h3 class="comment-name">{comment.name}</h3>
            <p class="comment-email">{comment.email}</p>
            <p class="comment-body">{comment.body}</p>
        </div>
    }
}
