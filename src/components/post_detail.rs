//! Post Detail Component
//!
//! A single post with its comments. Post and comments are fetched together
//! and rendered only once both arrived.

use leptos::prelude::*;
use leptos::task::spawn_local;

use blog_todo_core::domain::PostId;
use blog_todo_core::posts::{load_post_detail, PostDetail};
use blog_todo_core::DetailError;

use crate::api::HttpPostSource;
use crate::components::CommentCard;
use crate::context::{AppContext, Page};

#[component]
pub fn PostDetailView(post_id: PostId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // None while loading
    let detail = RwSignal::new(None::<Result<PostDetail, DetailError>>);

    Effect::new(move |_| {
        let config = ctx.config();
        spawn_local(async move {
            let source = HttpPostSource::new(&config).bounded(config.request_timeout_ms);
            detail.set(Some(load_post_detail(&source, post_id).await));
        });
    });

    let back_button = move || view! {
        <button class="ghost back-btn" on:click=move |_| ctx.navigate(Page::Blog)>
            "← Back to Blog"
        </button>
    };

    view! {
        <div class="page">
            {move || match detail.get() {
                None => view! { <div class="loading">"Loading..."</div> }.into_any(),
                Some(Err(e)) => view! {
                    <div class="error-message">{e.user_message()}</div>
                    <div class="center-row">{back_button()}</div>
                }.into_any(),
                Some(Ok(PostDetail { post, comments })) => {
                    let count = comments.len();
                    view! {
                        {back_button()}
                        <h1 class="post-title">{post.title}</h1>
                        <p class="post-body">{post.body}</p>

                        <section class="comments">
                            <h2>{format!("Comments ({})", count)}</h2>
                            {if comments.is_empty() {
                                view! { <p class="empty-state">"No comments yet"</p> }.into_any()
                            } else {
                                view! {
                                    <div class="comment-list">
                                        {comments.into_iter()
                                            .map(|comment| view! { <CommentCard comment=comment /> })
                                            .collect_view()}
                                    </div>
                                }.into_any()
                            }}
                        </section>
                    }.into_any()
                }
            }}
        </div>
    }
}
