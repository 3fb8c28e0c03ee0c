//! Post List Component
//!
//! Fetches all posts once and reveals them a page at a time.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use blog_todo_core::posts::{load_feed, PostListState};

use crate::api::HttpPostSource;
use crate::components::PostCard;
use crate::context::AppContext;

#[component]
pub fn PostList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let state = RwSignal::new(PostListState::Loading);
    let (loading_more, set_loading_more) = signal(false);

    // Load posts on mount
    Effect::new(move |_| {
        let config = ctx.config();
        spawn_local(async move {
            let source = HttpPostSource::new(&config);
            state.set(load_feed(&source, config.page_size).await);
        });
    });

    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let visible = Memo::new(move |_| state.with(|s| s.visible().to_vec()));
    let has_more = Memo::new(move |_| state.with(|s| s.has_more()));

    let reveal_more = move |_| {
        if loading_more.get_untracked() {
            return;
        }
        set_loading_more.set(true);
        let delay_ms = ctx.config().reveal_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            state.update(|s| {
                let added = s.reveal_more();
                log::debug!("Revealed {} more posts", added);
            });
            set_loading_more.set(false);
        });
    };

    view! {
        <div class="page">
            <h1>"Blog"</h1>

            <Show when=move || is_loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || error.get().map(|message| view! {
                <div class="error-message">{message}</div>
            })}

            <div class="post-list">
                <For
                    each=move || visible.get()
                    key=|post| post.id
                    children=move |post| view! { <PostCard post=post /> }
                />
            </div>

            <Show when=move || has_more.get()>
                <div class="load-more-row">
                    <button class="outline" on:click=reveal_more disabled=move || loading_more.get()>
                        {move || if loading_more.get() { "Loading..." } else { "Load more" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
