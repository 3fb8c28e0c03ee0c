//! UI Components
//!
//! Reusable Leptos components.

mod comment_card;
mod filter_bar;
mod nav_bar;
mod new_task_dialog;
mod post_card;
mod post_detail;
mod post_list;
mod task_row;
mod todo_page;

pub use comment_card::CommentCard;
pub use filter_bar::FilterBar;
pub use nav_bar::NavBar;
pub use new_task_dialog::NewTaskDialog;
pub use post_card::PostCard;
pub use post_detail::PostDetailView;
pub use post_list::PostList;
pub use task_row::TaskRow;
pub use todo_page::TodoPage;
