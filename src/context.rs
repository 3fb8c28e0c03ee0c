//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use blog_todo_core::domain::PostId;
use blog_todo_core::repository::JsonTaskRepository;
use blog_todo_core::tasks::{ClockIdGenerator, TaskList};
use blog_todo_core::AppConfig;

use crate::api::BrowserStore;
use crate::store::{store_push_task, store_remove_task, store_update_task, TodoStateStoreFields, TodoStore};

/// Which view the main area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Blog,
    Post(PostId),
    Todo,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), config: AppConfig) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            config: StoredValue::new(config),
        }
    }

    /// Switch the main view
    pub fn navigate(&self, page: Page) {
        log::debug!("Navigating to {:?}", page);
        self.set_page.set(page);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub type BrowserTaskList = TaskList<JsonTaskRepository<BrowserStore>, ClockIdGenerator>;

/// Owns the task list and keeps the reactive store in step with it.
///
/// Each call applies the change to memory, persists it, then patches the store.
#[derive(Clone, Copy)]
pub struct TodoContext {
    list: StoredValue<BrowserTaskList, LocalStorage>,
    store: TodoStore,
}

impl TodoContext {
    pub fn new(list: BrowserTaskList, store: TodoStore) -> Self {
        store.tasks().set(list.tasks().to_vec());
        Self {
            list: StoredValue::new_local(list),
            store,
        }
    }

    /// Returns false when the title was blank
    pub fn add(&self, title: &str) -> bool {
        let added = self
            .list
            .try_update_value(|list| list.add(title).cloned())
            .flatten();
        match added {
            Some(task) => {
                store_push_task(&self.store, task);
                true
            }
            None => false,
        }
    }

    pub fn toggle(&self, id: &str) {
        let updated = self
            .list
            .try_update_value(|list| if list.toggle(id) { list.get(id).cloned() } else { None })
            .flatten();
        if let Some(task) = updated {
            store_update_task(&self.store, task);
        }
    }

    pub fn delete(&self, id: &str) {
        if self.list.try_update_value(|list| list.delete(id)).unwrap_or(false) {
            store_remove_task(&self.store, id);
        }
    }
}
