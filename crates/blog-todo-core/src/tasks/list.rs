//! Task List
//!
//! Owns the ordered task sequence for the session. Every successful mutation
//! re-saves the whole sequence; a failed save is logged and the in-memory
//! change is kept.

use crate::domain::{Task, TaskFilter};
use crate::tasks::IdGenerator;
use crate::repository::TaskRepository;

pub struct TaskList<R, G> {
    tasks: Vec<Task>,
    repo: R,
    ids: G,
}

impl<R: TaskRepository, G: IdGenerator> TaskList<R, G> {
    /// Read the persisted tasks. Never fails; unreadable storage means an empty list.
    pub fn load(repo: R, ids: G) -> Self {
        let tasks = repo.load();
        log::info!("Loaded {} tasks", tasks.len());
        Self { tasks, repo, ids }
    }

    /// Tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a pending task, keeping the title as entered.
    /// Blank titles are ignored and return `None`.
    pub fn add(&mut self, title: &str) -> Option<&Task> {
        if title.trim().is_empty() {
            log::debug!("Ignoring task with empty title");
            return None;
        }

        let id = self.fresh_id();
        self.tasks.push(Task::new(id, title));
        self.persist();
        self.tasks.last()
    }

    /// Flip `completed` on the matching task. Returns false when nothing matched.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.toggle();
        self.persist();
        true
    }

    /// Remove the matching task. Returns false when nothing matched.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Read-only view; never touches storage
    pub fn filtered(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.repo.save(&self.tasks) {
            log::error!("Failed to save {} tasks: {}", self.tasks.len(), e);
        }
    }
}
