use super::TaskStore;
use crate::error::Result;
use crate::model::Task;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory store for tests. Clones share the same buffer, so a test can
/// keep a handle and inspect what the controller persisted.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tasks: Rc<RefCell<Vec<Task>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Rc::new(RefCell::new(tasks)),
        }
    }

    /// Copy of the currently stored collection.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }
}

impl TaskStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }
}
