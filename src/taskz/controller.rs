//! The task list controller.
//!
//! [`TaskList`] owns the authoritative in-memory collection and the current
//! filter. Every mutating event runs the same cycle: mutate, persist the full
//! collection, re-render the filtered view. Persistence completes before
//! [`TaskList::handle`] returns, so the store and the in-memory collection
//! are identical whenever the caller regains control.
//!
//! Unmet preconditions (empty text, unknown id) are silent no-ops, not
//! errors: the event is dropped without persisting or re-rendering.

use crate::error::Result;
use crate::model::{Filter, Task};
use crate::store::TaskStore;
use crate::surface::{Event, Surface};

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Structured feedback from a handled event, rendered by the client.
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The controller: owns the task collection, the filter, and the id counter.
///
/// Generic over the storage backend and the surface so the same logic runs
/// against `FileStore`/`TermSurface` in production and in-memory fakes in
/// tests.
pub struct TaskList<S: TaskStore, R: Surface> {
    store: S,
    surface: R,
    tasks: Vec<Task>,
    filter: Filter,
    next_id: u64,
}

impl<S: TaskStore, R: Surface> TaskList<S, R> {
    /// Load the stored collection and seed the id counter past the largest
    /// stored id. Does not render; callers decide when the first frame
    /// appears.
    pub fn open(store: S, surface: R) -> Result<Self> {
        let tasks = store.load()?;
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        Ok(Self {
            store,
            surface,
            tasks,
            filter: Filter::default(),
            next_id,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Apply one event. Mutating events persist the full collection before
    /// re-rendering; `SetFilter` only re-renders.
    pub fn handle(&mut self, event: Event) -> Result<Vec<CmdMessage>> {
        let mut messages = Vec::new();
        match event {
            Event::Add(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Ok(messages);
                }
                let task = Task::new(self.next_id, text.to_string());
                self.next_id += 1;
                messages.push(CmdMessage::success(format!(
                    "Added ({}): {}",
                    task.id, task.text
                )));
                self.tasks.push(task);
                self.store.save(&self.tasks)?;
                self.render();
            }
            Event::Toggle(id) => {
                let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
                    return Ok(messages);
                };
                task.completed = !task.completed;
                let state = if task.completed { "done" } else { "pending" };
                messages.push(CmdMessage::success(format!(
                    "Marked {} ({}): {}",
                    state, task.id, task.text
                )));
                self.store.save(&self.tasks)?;
                self.render();
            }
            Event::Delete(id) => {
                let before = self.tasks.len();
                self.tasks.retain(|t| t.id != id);
                if self.tasks.len() < before {
                    messages.push(CmdMessage::success(format!("Deleted task {}", id)));
                }
                self.store.save(&self.tasks)?;
                self.render();
            }
            Event::Clear => {
                if !self.tasks.is_empty() {
                    messages.push(CmdMessage::success(format!(
                        "Deleted {} task(s)",
                        self.tasks.len()
                    )));
                }
                self.tasks.clear();
                self.store.save(&self.tasks)?;
                self.render();
            }
            Event::SetFilter(filter) => {
                self.filter = filter;
                self.render();
            }
        }
        Ok(messages)
    }

    /// Recompute the filtered view and hand it to the surface, then sync the
    /// filter indicator. Always a full rebuild.
    pub fn render(&mut self) {
        let visible: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .cloned()
            .collect();
        self.surface.render_tasks(&visible);
        self.surface.update_filter_indicator(self.filter);
    }

    /// Interactive session: render once, then run events from the surface
    /// to completion until it closes.
    pub fn run(&mut self) -> Result<()> {
        self.render();
        while let Some(event) = self.surface.next_event()? {
            let messages = self.handle(event)?;
            self.surface.show_messages(&messages);
        }
        Ok(())
    }
}
