//! The render/event capability the controller drives.
//!
//! A [`Surface`] turns task data into a visible representation and reports
//! user interactions back as [`Event`]s. It holds no task state of its own:
//! every render is a full rebuild from the sequence it is given.
//!
//! Events are pulled rather than pushed—the controller's session loop asks
//! the surface for the next event and runs it to completion before asking
//! again, so no event ever observes a half-applied mutation. One-shot CLI
//! subcommands bypass `next_event` and dispatch a single event directly.

use crate::controller::CmdMessage;
use crate::error::Result;
use crate::model::{Filter, Task};

/// A user interaction reported by a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Add a task with the given text. Text that trims to empty is ignored.
    Add(String),
    /// Toggle the completion flag of the task with this id.
    Toggle(u64),
    /// Delete the task with this id.
    Delete(u64),
    /// Delete every task.
    Clear,
    /// Switch the current view filter.
    SetFilter(Filter),
}

/// Boundary between the controller and whatever displays the list.
pub trait Surface {
    /// Replace the visible representation with the given tasks, in order.
    /// An empty sequence shows a fixed "no tasks" placeholder.
    fn render_tasks(&mut self, tasks: &[Task]);

    /// Mark exactly one filter affordance as active.
    fn update_filter_indicator(&mut self, filter: Filter);

    /// Show feedback messages from the last handled event.
    fn show_messages(&mut self, messages: &[CmdMessage]) {
        let _ = messages;
    }

    /// Next user interaction, or `None` once the surface is closed.
    /// Only meaningful for interactive surfaces; the default is closed.
    fn next_event(&mut self) -> Result<Option<Event>> {
        Ok(None)
    }
}
