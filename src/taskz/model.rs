use crate::error::TaskzError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single task: an id, the user's text, and a completion flag.
///
/// Ids are assigned by the controller from a monotonic counter, so they are
/// unique within a collection and stable across sessions. The text is trimmed
/// and non-empty at creation time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// View predicate selecting which tasks are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// All filters, in display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Filter {
    type Err = TaskzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "pending" => Ok(Filter::Pending),
            "completed" => Ok(Filter::Completed),
            other => Err(TaskzError::Api(format!(
                "Unknown filter: {} (expected all, pending or completed)",
                other
            ))),
        }
    }
}
