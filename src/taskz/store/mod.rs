//! # Storage Layer
//!
//! This module defines the storage abstraction for taskz. The [`TaskStore`]
//! trait allows the application to work with different storage backends.
//!
//! Storage is abstracted behind a trait to enable testing with
//! [`memory::InMemoryStore`] (no filesystem needed) and to keep the
//! controller decoupled from persistence details.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. The whole collection
//!   lives in one JSON document, `tasks.json`, rewritten on every save.
//! - [`memory::InMemoryStore`]: In-memory storage for fast, isolated tests.
//!
//! ## Contract
//!
//! `load` returns the empty collection when nothing usable is stored—an
//! absent or unparseable document is "no tasks yet", never an error. `save`
//! replaces the stored collection wholesale and propagates genuine I/O
//! failures. Both complete before returning; there is no write-behind.

use crate::error::Result;
use crate::model::Task;

pub mod fs;
pub mod memory;

/// Abstract interface for task persistence.
///
/// Implementations store the full collection as one unit; there is no
/// per-task access and no incremental diffing.
pub trait TaskStore {
    /// Load the stored collection, in insertion order.
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the stored collection with the given one.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}
