//! Domain types for the in-memory task list.
//!
//! [`ToDoListManager`] owns the tasks of a session. [`TaskBuilder`] and
//! [`TaskHistory`] are standalone helpers that callers may wire in.

/// Fluent task construction.
pub mod builder;
/// Error types.
pub mod error;
/// Completion-status filters.
pub mod filter;
/// Snapshot history with single-step undo.
pub mod history;
/// Session-owned task collection.
pub mod manager;
/// The task record.
pub mod task;

pub use builder::TaskBuilder;
pub use error::{HistoryError, Result};
pub use filter::TaskFilter;
pub use history::TaskHistory;
pub use manager::ToDoListManager;
pub use task::Task;
