use time::Date;

use crate::task::Task;

/// Fluent constructor for [`Task`].
///
/// ```
/// use time::macros::date;
/// use todo_list_core::TaskBuilder;
///
/// let task = TaskBuilder::new("File taxes")
///     .due_date(date!(2025 - 04 - 15))
///     .build();
/// assert_eq!(task.render(), "File taxes - Pending, Due: 2025-04-15");
/// ```
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    /// Start building a pending task without a due date.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            task: Task::new(description, None),
        }
    }

    /// Set the due date of the task under construction.
    #[must_use]
    pub const fn due_date(mut self, due_date: Date) -> Self {
        self.task.set_due_date(Some(due_date));
        self
    }

    /// Hand out the constructed task.
    #[must_use]
    pub fn build(self) -> Task {
        self.task
    }
}
