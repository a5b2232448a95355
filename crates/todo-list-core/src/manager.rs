use time::Date;
use tracing::debug;

use crate::filter::TaskFilter;
use crate::task::Task;

/// Owns the tasks of one session, in insertion order.
///
/// Tasks are addressed by exact description. Duplicate descriptions are
/// allowed: [`Self::mark_completed`] touches only the first match while
/// [`Self::delete_task`] removes every match.
#[derive(Debug, Clone, Default)]
pub struct ToDoListManager {
    tasks: Vec<Task>,
}

impl ToDoListManager {
    /// Create an empty task list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a new pending task and return it.
    pub fn add_task(&mut self, description: impl Into<String>, due_date: Option<Date>) -> &Task {
        self.push_task(Task::new(description, due_date))
    }

    /// Append an already constructed task, e.g. one from [`crate::TaskBuilder`].
    pub fn push_task(&mut self, task: Task) -> &Task {
        debug!(description = task.description(), due = ?task.due_date(), "task added");
        let index = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[index]
    }

    /// Mark the first task named `description` as completed.
    ///
    /// Returns false when no task carries that description.
    pub fn mark_completed(&mut self, description: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.description() == description) else {
            debug!(description, "no task to complete");
            return false;
        };
        task.mark_completed();
        debug!(description, "task completed");
        true
    }

    /// Remove every task named `description`, returning how many were removed.
    pub fn delete_task(&mut self, description: &str) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.description() != description);
        let removed = before - self.tasks.len();
        debug!(description, removed, "tasks deleted");
        removed
    }

    /// Tasks passing `filter`, in insertion order.
    #[must_use]
    pub fn view_tasks(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    /// All tasks, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true when the list holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
