use std::fmt;

use time::Date;

/// A single to-do item.
///
/// The description doubles as the task's identity and is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    completed: bool,
    due_date: Option<Date>,
}

impl Task {
    /// Create a pending task.
    #[must_use]
    pub fn new(description: impl Into<String>, due_date: Option<Date>) -> Self {
        Self {
            description: description.into(),
            completed: false,
            due_date,
        }
    }

    /// Text the task is looked up by.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task has been marked completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Optional due date.
    #[must_use]
    pub const fn due_date(&self) -> Option<Date> {
        self.due_date
    }

    /// Mark the task completed. Calling this again leaves it completed.
    pub const fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Overwrite the due date.
    pub const fn set_due_date(&mut self, due_date: Option<Date>) {
        self.due_date = due_date;
    }

    /// Human-readable status label.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }

    /// Render the task as a single display line.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.description, self.status_label())?;
        if let Some(due) = self.due_date {
            write!(f, ", Due: {due}")?;
        }
        Ok(())
    }
}
