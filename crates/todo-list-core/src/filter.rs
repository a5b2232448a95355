use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::task::Task;

/// Completion-status filter applied by [`crate::ToDoListManager::view_tasks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Completed tasks only.
    Completed,
    /// Tasks not yet completed.
    Pending,
}

impl TaskFilter {
    /// Interpret a user-supplied filter token.
    ///
    /// Only the exact tokens `completed` and `pending` narrow the view; anything
    /// else, including no token at all, selects every task.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("completed") => Self::Completed,
            Some("pending") => Self::Pending,
            _ => Self::All,
        }
    }

    /// Token accepted by [`Self::from_token`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    /// Whether `task` passes this filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.is_completed(),
            Self::Pending => !task.is_completed(),
        }
    }
}

impl FromStr for TaskFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_token(Some(s)))
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
