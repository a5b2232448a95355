//! Line-oriented interactive loop over a [`ToDoListManager`].

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::{Context, Result};
use todo_list_core::{TaskFilter, ToDoListManager};
use tracing::debug;

use crate::config::ShellConfig;

const MENU: &str = "\nOptions:\n1. Add Task\n2. Mark Task as Completed\n3. Delete Task\n4. View Tasks\n5. Exit";

/// Entries of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Complete,
    Delete,
    View,
    Exit,
}

impl MenuChoice {
    /// Map a typed choice (`1`-`5`) to a menu entry.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Complete),
            "3" => Some(Self::Delete),
            "4" => Some(Self::View),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Interactive session reading commands from `input` and answering on `output`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    manager: ToDoListManager,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub const fn new(input: R, output: W, manager: ToDoListManager, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            manager,
            config,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.config.show_menu {
                writeln!(self.output, "{MENU}")?;
            }
            let Some(choice) = self.prompt("Enter your choice (1-5): ")? else {
                debug!("input closed");
                return Ok(());
            };
            let flow = match MenuChoice::from_input(&choice) {
                Some(choice) => {
                    debug!(?choice, "menu choice");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please enter a number between 1 and 5.")?;
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                return Ok(());
            }
        }
    }

    /// Task list driven by this session.
    pub const fn manager(&self) -> &ToDoListManager {
        &self.manager
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>> {
        match choice {
            MenuChoice::Add => self.add_task(),
            MenuChoice::Complete => self.complete_task(),
            MenuChoice::Delete => self.delete_task(),
            MenuChoice::View => self.view_tasks(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                Ok(ControlFlow::Break(()))
            }
        }
    }

    fn add_task(&mut self) -> Result<ControlFlow<()>> {
        let Some(description) = self.prompt("Enter task description: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(raw_due) = self.prompt("Enter due date (YYYY-MM-DD), leave empty if none: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let due_date = if raw_due.is_empty() {
            None
        } else {
            match self.config.parse_due_date(&raw_due) {
                Ok(date) => Some(date),
                Err(err) => {
                    debug!(input = %raw_due, %err, "rejected due date");
                    writeln!(self.output, "Invalid due date '{raw_due}': {err}")?;
                    return Ok(ControlFlow::Continue(()));
                }
            }
        };

        self.manager.add_task(description, due_date);
        writeln!(self.output, "Task added successfully!")?;
        Ok(ControlFlow::Continue(()))
    }

    fn complete_task(&mut self) -> Result<ControlFlow<()>> {
        let Some(description) = self.prompt("Enter task description to mark as completed: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        if self.manager.mark_completed(&description) {
            writeln!(self.output, "Task '{description}' marked as completed.")?;
        } else {
            writeln!(self.output, "No task found with description '{description}'.")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn delete_task(&mut self) -> Result<ControlFlow<()>> {
        let Some(description) = self.prompt("Enter task description to delete: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        self.manager.delete_task(&description);
        writeln!(self.output, "Task '{description}' deleted.")?;
        Ok(ControlFlow::Continue(()))
    }

    fn view_tasks(&mut self) -> Result<ControlFlow<()>> {
        let Some(token) = self.prompt("Enter filter type (all/completed/pending): ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let tasks = self.manager.view_tasks(TaskFilter::from_token(Some(&token)));
        if tasks.is_empty() {
            writeln!(self.output, "No tasks found with the given filter.")?;
        } else {
            writeln!(self.output, "Tasks:")?;
            for task in tasks {
                writeln!(self.output, "{task}")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Print `text` and read one line, without its terminator. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> Result<(String, ToDoListManager)> {
        let config = ShellConfig {
            show_menu: false,
            ..ShellConfig::default()
        };
        let mut output = Vec::new();
        let mut shell = Shell::new(Cursor::new(script.as_bytes()), &mut output, ToDoListManager::new(), config);
        shell.run()?;
        let manager = shell.manager().clone();
        drop(shell);
        Ok((String::from_utf8(output)?, manager))
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!(MenuChoice::from_input("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::from_input(" 4 "), Some(MenuChoice::View));
        assert_eq!(MenuChoice::from_input("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("6"), None);
        assert_eq!(MenuChoice::from_input(""), None);
    }

    #[test]
    fn full_session_round() -> Result<()> {
        let script = "1\nBuy milk\n\n1\nPay bills\n2025-01-01\n2\nBuy milk\n4\ncompleted\n3\nPay bills\n4\nall\n5\n";
        let (output, manager) = run_session(script)?;

        assert_eq!(output.matches("Task added successfully!").count(), 2);
        assert!(output.contains("Task 'Buy milk' marked as completed."));
        assert!(output.contains("Tasks:\nBuy milk - Completed\n"));
        assert!(output.contains("Task 'Pay bills' deleted."));
        assert!(output.ends_with("Exiting...\n"));
        assert_eq!(manager.len(), 1);
        Ok(())
    }

    #[test]
    fn reports_missing_task() -> Result<()> {
        let (output, _) = run_session("2\nGhost\n5\n")?;
        assert!(output.contains("No task found with description 'Ghost'."));
        Ok(())
    }

    #[test]
    fn reports_empty_filter_result() -> Result<()> {
        let (output, _) = run_session("1\nRead\n\n4\ncompleted\n5\n")?;
        assert!(output.contains("No tasks found with the given filter."));
        Ok(())
    }

    #[test]
    fn invalid_due_date_does_not_add_task() -> Result<()> {
        let (output, manager) = run_session("1\nDentist\n01/02/2025\n5\n")?;
        assert!(output.contains("Invalid due date '01/02/2025'"));
        assert!(!output.contains("Task added successfully!"));
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn rejects_unknown_choice_and_keeps_going() -> Result<()> {
        let (output, _) = run_session("9\n5\n")?;
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 5."));
        assert!(output.ends_with("Exiting...\n"));
        Ok(())
    }

    #[test]
    fn end_of_input_ends_session() -> Result<()> {
        let (output, manager) = run_session("1\nHalf")?;
        assert!(!output.contains("Exiting..."));
        assert!(manager.is_empty());
        Ok(())
    }

    #[test]
    fn descriptions_keep_inner_whitespace() -> Result<()> {
        let (_, manager) = run_session("1\n  spaced out  \r\n\n5\n")?;
        assert_eq!(manager.tasks()[0].description(), "  spaced out  ");
        Ok(())
    }

    #[test]
    fn menu_is_printed_when_enabled() -> Result<()> {
        let mut output = Vec::new();
        let mut shell = Shell::new(
            Cursor::new("5\n".as_bytes()),
            &mut output,
            ToDoListManager::new(),
            ShellConfig::default(),
        );
        shell.run()?;
        drop(shell);
        let output = String::from_utf8(output)?;
        assert!(output.starts_with("\nOptions:\n1. Add Task\n"));
        assert!(output.contains("5. Exit\nEnter your choice (1-5): Exiting..."));
        Ok(())
    }
}
