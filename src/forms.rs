//! Task Form State
//!
//! Field values for the create and edit panels.

use crate::api::TaskArgs;
use crate::models::{Task, TaskPriority, TaskStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub due_date: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: TaskStatus::default().as_str().to_string(),
            priority: TaskPriority::default().as_str().to_string(),
            due_date: String::new(),
        }
    }
}

/// Form fields by name, mirroring the `name` attributes in the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Status,
    Priority,
    DueDate,
}

impl TaskForm {
    /// Prefill from a task; the date input only takes `YYYY-MM-DD`.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status.as_str().to_string(),
            priority: task.priority.as_str().to_string(),
            due_date: task.due_date_short().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: TaskField, value: String) {
        match field {
            TaskField::Title => self.title = value,
            TaskField::Description => self.description = value,
            TaskField::Status => self.status = value,
            TaskField::Priority => self.priority = value,
            TaskField::DueDate => self.due_date = value,
        }
    }

    pub fn get(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
            TaskField::Status => &self.status,
            TaskField::Priority => &self.priority,
            TaskField::DueDate => &self.due_date,
        }
    }

    /// Request body. The title goes as typed: the server owns validation.
    pub fn args(&self) -> TaskArgs<'_> {
        fn non_blank(s: &str) -> Option<&str> {
            let t = s.trim();
            (!t.is_empty()).then_some(t)
        }
        TaskArgs {
            title: &self.title,
            description: non_blank(&self.description),
            status: non_blank(&self.status),
            priority: non_blank(&self.priority),
            due_date: non_blank(&self.due_date),
        }
    }
}
