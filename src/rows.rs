//! Table Row Models
//!
//! Pure state → row mapping for the task table and the search dropdown.

use crate::models::{Task, TaskPriority, TaskStatus};

/// One rendered task row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due: String,
    /// Checkbox starts checked and locked for finished tasks
    pub done: bool,
}

impl TaskRow {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            status: task.status,
            priority: task.priority,
            due: task.due_date_short().unwrap_or_else(|| "—".to_string()),
            done: task.is_done(),
        }
    }
}

/// Table body contents: either task rows or the single placeholder row
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Empty,
    Rows(Vec<TaskRow>),
}

impl TableBody {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(tasks.iter().map(TaskRow::from_task).collect())
        }
    }

    /// Number of `<tr>` elements this body renders
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Empty => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

/// Minimum query length before suggestions are requested
pub const MIN_SUGGEST_CHARS: usize = 2;

/// Whether a search box value is long enough to look up
pub fn should_suggest(query: &str) -> bool {
    query.trim().chars().count() >= MIN_SUGGEST_CHARS
}
