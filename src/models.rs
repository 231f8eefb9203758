//! Frontend Models
//!
//! Data structures matching the task and tip API payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Task status. Unknown wire values fall back to `Todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    InProgress,
    Done,
    #[default]
    #[serde(other)]
    Todo,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "in_progress" => TaskStatus::InProgress,
            "done" => TaskStatus::Done,
            _ => TaskStatus::Todo,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Completed",
        }
    }

    pub fn pill_class(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "pill pill-todo",
            TaskStatus::InProgress => "pill pill-in-progress",
            TaskStatus::Done => "pill pill-done",
        }
    }
}

/// Task priority. Unknown wire values fall back to `Mid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    High,
    #[default]
    #[serde(other)]
    Mid,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::Low, TaskPriority::Mid, TaskPriority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Mid => "mid",
            TaskPriority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => TaskPriority::Low,
            "high" => TaskPriority::High,
            _ => TaskPriority::Mid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Mid => "Mid",
            TaskPriority::High => "High",
        }
    }

    pub fn pill_class(&self) -> &'static str {
        match self {
            TaskPriority::Low => "pill pill-low",
            TaskPriority::Mid => "pill pill-mid",
            TaskPriority::High => "pill pill-high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Project,
    #[default]
    #[serde(other)]
    Personal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: serde_json::Value,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: serde_json::Value,
    pub username: String,
}

/// Task data structure (matches API payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub task_type: TaskType,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
}

impl Task {
    /// `YYYY-MM-DD` part of the due date, if any
    pub fn due_date_short(&self) -> Option<String> {
        self.due_date.as_deref().and_then(date_prefix)
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }
}

/// First 10 characters of a date or datetime string; `None` when blank.
pub fn date_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(10).collect())
}

/// Weekly counters shown above the task table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskStats {
    #[serde(default)]
    pub tasks_in_progress_this_week: u32,
    #[serde(default)]
    pub tasks_completed_this_week: u32,
    #[serde(default)]
    pub tasks_urgent_today: u32,
}

/// A tip fresh from the generator, not yet saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Tip {
    pub fn category_line(&self) -> Option<String> {
        self.category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(|c| format!("Category: {}", c))
    }
}

/// A tip the user has saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedTip {
    pub id: serde_json::Value,
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl SavedTip {
    /// Id as it appears in URLs and `data-tip-id`
    pub fn id_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// `YYYY-MM-DD HH:MM:SS` view of `created_at`
    pub fn created_display(&self) -> String {
        let raw = self.created_at.trim();
        let head = raw.get(..19).unwrap_or(raw);
        NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S")
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| raw.chars().take(19).collect::<String>().replacen('T', " ", 1))
    }
}
