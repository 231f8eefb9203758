//! Task Requests
//!
//! Frontend bindings for task-related endpoints.

use serde::{Deserialize, Serialize};

use super::{decode_envelope, delete_envelope, get_json, post_json, OkResponse};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Task, TaskStats};

// ========================
// Argument Structs
// ========================

/// Create/update body. Optional fields left blank are omitted.
#[derive(Debug, Serialize, PartialEq)]
pub struct TaskArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
}

// ========================
// Response Structs
// ========================

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub stats: Option<TaskStats>,
}

#[derive(Debug, Default, Deserialize)]
struct FieldErrors {
    #[serde(default)]
    title: Option<String>,
}

/// `{success, task?, errors?}` from create and update
#[derive(Debug, Deserialize)]
struct MutationResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    task: Option<Task>,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

impl MutationResponse {
    fn into_result(self) -> Result<Option<Task>, ApiError> {
        if self.success {
            Ok(self.task)
        } else {
            Err(ApiError::Validation {
                title: self.errors.and_then(|e| e.title),
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    task: Option<Task>,
}

impl DetailResponse {
    fn into_result(self) -> Result<Task, ApiError> {
        match (self.ok, self.task) {
            (true, Some(task)) => Ok(task),
            _ => Err(ApiError::Rejected(None)),
        }
    }
}

/// Interpret a create/update answer.
pub fn parse_mutation(status: u16, body: &str) -> Result<Option<Task>, ApiError> {
    decode_envelope::<MutationResponse>(status, body)?.into_result()
}

// ========================
// Requests
// ========================

pub async fn list_tasks(config: &ApiConfig, status: Option<&str>, query: Option<&str>) -> Result<TaskList, ApiError> {
    get_json(config.list(status, query)?).await
}

pub async fn create_task(config: &ApiConfig, args: &TaskArgs<'_>) -> Result<Option<Task>, ApiError> {
    post_json::<_, MutationResponse>(config.create()?, args).await?.into_result()
}

pub async fn get_task(config: &ApiConfig, id: &str) -> Result<Task, ApiError> {
    get_json::<DetailResponse>(config.detail(id)?).await?.into_result()
}

pub async fn update_task(config: &ApiConfig, id: &str, args: &TaskArgs<'_>) -> Result<Option<Task>, ApiError> {
    post_json::<_, MutationResponse>(config.update(id)?, args).await?.into_result()
}

pub async fn delete_task(config: &ApiConfig, id: &str) -> Result<(), ApiError> {
    delete_envelope::<OkResponse>(config.delete(id)?).await?.into_result()
}

pub async fn complete_task(config: &ApiConfig, id: &str) -> Result<(), ApiError> {
    let empty = serde_json::Map::new();
    post_json::<_, OkResponse>(config.complete(id)?, &empty).await?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_skip_blank_optionals() {
        let args = TaskArgs {
            title: "Ship it",
            description: None,
            status: Some("todo"),
            priority: None,
            due_date: Some("2025-06-01"),
        };
        assert_eq!(
            serde_json::to_string(&args).unwrap(),
            r#"{"title":"Ship it","status":"todo","due_date":"2025-06-01"}"#
        );
    }

    #[test]
    fn test_list_with_stats() {
        let body = r#"{"tasks":[{"id":"1","title":"a"},{"id":"2","title":"b"}],"count":2,
            "stats":{"tasks_in_progress_this_week":1,"tasks_completed_this_week":3,"tasks_urgent_today":0}}"#;
        let list: TaskList = super::super::decode_ok(200, body).unwrap();
        assert_eq!(list.tasks.len(), 2);
        assert_eq!(list.stats.unwrap().tasks_completed_this_week, 3);
    }

    #[test]
    fn test_list_without_stats() {
        let list: TaskList = super::super::decode_ok(200, r#"{"tasks":[]}"#).unwrap();
        assert!(list.tasks.is_empty());
        assert!(list.stats.is_none());
    }

    #[test]
    fn test_create_title_error() {
        let body = r#"{"success":false,"errors":{"title":"This field is required."}}"#;
        assert_eq!(
            parse_mutation(400, body),
            Err(ApiError::Validation { title: Some("This field is required.".into()) })
        );
    }

    #[test]
    fn test_other_field_errors_ignored() {
        let body = r#"{"success":false,"errors":{"due_date":"Invalid date format. Use YYYY-MM-DD."}}"#;
        assert_eq!(parse_mutation(400, body), Err(ApiError::Validation { title: None }));
    }

    #[test]
    fn test_create_success_returns_task() {
        let body = r#"{"success":true,"task":{"id":"9","title":"New","status":"todo","priority":"high"}}"#;
        let task = parse_mutation(201, body).unwrap().unwrap();
        assert_eq!(task.id, "9");
    }

    #[test]
    fn test_detail_not_ok() {
        let resp: DetailResponse = serde_json::from_str(r#"{"ok":false}"#).unwrap();
        assert_eq!(resp.into_result(), Err(ApiError::Rejected(None)));
    }
}
