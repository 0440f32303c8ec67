/// Task records
///
/// Every task belongs to exactly one project.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Status given to tasks created without one
pub const DEFAULT_TASK_STATUS: &str = "BACKLOG";
/// Priority given to tasks created without one
pub const DEFAULT_TASK_PRIORITY: &str = "MEDIUM";

/// A persisted task, also the `TaskOut` response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    /// Free-form name, not a reference to any user record
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub project_id: i64,
}

/// Request body for `POST /tasks`
#[derive(Debug, Clone, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub due_date: Option<NaiveDateTime>,
    pub project_id: i64,
}

/// Candidate task row with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub project_id: i64,
}

impl From<TaskCreate> for NewTask {
    fn from(input: TaskCreate) -> Self {
        Self {
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or_else(|| DEFAULT_TASK_STATUS.to_string()),
            priority: input
                .priority
                .unwrap_or_else(|| DEFAULT_TASK_PRIORITY.to_string()),
            assignee: input.assignee,
            due_date: input.due_date,
            project_id: input.project_id,
        }
    }
}
