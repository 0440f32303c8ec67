/// Project records
///
/// A project may belong to a client and owns tasks and events.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Status given to projects created without one
pub const DEFAULT_PROJECT_STATUS: &str = "ACTIVE";

/// A persisted project, also the `ProjectOut` response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Free-form classification, exposed as `type`
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub status: String,
    pub deadline: Option<NaiveDateTime>,
    pub client_id: Option<i64>,
}

/// Request body for `POST /projects`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub client_id: Option<i64>,
}

/// Candidate project row with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub kind: Option<String>,
    pub status: String,
    pub deadline: Option<NaiveDateTime>,
    pub client_id: Option<i64>,
}

impl From<ProjectCreate> for NewProject {
    fn from(input: ProjectCreate) -> Self {
        Self {
            name: input.name,
            kind: input.kind,
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string()),
            deadline: input.deadline,
            client_id: input.client_id,
        }
    }
}
