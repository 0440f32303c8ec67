/// Task endpoints
///
/// Tasks always hang off a project; inserting one against a missing project
/// is refused by the store as a constraint violation.

use crate::{
    api::{error::ApiError, AppState},
    model::{NewTask, Task, TaskCreate},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

/// Create task routes
pub fn create_task_routes() -> Router<AppState> {
    Router::new().route("/tasks", get(list_tasks).post(create_task))
}

/// Create a new task
///
/// POST /tasks
/// Body: { "title": "...", "project_id": 1, "status": "BACKLOG", "priority": "MEDIUM", ... }
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<TaskCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(input) = payload?;
    let new_task = NewTask::from(input);

    let mut session = state.db.session().await?;
    let task = session.insert_task(&new_task).await?;

    tracing::info!(
        "📝 Created task: {} ({}) in project {}",
        task.id,
        task.title,
        task.project_id
    );

    Ok((StatusCode::CREATED, Json(task)))
}

/// List all tasks
///
/// GET /tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let mut session = state.db.session().await?;
    let tasks = session.list_tasks().await?;

    tracing::debug!("Listed {} tasks", tasks.len());

    Ok(Json(tasks))
}
