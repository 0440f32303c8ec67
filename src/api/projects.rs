/// Project endpoints

use crate::{
    api::{error::ApiError, AppState},
    model::{NewProject, Project, ProjectCreate},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

pub fn create_project_routes() -> Router<AppState> {
    Router::new().route("/projects", get(list_projects).post(create_project))
}

/// POST /projects
/// Body: { "name": "...", "type": "...", "status": "ACTIVE", "deadline": "...", "client_id": 1 }
async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let Json(input) = payload?;
    let new_project = NewProject::from(input);

    let mut session = state.db.session().await?;
    let project = session.insert_project(&new_project).await?;

    tracing::info!(
        "📁 Created project: {} ({}) client={:?}",
        project.id,
        project.name,
        project.client_id
    );

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /projects
async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let mut session = state.db.session().await?;
    let projects = session.list_projects().await?;

    tracing::debug!("Listed {} projects", projects.len());

    Ok(Json(projects))
}
