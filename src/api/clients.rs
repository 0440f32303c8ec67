/// Client endpoints
///
/// POST /clients creates a client, GET /clients lists all of them.

use crate::{
    api::{error::ApiError, AppState},
    model::{Client, ClientCreate, NewClient},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

/// Create client routes
pub fn create_client_routes() -> Router<AppState> {
    Router::new().route("/clients", get(list_clients).post(create_client))
}

/// Create a new client
///
/// POST /clients
/// Body: { "name": "...", "contact": "...", "notes": "..." }
async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<ClientCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Client>), ApiError> {
    let Json(input) = payload?;
    let new_client = NewClient::from(input);

    let mut session = state.db.session().await?;
    let client = session.insert_client(&new_client).await?;

    tracing::info!("👤 Created client: {} ({})", client.id, client.name);

    Ok((StatusCode::CREATED, Json(client)))
}

/// List all clients
///
/// GET /clients
async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, ApiError> {
    let mut session = state.db.session().await?;
    let clients = session.list_clients().await?;

    tracing::debug!("Listed {} clients", clients.len());

    Ok(Json(clients))
}
