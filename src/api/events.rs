/// Event endpoints

use crate::{
    api::{error::ApiError, AppState},
    model::{Event, EventCreate, NewEvent},
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

pub fn create_event_routes() -> Router<AppState> {
    Router::new().route("/events", get(list_events).post(create_event))
}

/// Create a new event
///
/// POST /events
/// A missing `date` is stamped with the current UTC time.
async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let Json(input) = payload?;
    let new_event = NewEvent::from(input);

    let mut session = state.db.session().await?;
    let event = session.insert_event(&new_event).await?;

    tracing::info!("📅 Created event: {} ({}) at {}", event.id, event.title, event.date);

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let mut session = state.db.session().await?;
    let events = session.list_events().await?;

    tracing::debug!("Listed {} events", events.len());

    Ok(Json(events))
}
