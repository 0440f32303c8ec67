/// Event records (meetings, deliveries, calls)

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;

/// Status given to events created without one
pub const DEFAULT_EVENT_STATUS: &str = "SCHEDULED";

/// A persisted event, also the `EventOut` response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDateTime,
    pub location: Option<String>,
    pub link: Option<String>,
    pub status: String,
    pub project_id: Option<i64>,
}

/// Request body for `POST /events`
#[derive(Debug, Clone, Deserialize)]
pub struct EventCreate {
    pub title: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Candidate event row with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDateTime,
    pub location: Option<String>,
    pub link: Option<String>,
    pub status: String,
    pub project_id: Option<i64>,
}

impl EventCreate {
    /// Apply defaults, stamping a missing `date` with `now`
    pub fn into_new_at(self, now: NaiveDateTime) -> NewEvent {
        NewEvent {
            title: self.title,
            date: self.date.unwrap_or(now),
            location: self.location,
            link: self.link,
            status: self
                .status
                .unwrap_or_else(|| DEFAULT_EVENT_STATUS.to_string()),
            project_id: self.project_id,
        }
    }
}

impl From<EventCreate> for NewEvent {
    fn from(input: EventCreate) -> Self {
        input.into_new_at(Utc::now().naive_utc())
    }
}
