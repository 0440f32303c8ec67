/// Client records
///
/// A client owns zero or more projects through `projects.client_id`.

use serde::{Deserialize, Serialize};

/// A persisted client, also the `ClientOut` response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub contact: Option<String>,
    pub notes: Option<String>,
}

/// Request body for `POST /clients`
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Candidate client row, ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub contact: Option<String>,
    pub notes: Option<String>,
}

impl From<ClientCreate> for NewClient {
    fn from(input: ClientCreate) -> Self {
        Self {
            name: input.name,
            contact: input.contact,
            notes: input.notes,
        }
    }
}
