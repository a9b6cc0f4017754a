use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The one authenticated identity held for the running panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub username: String,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            issued_at: Utc::now(),
        }
    }
}

/// Returned by a successful login.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub username: String,
    pub token: String,
}
