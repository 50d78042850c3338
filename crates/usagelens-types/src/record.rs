use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque user identifier, stable across sessions for the same user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque device identifier for the session. Part of the record's
/// identity but never consulted by the aggregation logic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One login session for one user on one device.
///
/// Each record belongs to exactly one login event; a user with several
/// sessions appears as several records sharing the same `user_id`.
/// Records are read-only input to the engine: the aggregation never
/// mutates or persists them.
///
/// The wire shape is camelCase to match the upstream record supplier
/// (`userId`, `loggedInAt`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    pub user_id: UserId,

    pub device_id: DeviceId,

    /// Session start (UTC).
    pub logged_in_at: DateTime<Utc>,

    /// Session end; `None` while the session is still open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_out_at: Option<DateTime<Utc>>,

    /// Heartbeat timestamps recorded while the session was active.
    /// May be empty and is NOT guaranteed to be chronologically sorted.
    #[serde(default)]
    pub last_seen_at: Vec<DateTime<Utc>>,
}
