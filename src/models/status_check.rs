use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One persisted check-in from a named client. `id` and `timestamp` are
/// stamped server-side at creation; records are never updated or deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct StatusCheck {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}
