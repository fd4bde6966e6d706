use chrono::{DateTime, Utc};
use serde::Serialize;

/// A note left through the public contact form. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub date_posted: DateTime<Utc>,
}
