use chrono::{DateTime, Utc};

/// A validated admin session, taken from the bearer token of a request
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
