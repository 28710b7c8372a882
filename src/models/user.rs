use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user, fabricated client-side at login/signup.
/// Nothing here is verified against a backend; the record exists only to
/// drive the session and greetings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Fabricate a user from signup details
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: format!("user_{}", now.timestamp_millis()),
            name: name.into(),
            email: email.into(),
            phone,
            created_at: now,
        }
    }

    /// Fabricate a user from a bare email, using the local part as the
    /// display name ("jane@example.com" logs in as "jane")
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self::new(name, email, None)
    }
}
