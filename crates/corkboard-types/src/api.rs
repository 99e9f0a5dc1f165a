use serde::{Deserialize, Serialize};

// -- Messages --

/// Creation payload. Both fields are `Option` so a missing key can be told
/// apart from a present value and reported as a 400 instead of a
/// deserialization failure. An explicit JSON `null` counts as missing.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub content: Option<String>,
    pub username: Option<String>,
}

impl CreateMessageRequest {
    /// Presence-only check: empty strings pass, absent keys do not.
    pub fn validate(self) -> Result<(String, String), MissingFields> {
        match (self.content, self.username) {
            (Some(content), Some(username)) => Ok((content, username)),
            _ => Err(MissingFields),
        }
    }
}

/// Marker for a creation payload missing `content` or `username`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissingFields;

/// An absent `content` key means "leave it alone", not an error.
/// `username` is immutable and has no place in this payload.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub content: String,
    pub username: String,
}
