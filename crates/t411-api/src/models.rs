//! Data models for the t411 API.
//!
//! The torrent listing endpoints return loosely structured JSON whose field
//! set varies between categories, so torrent records are handled as plain
//! [`serde_json::Value`]s rather than a fixed struct; the filter engine
//! looks fields up by name.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// An authenticated session: the account's uid and its API token.
///
/// Created only by a successful [`login`](crate::client::T411Client::login);
/// it lives as long as the client instance and is never refreshed
/// automatically. A second login replaces it.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque account identifier. The service has been seen returning it
    /// both as a JSON string and as a number; it is kept as a string.
    #[serde(deserialize_with = "opaque_id")]
    pub uid: String,
    /// The API token sent as the `Authorization` header on every request.
    pub token: String,
}

fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("uid", &self.uid)
            .field("token", &"[REDACTED]")
            .finish()
    }
}
