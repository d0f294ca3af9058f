//! HTTP client wrapper for the t411 API.

use std::fmt;

use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::Session;

/// Base URL for the t411 API.
const BASE_URL: &str = "http://api.t411.ai";

/// Client for interacting with the t411 API.
///
/// The client owns the account credentials and, after a successful
/// [`login`](Self::login), the resulting [`Session`]. Every request made on
/// an authenticated client carries the session token as its `Authorization`
/// header; a second `login` overwrites the session, so when several callers
/// share one client the last login's token wins for all subsequent
/// requests.
///
/// All calls are issued one at a time and awaited to completion: the client
/// never retries, caches, or fans out requests.
#[derive(Clone)]
pub struct T411Client {
    username: Option<String>,
    password: Option<String>,
    session: Option<Session>,
    http_client: reqwest::Client,
    base_url: String,
}

impl T411Client {
    /// Creates a new T411Client with the given account credentials.
    ///
    /// Credentials are trimmed; they are only validated at [`login`](Self::login)
    /// time.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into().trim().to_string()),
            password: Some(password.into().trim().to_string()),
            session: None,
            http_client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new T411Client from a loaded [`Config`].
    ///
    /// The config is read once; later changes to it do not affect the
    /// client.
    pub fn from_config(config: &Config) -> Self {
        Self {
            username: config.username.as_deref().map(|u| u.trim().to_string()),
            password: config.password.as_deref().map(|p| p.trim().to_string()),
            session: None,
            http_client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new T411Client with a custom base URL (for testing or
    /// alternate deployments of the service).
    pub fn with_base_url(
        username: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::new(username, password)
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the account username, if set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Replaces the account username. The new value is trimmed.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into().trim().to_string());
    }

    /// Returns the account password, if set.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Replaces the account password. The new value is trimmed.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into().trim().to_string());
    }

    /// Returns the current session, if authenticated.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns true once a login has succeeded on this client.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Authenticates against the API and stores the resulting session.
    ///
    /// Both username and password must be non-empty; otherwise this fails
    /// with [`Error::Validation`] before any network I/O. On a
    /// service-reported failure (`{"error": ..., "code": ...}`) it fails
    /// with [`Error::Api`] carrying the message and code verbatim.
    ///
    /// On success every later request on this client sends the session
    /// token as its `Authorization` header. Calling `login` again replaces
    /// the stored session and the token with it.
    pub async fn login(&mut self) -> Result<()> {
        let username = match self.username.as_deref() {
            Some(u) if !u.is_empty() => u,
            _ => return Err(Error::validation("the username must not be empty")),
        };
        let password = match self.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(Error::validation("the password must not be empty")),
        };

        let url = format!("{}/auth", self.base_url);
        let body = self
            .http_client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?
            .bytes()
            .await?;

        let answer: Value = serde_json::from_slice(&body)?;
        check_errors(&answer)?;

        self.session = Some(serde_json::from_value(answer)?);
        Ok(())
    }

    /// Returns the top 100 torrents.
    pub async fn top_100(&self) -> Result<Value> {
        self.request_json("/torrents/top/100").await
    }

    /// Returns the top torrents of the day.
    pub async fn top_today(&self) -> Result<Value> {
        self.request_json("/torrents/top/today").await
    }

    /// Returns the top torrents of the week.
    pub async fn top_week(&self) -> Result<Value> {
        self.request_json("/torrents/top/week").await
    }

    /// Returns the top torrents of the month.
    pub async fn top_month(&self) -> Result<Value> {
        self.request_json("/torrents/top/month").await
    }

    /// Searches the index for `query` and returns the raw response body.
    ///
    /// The search response is not an error/result envelope, so it is
    /// returned undecoded; result handling is the caller's job.
    pub async fn search(&self, query: &str) -> Result<Vec<u8>> {
        self.request_raw(&format!("/torrents/search/{query}")).await
    }

    /// Downloads the `.torrent` file for the given torrent id.
    ///
    /// The payload is opaque bytes; it is never decoded or checked for an
    /// error envelope.
    pub async fn download_by_id(&self, id: &str) -> Result<Vec<u8>> {
        self.request_raw(&format!("/torrents/download/{id}")).await
    }

    /// Downloads the `.torrent` file for a torrent record, using its `id`
    /// field.
    ///
    /// Fails with [`Error::Validation`] when the record carries no id.
    pub async fn download_torrent(&self, torrent: &Value) -> Result<Vec<u8>> {
        let id = match torrent.get("id") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => return Err(Error::validation("the torrent record has no id field")),
        };
        self.download_by_id(&id).await
    }

    /// Performs a GET request and decodes the body as JSON, failing with
    /// [`Error::Api`] when the service returned an error envelope.
    async fn request_json(&self, path: &str) -> Result<Value> {
        let body = self.request_raw(path).await?;
        let answer: Value = serde_json::from_slice(&body)?;
        check_errors(&answer)?;
        Ok(answer)
    }

    /// Performs a GET request and returns the body bytes unchanged.
    ///
    /// No envelope check and no status-code taxonomy: the service reports
    /// failures inside its JSON envelope, and transport failures propagate
    /// from reqwest as-is.
    async fn request_raw(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http_client.get(&url);
        if let Some(session) = &self.session {
            request = request.header("Authorization", session.token.as_str());
        }

        let body = request.send().await?.bytes().await?;
        Ok(body.to_vec())
    }
}

/// Fails with [`Error::Api`] when the decoded answer exposes an `error`
/// field; the message and code are passed through verbatim.
fn check_errors(answer: &Value) -> Result<()> {
    if let Some(error) = answer.get("error") {
        let message = match error {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        let code = answer.get("code").and_then(Value::as_i64).unwrap_or(0);
        return Err(Error::Api { message, code });
    }
    Ok(())
}

impl fmt::Debug for T411Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("T411Client")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("session", &self.session)
            .field("base_url", &self.base_url)
            .finish()
    }
}
