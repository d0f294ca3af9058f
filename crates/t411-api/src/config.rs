//! Client configuration.
//!
//! The library does not discover or persist configuration itself; the
//! calling application loads it (typically from a TOML file) and hands it
//! to [`T411Client::from_config`](crate::client::T411Client::from_config)
//! once at construction.

use serde::{Deserialize, Serialize};

/// Account configuration for a t411 client.
///
/// # Example
///
/// ```
/// use t411_api_rs::config::Config;
///
/// let config: Config = toml::from_str(
///     r#"
///     username = "alice"
///     password = "hunter2"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.username.as_deref(), Some("alice"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Account username. Optional here; `login()` requires it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account password. Optional here; `login()` requires it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
