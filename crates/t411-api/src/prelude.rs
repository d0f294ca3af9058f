//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the t411-api
//! crate, making it easy for library consumers to import everything they
//! need with a single use statement.
//!
//! # Example
//!
//! ```
//! use t411_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - T411Client (API client)
//! // - Error, Result (error handling)
//! // - Session, Config (account state)
//! // - filter, Condition, FilterError (torrent filter engine)
//! ```

// Client types
pub use crate::client::T411Client;

// Error types
pub use crate::error::{Error, Result};

// Account state
pub use crate::config::Config;
pub use crate::models::Session;

// Filter engine
pub use crate::filter::{filter, Condition, Expression, FilterError, FilterResult, Filtered};
