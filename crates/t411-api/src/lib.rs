//! t411 API client library
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use t411_api_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including [`T411Client`],
//! error types, and the torrent filter engine.
//!
//! [`T411Client`]: client::T411Client

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod prelude;
