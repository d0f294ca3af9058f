//! Error types for the torrent filter engine.

use thiserror::Error;

/// A specialized Result type for filter operations.
pub type FilterResult<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while evaluating filter conditions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// A condition used an operator the engine does not recognize.
    ///
    /// This is fatal to the whole filtering pass: the iterator yields it
    /// at the offending record's position and then ends.
    #[error("unknown operator '{operator}'")]
    UnknownOperator {
        /// The unrecognized operator token.
        operator: String,
    },
}

impl FilterError {
    /// Creates an unknown operator error.
    pub fn unknown_operator(operator: impl Into<String>) -> Self {
        FilterError::UnknownOperator {
            operator: operator.into(),
        }
    }
}
