//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No user message supplied")]
    NoUserMessage,

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
}
