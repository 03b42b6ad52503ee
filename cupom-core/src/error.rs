//! Error types for cupom.

use thiserror::Error;

use crate::event::Category;
use crate::policy::Field;

/// Errors that can occur in cupom operations.
#[derive(Error, Debug)]
pub enum CupomError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event selector '{0}' matches more than one event")]
    AmbiguousEvent(String),

    #[error("Field '{field}' cannot be edited for {category} events")]
    FieldLocked { field: Field, category: Category },

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for cupom operations.
pub type CupomResult<T> = Result<T, CupomError>;
