//! # Error Types
//!
//! This module defines error types used throughout the encuesta library.

use thiserror::Error;

/// Main error type for encuesta operations
#[derive(Debug, Error)]
pub enum FormError {
    /// No authenticated owner for an owner-scoped operation
    #[error("not signed in")]
    Unauthorized,

    /// Id or share token does not resolve to an accessible form
    #[error("form not found")]
    NotFound,

    /// Malformed design-time value (form name, property edit)
    #[error("invalid value: {0}")]
    Invalid(String),

    /// Content mutation attempted on a published form
    #[error("published forms are read-only")]
    Published,

    /// Element type tag with no registry entry
    #[error("unknown element type: {0}")]
    UnknownElement(String),

    /// Persisted layout that cannot be loaded
    #[error("layout error: {0}")]
    Layout(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
