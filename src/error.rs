//! Error types for flowstash operations.
//!
//! This module defines [`FlowstashError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FlowstashError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FlowstashError::Other`) for unexpected errors
//! - A slot that cannot be discovered is not an error; the store degrades to
//!   an in-process slot instead (see [`crate::flow::FlowStore::open_default`])

use thiserror::Error;

/// Core error type for flowstash operations.
#[derive(Debug, Error)]
pub enum FlowstashError {
    /// The persisted blob exists but does not parse as a flow collection.
    #[error("Corrupt flow store: {message}")]
    CorruptStore { message: String },

    /// A save was keyed under a name that disagrees with the document's own.
    #[error("Flow name mismatch: saving as '{key}' but document is named '{name}'")]
    NameMismatch { key: String, name: String },

    /// The named flow does not exist in the store.
    #[error("No flow named '{name}'")]
    FlowNotFound { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for flowstash operations.
pub type Result<T> = std::result::Result<T, FlowstashError>;
