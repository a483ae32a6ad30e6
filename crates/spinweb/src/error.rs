//! Error types for Spinweb operations.
//!
//! This module provides the main error type [`SpinwebError`] which wraps
//! the error conditions that can occur while building and exporting a
//! diagram.

use std::io;

use thiserror::Error;

/// The main error type for Spinweb operations.
#[derive(Debug, Error)]
pub enum SpinwebError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("missing level for: {}", missing.join(", "))]
    IncompleteInput { missing: Vec<String> },

    #[error("invalid angular policy configuration: {0}")]
    InvalidPolicyConfig(String),

    #[error("unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("unknown level: {0}")]
    UnknownLevel(String),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("style error: {0}")]
    Style(String),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for SpinwebError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl SpinwebError {
    /// Create an `IncompleteInput` error from the missing parameter names.
    pub fn incomplete(missing: Vec<String>) -> Self {
        Self::IncompleteInput { missing }
    }
}
