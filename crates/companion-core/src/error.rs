//! Error types for responder operations.

use thiserror::Error;

/// Errors that can occur while computing a turn's response.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The responder is temporarily unavailable.
    #[error("responder unavailable: {0}")]
    Unavailable(String),

    /// The message could not be processed.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),
}
