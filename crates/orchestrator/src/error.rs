//! Error types for orchestrator operations.

use companion_core::{ResponderError, StoreError};
use thiserror::Error;

/// Errors that can occur during turn orchestration.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The message targets a persona that does not exist.
    #[error("persona not found: {0}")]
    PersonaNotFound(String),

    /// A persona store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The responder failed to compute a turn.
    #[error("responder error: {0}")]
    Responder(#[from] ResponderError),
}
