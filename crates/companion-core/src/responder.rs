//! The Responder trait definition.

use async_trait::async_trait;

use crate::error::ResponderError;
use crate::message::{ConversationTurn, InboundMessage, ResponseBundle};
use crate::persona::Persona;

/// The result of one processed turn.
///
/// The engine never persists anything itself; the mutated persona
/// travels back to the caller, which must save it through the persona
/// store.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Computed response channels.
    pub bundle: ResponseBundle,
    /// The persona with its memory (and possibly trained rules)
    /// updated by this turn.
    pub persona: Persona,
}

/// A trait for turning an inbound message into a response bundle.
///
/// Implementations take ownership of the persona for the duration of
/// the turn and return it updated. This trait is object-safe and can be
/// used with `Box<dyn Responder>`.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Process an inbound message for a persona.
    ///
    /// `history` is the ordered prior conversation, read-only. Callers
    /// must serialize turns per persona; the engine assumes at most one
    /// in-flight call per persona id.
    async fn respond(
        &self,
        persona: Persona,
        message: &InboundMessage,
        history: &[ConversationTurn],
    ) -> Result<TurnOutcome, ResponderError>;

    /// Get a human-readable name for this responder implementation.
    fn name(&self) -> &str;
}
