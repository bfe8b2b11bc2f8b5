//! Main orchestrator that coordinates turn processing.

use std::collections::HashMap;
use std::sync::Arc;

use companion_core::{
    ConversationTurn, ImageStore, InboundMessage, PersonaStore, Responder, ResponseBundle,
};
use rule_brain::{EngineConfig, RuleBrain};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::error::OrchestratorError;

/// The outcome of one orchestrated turn.
#[derive(Debug)]
pub enum TurnResult {
    /// The turn was applied: the persona was persisted and the bundle
    /// should be rendered.
    Applied {
        /// Computed response channels.
        bundle: ResponseBundle,
    },
    /// The conversation was cleared after the message was sent; the
    /// computed reply was discarded and nothing was persisted.
    Discarded {
        /// Timestamp of the clear event that won, in milliseconds.
        cleared_at: u64,
    },
}

/// Coordinates one conversation turn end-to-end.
///
/// The orchestrator:
/// - Serializes turns per persona id (the engine assumes at most one
///   in-flight call per persona); distinct personas run concurrently
/// - Loads the persona, runs the responder, persists the result
/// - Discards replies made stale by a clear-conversation event
pub struct Orchestrator {
    responder: Arc<dyn Responder>,
    personas: Arc<dyn PersonaStore>,
    /// One turn lock per persona id, created lazily.
    turn_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    /// Most recent clear-conversation timestamp per persona id.
    cleared_at: RwLock<HashMap<String, u64>>,
}

impl Orchestrator {
    /// Create an orchestrator with the given responder and persona store.
    pub fn new(responder: Arc<dyn Responder>, personas: Arc<dyn PersonaStore>) -> Self {
        Self {
            responder,
            personas,
            turn_locks: Mutex::new(HashMap::new()),
            cleared_at: RwLock::new(HashMap::new()),
        }
    }

    /// Create an orchestrator running a [`RuleBrain`] over the given
    /// image store.
    pub fn with_rule_brain(
        images: Arc<dyn ImageStore>,
        personas: Arc<dyn PersonaStore>,
        config: EngineConfig,
    ) -> Self {
        Self::new(Arc::new(RuleBrain::with_config(images, config)), personas)
    }

    /// Get (or create) the turn lock for a persona.
    async fn turn_lock(&self, persona_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.turn_locks.lock().await;
        locks
            .entry(persona_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Process one turn end-to-end.
    ///
    /// Returns [`TurnResult::Discarded`] when a clear-conversation event
    /// with a timestamp at or after the message's `sent_at` was recorded
    /// before the reply could be applied; in that case neither the reply
    /// nor the mutated persona survives.
    pub async fn process_turn(
        &self,
        message: &InboundMessage,
        history: &[ConversationTurn],
    ) -> Result<TurnResult, OrchestratorError> {
        let lock = self.turn_lock(&message.persona_id).await;
        let _guard = lock.lock().await;

        debug!(
            persona_id = %message.persona_id,
            kind = ?message.kind,
            "processing turn"
        );

        let persona = self
            .personas
            .get(&message.persona_id)
            .await?
            .ok_or_else(|| OrchestratorError::PersonaNotFound(message.persona_id.clone()))?;

        let outcome = self.responder.respond(persona, message, history).await?;

        // Stale-reply guard: the clear wins over any turn already in
        // flight when it was recorded. The read lock is held across the
        // persist so a clear cannot land between the check and the put;
        // a concurrent clear is ordered either before the check (the
        // turn is discarded) or after the put (the turn was applied
        // first).
        let cleared = self.cleared_at.read().await;
        if let Some(&at) = cleared.get(&message.persona_id) {
            if at >= message.sent_at {
                info!(
                    persona_id = %message.persona_id,
                    cleared_at = at,
                    sent_at = message.sent_at,
                    "discarding reply computed before conversation clear"
                );
                return Ok(TurnResult::Discarded { cleared_at: at });
            }
        }

        self.personas.put(outcome.persona).await?;
        drop(cleared);

        Ok(TurnResult::Applied {
            bundle: outcome.bundle,
        })
    }

    /// Record a clear-conversation event. Later events win; an earlier
    /// timestamp never overwrites a newer one.
    pub async fn clear_conversation(&self, persona_id: &str, at_millis: u64) {
        let mut cleared = self.cleared_at.write().await;
        let entry = cleared.entry(persona_id.to_string()).or_insert(0);
        if at_millis > *entry {
            *entry = at_millis;
        }
        info!(persona_id = %persona_id, at = at_millis, "conversation cleared");
    }

    /// Get the responder's name.
    pub fn responder_name(&self) -> &str {
        self.responder.name()
    }
}
