//! Turn orchestration for the companion chat engine.
//!
//! This crate provides the [`Orchestrator`] type which coordinates one
//! conversation turn end-to-end:
//!
//! - Serializes turns per persona (at most one in-flight turn per
//!   persona id; distinct personas proceed concurrently)
//! - Loads the persona, runs the responder, persists the updated persona
//! - Suppresses stale replies: a turn whose message was sent before the
//!   most recent clear-conversation event is discarded, not applied
//!
//! # Architecture
//!
//! ```text
//! Inbound message (from the UI shell)
//!          |
//!          v
//! +--------------------------------------------------+
//! |                   ORCHESTRATOR                    |
//! |                                                   |
//! |  1. Acquire the persona's turn lock               |
//! |  2. Load persona from the persona store           |
//! |  3. Run the responder (rule matching + logic)     |
//! |  4. Stale-reply guard: discard if conversation    |
//! |     was cleared after the message was sent        |
//! |  5. Persist the updated persona, return bundle    |
//! +--------------------------------------------------+
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use companion_core::{InboundMessage, Persona};
//! use mem_store::{InMemoryImageStore, InMemoryPersonaStore};
//! use orchestrator::Orchestrator;
//! use rule_brain::EngineConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let personas = Arc::new(InMemoryPersonaStore::new());
//!     personas.put(Persona::new("p1", "Ada")).await?;
//!
//!     let images = Arc::new(InMemoryImageStore::new());
//!     let orchestrator =
//!         Orchestrator::with_rule_brain(images, personas, EngineConfig::default());
//!
//!     let message = InboundMessage::text("p1", "hello", 1234567890);
//!     let result = orchestrator.process_turn(&message, &[]).await?;
//!     println!("Result: {:?}", result);
//!     Ok(())
//! }
//! ```

mod error;
mod orchestrator;

pub use error::OrchestratorError;
pub use orchestrator::{Orchestrator, TurnResult};

// Re-export commonly used types from dependencies
pub use companion_core::{ConversationTurn, InboundMessage, ResponseBundle};
pub use rule_brain::{EngineConfig, RuleBrain};
