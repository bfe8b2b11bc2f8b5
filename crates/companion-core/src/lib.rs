//! Core types and traits for the companion chat rule engine.
//!
//! This crate provides the shared interface for rule-engine
//! implementations and their collaborators. It defines:
//!
//! - [`Responder`] - The trait a conversation engine must implement
//! - [`InboundMessage`] / [`ResponseBundle`] - Message types for input/output
//! - [`Persona`] / [`Rule`] / [`LogicRule`] - The trained data model
//! - [`PersonaStore`] / [`ImageStore`] - Collaborator store traits
//! - [`ResponderError`] / [`StoreError`] - Error types
//!
//! # Example
//!
//! ```rust
//! use companion_core::{
//!     async_trait, ConversationTurn, InboundMessage, Persona, Responder,
//!     ResponderError, ResponseBundle, TurnOutcome,
//! };
//!
//! struct SilentResponder;
//!
//! #[async_trait]
//! impl Responder for SilentResponder {
//!     async fn respond(
//!         &self,
//!         persona: Persona,
//!         _message: &InboundMessage,
//!         _history: &[ConversationTurn],
//!     ) -> Result<TurnOutcome, ResponderError> {
//!         Ok(TurnOutcome {
//!             bundle: ResponseBundle::text("..."),
//!             persona,
//!         })
//!     }
//!
//!     fn name(&self) -> &str {
//!         "SilentResponder"
//!     }
//! }
//! ```

mod error;
mod logic;
mod message;
mod persona;
mod responder;
mod rule;
mod store;
mod time_of_day;
mod validation;

pub use error::ResponderError;
pub use logic::{LogicAction, LogicRule, MonitorKind};
pub use message::{
    Author, AudioRef, ConversationTurn, ImageRef, InboundMessage, MessageKind, ResponseBundle,
};
pub use persona::{Persona, PersonaMemory};
pub use responder::{Responder, TurnOutcome};
pub use rule::{ResponseOption, Rule, RuleKind};
pub use store::{ImageRecord, ImageStore, PersonaStore, StoreError};
pub use time_of_day::{TimeOfDay, TimeOfDayTag};
pub use validation::ValidationError;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
