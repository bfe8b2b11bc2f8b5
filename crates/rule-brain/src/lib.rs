//! Rule-matching responder implementation for the companion chat engine.
//!
//! This crate provides [`RuleBrain`], a `Responder` that matches an
//! incoming message against a persona's trained trigger/response rules
//! and produces a response bundle (text, image, audio), updating the
//! persona's counters and learning flags along the way.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use companion_core::{InboundMessage, Persona, Responder};
//! use mem_store::InMemoryImageStore;
//! use rule_brain::RuleBrain;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let images = Arc::new(InMemoryImageStore::new());
//!     let brain = RuleBrain::new(images);
//!
//!     let persona = Persona::new("p1", "Ada");
//!     let message = InboundMessage::text("p1", "hello", 1234567890);
//!
//!     let outcome = brain.respond(persona, &message, &[]).await?;
//!     println!("Reply: {:?}", outcome.bundle.text);
//!     Ok(())
//! }
//! ```

mod brain;
mod clock;
mod config;
mod fallback;
mod matcher;
mod scoring;
mod tokenizer;

pub use brain::RuleBrain;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EngineConfig;
pub use fallback::{AUDIO_INPUT_REPLIES, AUDIO_PLACEHOLDER, IMAGE_INPUT_REPLIES, LEARN_ACK};
pub use matcher::best_match;
pub use scoring::{phrase_score, rule_score, EXACT_MATCH_BASE};
pub use tokenizer::tokenize;

// Re-export core types for convenience
pub use companion_core::{Responder, ResponderError, ResponseBundle, TurnOutcome};
