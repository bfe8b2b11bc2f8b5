//! In-memory store implementations for the companion chat engine.
//!
//! This crate provides simple implementations of the core store traits:
//! - `InMemoryPersonaStore` - Personas in a map, with name lookup
//! - `InMemoryImageStore` - Image records with tag/description matching
//! - `FailingImageStore` - Always errors, for failure-path tests
//!
//! For production use behind a real database, implement the traits from
//! `companion-core` directly.

mod image;
mod persona;

pub use image::{FailingImageStore, InMemoryImageStore};
pub use persona::InMemoryPersonaStore;

// Re-export the trait types callers need alongside the stores
pub use companion_core::{ImageRecord, ImageStore, PersonaStore, StoreError};
