//! Collaborator store traits.
//!
//! The engine reads images through [`ImageStore`]; the orchestrator
//! loads and saves personas through [`PersonaStore`]. Both are
//! object-safe so callers can hold `Arc<dyn ...>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persona::Persona;

/// A stored image with its lookup tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Stable image id.
    pub id: String,
    /// Tags this image is filed under, lowercase-normalized.
    pub tags: Vec<String>,
    /// Free-text description, also searched by tag queries.
    pub description: String,
}

impl ImageRecord {
    /// Create an image record.
    pub fn new(id: impl Into<String>, tags: Vec<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: tags.into_iter().map(|t| t.to_lowercase()).collect(),
            description: description.into(),
        }
    }
}

/// Errors returned by store collaborators.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage or retrieval failure in the backend.
    #[error("store error: {0}")]
    Backend(String),

    /// The requested persona does not exist.
    #[error("persona not found: {0}")]
    PersonaNotFound(String),
}

/// Keyed image blobs with tag-based lookup.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Find images for a persona matching any of the given tags.
    ///
    /// A record matches when its tag list contains a queried tag or its
    /// description contains the tag as a substring (case-insensitive).
    async fn query_by_tags(
        &self,
        persona_id: &str,
        tags: &[String],
    ) -> Result<Vec<ImageRecord>, StoreError>;
}

/// Key-value persona persistence with one secondary index.
#[async_trait]
pub trait PersonaStore: Send + Sync {
    /// Load a persona by id.
    async fn get(&self, persona_id: &str) -> Result<Option<Persona>, StoreError>;

    /// Insert or replace a persona.
    async fn put(&self, persona: Persona) -> Result<(), StoreError>;

    /// Delete a persona by id. No-op for unknown ids.
    async fn delete(&self, persona_id: &str) -> Result<(), StoreError>;

    /// Find personas by display name (case-insensitive exact match).
    async fn find_by_name(&self, name: &str) -> Result<Vec<Persona>, StoreError>;
}
