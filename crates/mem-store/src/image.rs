//! In-memory image store.

use std::collections::HashMap;

use async_trait::async_trait;
use companion_core::{ImageRecord, ImageStore, StoreError};
use tokio::sync::RwLock;

/// Thread-safe image storage keyed by persona.
///
/// Queries OR-match: a record is returned when its tag list contains a
/// queried tag, or its description contains the tag as a substring
/// (case-insensitive).
#[derive(Debug, Default)]
pub struct InMemoryImageStore {
    images: RwLock<HashMap<String, Vec<ImageRecord>>>,
}

impl InMemoryImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an image record for a persona.
    pub async fn add(&self, persona_id: impl Into<String>, record: ImageRecord) {
        self.images
            .write()
            .await
            .entry(persona_id.into())
            .or_default()
            .push(record);
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn query_by_tags(
        &self,
        persona_id: &str,
        tags: &[String],
    ) -> Result<Vec<ImageRecord>, StoreError> {
        let images = self.images.read().await;
        let Some(records) = images.get(persona_id) else {
            return Ok(Vec::new());
        };

        let needles: Vec<String> = tags.iter().map(|t| t.to_lowercase()).collect();
        Ok(records
            .iter()
            .filter(|record| {
                let description = record.description.to_lowercase();
                needles
                    .iter()
                    .any(|tag| record.tags.contains(tag) || description.contains(tag.as_str()))
            })
            .cloned()
            .collect())
    }
}

/// An image store that always fails.
///
/// Used to verify that store failures are swallowed and the turn
/// proceeds without an image.
#[derive(Debug, Clone, Default)]
pub struct FailingImageStore;

#[async_trait]
impl ImageStore for FailingImageStore {
    async fn query_by_tags(
        &self,
        _persona_id: &str,
        _tags: &[String],
    ) -> Result<Vec<ImageRecord>, StoreError> {
        Err(StoreError::Backend("image store offline".to_string()))
    }
}
