//! In-memory persona store.

use std::collections::HashMap;

use async_trait::async_trait;
use companion_core::{Persona, PersonaStore, StoreError};
use tokio::sync::RwLock;

/// Thread-safe persona storage backed by a map.
///
/// The display name acts as a secondary index via
/// [`PersonaStore::find_by_name`].
#[derive(Debug, Default)]
pub struct InMemoryPersonaStore {
    personas: RwLock<HashMap<String, Persona>>,
}

impl InMemoryPersonaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored personas.
    pub async fn len(&self) -> usize {
        self.personas.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.personas.read().await.is_empty()
    }
}

#[async_trait]
impl PersonaStore for InMemoryPersonaStore {
    async fn get(&self, persona_id: &str) -> Result<Option<Persona>, StoreError> {
        Ok(self.personas.read().await.get(persona_id).cloned())
    }

    async fn put(&self, persona: Persona) -> Result<(), StoreError> {
        self.personas
            .write()
            .await
            .insert(persona.id.clone(), persona);
        Ok(())
    }

    async fn delete(&self, persona_id: &str) -> Result<(), StoreError> {
        self.personas.write().await.remove(persona_id);
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Persona>, StoreError> {
        let needle = name.to_lowercase();
        Ok(self
            .personas
            .read()
            .await
            .values()
            .filter(|p| p.name.to_lowercase() == needle)
            .cloned()
            .collect())
    }
}
