//! Personas and their engine-owned memory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::logic::LogicRule;
use crate::rule::Rule;

/// A configured conversational identity with its own trained rules and
/// memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    /// Stable persona id (the persona store key).
    pub id: String,
    /// Display name (also the store's secondary index).
    pub name: String,
    /// Occupation, used only as greeting filler.
    pub occupation: String,
    /// Backstory, used only as greeting filler.
    pub backstory: String,
    /// Trained trigger/response rules. Order matters only for
    /// first-wins tie-breaking.
    pub trained_rules: Vec<Rule>,
    /// Threshold-triggered logic rules, evaluated in list order.
    pub logic_rules: Vec<LogicRule>,
    /// Engine-owned mutable state. The UI never writes here.
    pub memory: PersonaMemory,
}

impl Persona {
    /// Create a persona with no rules and empty memory.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            occupation: String::new(),
            backstory: String::new(),
            trained_rules: Vec::new(),
            logic_rules: Vec::new(),
            memory: PersonaMemory::default(),
        }
    }
}

/// Mutable counters and transient conversation flags, owned exclusively
/// by the engine and persisted with the persona.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonaMemory {
    /// Counters keyed by `"keyword:<token>"` or `"tag:<tag>"`. Created
    /// lazily on first increment, never pruned.
    pub counters: HashMap<String, u32>,
    /// Ids of recently sent images, used for anti-repetition.
    pub recent_image_ids: Vec<String>,
    /// An unanswered question awaiting a user-taught definition.
    pub awaiting_definition_for: Option<String>,
}

impl PersonaMemory {
    /// Counter key for a user keyword.
    pub fn keyword_key(target: &str) -> String {
        format!("keyword:{}", target.to_lowercase())
    }

    /// Counter key for a sent image tag.
    pub fn tag_key(tag: &str) -> String {
        format!("tag:{}", tag.to_lowercase())
    }

    /// Increment a counter, creating it at zero first, and return the
    /// new value.
    pub fn increment(&mut self, key: &str) -> u32 {
        let counter = self.counters.entry(key.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    /// Read a counter, or zero if it was never incremented.
    pub fn counter(&self, key: &str) -> u32 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    /// Reset a counter to zero. No-op for unknown keys.
    pub fn reset_counter(&mut self, key: &str) {
        if let Some(counter) = self.counters.get_mut(key) {
            *counter = 0;
        }
    }
}
