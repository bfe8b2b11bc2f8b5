//! Engine configuration.

/// Configuration for the rule brain.
///
/// Explicit configuration replaces the original app's ambient feature
/// flags; pass this in rather than reading global state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Whether the brain may learn new rules from unanswered messages
    /// (the teach-me flow). When disabled, unrecognized messages get a
    /// generic fallback reply and no pending definition is recorded.
    pub learning_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            learning_enabled: true,
        }
    }
}
