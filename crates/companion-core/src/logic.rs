//! Counter-threshold logic rules.

use serde::{Deserialize, Serialize};

use crate::message::AudioRef;
use crate::persona::PersonaMemory;
use crate::validation::ValidationError;

/// Which event stream a logic rule counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorKind {
    /// Count occurrences of a keyword in user messages.
    UserKeyword,
    /// Count images the persona actually sent, by tag.
    BotImageTag,
}

/// The side effect a logic rule applies when it fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicAction {
    /// Append the payload to the turn's text output.
    EmitText(String),
    /// Override the turn's image with a random pick for this tag.
    EmitImageTag(String),
    /// Override the turn's audio with this payload.
    EmitAudio(AudioRef),
}

/// A threshold-triggered side-effect rule.
///
/// Counters live in [`PersonaMemory::counters`] and are created lazily
/// on first increment. The rule fires on any turn where the counter is
/// at or above the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicRule {
    /// Which event stream is counted.
    pub monitor: MonitorKind,
    /// The keyword or tag being counted, lowercase-normalized.
    pub target: String,
    /// Fires when the counter reaches or exceeds this value.
    pub threshold: u32,
    /// Side effect applied on fire.
    pub action: LogicAction,
    /// Whether the counter resets to zero when the rule fires.
    pub reset_on_fire: bool,
}

impl LogicRule {
    /// Create a logic rule, validating target and threshold.
    pub fn new(
        monitor: MonitorKind,
        target: impl Into<String>,
        threshold: u32,
        action: LogicAction,
        reset_on_fire: bool,
    ) -> Result<Self, ValidationError> {
        let target = target.into().trim().to_lowercase();
        if target.is_empty() {
            return Err(ValidationError::EmptyTarget);
        }
        if threshold == 0 {
            return Err(ValidationError::ZeroThreshold);
        }

        Ok(Self {
            monitor,
            target,
            threshold,
            action,
            reset_on_fire,
        })
    }

    /// The composite counter key this rule reads.
    pub fn counter_key(&self) -> String {
        match self.monitor {
            MonitorKind::UserKeyword => PersonaMemory::keyword_key(&self.target),
            MonitorKind::BotImageTag => PersonaMemory::tag_key(&self.target),
        }
    }
}
