//! Trained trigger/response rules.

use serde::{Deserialize, Serialize};

use crate::message::AudioRef;
use crate::time_of_day::TimeOfDayTag;
use crate::validation::ValidationError;

/// The kind of a trained rule, determining which output channel it can
/// populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Produces a text reply.
    Text,
    /// Produces an image send (with an optional caption).
    ImageTrigger,
    /// Produces an audio send (with an optional caption).
    AudioTrigger,
}

/// One candidate response with its time-of-day tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseOption {
    /// Response text.
    pub text: String,
    /// When this response is usable.
    pub time_of_day: TimeOfDayTag,
}

impl ResponseOption {
    /// Create a response usable at any time of day.
    pub fn any(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            time_of_day: TimeOfDayTag::Any,
        }
    }

    /// Create a response tagged with a specific time of day.
    pub fn tagged(text: impl Into<String>, time_of_day: TimeOfDayTag) -> Self {
        Self {
            text: text.into(),
            time_of_day,
        }
    }
}

/// A trigger-phrase-to-response association.
///
/// Construct via [`Rule::text`], [`Rule::image_trigger`], or
/// [`Rule::audio_trigger`]; the constructors enforce the kind/field
/// invariants and lowercase the trigger phrases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Lowercase-normalized trigger phrases. At least one required.
    pub trigger_phrases: Vec<String>,
    /// Which output channel this rule populates.
    pub kind: RuleKind,
    /// Candidate responses. At least one required.
    pub responses: Vec<ResponseOption>,
    /// Image-store tag. Present only on image-trigger rules.
    pub image_tag: Option<String>,
    /// Audio payload. Present only on audio-trigger rules.
    pub audio: Option<AudioRef>,
}

impl Rule {
    /// Create a text rule.
    pub fn text(
        triggers: Vec<String>,
        responses: Vec<ResponseOption>,
    ) -> Result<Self, ValidationError> {
        Self::build(RuleKind::Text, triggers, responses, None, None)
    }

    /// Create an image-trigger rule.
    pub fn image_trigger(
        triggers: Vec<String>,
        responses: Vec<ResponseOption>,
        image_tag: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let tag = image_tag.into();
        if tag.trim().is_empty() {
            return Err(ValidationError::MissingImageTag);
        }
        Self::build(
            RuleKind::ImageTrigger,
            triggers,
            responses,
            Some(tag.to_lowercase()),
            None,
        )
    }

    /// Create an audio-trigger rule.
    pub fn audio_trigger(
        triggers: Vec<String>,
        responses: Vec<ResponseOption>,
        audio: AudioRef,
    ) -> Result<Self, ValidationError> {
        if audio.id.trim().is_empty() {
            return Err(ValidationError::MissingAudioPayload);
        }
        Self::build(RuleKind::AudioTrigger, triggers, responses, None, Some(audio))
    }

    fn build(
        kind: RuleKind,
        triggers: Vec<String>,
        responses: Vec<ResponseOption>,
        image_tag: Option<String>,
        audio: Option<AudioRef>,
    ) -> Result<Self, ValidationError> {
        let trigger_phrases: Vec<String> = triggers
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        if trigger_phrases.is_empty() {
            return Err(ValidationError::EmptyTriggerPhrases);
        }
        if responses.is_empty() {
            return Err(ValidationError::EmptyResponses);
        }

        Ok(Self {
            trigger_phrases,
            kind,
            responses,
            image_tag,
            audio,
        })
    }
}
