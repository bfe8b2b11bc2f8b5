//! Validation errors for rule and logic-rule construction.
//!
//! Malformed rules are rejected when they are created; the matcher
//! assumes well-formed rules and only skips empty trigger lists
//! defensively.

use thiserror::Error;

/// Errors raised when constructing a malformed rule or logic rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A rule needs at least one non-empty trigger phrase.
    #[error("rule needs at least one trigger phrase")]
    EmptyTriggerPhrases,

    /// A rule needs at least one response option.
    #[error("rule needs at least one response")]
    EmptyResponses,

    /// An image-trigger rule needs a non-empty image tag.
    #[error("image-trigger rule needs an image tag")]
    MissingImageTag,

    /// An audio-trigger rule needs an audio payload.
    #[error("audio-trigger rule needs an audio payload")]
    MissingAudioPayload,

    /// A logic rule needs a non-empty target.
    #[error("logic rule needs a target keyword or tag")]
    EmptyTarget,

    /// A logic rule threshold must be a positive integer.
    #[error("logic rule threshold must be positive")]
    ZeroThreshold,
}
