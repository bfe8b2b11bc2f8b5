//! Message types exchanged between the UI shell and the engine.

use serde::{Deserialize, Serialize};

/// The modality of an inbound user message.
///
/// Only text messages are matched against trained rules; image and
/// audio input is answered from canned fallback replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain text message.
    Text,
    /// User sent a picture (text carries the caption, if any).
    Image,
    /// User sent a voice message.
    Audio,
}

/// An incoming user message bound for a persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Target persona id.
    pub persona_id: String,
    /// Raw message text. Caption for image messages, empty for audio.
    pub text: String,
    /// Message modality.
    pub kind: MessageKind,
    /// Send timestamp in milliseconds. Compared against
    /// clear-conversation events to suppress stale replies.
    pub sent_at: u64,
}

impl InboundMessage {
    /// Create a text message.
    pub fn text(persona_id: impl Into<String>, text: impl Into<String>, sent_at: u64) -> Self {
        Self {
            persona_id: persona_id.into(),
            text: text.into(),
            kind: MessageKind::Text,
            sent_at,
        }
    }

    /// Create an image message with an optional caption.
    pub fn image(persona_id: impl Into<String>, caption: impl Into<String>, sent_at: u64) -> Self {
        Self {
            persona_id: persona_id.into(),
            text: caption.into(),
            kind: MessageKind::Image,
            sent_at,
        }
    }

    /// Create a voice message. Voice content is never transcribed.
    pub fn audio(persona_id: impl Into<String>, sent_at: u64) -> Self {
        Self {
            persona_id: persona_id.into(),
            text: String::new(),
            kind: MessageKind::Audio,
            sent_at,
        }
    }
}

/// A reference to an image chosen from the image store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Image record id, used by the UI to fetch the blob.
    pub id: String,
    /// The tag the image was selected for.
    pub tag: String,
}

impl ImageRef {
    /// Create an image reference.
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
        }
    }
}

/// An opaque reference to an audio clip payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRef {
    /// Audio clip id, used by the UI to fetch the clip.
    pub id: String,
}

impl AudioRef {
    /// Create an audio reference.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// The computed response for one turn: text, image, and audio channels
/// are filled independently and any combination may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBundle {
    /// Text reply, if any.
    pub text: Option<String>,
    /// Image to send, if any.
    pub image: Option<ImageRef>,
    /// Audio clip to send, if any.
    pub audio: Option<AudioRef>,
}

impl ResponseBundle {
    /// Create an empty bundle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a text-only bundle.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Whether no channel produced any output.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.image.is_none() && self.audio.is_none()
    }

    /// Append text to the bundle, space-joined if text is already set.
    pub fn append_text(&mut self, extra: &str) {
        match self.text.as_mut() {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(extra);
            }
            None => self.text = Some(extra.to_string()),
        }
    }
}

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    /// The human user.
    User,
    /// The persona.
    Persona,
}

/// A prior turn in the conversation.
///
/// History is read-only input to the engine; persisting it is the
/// caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Turn author.
    pub author: Author,
    /// Turn text.
    pub text: String,
    /// Timestamp in milliseconds.
    pub timestamp: u64,
}

impl ConversationTurn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>, timestamp: u64) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
            timestamp,
        }
    }

    /// Create a persona turn.
    pub fn persona(text: impl Into<String>, timestamp: u64) -> Self {
        Self {
            author: Author::Persona,
            text: text.into(),
            timestamp,
        }
    }
}
