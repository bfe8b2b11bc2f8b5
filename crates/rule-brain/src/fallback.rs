//! Canned fallback replies and intent detection for unmatched messages.

use companion_core::TimeOfDay;

/// Replies for voice-message input, which is never transcribed.
pub const AUDIO_INPUT_REPLIES: [&str; 5] = [
    "I can't listen to voice messages yet. Type it out for me?",
    "My ears aren't working today, sorry. Can you write that instead?",
    "Voice messages are a mystery to me. Text me!",
    "I wish I could hear that! Send it as text?",
    "I can't transcribe audio. What did you say?",
];

/// Replies for picture input, which is never matched against rules.
pub const IMAGE_INPUT_REPLIES: [&str; 4] = [
    "Nice picture!",
    "Oh, I love that!",
    "Thanks for sharing that with me.",
    "That's a great shot!",
];

/// Replies for "how are you" style questions.
pub const HOW_ARE_YOU_REPLIES: [&str; 4] = [
    "I'm doing great, thanks for asking! How about you?",
    "Pretty good! What about you?",
    "Can't complain. How are you doing?",
    "I'm wonderful now that you're here!",
];

/// Replies for unrecognized messages when learning is disabled.
pub const UNKNOWN_REPLIES: [&str; 3] = [
    "Hmm, I'm not sure what to say to that.",
    "I don't quite follow. Tell me more?",
    "Interesting! What do you mean?",
];

/// Acknowledgment after learning a new rule from the user.
pub const LEARN_ACK: &str = "Got it! I'll remember that.";

/// Placeholder caption attached to audio-trigger responses. Excluded
/// from caption picks when another option exists.
pub const AUDIO_PLACEHOLDER: &str = "(Audio Message)";

/// The teach-me prompt for an unrecognized message.
pub fn teach_me_prompt(message: &str) -> String {
    format!(
        "I don't know how to answer that yet. What should I say when you say \"{}\"?",
        message
    )
}

/// Greeting words recognized as a standalone hello.
const GREETING_WORDS: [&str; 7] = ["hi", "hello", "hey", "yo", "howdy", "hiya", "heya"];

/// Whether the message tokens contain a greeting word.
pub fn is_greeting(tokens: &[String]) -> bool {
    tokens
        .iter()
        .any(|token| GREETING_WORDS.contains(&token.as_str()))
}

/// Time-of-day greeting phrases (good morning / night etc.).
const TIME_GREETING_PHRASES: [&str; 5] = [
    "good morning",
    "good afternoon",
    "good evening",
    "good night",
    "goodnight",
];

/// Whether the lowercased message contains a time-of-day greeting.
pub fn is_time_greeting(message: &str) -> bool {
    TIME_GREETING_PHRASES
        .iter()
        .any(|phrase| message.contains(phrase))
}

/// "How are you" phrasings.
const HOW_ARE_YOU_PHRASES: [&str; 5] = [
    "how are you",
    "how are u",
    "how r u",
    "how's it going",
    "hows it going",
];

/// Whether the lowercased message asks how the persona is doing.
pub fn is_how_are_you(message: &str) -> bool {
    HOW_ARE_YOU_PHRASES
        .iter()
        .any(|phrase| message.contains(phrase))
}

/// Canned greetings returned for a time-of-day greeting, matched to the
/// actual time of day.
pub fn time_greeting_replies(time_of_day: TimeOfDay) -> &'static [&'static str] {
    match time_of_day {
        TimeOfDay::Morning => &[
            "Good morning! Ready for the day?",
            "Morning! Sleep well?",
            "Good morning to you too!",
        ],
        TimeOfDay::Afternoon => &[
            "Good afternoon! How's your day going?",
            "Hey, good afternoon!",
            "Afternoon! Hope your day's been good so far.",
        ],
        TimeOfDay::Evening => &[
            "Good evening! How was your day?",
            "Evening! Winding down?",
            "Good evening to you too!",
        ],
        TimeOfDay::LateNight => &[
            "Still up? Good night soon, I hope!",
            "It's late! Sweet dreams when you get there.",
            "Good night! Talk tomorrow?",
        ],
    }
}
