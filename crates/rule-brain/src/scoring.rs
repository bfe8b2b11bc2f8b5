//! Trigger phrase scoring.
//!
//! Scores are plain integers so comparisons are deterministic. An exact
//! substring match always scores at least [`EXACT_MATCH_BASE`], which is
//! above the maximum possible fuzzy score (coverage percentage plus
//! matched token count), so exact matches always outrank fuzzy ones.

use companion_core::Rule;

use crate::tokenizer::tokenize;

/// Base score for an exact substring match.
pub const EXACT_MATCH_BASE: u32 = 1000;

/// Score a single trigger phrase against a message.
///
/// `message` must already be lowercased and `message_tokens` must be its
/// tokenization; trigger phrases are lowercase-normalized at rule
/// construction.
///
/// - Exact substring match: `1000 + phrase token count`.
/// - Fuzzy token overlap: requires full coverage for phrases of three or
///   fewer tokens, 75% coverage otherwise; scores
///   `coverage_pct + matched token count`. Below threshold scores zero.
pub fn phrase_score(phrase: &str, message: &str, message_tokens: &[String]) -> u32 {
    if phrase.is_empty() {
        return 0;
    }

    let phrase_tokens = tokenize(phrase);
    if phrase_tokens.is_empty() {
        return 0;
    }
    let phrase_len = phrase_tokens.len() as u32;

    if message.contains(phrase) {
        return EXACT_MATCH_BASE + phrase_len;
    }

    let matched = phrase_tokens
        .iter()
        .filter(|token| message_tokens.contains(token))
        .count() as u32;

    // Coverage threshold: 100% for short phrases, 75% otherwise
    let meets_threshold = if phrase_len <= 3 {
        matched == phrase_len
    } else {
        matched * 4 >= phrase_len * 3
    };
    if !meets_threshold {
        return 0;
    }

    let coverage_pct = matched * 100 / phrase_len;
    coverage_pct + matched
}

/// Score a rule: the maximum score across its trigger phrases.
pub fn rule_score(rule: &Rule, message: &str, message_tokens: &[String]) -> u32 {
    rule.trigger_phrases
        .iter()
        .map(|phrase| phrase_score(phrase, message, message_tokens))
        .max()
        .unwrap_or(0)
}
