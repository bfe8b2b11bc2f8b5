//! Message tokenization.

/// Tokenize a message: lowercase, strip punctuation to whitespace,
/// split on whitespace, drop empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
