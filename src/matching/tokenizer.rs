//! Token normalization and the fixed stop-word list

/// Function words dropped from full-text profile vocabulary.
pub const STOP_WORDS: [&str; 24] = [
    "a", "an", "the", "in", "on", "at", "for", "of", "and", "or", "to", "with",
    "by", "from", "as", "is", "are", "was", "were", "be", "this", "that", "it",
    "using",
];

pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Lowercase `text` and split it into `[a-z0-9]+` tokens.
///
/// Whitespace and every other character outside `[a-z0-9]` act as
/// boundaries, so `"C++/Rust"` yields `c` and `rust`. Empty fragments are
/// dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokens of `text` with stop words removed.
pub fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Tokens rejoined by single spaces.
pub fn normalize(text: &str) -> String {
    tokenize(text).join(" ")
}
