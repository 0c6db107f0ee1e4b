//! Answer matching for quiz questions.

use serde::{Deserialize, Serialize};

/// Result of comparing a user answer to the correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Normalized user answer (for display).
    pub user_normalized: String,
    /// Normalized correct answer (for display).
    pub correct_normalized: String,
}

/// Compare a user answer to the correct answer.
///
/// Both sides are trimmed and lowercased, then compared exactly.
pub fn check_answer(user: &str, correct: &str) -> MatchResult {
    let user_normalized = normalize_answer(user);
    let correct_normalized = normalize_answer(correct);

    MatchResult {
        is_correct: user_normalized == correct_normalized,
        user_normalized,
        correct_normalized,
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_answer(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Case-insensitive equality of two strings.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Replace every case-insensitive occurrence of `needle` in `text`.
pub fn replace_ignore_case(text: &str, needle: &str, replacement: &str) -> String {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        if let Some(len) = match_prefix_ignore_case(rest, &needle) {
            result.push_str(replacement);
            rest = &rest[len..];
            continue;
        }

        let mut chars = rest.chars();
        match chars.next() {
            Some(ch) => result.push(ch),
            None => break,
        }
        rest = chars.as_str();
    }

    result
}

/// Byte length of the prefix of `text` matching the lowercased `needle`.
fn match_prefix_ignore_case(text: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (idx, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            if needle.get(matched) != Some(&lower) {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(idx + ch.len_utf8());
        }
    }
    None
}
