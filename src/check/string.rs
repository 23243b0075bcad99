//! String guards.

use regex::Regex;

use crate::error::{Error, Result};

/// Checks that a string contains at least one non-whitespace character.
///
/// Trimming is only used for the emptiness test; the returned value is the
/// original, untrimmed input. Callers wanting the trimmed form chain
/// `.trim()` on the result.
pub fn not_blank<S: AsRef<str>>(value: S, name: &str) -> Result<S> {
    if value.as_ref().trim().is_empty() {
        return Err(Error::new(format!("argument '{name}' must not be blank")));
    }
    Ok(value)
}

/// Checks that a compiled pattern matches the whole value.
///
/// A match covering only part of the input fails. Patterns relying on
/// ordered alternation should be anchored (`^...$`) where parity with a
/// backtracking engine's full-match is required.
pub fn matches<S: AsRef<str>>(pattern: &Regex, value: S, name: &str) -> Result<S> {
    let candidate = value.as_ref();
    let full_match = pattern
        .find(candidate)
        .is_some_and(|m| m.start() == 0 && m.end() == candidate.len());
    if !full_match {
        return Err(Error::new(format!(
            "argument '{name}' must match pattern: {pattern}"
        )));
    }
    Ok(value)
}
