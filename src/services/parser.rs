//! Extraction of recommendation arrays embedded in free-text model output.
//!
//! The collaborator replies with prose that is expected to contain a JSON
//! array somewhere inside it. The contract is best-effort: take the first
//! substring spanning the outermost brackets, try to parse it, and give up
//! quietly on failure. Kept behind this module so a stricter structured-output
//! source can replace it without touching callers.

use regex::Regex;

use crate::models::RecommendedMovie;

// Greedy: first '[' through last ']', newlines included
const ARRAY_PATTERN: &str = r"(?s)\[.*\]";

/// Locates the first bracket-delimited array substring in free text
pub fn extract_embedded_array(content: &str) -> Option<&str> {
    let pattern = Regex::new(ARRAY_PATTERN).ok()?;
    pattern.find(content).map(|m| m.as_str())
}

/// Extracts and parses the recommendation array from free text.
///
/// Returns `None` when no array substring exists or it fails to parse as a
/// recommendation list.
pub fn parse_recommendations(content: &str) -> Option<Vec<RecommendedMovie>> {
    let raw = extract_embedded_array(content)?;
    serde_json::from_str(raw).ok()
}
