//! Extraction of the question list from model output
//!
//! Models often wrap the array in prose or code fences, so everything
//! between the first `[` and the last `]` is taken as the JSON payload.

use crate::{PrepError, Result};
use serde_json::Value;

/// Parse the generated questions out of `text`.
///
/// Fails when no array is present, when it is not valid JSON, when it is
/// empty, or when an element is not a string.
pub fn extract_questions(text: &str) -> Result<Vec<String>> {
    let cleaned = text.trim();
    let (start, end) = match (cleaned.find('['), cleaned.rfind(']')) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            return Err(PrepError::MalformedResponse(
                "No valid JSON array found in response".into(),
            ))
        }
    };

    let parsed: Value = serde_json::from_str(&cleaned[start..=end])?;
    let items = match parsed {
        Value::Array(items) if !items.is_empty() => items,
        _ => {
            return Err(PrepError::MalformedResponse(
                "Invalid questions format - expected non-empty array".into(),
            ))
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Value::String(question) => Ok(question.trim().to_string()),
            other => Err(PrepError::MalformedResponse(format!(
                "Expected a question string, got {}",
                other
            ))),
        })
        .collect()
}
