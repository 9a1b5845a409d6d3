//! Payload normalization - guarantee a `text` field on every document
//!
//! The upstream search service nests its document list in one of several
//! shapes: a bare array, an object with a `documents` array, or an object
//! whose `result` value contains one of those shapes a few levels down.
//! [`normalize`] finds the documents wherever they are and makes sure each
//! one carries a string `text` field. Unrecognized shapes pass through
//! unchanged; the function never fails.

use serde_json::{Map, Value};

/// How deep to follow nested `result` keys before giving up.
const MAX_RESULT_DEPTH: usize = 5;

/// Keys whose string values are joined to synthesize a missing `text` field.
const TEXT_SOURCE_KEYS: &[&str] = &["title", "name", "description"];

/// Separator used when joining text source fields.
const TEXT_SEPARATOR: &str = " - ";

/// Normalize a search payload so every discoverable document has a `text` key.
///
/// Documents are never removed, reordered, or deduplicated; only the `text`
/// field may be added or filled. A payload with no recognizable document list
/// (including `{}` from a failed fetch) is returned unchanged.
pub fn normalize(mut payload: Value) -> Value {
    match documents_mut(&mut payload, MAX_RESULT_DEPTH) {
        Some(docs) => {
            for doc in docs.iter_mut() {
                if let Value::Object(fields) = doc {
                    ensure_text(fields);
                }
            }
        }
        None => tracing::debug!("No document list found in payload, passing through"),
    }

    payload
}

/// Locate the document array inside a payload, following the known shapes.
fn documents_mut(payload: &mut Value, depth: usize) -> Option<&mut Vec<Value>> {
    match payload {
        Value::Array(docs) => Some(docs),
        Value::Object(map) => {
            if matches!(map.get("documents"), Some(Value::Array(_))) {
                match map.get_mut("documents") {
                    Some(Value::Array(docs)) => Some(docs),
                    _ => None,
                }
            } else if depth > 0 {
                map.get_mut("result")
                    .and_then(|inner| documents_mut(inner, depth - 1))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Ensure a document carries a non-absent string `text` field.
///
/// An existing non-empty string `text` is left untouched, so normalization is
/// idempotent. Otherwise `text` is synthesized from the document's
/// human-readable fields, or set to the empty string when none are present.
fn ensure_text(doc: &mut Map<String, Value>) {
    if let Some(Value::String(text)) = doc.get("text") {
        if !text.is_empty() {
            return;
        }
    }

    let synthesized = TEXT_SOURCE_KEYS
        .iter()
        .filter_map(|key| doc.get(*key).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(TEXT_SEPARATOR);

    doc.insert("text".to_string(), Value::String(synthesized));
}
