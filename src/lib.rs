//! Typed value model for JSON-LD activity vocabulary documents.
//!
//! Re-exports the value containers of [`vocab_core`] and the reference
//! catalogue of [`vocab_types`], and adds document-level entry points.

pub use vocab_core::*;
pub use vocab_types as types;

use serde_json::Value;

/// Decodes a top-level document with the built-in catalogue.
pub fn from_document(document: &Value) -> Result<Concrete, VocabError> {
    let registry = types::registry()?;
    let value = registry.decode_document(document)?;
    tracing::debug!("decoded document of type {}", value.type_name());
    Ok(value)
}

/// Encodes a value as a standalone document.
///
/// When the encoded value has no `@context` yet, one is derived from the
/// namespaces its properties use.
pub fn to_document(value: &Concrete) -> Result<Value, VocabError> {
    let mut document = value.encode()?;

    if let Value::Object(members) = &mut document {
        if !members.contains_key("@context") {
            if let Some(context) = value.context_uris().to_context() {
                let context = serde_json::to_value(context)
                    .map_err(|e| VocabError::encode(value.type_name(), e.to_string()))?;
                members.insert("@context".to_owned(), context);
            }
        }
    }

    Ok(document)
}
