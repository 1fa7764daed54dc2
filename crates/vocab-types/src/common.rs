//! Building blocks shared by the catalogue types.

use std::sync::Arc;

use serde_json::{Map, Value};
use vocab_core::{
    scalar::{AnyUri, XsdString},
    AliasContext, Property, StringPrecedence, VocabError,
};

use crate::{link::Link, object::Object, person::Person, NAMESPACE};

/// Fails unless the `type` member of `raw` names `type_name`, possibly
/// behind a declared alias prefix.
pub(crate) fn expect_type(raw: &Map<String, Value>, aliases: &AliasContext, type_name: &'static str) -> Result<(), VocabError> {
    let names_type = |value: &Value| value.as_str().is_some_and(|t| aliases.strip_alias(t) == type_name);

    let found = match raw.get("type") {
        Some(Value::Array(types)) => types.iter().any(names_type),
        Some(value) => names_type(value),
        None => false,
    };

    if found {
        Ok(())
    } else {
        Err(VocabError::decode(type_name, "type member does not name this type"))
    }
}

/// `id`: the node's own IRI.
pub(crate) fn id() -> Arc<Property> {
    Property::builder("id").reference(true).opaque(false).build()
}

/// A plain text property.
pub(crate) fn text(name: &str) -> Arc<Property> {
    Property::builder(name)
        .namespace(NAMESPACE)
        .scalar::<XsdString>()
        .reference(false)
        .build()
}

/// `url`: bare links first, `Link` objects otherwise.
pub(crate) fn url() -> Arc<Property> {
    Property::builder("url")
        .namespace(NAMESPACE)
        .non_functional()
        .scalar::<AnyUri>()
        .object::<Link>()
        .string_precedence(StringPrecedence::ScalarFirst)
        .build()
}

pub(crate) fn attributed_to() -> Arc<Property> {
    Property::builder("attributedTo")
        .namespace(NAMESPACE)
        .non_functional()
        .object::<Person>()
        .object::<Object>()
        .build()
}

/// Declares a catalogue type backed by a [`Record`](vocab_core::Record) of
/// the given schema.
macro_rules! vocab_type {
    ($(#[$meta:meta])* $name:ident, $schema:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            record: vocab_core::Record,
        }

        impl $name {
            /// An empty value carrying only its `type` member.
            pub fn new() -> Self {
                let mut record = vocab_core::Record::new(&$schema);
                record.unknown_mut().insert(
                    "type".to_owned(),
                    serde_json::Value::String(<Self as vocab_core::VocabValue>::TYPE_NAME.to_owned()),
                );
                Self { record }
            }

            pub fn schema() -> &'static vocab_core::Schema {
                &$schema
            }

            pub fn record(&self) -> &vocab_core::Record {
                &self.record
            }

            pub fn record_mut(&mut self) -> &mut vocab_core::Record {
                &mut self.record
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl vocab_core::VocabValue for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn decode(
                raw: &serde_json::Map<String, serde_json::Value>,
                aliases: &vocab_core::AliasContext,
            ) -> Result<Self, vocab_core::VocabError> {
                $crate::common::expect_type(raw, aliases, Self::TYPE_NAME)?;
                let record = vocab_core::Record::decode(raw, &$schema, aliases)?;
                Ok(Self { record })
            }

            fn encode(&self) -> Result<serde_json::Value, vocab_core::VocabError> {
                self.record.encode().map(serde_json::Value::Object)
            }

            fn compare(&self, other: &Self) -> std::cmp::Ordering {
                self.record.compare(&other.record)
            }

            fn context_uris(&self) -> vocab_core::ContextUris {
                let mut uris = self.record.context_uris();
                uris.insert($crate::NAMESPACE, "");
                uris
            }
        }
    };
}

pub(crate) use vocab_type;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_expect_type() {
        let aliases = AliasContext::new().with_alias(NAMESPACE, "as");
        let check = |raw: Value| expect_type(raw.as_object().unwrap(), &aliases, "Note");

        assert!(check(json!({"type": "Note"})).is_ok());
        assert!(check(json!({"type": "as:Note"})).is_ok());
        assert!(check(json!({"type": ["Object", "Note"]})).is_ok());
        assert!(check(json!({"type": "Image"})).is_err());
        assert!(check(json!({"type": "other:Note"})).is_err());
        assert!(check(json!({"content": "no type"})).is_err());
    }
}
