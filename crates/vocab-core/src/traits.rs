use std::{cmp::Ordering, fmt};

use serde_json::{Map, Value};

use crate::{
    context::{AliasContext, ContextUris},
    error::VocabError,
};

/// A structured vocabulary type (`Note`, `Link`, `Person`, ...) that can be
/// held as the concrete value of a property.
pub trait VocabValue: Clone + fmt::Debug + 'static {
    /// Name the type is registered and dispatched under.
    const TYPE_NAME: &'static str;

    /// Decodes the type from a raw JSON object. Fails when the object is not
    /// an instance of this type; resolution then tries the next candidate.
    fn decode(raw: &Map<String, Value>, aliases: &AliasContext) -> Result<Self, VocabError>;

    fn encode(&self) -> Result<Value, VocabError>;

    /// Total order between two values of this type, used for canonical
    /// output only.
    fn compare(&self, other: &Self) -> Ordering;

    /// Namespaces (with their aliases) this value needs declared in the
    /// enclosing document's `@context`.
    fn context_uris(&self) -> ContextUris {
        ContextUris::new()
    }
}

/// Codec of a bare scalar alternative (`xsd:anyURI`, `xsd:dateTime`, ...).
pub trait ScalarCodec: 'static {
    type Value: Clone + fmt::Debug + 'static;

    /// Name of the scalar kind, e.g. `xsd:dateTime`.
    const NAME: &'static str;

    fn decode(raw: &Value) -> Result<Self::Value, VocabError>;

    fn encode(value: &Self::Value) -> Result<Value, VocabError>;

    fn compare(a: &Self::Value, b: &Self::Value) -> Ordering;
}
