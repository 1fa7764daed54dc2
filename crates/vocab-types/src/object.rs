use once_cell::sync::Lazy;
use vocab_core::{Iri, Schema, ValueList};

use crate::common::{self, vocab_type};

static OBJECT_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        common::id(),
        common::text("name"),
        common::attributed_to(),
        common::url(),
    ])
});

vocab_type!(
    /// The base vocabulary object, for values no more specific type claims.
    Object,
    OBJECT_SCHEMA
);

impl Object {
    pub fn id(&self) -> Option<&Iri> {
        self.record.cell("id")?.reference()
    }

    pub fn name(&self) -> Option<&str> {
        self.record.cell("name")?.scalar::<vocab_core::scalar::XsdString>().map(String::as_str)
    }

    pub fn url(&self) -> Option<&ValueList> {
        self.record.list("url")
    }
}
