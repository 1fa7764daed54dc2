use std::sync::Arc;

use once_cell::sync::Lazy;
use vocab_core::{scalar::XsdString, Iri, Property, Schema};

use crate::{
    common::{self, vocab_type},
    NAMESPACE,
};

fn inbox() -> Arc<Property> {
    Property::builder("inbox")
        .namespace(NAMESPACE)
        .reference(true)
        .opaque(false)
        .build()
}

static PERSON_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        common::id(),
        common::text("name"),
        common::text("preferredUsername"),
        inbox(),
    ])
});

vocab_type!(
    /// An individual actor.
    Person,
    PERSON_SCHEMA
);

impl Person {
    pub fn id(&self) -> Option<&Iri> {
        self.record.cell("id")?.reference()
    }

    pub fn preferred_username(&self) -> Option<&str> {
        self.record.cell("preferredUsername")?.scalar::<XsdString>().map(String::as_str)
    }

    pub fn inbox(&self) -> Option<&Iri> {
        self.record.cell("inbox")?.reference()
    }
}
