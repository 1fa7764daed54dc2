//! `Link` and its `Mention` subtype.

use std::sync::Arc;

use once_cell::sync::Lazy;
use vocab_core::{
    scalar::{AnyUri, XsdString},
    Iri, Property, Schema,
};

use crate::{
    common::{self, vocab_type},
    NAMESPACE,
};

fn href() -> Arc<Property> {
    Property::builder("href")
        .namespace(NAMESPACE)
        .scalar::<AnyUri>()
        .reference(false)
        .opaque(false)
        .build()
}

fn rel() -> Arc<Property> {
    Property::builder("rel")
        .namespace(NAMESPACE)
        .non_functional()
        .scalar::<XsdString>()
        .reference(false)
        .collapse_singleton(true)
        .build()
}

fn link_schema() -> Schema {
    Schema::new(vec![
        href(),
        common::text("name"),
        common::text("mediaType"),
        rel(),
    ])
}

static LINK_SCHEMA: Lazy<Schema> = Lazy::new(link_schema);
static MENTION_SCHEMA: Lazy<Schema> = Lazy::new(link_schema);

vocab_type!(
    /// A qualified reference to another resource.
    Link,
    LINK_SCHEMA
);

vocab_type!(
    /// A link to an actor named in the content of an object.
    Mention,
    MENTION_SCHEMA
);

impl Link {
    pub fn href(&self) -> Option<&Iri> {
        self.record.cell("href")?.scalar::<AnyUri>()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.record.cell("mediaType")?.scalar::<XsdString>().map(String::as_str)
    }
}

impl Mention {
    pub fn href(&self) -> Option<&Iri> {
        self.record.cell("href")?.scalar::<AnyUri>()
    }

    pub fn name(&self) -> Option<&str> {
        self.record.cell("name")?.scalar::<XsdString>().map(String::as_str)
    }
}
