use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use vocab_core::{
    scalar::{XsdDateTime, XsdString},
    Iri, Property, Schema, ValueList,
};

use crate::{
    common::{self, vocab_type},
    image::Image,
    link::{Link, Mention},
    NAMESPACE,
};

fn published() -> Arc<Property> {
    Property::builder("published")
        .namespace(NAMESPACE)
        .scalar::<XsdDateTime>()
        .reference(false)
        .build()
}

fn attachment() -> Arc<Property> {
    Property::builder("attachment")
        .namespace(NAMESPACE)
        .non_functional()
        .object::<Image>()
        .object::<Link>()
        .object::<Note>()
        .build()
}

fn tag() -> Arc<Property> {
    Property::builder("tag")
        .namespace(NAMESPACE)
        .non_functional()
        .object::<Mention>()
        .object::<Link>()
        .collapse_singleton(true)
        .build()
}

static NOTE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        common::id(),
        common::text("name"),
        common::text("content"),
        published(),
        attachment(),
        common::attributed_to(),
        tag(),
        common::url(),
    ])
});

vocab_type!(
    /// A short written work.
    Note,
    NOTE_SCHEMA
);

impl Note {
    pub fn id(&self) -> Option<&Iri> {
        self.record.cell("id")?.reference()
    }

    pub fn content(&self) -> Option<&str> {
        self.record.cell("content")?.scalar::<XsdString>().map(String::as_str)
    }

    pub fn published(&self) -> Option<&DateTime<FixedOffset>> {
        self.record.cell("published")?.scalar::<XsdDateTime>()
    }

    pub fn attachment(&self) -> Option<&ValueList> {
        self.record.list("attachment")
    }

    pub fn attachment_mut(&mut self) -> Option<&mut ValueList> {
        self.record.list_mut("attachment")
    }

    pub fn attributed_to(&self) -> Option<&ValueList> {
        self.record.list("attributedTo")
    }

    pub fn tag(&self) -> Option<&ValueList> {
        self.record.list("tag")
    }

    pub fn tag_mut(&mut self) -> Option<&mut ValueList> {
        self.record.list_mut("tag")
    }
}
