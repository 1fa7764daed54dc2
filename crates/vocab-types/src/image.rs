use std::sync::Arc;

use once_cell::sync::Lazy;
use vocab_core::{scalar::NonNegativeInteger, Property, Schema, ValueList};

use crate::{
    common::{self, vocab_type},
    NAMESPACE,
};

fn dimension(name: &str) -> Arc<Property> {
    Property::builder(name)
        .namespace(NAMESPACE)
        .scalar::<NonNegativeInteger>()
        .reference(false)
        .opaque(false)
        .build()
}

static IMAGE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        common::text("name"),
        common::url(),
        dimension("width"),
        dimension("height"),
    ])
});

vocab_type!(Image, IMAGE_SCHEMA);

impl Image {
    pub fn url(&self) -> Option<&ValueList> {
        self.record.list("url")
    }

    pub fn width(&self) -> Option<u64> {
        self.record.cell("width")?.scalar::<NonNegativeInteger>().copied()
    }

    pub fn height(&self) -> Option<u64> {
        self.record.cell("height")?.scalar::<NonNegativeInteger>().copied()
    }
}
