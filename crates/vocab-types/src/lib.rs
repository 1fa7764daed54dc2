//! A reference catalogue of activity vocabulary types.
//!
//! Each type is a thin typed view over a [`Record`](vocab_core::Record) of
//! its declared properties; members the type does not declare are carried
//! through unchanged.

mod common;

pub mod image;
pub mod link;
pub mod note;
pub mod object;
pub mod person;

pub use image::Image;
pub use link::{Link, Mention};
pub use note::Note;
pub use object::Object;
pub use person::Person;

use vocab_core::{
    scalar::{AnyUri, NonNegativeInteger, XsdBoolean, XsdDateTime, XsdString},
    KindRegistry, VocabError,
};

/// Namespace of the activity vocabulary.
pub const NAMESPACE: &str = "https://www.w3.org/ns/activitystreams";

/// Builds a registry holding every catalogue type and scalar codec.
pub fn registry() -> Result<KindRegistry, VocabError> {
    tracing::debug!("building activity vocabulary registry");

    KindRegistry::new()
        .register::<Object>()?
        .register::<Link>()?
        .register::<Mention>()?
        .register::<Note>()?
        .register::<Image>()?
        .register::<Person>()?
        .register_scalar::<AnyUri>()?
        .register_scalar::<XsdDateTime>()?
        .register_scalar::<NonNegativeInteger>()?
        .register_scalar::<XsdString>()?
        .register_scalar::<XsdBoolean>()
}
