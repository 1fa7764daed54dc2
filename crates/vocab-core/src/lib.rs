//! Typed property values for JSON-LD vocabulary documents.
//!
//! A property of a vocabulary type may hold a value of several alternative
//! kinds: a reference IRI, one of a ranked list of concrete types, or an
//! opaque fragment no candidate understood. This crate decides which kind a
//! raw JSON value represents ([`resolve`]), stores it in a
//! [`ValueCell`] (functional properties) or a [`ValueList`] (non-functional
//! properties), and writes it back unchanged.

pub mod cell;
pub mod context;
pub mod error;
pub mod iri;
pub mod kind;
pub mod list;
pub mod property;
pub mod record;
pub mod registry;
pub mod resolve;
pub mod scalar;
pub mod traits;

pub use cell::{CellValue, ValueCell};
pub use context::{AliasContext, Context, ContextUris};
pub use error::VocabError;
pub use iri::Iri;
pub use kind::{Candidate, Concrete, Kind, Shape};
pub use list::{Cursor, ListId, Member, ValueList};
pub use property::{Cardinality, Property, PropertyBuilder, PropertyDecl, StringPrecedence};
pub use record::{Record, Schema, Slot};
pub use registry::KindRegistry;
pub use resolve::resolve;
pub use traits::{ScalarCodec, VocabValue};
