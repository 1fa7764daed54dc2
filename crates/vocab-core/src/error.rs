use thiserror::Error;

/// Errors raised while decoding, encoding or mutating property values.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum VocabError {
    /// An object matched none of the candidate kinds and the property
    /// does not keep opaque values.
    #[error("property {property}: object matches no candidate kind")]
    UnrecognizedShape { property: String },

    /// The raw shape is not valid for the property at all.
    #[error("property {property}: {found} is not a valid value")]
    InvalidShape { property: String, found: &'static str },

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("property {property} does not accept kind {kind}")]
    KindNotPermitted { property: String, kind: String },

    #[error("unknown kind: {0}")]
    UnknownKind(String),

    #[error("found duplicate entry in kind registry: {0}")]
    DuplicateKind(String),

    #[error("cannot decode {type_name}: {reason}")]
    Decode { type_name: &'static str, reason: String },

    #[error("cannot encode {type_name}: {reason}")]
    Encode { type_name: &'static str, reason: String },

    #[error("invalid IRI: {0}")]
    InvalidIri(String),

    #[error("property {property}: {source}")]
    Property {
        property: String,
        #[source]
        source: Box<VocabError>,
    },

    #[error("{}", join(.0))]
    Aggregate(Vec<VocabError>),
}

impl VocabError {
    /// Shorthand used by vocabulary types and codecs.
    pub fn decode(type_name: &'static str, reason: impl Into<String>) -> Self {
        VocabError::Decode {
            type_name,
            reason: reason.into(),
        }
    }

    pub fn encode(type_name: &'static str, reason: impl Into<String>) -> Self {
        VocabError::Encode {
            type_name,
            reason: reason.into(),
        }
    }

    /// Wraps the error with the name of the property it was raised for.
    pub fn in_property(self, property: impl Into<String>) -> Self {
        VocabError::Property {
            property: property.into(),
            source: Box::new(self),
        }
    }
}

fn join(errors: &[VocabError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
