use std::{collections::HashMap, sync::Arc};

use serde_json::Value;

use crate::{
    context::AliasContext,
    error::VocabError,
    kind::{Candidate, Concrete, Kind, Shape},
    property::{Property, PropertyDecl},
    traits::{ScalarCodec, VocabValue},
};

/// Named candidate decoders, used to turn declarative [`PropertyDecl`]s into
/// [`Property`] descriptors and to decode top-level documents by `type`.
#[derive(Debug, Clone, Default)]
pub struct KindRegistry {
    candidates: Vec<Candidate>,
    index: HashMap<&'static str, usize>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an object kind under its type name.
    pub fn register<T: VocabValue>(self) -> Result<Self, VocabError> {
        self.add(Candidate::object::<T>())
    }

    /// Registers a scalar kind under its codec name.
    pub fn register_scalar<C: ScalarCodec>(self) -> Result<Self, VocabError> {
        self.add(Candidate::scalar::<C>())
    }

    pub fn add(mut self, candidate: Candidate) -> Result<Self, VocabError> {
        if self.index.contains_key(candidate.name()) {
            tracing::error!("found duplicate entry in kind registry: {}", candidate.name());
            return Err(VocabError::DuplicateKind(candidate.name().to_owned()));
        }

        tracing::debug!("registering kind: {}", candidate.name());
        self.index.insert(candidate.name(), self.candidates.len());
        self.candidates.push(candidate);
        Ok(self)
    }

    pub fn candidate(&self, name: &str) -> Option<Candidate> {
        self.index.get(name).map(|&i| self.candidates[i])
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Names of the registered kinds, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.candidates.iter().map(Candidate::name)
    }

    /// Builds a property descriptor, resolving candidate names in declared
    /// order.
    pub fn property(&self, decl: &PropertyDecl) -> Result<Arc<Property>, VocabError> {
        tracing::debug!("building property {} from {} candidates", decl.name, decl.candidates.len());

        let mut builder = Property::builder(decl.name.clone())
            .cardinality(decl.cardinality)
            .reference(decl.reference)
            .opaque(decl.opaque)
            .string_precedence(decl.string_precedence)
            .collapse_singleton(decl.collapse_singleton);

        if let Some(namespace) = &decl.namespace {
            builder = builder.namespace(namespace.clone());
        }

        for name in &decl.candidates {
            let candidate = self
                .candidate(name)
                .ok_or_else(|| VocabError::UnknownKind(name.clone()))?;
            builder = builder.candidate(candidate);
        }

        Ok(builder.build())
    }

    /// Builds every property of a declaration list, e.g. one read from a
    /// JSON configuration file.
    pub fn properties(&self, decls: &[PropertyDecl]) -> Result<Vec<Arc<Property>>, VocabError> {
        decls.iter().map(|decl| self.property(decl)).collect()
    }

    /// Decodes a top-level document as the object kind its `type` member
    /// names. Alias prefixes declared by the document's `@context` are
    /// ignored. With several types, the first entry of `type` that names a
    /// registered object kind is decoded; a decode failure of that kind is
    /// returned without trying later entries.
    pub fn decode_document(&self, document: &Value) -> Result<Concrete, VocabError> {
        let map = document
            .as_object()
            .ok_or_else(|| VocabError::InvalidShape {
                property: "@type".to_owned(),
                found: crate::resolve::shape_name(document),
            })?;
        let aliases = AliasContext::from_document(map);

        let types: Vec<&str> = match map.get("type") {
            Some(Value::String(name)) => vec![name.as_str()],
            Some(Value::Array(names)) => names.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        };

        for name in &types {
            let local = aliases.strip_alias(name);
            let Some(&rank) = self.index.get(local) else {
                continue;
            };
            let candidate = self.candidates[rank];
            if candidate.shape() != Shape::Object {
                continue;
            }

            tracing::debug!("decoding document as {}", candidate.name());
            let value = candidate.decode(document, &aliases)?;
            let kind = Kind::Concrete {
                rank,
                name: candidate.name(),
            };
            return Ok(Concrete::new(kind, value));
        }

        Err(VocabError::UnknownKind(types.join(", ")))
    }
}
