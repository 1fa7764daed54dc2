//! Per-property configuration: which kinds a property accepts, in which
//! order they are tried, and how its values are laid out when encoded.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    context::AliasContext,
    kind::{Candidate, Kind, Shape},
    traits::{ScalarCodec, VocabValue},
};

/// Whether a property holds at most one value or an ordered list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Cardinality {
    #[default]
    Functional,
    NonFunctional,
}

/// Trial order for string input on properties that accept both a reference
/// and scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum StringPrecedence {
    /// Parse as a reference first, then try the scalar codecs.
    #[default]
    ReferenceFirst,
    /// Try the scalar codecs first, then parse as a reference.
    ScalarFirst,
}

/// Declarative form of a property, as found in configuration files.
///
/// Candidate kinds are named and later resolved against a
/// [`KindRegistry`](crate::registry::KindRegistry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDecl {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default)]
    pub cardinality: Cardinality,

    /// Candidate kind names, in trial order.
    #[serde(default)]
    pub candidates: Vec<String>,

    #[serde(default = "enabled")]
    pub reference: bool,

    #[serde(default = "enabled")]
    pub opaque: bool,

    #[serde(default)]
    pub string_precedence: StringPrecedence,

    /// Encode a one-element list as the bare element.
    #[serde(default)]
    pub collapse_singleton: bool,
}

fn enabled() -> bool {
    true
}

/// Descriptor of one property, shared by every cell and list of it.
#[derive(Debug, Clone)]
pub struct Property {
    name: String,
    namespace: Option<String>,
    cardinality: Cardinality,
    candidates: Vec<Candidate>,
    reference: bool,
    opaque: bool,
    string_precedence: StringPrecedence,
    collapse_singleton: bool,
}

impl Property {
    pub fn builder(name: impl Into<String>) -> PropertyBuilder {
        PropertyBuilder {
            property: Property {
                name: name.into(),
                namespace: None,
                cardinality: Cardinality::Functional,
                candidates: Vec::new(),
                reference: true,
                opaque: true,
                string_precedence: StringPrecedence::ReferenceFirst,
                collapse_singleton: false,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn allows_reference(&self) -> bool {
        self.reference
    }

    pub fn allows_opaque(&self) -> bool {
        self.opaque
    }

    pub fn string_precedence(&self) -> StringPrecedence {
        self.string_precedence
    }

    pub fn collapses_singleton(&self) -> bool {
        self.collapse_singleton
    }

    /// Key the property is stored under in a document using `aliases`.
    pub fn lookup_key(&self, aliases: &AliasContext) -> String {
        aliases.property_key(self.namespace(), &self.name)
    }

    /// Returns the concrete kind registered under `name`.
    pub fn kind(&self, name: &str) -> Option<Kind> {
        self.candidates
            .iter()
            .position(|c| c.name() == name)
            .map(|rank| self.kind_at(rank))
    }

    pub(crate) fn kind_at(&self, rank: usize) -> Kind {
        Kind::Concrete {
            rank,
            name: self.candidates[rank].name(),
        }
    }

    /// Ranked candidates of the given shape, in trial order.
    pub(crate) fn candidates_of(&self, shape: Shape) -> impl Iterator<Item = (usize, &Candidate)> {
        self.candidates
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.shape() == shape)
    }

    /// Whether values of kind `kind` may be held by this property.
    pub fn accepts(&self, kind: Kind) -> bool {
        match kind {
            Kind::Reference => self.reference,
            Kind::Opaque => self.opaque,
            Kind::Concrete { rank, name } => self
                .candidates
                .get(rank)
                .is_some_and(|c| c.name() == name),
        }
    }
}

#[derive(Debug)]
pub struct PropertyBuilder {
    property: Property,
}

impl PropertyBuilder {
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.property.namespace = Some(namespace.into());
        self
    }

    pub fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.property.cardinality = cardinality;
        self
    }

    pub fn non_functional(self) -> Self {
        self.cardinality(Cardinality::NonFunctional)
    }

    /// Appends an object kind to the candidate list.
    pub fn object<T: VocabValue>(self) -> Self {
        self.candidate(Candidate::object::<T>())
    }

    /// Appends a scalar kind to the candidate list.
    pub fn scalar<C: ScalarCodec>(self) -> Self {
        self.candidate(Candidate::scalar::<C>())
    }

    pub fn candidate(mut self, candidate: Candidate) -> Self {
        self.property.candidates.push(candidate);
        self
    }

    pub fn reference(mut self, allowed: bool) -> Self {
        self.property.reference = allowed;
        self
    }

    pub fn opaque(mut self, allowed: bool) -> Self {
        self.property.opaque = allowed;
        self
    }

    pub fn string_precedence(mut self, precedence: StringPrecedence) -> Self {
        self.property.string_precedence = precedence;
        self
    }

    pub fn collapse_singleton(mut self, collapse: bool) -> Self {
        self.property.collapse_singleton = collapse;
        self
    }

    pub fn build(self) -> Arc<Property> {
        Arc::new(self.property)
    }
}
