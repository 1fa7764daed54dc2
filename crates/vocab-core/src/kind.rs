//! Kinds, candidate decoders and type-erased concrete payloads.

use std::{any::Any, cmp::Ordering, fmt};

use serde_json::Value;

use crate::{
    context::{AliasContext, ContextUris},
    error::VocabError,
    traits::{ScalarCodec, VocabValue},
};

/// One alternative shape a property value may take.
///
/// Kinds are totally ordered: `Reference` first, then concrete kinds by
/// their rank in the property's candidate list, `Opaque` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Reference,
    Concrete { rank: usize, name: &'static str },
    Opaque,
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Reference => "@id",
            Kind::Concrete { name, .. } => name,
            Kind::Opaque => "opaque",
        }
    }

    fn sort_key(&self) -> (u8, usize, &'static str) {
        match self {
            Kind::Reference => (0, 0, ""),
            Kind::Concrete { rank, name } => (1, *rank, name),
            Kind::Opaque => (2, 0, ""),
        }
    }
}

impl PartialOrd for Kind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kind {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw JSON shape a candidate decoder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A JSON object decoded by a [`VocabValue`].
    Object,
    /// A string, number or boolean decoded by a [`ScalarCodec`].
    Scalar,
}

type DecodeFn = fn(&Value, &AliasContext) -> Result<Box<dyn ErasedValue>, VocabError>;

/// A named decoder for one concrete kind.
#[derive(Clone, Copy)]
pub struct Candidate {
    name: &'static str,
    shape: Shape,
    decode: DecodeFn,
}

impl Candidate {
    pub fn object<T: VocabValue>() -> Self {
        Self {
            name: T::TYPE_NAME,
            shape: Shape::Object,
            decode: decode_object::<T>,
        }
    }

    pub fn scalar<C: ScalarCodec>() -> Self {
        Self {
            name: C::NAME,
            shape: Shape::Scalar,
            decode: decode_scalar::<C>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub(crate) fn decode(&self, raw: &Value, aliases: &AliasContext) -> Result<Box<dyn ErasedValue>, VocabError> {
        (self.decode)(raw, aliases)
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .finish()
    }
}

fn decode_object<T: VocabValue>(raw: &Value, aliases: &AliasContext) -> Result<Box<dyn ErasedValue>, VocabError> {
    let map = raw
        .as_object()
        .ok_or_else(|| VocabError::decode(T::TYPE_NAME, "expected a JSON object"))?;
    let value = T::decode(map, aliases)?;
    Ok(Box::new(ObjectValue(value)))
}

fn decode_scalar<C: ScalarCodec>(raw: &Value, _aliases: &AliasContext) -> Result<Box<dyn ErasedValue>, VocabError> {
    let value = C::decode(raw)?;
    Ok(Box::new(ScalarValue::<C>(value)))
}

pub(crate) trait ErasedValue: fmt::Debug {
    fn type_name(&self) -> &'static str;
    fn encode(&self) -> Result<Value, VocabError>;
    fn compare(&self, other: &dyn ErasedValue) -> Ordering;
    fn context_uris(&self) -> ContextUris;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn clone_boxed(&self) -> Box<dyn ErasedValue>;
}

#[derive(Debug, Clone)]
struct ObjectValue<T>(T);

impl<T: VocabValue> ErasedValue for ObjectValue<T> {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn encode(&self) -> Result<Value, VocabError> {
        self.0.encode()
    }

    fn compare(&self, other: &dyn ErasedValue) -> Ordering {
        match other.as_any().downcast_ref::<T>() {
            Some(other) => self.0.compare(other),
            None => self.type_name().cmp(other.type_name()),
        }
    }

    fn context_uris(&self) -> ContextUris {
        self.0.context_uris()
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.0
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValue> {
        Box::new(self.clone())
    }
}

struct ScalarValue<C: ScalarCodec>(C::Value);

impl<C: ScalarCodec> fmt::Debug for ScalarValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(C::NAME).field(&self.0).finish()
    }
}

impl<C: ScalarCodec> ErasedValue for ScalarValue<C> {
    fn type_name(&self) -> &'static str {
        C::NAME
    }

    fn encode(&self) -> Result<Value, VocabError> {
        C::encode(&self.0)
    }

    fn compare(&self, other: &dyn ErasedValue) -> Ordering {
        match other.as_any().downcast_ref::<C::Value>() {
            Some(value) if other.type_name() == C::NAME => C::compare(&self.0, value),
            _ => self.type_name().cmp(other.type_name()),
        }
    }

    fn context_uris(&self) -> ContextUris {
        ContextUris::new()
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.0
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValue> {
        Box::new(ScalarValue::<C>(self.0.clone()))
    }
}

/// The value of a concrete kind, owned exclusively by the cell holding it.
pub struct Concrete {
    kind: Kind,
    value: Box<dyn ErasedValue>,
}

impl Concrete {
    pub(crate) fn new(kind: Kind, value: Box<dyn ErasedValue>) -> Self {
        Self { kind, value }
    }

    pub(crate) fn object<T: VocabValue>(kind: Kind, value: T) -> Self {
        Self::new(kind, Box::new(ObjectValue(value)))
    }

    pub(crate) fn scalar<C: ScalarCodec>(kind: Kind, value: C::Value) -> Self {
        Self::new(kind, Box::new(ScalarValue::<C>(value)))
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.value.type_name()
    }

    pub fn downcast_ref<T: VocabValue>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: VocabValue>(&mut self) -> Option<&mut T> {
        self.value.as_any_mut().downcast_mut::<T>()
    }

    /// Returns the scalar value when this payload was produced by codec `C`.
    pub fn scalar_ref<C: ScalarCodec>(&self) -> Option<&C::Value> {
        if self.value.type_name() != C::NAME {
            return None;
        }
        self.value.as_any().downcast_ref::<C::Value>()
    }

    pub fn encode(&self) -> Result<Value, VocabError> {
        self.value.encode()
    }

    /// Orders by kind rank first, then by the payload's own order.
    pub fn compare(&self, other: &Concrete) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.value.compare(other.value.as_ref()))
    }

    pub fn context_uris(&self) -> ContextUris {
        self.value.context_uris()
    }
}

impl Clone for Concrete {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            value: self.value.clone_boxed(),
        }
    }
}

impl fmt::Debug for Concrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concrete")
            .field("kind", &self.kind)
            .field("value", &self.value)
            .finish()
    }
}
