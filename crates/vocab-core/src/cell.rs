//! Functional property values: at most one value of exactly one kind.

use std::{cmp::Ordering, sync::Arc};

use serde_json::{Map, Value};

use crate::{
    context::{AliasContext, ContextUris},
    error::VocabError,
    iri::Iri,
    kind::{Concrete, Kind},
    property::Property,
    resolve::resolve,
    traits::{ScalarCodec, VocabValue},
};

/// A populated property value.
#[derive(Debug, Clone)]
pub enum CellValue {
    Concrete(Concrete),
    Reference(Iri),
    /// A value no candidate kind understood, kept verbatim.
    Opaque(Value),
}

impl CellValue {
    pub fn kind(&self) -> Kind {
        match self {
            CellValue::Concrete(concrete) => concrete.kind(),
            CellValue::Reference(_) => Kind::Reference,
            CellValue::Opaque(_) => Kind::Opaque,
        }
    }

    /// Inverse of resolution: nested encode for concrete values, the IRI text
    /// for references, the stored fragment for opaque values.
    pub fn encode(&self) -> Result<Value, VocabError> {
        match self {
            CellValue::Concrete(concrete) => concrete.encode(),
            CellValue::Reference(iri) => Ok(Value::String(iri.as_str().to_owned())),
            CellValue::Opaque(raw) => Ok(raw.clone()),
        }
    }

    /// Canonical order: kind rank first, then the payload's own order.
    /// Opaque values never order before one another.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Concrete(a), CellValue::Concrete(b)) => a.compare(b),
            (CellValue::Reference(a), CellValue::Reference(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }

    pub fn context_uris(&self) -> ContextUris {
        match self {
            CellValue::Concrete(concrete) => concrete.context_uris(),
            CellValue::Reference(_) | CellValue::Opaque(_) => ContextUris::new(),
        }
    }
}

/// The value of a functional property.
#[derive(Debug, Clone)]
pub struct ValueCell {
    property: Arc<Property>,
    alias: String,
    value: Option<CellValue>,
}

impl ValueCell {
    /// Creates an empty cell for `property`.
    pub fn new(property: Arc<Property>) -> Self {
        Self {
            property,
            alias: String::new(),
            value: None,
        }
    }

    /// Decodes a raw value. An absent value gives an empty cell.
    pub fn decode(raw: Option<&Value>, property: &Arc<Property>, aliases: &AliasContext) -> Result<Self, VocabError> {
        let mut cell = Self::new(Arc::clone(property));
        cell.alias = namespace_alias(property, aliases);
        if let Some(raw) = raw {
            cell.value = Some(resolve(raw, property, aliases)?);
        }
        Ok(cell)
    }

    /// Decodes the property from the document member it is stored under.
    pub fn decode_from(
        document: &Map<String, Value>,
        property: &Arc<Property>,
        aliases: &AliasContext,
    ) -> Result<Self, VocabError> {
        Self::decode(document.get(&property.lookup_key(aliases)), property, aliases)
    }

    pub(crate) fn from_value(property: Arc<Property>, alias: String, value: CellValue) -> Self {
        Self {
            property,
            alias,
            value: Some(value),
        }
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Name of the property, prefixed with the alias in effect at decode time.
    pub fn name(&self) -> String {
        if self.alias.is_empty() {
            self.property.name().to_owned()
        } else {
            format!("{}:{}", self.alias, self.property.name())
        }
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Replaces the value with a concrete value of type `T`.
    ///
    /// Fails without touching the cell when `T` is not a candidate kind.
    pub fn set_concrete<T: VocabValue>(&mut self, value: T) -> Result<(), VocabError> {
        let value = concrete_of(&self.property, value)?;
        self.value = Some(value);
        Ok(())
    }

    pub fn set_scalar<C: ScalarCodec>(&mut self, value: C::Value) -> Result<(), VocabError> {
        let value = scalar_of::<C>(&self.property, value)?;
        self.value = Some(value);
        Ok(())
    }

    pub fn set_reference(&mut self, iri: Iri) -> Result<(), VocabError> {
        let value = reference_of(&self.property, iri)?;
        self.value = Some(value);
        Ok(())
    }

    pub fn set_opaque(&mut self, raw: Value) -> Result<(), VocabError> {
        let value = opaque_of(&self.property, raw)?;
        self.value = Some(value);
        Ok(())
    }

    pub fn value(&self) -> Option<&CellValue> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<CellValue> {
        self.value
    }

    pub fn kind(&self) -> Option<Kind> {
        self.value.as_ref().map(CellValue::kind)
    }

    pub fn is_kind(&self, kind: Kind) -> bool {
        self.kind() == Some(kind)
    }

    /// Holds a concrete value of type `T`.
    pub fn is<T: VocabValue>(&self) -> bool {
        self.get::<T>().is_some()
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.value, Some(CellValue::Reference(_)))
    }

    pub fn is_opaque(&self) -> bool {
        matches!(self.value, Some(CellValue::Opaque(_)))
    }

    pub fn has_any(&self) -> bool {
        self.value.is_some()
    }

    pub fn get<T: VocabValue>(&self) -> Option<&T> {
        match &self.value {
            Some(CellValue::Concrete(concrete)) => concrete.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn get_mut<T: VocabValue>(&mut self) -> Option<&mut T> {
        match &mut self.value {
            Some(CellValue::Concrete(concrete)) => concrete.downcast_mut::<T>(),
            _ => None,
        }
    }

    pub fn scalar<C: ScalarCodec>(&self) -> Option<&C::Value> {
        match &self.value {
            Some(CellValue::Concrete(concrete)) => concrete.scalar_ref::<C>(),
            _ => None,
        }
    }

    pub fn reference(&self) -> Option<&Iri> {
        match &self.value {
            Some(CellValue::Reference(iri)) => Some(iri),
            _ => None,
        }
    }

    pub fn opaque(&self) -> Option<&Value> {
        match &self.value {
            Some(CellValue::Opaque(raw)) => Some(raw),
            _ => None,
        }
    }

    /// Encodes the value; `None` means the property is absent and its key
    /// should be omitted.
    pub fn encode(&self) -> Result<Option<Value>, VocabError> {
        self.value.as_ref().map(CellValue::encode).transpose()
    }

    /// Canonical order. An empty cell orders before any populated one.
    pub fn compare(&self, other: &ValueCell) -> Ordering {
        match (&self.value, &other.value) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.compare(b),
        }
    }

    /// The property's namespace under its alias, merged with what the value
    /// itself requires.
    pub fn context_uris(&self) -> ContextUris {
        let mut uris = ContextUris::new();
        if let Some(namespace) = self.property.namespace() {
            uris.insert(namespace, self.alias.clone());
        }
        if let Some(value) = &self.value {
            uris.merge(value.context_uris());
        }
        uris
    }
}

pub(crate) fn namespace_alias(property: &Property, aliases: &AliasContext) -> String {
    property
        .namespace()
        .and_then(|ns| aliases.alias_for(ns))
        .unwrap_or_default()
        .to_owned()
}

fn not_permitted(property: &Property, kind: &str) -> VocabError {
    VocabError::KindNotPermitted {
        property: property.name().to_owned(),
        kind: kind.to_owned(),
    }
}

pub(crate) fn concrete_of<T: VocabValue>(property: &Property, value: T) -> Result<CellValue, VocabError> {
    let kind = property
        .kind(T::TYPE_NAME)
        .ok_or_else(|| not_permitted(property, T::TYPE_NAME))?;
    Ok(CellValue::Concrete(Concrete::object(kind, value)))
}

pub(crate) fn scalar_of<C: ScalarCodec>(property: &Property, value: C::Value) -> Result<CellValue, VocabError> {
    let kind = property
        .kind(C::NAME)
        .ok_or_else(|| not_permitted(property, C::NAME))?;
    Ok(CellValue::Concrete(Concrete::scalar::<C>(kind, value)))
}

pub(crate) fn reference_of(property: &Property, iri: Iri) -> Result<CellValue, VocabError> {
    if !property.allows_reference() {
        return Err(not_permitted(property, Kind::Reference.name()));
    }
    Ok(CellValue::Reference(iri))
}

pub(crate) fn opaque_of(property: &Property, raw: Value) -> Result<CellValue, VocabError> {
    if !property.allows_opaque() {
        return Err(not_permitted(property, Kind::Opaque.name()));
    }
    Ok(CellValue::Opaque(raw))
}
