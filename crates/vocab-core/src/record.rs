//! Property-by-property view of a vocabulary object.

use std::{cmp::Ordering, sync::Arc};

use serde_json::{Map, Value};

use crate::{
    cell::ValueCell,
    context::{AliasContext, ContextUris},
    error::VocabError,
    list::ValueList,
    property::{Cardinality, Property},
};

/// The declared properties of a vocabulary type, in canonical order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    properties: Vec<Arc<Property>>,
}

impl Schema {
    pub fn new(properties: Vec<Arc<Property>>) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &[Arc<Property>] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Arc<Property>> {
        self.properties.iter().find(|p| p.name() == name)
    }
}

/// The value of one declared property.
#[derive(Debug, Clone)]
pub enum Slot {
    Functional(ValueCell),
    NonFunctional(ValueList),
}

impl Slot {
    fn empty(property: &Arc<Property>) -> Self {
        match property.cardinality() {
            Cardinality::Functional => Slot::Functional(ValueCell::new(Arc::clone(property))),
            Cardinality::NonFunctional => Slot::NonFunctional(ValueList::new(Arc::clone(property))),
        }
    }

    fn decode(document: &Map<String, Value>, property: &Arc<Property>, aliases: &AliasContext) -> Result<Self, VocabError> {
        Ok(match property.cardinality() {
            Cardinality::Functional => Slot::Functional(ValueCell::decode_from(document, property, aliases)?),
            Cardinality::NonFunctional => Slot::NonFunctional(ValueList::decode_from(document, property, aliases)?),
        })
    }

    pub fn property(&self) -> &Property {
        match self {
            Slot::Functional(cell) => cell.property(),
            Slot::NonFunctional(list) => list.property(),
        }
    }

    /// Key the slot is written under.
    pub fn name(&self) -> String {
        match self {
            Slot::Functional(cell) => cell.name(),
            Slot::NonFunctional(list) => list.name(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Slot::Functional(cell) => !cell.has_any(),
            Slot::NonFunctional(list) => list.is_empty(),
        }
    }

    pub fn encode(&self) -> Result<Option<Value>, VocabError> {
        match self {
            Slot::Functional(cell) => cell.encode(),
            Slot::NonFunctional(list) if !list.is_present() => Ok(None),
            Slot::NonFunctional(list) => list.encode().map(Some),
        }
    }

    pub fn compare(&self, other: &Slot) -> Ordering {
        match (self, other) {
            (Slot::Functional(a), Slot::Functional(b)) => a.compare(b),
            (Slot::NonFunctional(a), Slot::NonFunctional(b)) => a.compare(b),
            (Slot::Functional(_), Slot::NonFunctional(_)) => Ordering::Less,
            (Slot::NonFunctional(_), Slot::Functional(_)) => Ordering::Greater,
        }
    }

    pub fn context_uris(&self) -> ContextUris {
        match self {
            Slot::Functional(cell) => cell.context_uris(),
            Slot::NonFunctional(list) => list.context_uris(),
        }
    }
}

/// A decoded object: one slot per declared property plus every undeclared
/// member, kept verbatim.
#[derive(Debug, Clone, Default)]
pub struct Record {
    slots: Vec<Slot>,
    unknown: Map<String, Value>,
}

impl Record {
    /// An empty record of `schema`.
    pub fn new(schema: &Schema) -> Self {
        Self {
            slots: schema.properties().iter().map(Slot::empty).collect(),
            unknown: Map::new(),
        }
    }

    /// Decodes every declared property of `schema` from `document`.
    ///
    /// Failures of individual properties are collected and reported together.
    pub fn decode(document: &Map<String, Value>, schema: &Schema, aliases: &AliasContext) -> Result<Self, VocabError> {
        let mut slots = Vec::with_capacity(schema.properties().len());
        let mut errors = Vec::new();
        let mut consumed = Vec::with_capacity(schema.properties().len());

        for property in schema.properties() {
            consumed.push(property.lookup_key(aliases));
            match Slot::decode(document, property, aliases) {
                Ok(slot) => slots.push(slot),
                Err(err) => errors.push(err.in_property(property.name())),
            }
        }

        if !errors.is_empty() {
            return Err(VocabError::Aggregate(errors));
        }

        let unknown = document
            .iter()
            .filter(|(key, _)| !consumed.contains(*key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self { slots, unknown })
    }

    /// Re-emits the undeclared members, then every property that holds a
    /// value or was present when decoded.
    pub fn encode(&self) -> Result<Map<String, Value>, VocabError> {
        let mut document = self.unknown.clone();
        for slot in &self.slots {
            if let Some(value) = slot.encode().map_err(|e| e.in_property(slot.property().name()))? {
                document.insert(slot.name(), value);
            }
        }
        Ok(document)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.property().name() == name)
    }

    pub fn cell(&self, name: &str) -> Option<&ValueCell> {
        match self.slot(name)? {
            Slot::Functional(cell) => Some(cell),
            Slot::NonFunctional(_) => None,
        }
    }

    pub fn cell_mut(&mut self, name: &str) -> Option<&mut ValueCell> {
        match self.slot_mut(name)? {
            Slot::Functional(cell) => Some(cell),
            Slot::NonFunctional(_) => None,
        }
    }

    pub fn list(&self, name: &str) -> Option<&ValueList> {
        match self.slot(name)? {
            Slot::NonFunctional(list) => Some(list),
            Slot::Functional(_) => None,
        }
    }

    pub fn list_mut(&mut self, name: &str) -> Option<&mut ValueList> {
        match self.slot_mut(name)? {
            Slot::NonFunctional(list) => Some(list),
            Slot::Functional(_) => None,
        }
    }

    /// Undeclared members such as `type` and `@context`.
    pub fn unknown(&self) -> &Map<String, Value> {
        &self.unknown
    }

    pub fn unknown_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.unknown
    }

    /// Orders property by property, then by the canonical JSON text of the
    /// undeclared members.
    pub fn compare(&self, other: &Record) -> Ordering {
        for (a, b) in self.slots.iter().zip(other.slots.iter()) {
            match a.compare(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.slots
            .len()
            .cmp(&other.slots.len())
            .then_with(|| canonical(&self.unknown).cmp(&canonical(&other.unknown)))
    }

    pub fn context_uris(&self) -> ContextUris {
        let mut uris = ContextUris::new();
        for slot in &self.slots {
            uris.merge(slot.context_uris());
        }
        uris
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|s| s.property().name() == name)
    }
}

fn canonical(members: &Map<String, Value>) -> String {
    json_canon::to_string(members).unwrap_or_default()
}
