//! JSON-LD `@context` handling: namespace aliases used to build property
//! lookup keys, and the namespace requirements a value carries upward.

use std::collections::{btree_map, BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The JSON-LD `@context` member of a document.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
// A context is a namespace IRI, an object of `alias -> namespace` term
// definitions, or an array mixing both.
pub enum Context {
    /// A namespace IRI used without alias.
    Namespace(String),
    /// Term definitions; only string-valued entries declare aliases.
    Definitions(Map<String, Value>),
    /// A set of contexts.
    Set(Vec<Context>),
}

/// Maps vocabulary namespace IRIs to the document-local prefix they are
/// referred to by.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasContext {
    aliases: HashMap<String, String>,
}

impl AliasContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias` as the prefix of `namespace`.
    pub fn with_alias(mut self, namespace: impl Into<String>, alias: impl Into<String>) -> Self {
        self.aliases.insert(namespace.into(), alias.into());
        self
    }

    /// Builds the alias table declared by a document's `@context`.
    ///
    /// A bare namespace declares no alias; an aliased declaration of the same
    /// namespace takes precedence over it.
    pub fn from_context(context: &Context) -> Self {
        let mut aliases = Self::new();
        aliases.collect(context);
        aliases
    }

    /// Reads the `@context` member of a raw document, if it is well-formed.
    pub fn from_document(document: &Map<String, Value>) -> Self {
        document
            .get("@context")
            .and_then(|raw| serde_json::from_value::<Context>(raw.clone()).ok())
            .map(|context| Self::from_context(&context))
            .unwrap_or_default()
    }

    fn collect(&mut self, context: &Context) {
        match context {
            Context::Namespace(namespace) => {
                self.aliases.entry(namespace.clone()).or_default();
            }
            Context::Definitions(definitions) => {
                for (alias, namespace) in definitions {
                    if let Value::String(namespace) = namespace {
                        self.aliases.insert(namespace.clone(), alias.clone());
                    }
                }
            }
            Context::Set(contexts) => {
                for context in contexts {
                    self.collect(context);
                }
            }
        }
    }

    /// Returns the prefix registered for `namespace`. An empty prefix means
    /// the namespace is in use without alias.
    pub fn alias_for(&self, namespace: &str) -> Option<&str> {
        self.aliases.get(namespace).map(String::as_str)
    }

    /// Computes the key a property is stored under: `prefix:name` when the
    /// property's namespace has a non-empty prefix, otherwise `name`.
    pub fn property_key(&self, namespace: Option<&str>, name: &str) -> String {
        match namespace.and_then(|ns| self.alias_for(ns)) {
            Some(alias) if !alias.is_empty() => format!("{alias}:{name}"),
            _ => name.to_owned(),
        }
    }

    /// Drops a declared alias prefix from a term, so `as:Note` reads `Note`.
    /// Terms with an undeclared prefix are returned unchanged.
    pub fn strip_alias<'a>(&self, term: &'a str) -> &'a str {
        match term.split_once(':') {
            Some((prefix, local)) if !prefix.is_empty() && self.aliases.values().any(|a| a == prefix) => local,
            _ => term,
        }
    }
}

/// Namespace requirements of a value, `namespace -> alias`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextUris(BTreeMap<String, String>);

impl ContextUris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `namespace` unless it is already present.
    pub fn insert(&mut self, namespace: impl Into<String>, alias: impl Into<String>) {
        self.0.entry(namespace.into()).or_insert_with(|| alias.into());
    }

    /// Map union; on collision the entry already present is kept.
    pub fn merge(&mut self, other: ContextUris) {
        for (namespace, alias) in other.0 {
            self.0.entry(namespace).or_insert(alias);
        }
    }

    pub fn get(&self, namespace: &str) -> Option<&str> {
        self.0.get(namespace).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Renders the requirements as an `@context` value. Returns `None` when
    /// there is nothing to declare.
    pub fn to_context(&self) -> Option<Context> {
        let mut contexts: Vec<Context> = Vec::new();
        let mut definitions = Map::new();
        for (namespace, alias) in &self.0 {
            if alias.is_empty() {
                contexts.push(Context::Namespace(namespace.clone()));
            } else {
                definitions.insert(alias.clone(), Value::String(namespace.clone()));
            }
        }
        if !definitions.is_empty() {
            contexts.push(Context::Definitions(definitions));
        }

        match contexts.len() {
            0 => None,
            1 => contexts.pop(),
            _ => Some(Context::Set(contexts)),
        }
    }
}

impl FromIterator<(String, String)> for ContextUris {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut uris = ContextUris::new();
        for (namespace, alias) in iter {
            uris.insert(namespace, alias);
        }
        uris
    }
}
