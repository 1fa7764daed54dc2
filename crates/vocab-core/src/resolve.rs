//! Kind resolution: decides which single kind a raw JSON value represents
//! for a given property.

use serde_json::Value;

use crate::{
    cell::CellValue,
    context::AliasContext,
    error::VocabError,
    iri::Iri,
    kind::{Concrete, Shape},
    property::{Property, StringPrecedence},
};

/// Resolves `raw` into exactly one kind of `property`.
///
/// - strings are tried as a reference and against the scalar candidates, in
///   the property's [`StringPrecedence`];
/// - objects are tried against the object candidates in declared order and
///   the first successful decode wins;
/// - numbers, booleans and null are tried against the scalar candidates;
/// - whatever is left becomes opaque when the property allows it.
///
/// Resolution is a pure function of its inputs.
pub fn resolve(raw: &Value, property: &Property, aliases: &AliasContext) -> Result<CellValue, VocabError> {
    let resolved = match raw {
        Value::String(text) => resolve_string(raw, text, property, aliases),
        Value::Object(_) => trial_decode(raw, property, Shape::Object, aliases),
        Value::Array(_) => None,
        Value::Number(_) | Value::Bool(_) | Value::Null => trial_decode(raw, property, Shape::Scalar, aliases),
    };

    if let Some(value) = resolved {
        tracing::trace!("property {} resolved to kind {}", property.name(), value.kind());
        return Ok(value);
    }

    if property.allows_opaque() {
        tracing::trace!("property {} keeps {} value as opaque", property.name(), shape_name(raw));
        return Ok(CellValue::Opaque(raw.clone()));
    }

    let property_name = property.name().to_owned();
    Err(match raw {
        Value::Object(_) => VocabError::UnrecognizedShape {
            property: property_name,
        },
        _ => VocabError::InvalidShape {
            property: property_name,
            found: shape_name(raw),
        },
    })
}

fn resolve_string(raw: &Value, text: &str, property: &Property, aliases: &AliasContext) -> Option<CellValue> {
    let reference = || {
        if !property.allows_reference() {
            return None;
        }
        Iri::parse(text).ok().map(CellValue::Reference)
    };
    let scalar = || trial_decode(raw, property, Shape::Scalar, aliases);

    match property.string_precedence() {
        StringPrecedence::ReferenceFirst => reference().or_else(scalar),
        StringPrecedence::ScalarFirst => scalar().or_else(reference),
    }
}

fn trial_decode(raw: &Value, property: &Property, shape: Shape, aliases: &AliasContext) -> Option<CellValue> {
    for (rank, candidate) in property.candidates_of(shape) {
        match candidate.decode(raw, aliases) {
            Ok(value) => {
                return Some(CellValue::Concrete(Concrete::new(property.kind_at(rank), value)));
            }
            Err(err) => {
                tracing::trace!("property {}: candidate {} rejected value: {}", property.name(), candidate.name(), err);
            }
        }
    }
    None
}

pub(crate) fn shape_name(raw: &Value) -> &'static str {
    match raw {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use serde_json::{json, Map};

    use super::*;
    use crate::{
        kind::Kind,
        scalar::{AnyUri, NonNegativeInteger, XsdString},
        traits::VocabValue,
    };

    /// Accepts any object.
    #[derive(Debug, Clone, PartialEq)]
    struct Loose(Map<String, Value>);

    impl VocabValue for Loose {
        const TYPE_NAME: &'static str = "Loose";

        fn decode(raw: &Map<String, Value>, _: &AliasContext) -> Result<Self, VocabError> {
            Ok(Self(raw.clone()))
        }

        fn encode(&self) -> Result<Value, VocabError> {
            Ok(Value::Object(self.0.clone()))
        }

        fn compare(&self, _: &Self) -> Ordering {
            Ordering::Equal
        }
    }

    /// Accepts objects with an `href` member only.
    #[derive(Debug, Clone, PartialEq)]
    struct Hyperlink(String);

    impl VocabValue for Hyperlink {
        const TYPE_NAME: &'static str = "Hyperlink";

        fn decode(raw: &Map<String, Value>, _: &AliasContext) -> Result<Self, VocabError> {
            raw.get("href")
                .and_then(Value::as_str)
                .map(|href| Self(href.to_owned()))
                .ok_or_else(|| VocabError::decode(Self::TYPE_NAME, "missing href"))
        }

        fn encode(&self) -> Result<Value, VocabError> {
            Ok(json!({ "href": self.0 }))
        }

        fn compare(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    fn resolve_kind(raw: Value, property: &Property) -> Result<Kind, VocabError> {
        resolve(&raw, property, &AliasContext::new()).map(|v| v.kind())
    }

    #[test]
    fn test_first_matching_candidate_wins() {
        let href_first = Property::builder("p").object::<Hyperlink>().object::<Loose>().build();
        let loose_first = Property::builder("p").object::<Loose>().object::<Hyperlink>().build();
        let raw = json!({"href": "https://example.org/"});

        for _ in 0..3 {
            assert_eq!(
                resolve_kind(raw.clone(), &href_first).unwrap(),
                Kind::Concrete { rank: 0, name: "Hyperlink" }
            );
            assert_eq!(
                resolve_kind(raw.clone(), &loose_first).unwrap(),
                Kind::Concrete { rank: 0, name: "Loose" }
            );
        }
    }

    #[test]
    fn test_later_candidate_used_when_earlier_rejects() {
        let property = Property::builder("p").object::<Hyperlink>().object::<Loose>().build();
        assert_eq!(
            resolve_kind(json!({"name": "no href"}), &property).unwrap(),
            Kind::Concrete { rank: 1, name: "Loose" }
        );
    }

    #[test]
    fn test_unmatched_object_becomes_opaque() {
        let property = Property::builder("p").object::<Hyperlink>().build();
        let raw = json!({"type": "Unknown"});
        match resolve(&raw, &property, &AliasContext::new()).unwrap() {
            CellValue::Opaque(value) => assert_eq!(value, raw),
            other => panic!("expected opaque, got {other:?}"),
        }
    }

    #[test]
    fn test_unmatched_object_without_opaque_is_an_error() {
        let property = Property::builder("p").object::<Hyperlink>().opaque(false).build();
        assert_eq!(
            resolve_kind(json!({"type": "Unknown"}), &property),
            Err(VocabError::UnrecognizedShape { property: "p".to_owned() })
        );
    }

    #[test]
    fn test_string_reference_requires_scheme() {
        let property = Property::builder("p").build();
        assert_eq!(resolve_kind(json!("https://example.org/foo"), &property).unwrap(), Kind::Reference);
        assert_eq!(resolve_kind(json!("not a url"), &property).unwrap(), Kind::Opaque);
    }

    #[test]
    fn test_string_without_reference_permission() {
        let property = Property::builder("p").reference(false).build();
        assert_eq!(resolve_kind(json!("https://example.org/foo"), &property).unwrap(), Kind::Opaque);
    }

    #[test]
    fn test_string_precedence_is_per_property() {
        let reference_first = Property::builder("p").scalar::<AnyUri>().build();
        let scalar_first = Property::builder("p")
            .scalar::<AnyUri>()
            .string_precedence(StringPrecedence::ScalarFirst)
            .build();
        let raw = json!("https://example.org/a");

        assert_eq!(resolve_kind(raw.clone(), &reference_first).unwrap(), Kind::Reference);
        assert_eq!(
            resolve_kind(raw, &scalar_first).unwrap(),
            Kind::Concrete { rank: 0, name: "xsd:anyURI" }
        );
    }

    #[test]
    fn test_free_text_falls_through_to_scalar() {
        let property = Property::builder("p").scalar::<XsdString>().build();
        assert_eq!(
            resolve_kind(json!("hello world"), &property).unwrap(),
            Kind::Concrete { rank: 0, name: "xsd:string" }
        );
    }

    #[test]
    fn test_numbers_use_scalar_candidates() {
        let property = Property::builder("width").scalar::<NonNegativeInteger>().opaque(false).build();
        assert_eq!(
            resolve_kind(json!(640), &property).unwrap(),
            Kind::Concrete { rank: 0, name: "xsd:nonNegativeInteger" }
        );
        assert_eq!(
            resolve_kind(json!(-3), &property),
            Err(VocabError::InvalidShape {
                property: "width".to_owned(),
                found: "number"
            })
        );
        assert_eq!(
            resolve_kind(json!(true), &property),
            Err(VocabError::InvalidShape {
                property: "width".to_owned(),
                found: "boolean"
            })
        );
    }

    #[test]
    fn test_array_is_not_a_single_value() {
        let strict = Property::builder("p").opaque(false).build();
        assert_eq!(
            resolve_kind(json!(["https://example.org/"]), &strict),
            Err(VocabError::InvalidShape {
                property: "p".to_owned(),
                found: "array"
            })
        );
        let lenient = Property::builder("p").build();
        assert_eq!(resolve_kind(json!([1, 2]), &lenient).unwrap(), Kind::Opaque);
    }
}
