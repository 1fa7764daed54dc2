//! Codecs for the XML Schema scalar kinds properties may hold besides
//! structured values.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::Value;

use crate::{error::VocabError, iri::Iri, traits::ScalarCodec};

/// `xsd:anyURI`
#[derive(Debug, Clone, Copy)]
pub struct AnyUri;

impl ScalarCodec for AnyUri {
    type Value = Iri;
    const NAME: &'static str = "xsd:anyURI";

    fn decode(raw: &Value) -> Result<Iri, VocabError> {
        let text = raw
            .as_str()
            .ok_or_else(|| VocabError::decode(Self::NAME, "expected a string"))?;
        Iri::parse(text).map_err(|e| VocabError::decode(Self::NAME, e.to_string()))
    }

    fn encode(value: &Iri) -> Result<Value, VocabError> {
        Ok(Value::String(value.as_str().to_owned()))
    }

    fn compare(a: &Iri, b: &Iri) -> Ordering {
        a.cmp(b)
    }
}

/// `xsd:dateTime`, in RFC 3339 form.
#[derive(Debug, Clone, Copy)]
pub struct XsdDateTime;

impl ScalarCodec for XsdDateTime {
    type Value = DateTime<FixedOffset>;
    const NAME: &'static str = "xsd:dateTime";

    fn decode(raw: &Value) -> Result<Self::Value, VocabError> {
        let text = raw
            .as_str()
            .ok_or_else(|| VocabError::decode(Self::NAME, "expected a string"))?;
        DateTime::parse_from_rfc3339(text).map_err(|e| VocabError::decode(Self::NAME, e.to_string()))
    }

    fn encode(value: &Self::Value) -> Result<Value, VocabError> {
        Ok(Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }

    fn compare(a: &Self::Value, b: &Self::Value) -> Ordering {
        a.cmp(b)
    }
}

/// `xsd:nonNegativeInteger`
#[derive(Debug, Clone, Copy)]
pub struct NonNegativeInteger;

impl ScalarCodec for NonNegativeInteger {
    type Value = u64;
    const NAME: &'static str = "xsd:nonNegativeInteger";

    fn decode(raw: &Value) -> Result<u64, VocabError> {
        if let Some(n) = raw.as_u64() {
            return Ok(n);
        }
        // Integral floats such as `2.0` are accepted.
        match raw.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
            Some(_) => Err(VocabError::decode(Self::NAME, "expected a non-negative integer")),
            None => Err(VocabError::decode(Self::NAME, "expected a number")),
        }
    }

    fn encode(value: &u64) -> Result<Value, VocabError> {
        Ok(Value::from(*value))
    }

    fn compare(a: &u64, b: &u64) -> Ordering {
        a.cmp(b)
    }
}

/// `xsd:string`
#[derive(Debug, Clone, Copy)]
pub struct XsdString;

impl ScalarCodec for XsdString {
    type Value = String;
    const NAME: &'static str = "xsd:string";

    fn decode(raw: &Value) -> Result<String, VocabError> {
        raw.as_str()
            .map(ToOwned::to_owned)
            .ok_or_else(|| VocabError::decode(Self::NAME, "expected a string"))
    }

    fn encode(value: &String) -> Result<Value, VocabError> {
        Ok(Value::String(value.clone()))
    }

    fn compare(a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }
}

/// `xsd:boolean`
#[derive(Debug, Clone, Copy)]
pub struct XsdBoolean;

impl ScalarCodec for XsdBoolean {
    type Value = bool;
    const NAME: &'static str = "xsd:boolean";

    fn decode(raw: &Value) -> Result<bool, VocabError> {
        raw.as_bool()
            .ok_or_else(|| VocabError::decode(Self::NAME, "expected a boolean"))
    }

    fn encode(value: &bool) -> Result<Value, VocabError> {
        Ok(Value::Bool(*value))
    }

    fn compare(a: &bool, b: &bool) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_any_uri() {
        let iri = AnyUri::decode(&json!("https://example.org/a")).unwrap();
        assert_eq!(AnyUri::encode(&iri).unwrap(), json!("https://example.org/a"));
        assert!(AnyUri::decode(&json!("no scheme here")).is_err());
        assert!(AnyUri::decode(&json!(42)).is_err());
    }

    #[test]
    fn test_date_time_keeps_utc_designator() {
        let raw = json!("2023-03-05T19:23:24Z");
        let value = XsdDateTime::decode(&raw).unwrap();
        assert_eq!(XsdDateTime::encode(&value).unwrap(), raw);

        let later = XsdDateTime::decode(&json!("2023-03-05T21:23:24+01:00")).unwrap();
        assert_eq!(XsdDateTime::compare(&value, &later), Ordering::Less);
        assert!(XsdDateTime::decode(&json!("yesterday")).is_err());
    }

    #[test]
    fn test_non_negative_integer() {
        assert_eq!(NonNegativeInteger::decode(&json!(640)).unwrap(), 640);
        assert_eq!(NonNegativeInteger::decode(&json!(2.0)).unwrap(), 2);
        assert!(NonNegativeInteger::decode(&json!(-1)).is_err());
        assert!(NonNegativeInteger::decode(&json!(1.5)).is_err());
        assert!(NonNegativeInteger::decode(&json!("640")).is_err());
        assert_eq!(NonNegativeInteger::encode(&7).unwrap(), json!(7));
    }

    #[test]
    fn test_string_and_boolean() {
        assert_eq!(XsdString::decode(&json!("hello")).unwrap(), "hello");
        assert!(XsdString::decode(&json!(true)).is_err());
        assert!(XsdBoolean::decode(&json!(true)).unwrap());
        assert_eq!(XsdBoolean::compare(&false, &true), Ordering::Less);
    }
}
