//! JSON helpers
//!
//! Parsing is strict: the document root must be an object or an array,
//! object keys must be unique and nothing but whitespace may follow the
//! document. Output uses four-space indentation.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Number, Value};

use crate::error::{ErrpageError, ErrpageResult};

const INDENT: &[u8] = b"    ";

/// Parse `s` as a JSON document whose root is an object or array.
///
/// An object that repeats a key is an error.
pub fn parse_json(s: &str) -> ErrpageResult<Value> {
    let UniqueKeys(value) = serde_json::from_str(s)?;
    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        Value::Null => Err(ErrpageError::InvalidJsonRoot { found: "null" }),
        Value::Bool(_) => Err(ErrpageError::InvalidJsonRoot { found: "boolean" }),
        Value::Number(_) => Err(ErrpageError::InvalidJsonRoot { found: "number" }),
        Value::String(_) => Err(ErrpageError::InvalidJsonRoot { found: "string" }),
    }
}

/// A `Value` deserialized with duplicate object keys rejected
struct UniqueKeys(Value);

impl<'de> Deserialize<'de> for UniqueKeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(UniqueKeysVisitor).map(UniqueKeys)
    }
}

struct UniqueKeysVisitor;

impl<'de> Visitor<'de> for UniqueKeysVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Number::from_f64(v).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(UniqueKeys(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Map::new();
        while let Some(key) = map.next_key::<String>()? {
            if object.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate key `{}`", key)));
            }
            let UniqueKeys(value) = map.next_value()?;
            object.insert(key, value);
        }
        Ok(Value::Object(object))
    }
}

/// `parse_json`, or `Value::Null` if `s` is not an acceptable document
pub fn string_to_json(s: &str) -> Value {
    parse_json(s).unwrap_or(Value::Null)
}

/// Pretty-print `value` with four-space indentation
pub fn json_to_string(value: &Value) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if let Err(err) = value.serialize(&mut ser) {
        // Value only holds string keys, so this is unreachable in practice
        tracing::warn!(%err, "JSON serialization failed");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
