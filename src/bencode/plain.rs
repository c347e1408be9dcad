use super::value::Value;
use std::collections::BTreeMap;

/// An untyped projection of a [`Value`] tree.
///
/// Strings are decoded as UTF-8 where possible so generic consumers (debug
/// dumps, ad-hoc inspection) can work without a record type. Byte strings
/// that are not valid UTF-8, such as concatenated piece hashes, stay binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plain {
    Text(String),
    Binary(Vec<u8>),
    Int(i64),
    List(Vec<Plain>),
    /// Keys stay raw bytes, so distinct keys remain distinct entries.
    Map(BTreeMap<Vec<u8>, Plain>),
}

impl Value {
    /// Projects this value onto plain host types.
    ///
    /// ```
    /// use benbind::bencode::{decode, Plain};
    ///
    /// let plain = decode(b"d3:agei7e4:name3:bobe").unwrap().to_plain();
    /// assert_eq!(plain.get(b"age"), Some(&Plain::Int(7)));
    /// assert_eq!(plain.get(b"name").and_then(Plain::as_text), Some("bob"));
    /// ```
    pub fn to_plain(&self) -> Plain {
        match self {
            Value::Integer(i) => Plain::Int(*i),
            Value::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => Plain::Text(s.to_owned()),
                Err(_) => Plain::Binary(b.to_vec()),
            },
            Value::List(l) => Plain::List(l.iter().map(Value::to_plain).collect()),
            Value::Dict(d) => Plain::Map(
                d.iter()
                    .map(|(k, v)| (k.to_vec(), v.to_plain()))
                    .collect(),
            ),
        }
    }
}

impl Plain {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Plain::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Plain::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Map lookup; `None` for any other kind.
    pub fn get(&self, key: &[u8]) -> Option<&Plain> {
        match self {
            Plain::Map(m) => m.get(key),
            _ => None,
        }
    }
}
