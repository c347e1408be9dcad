use super::error::BencodeError;
use bytes::Bytes;
use std::collections::btree_map::{self, BTreeMap, Entry};

/// A decoded bencode document or any part of one.
///
/// The accessors return `None` on a kind mismatch rather than failing, so
/// lookups chain with `?` or `and_then`.
///
/// ```
/// use benbind::bencode::Value;
///
/// let n: Value = (-7i64).into();
/// let name: Value = "a.iso".into();
/// let pair = Value::List(vec![n.clone(), name.clone()]);
///
/// assert_eq!(n.as_integer(), Some(-7));
/// assert_eq!(name.as_bytes().map(|b| b.len()), Some(5));
/// assert_eq!(pair.as_list().map(<[Value]>::len), Some(2));
/// assert_eq!(pair.as_str(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    /// Raw string bytes. Bencode strings carry no encoding.
    Bytes(Bytes),
    List(Vec<Value>),
    /// A dictionary with byte string keys, always traversed in key order.
    Dict(Dict),
}

impl Value {
    /// Copies `s` into a string value.
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Creates a byte string from data whose length was claimed separately.
    ///
    /// # Errors
    ///
    /// Returns [`BencodeError::StringLengthMismatch`] if `declared` differs from
    /// the length of `data`.
    ///
    /// ```
    /// use benbind::bencode::{BencodeError, Value};
    ///
    /// assert!(Value::sized(4, "spam").is_ok());
    /// assert_eq!(
    ///     Value::sized(5, "spam"),
    ///     Err(BencodeError::StringLengthMismatch { declared: 5, actual: 4 })
    /// );
    /// ```
    pub fn sized(declared: usize, data: impl Into<Bytes>) -> Result<Self, BencodeError> {
        let data = data.into();
        if data.len() != declared {
            return Err(BencodeError::StringLengthMismatch {
                declared,
                actual: data.len(),
            });
        }
        Ok(Value::Bytes(data))
    }

    /// The integer, if this is an integer value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The raw bytes of a string value.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Borrows a string value as text. Non-UTF-8 strings give `None`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// The items of a list value.
    ///
    /// ```
    /// use benbind::bencode::decode;
    ///
    /// let value = decode(b"l4:spami42ee").unwrap();
    /// let items = value.as_list().unwrap();
    /// assert_eq!(items[1].as_integer(), Some(42));
    /// ```
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// The entries of a dictionary value.
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Takes the dictionary out of a dictionary value.
    pub fn into_dict(self) -> Option<Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Dictionary lookup. Any other kind behaves like an empty dictionary.
    ///
    /// ```
    /// use benbind::bencode::decode;
    ///
    /// let value = decode(b"d4:infod4:name5:a.isoee").unwrap();
    /// let name = value.get(b"info").and_then(|info| info.get(b"name"));
    /// assert_eq!(name.and_then(|v| v.as_str()), Some("a.iso"));
    /// assert!(value.get(b"announce").is_none());
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Bytes(_) => "string",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Bytes(Bytes::from(s))
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<Dict> for Value {
    fn from(d: Dict) -> Self {
        Value::Dict(d)
    }
}

/// A bencode dictionary.
///
/// Keys are unique byte strings. Iteration always yields entries in ascending
/// byte order of the key, independent of the order they were inserted in,
/// which is what makes encoding canonical.
///
/// ```
/// use benbind::bencode::{Dict, Value};
///
/// let mut dict = Dict::new();
/// dict.try_insert("foo", Value::Integer(1)).unwrap();
/// dict.try_insert("bar", Value::Integer(2)).unwrap();
/// assert!(dict.try_insert("foo", Value::Integer(3)).is_err());
///
/// let keys: Vec<&[u8]> = dict.keys().map(|k| k.as_ref()).collect();
/// assert_eq!(keys, [b"bar".as_slice(), b"foo".as_slice()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dict(BTreeMap<Bytes, Value>);

impl Dict {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(entries: BTreeMap<Bytes, Value>) -> Self {
        Self(entries)
    }

    /// Builds a dictionary from key/value pairs, rejecting repeated keys.
    pub fn from_pairs<K, I>(pairs: I) -> Result<Self, BencodeError>
    where
        K: Into<Bytes>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut dict = Self::new();
        for (key, value) in pairs {
            dict.try_insert(key, value)?;
        }
        Ok(dict)
    }

    /// Inserts a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`BencodeError::DuplicateKey`] if `key` is already present; the
    /// existing entry is left untouched.
    pub fn try_insert(&mut self, key: impl Into<Bytes>, value: Value) -> Result<(), BencodeError> {
        match self.0.entry(key.into()) {
            Entry::Occupied(entry) => Err(BencodeError::DuplicateKey {
                key: entry.key().to_vec(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, Bytes, Value> {
        self.0.iter()
    }

    /// Keys in ascending byte order.
    pub fn keys(&self) -> btree_map::Keys<'_, Bytes, Value> {
        self.0.keys()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a Bytes, &'a Value);
    type IntoIter = btree_map::Iter<'a, Bytes, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Dict {
    type Item = (Bytes, Value);
    type IntoIter = btree_map::IntoIter<Bytes, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
