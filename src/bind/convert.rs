use super::binder::Binder;
use super::error::BindError;
use crate::bencode::{Dict, Value};
use bytes::Bytes;
use std::collections::BTreeMap;

/// Conversion from a decoded [`Value`] into a Rust type.
///
/// Implementations look only at the value they are given; the [`Binder`] is
/// passed through so nested records are bound with the same policy.
pub trait FromValue: Sized {
    fn from_value(value: &Value, binder: &Binder) -> Result<Self, BindError>;
}

/// Conversion from a Rust type into a [`Value`] ready for encoding.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl FromValue for Value {
    fn from_value(value: &Value, _: &Binder) -> Result<Self, BindError> {
        Ok(value.clone())
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value, _: &Binder) -> Result<Self, BindError> {
        value
            .as_integer()
            .ok_or_else(|| BindError::type_mismatch("integer", value))
    }
}

impl ToValue for i64 {
    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }
}

// Only types whose whole range fits in `i64` get conversions, so every
// bound value re-encodes unchanged.
macro_rules! narrow_integer {
    ($($ty:ty),+) => {$(
        impl FromValue for $ty {
            fn from_value(value: &Value, binder: &Binder) -> Result<Self, BindError> {
                let wide = i64::from_value(value, binder)?;
                <$ty>::try_from(wide).map_err(|_| BindError::invalid("integer out of range"))
            }
        }
    )+};
}

narrow_integer!(i32, u32);

impl ToValue for i32 {
    fn to_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }
}

impl ToValue for u32 {
    fn to_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }
}

/// Flags are integers restricted to `0` and `1`.
impl FromValue for bool {
    fn from_value(value: &Value, binder: &Binder) -> Result<Self, BindError> {
        match i64::from_value(value, binder)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(BindError::invalid("flag must be 0 or 1")),
        }
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }
}

impl FromValue for String {
    fn from_value(value: &Value, _: &Binder) -> Result<Self, BindError> {
        let bytes = value
            .as_bytes()
            .ok_or_else(|| BindError::type_mismatch("string", value))?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| BindError::invalid("string is not valid UTF-8"))
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::string(self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::string(self)
    }
}

impl FromValue for Bytes {
    fn from_value(value: &Value, _: &Binder) -> Result<Self, BindError> {
        value
            .as_bytes()
            .cloned()
            .ok_or_else(|| BindError::type_mismatch("string", value))
    }
}

impl ToValue for Bytes {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value, binder: &Binder) -> Result<Self, BindError> {
        let list = value
            .as_list()
            .ok_or_else(|| BindError::type_mismatch("list", value))?;
        list.iter()
            .enumerate()
            .map(|(i, item)| T::from_value(item, binder).map_err(|e| e.in_index(i)))
            .collect()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

/// Free-form dictionaries with UTF-8 keys.
impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value, binder: &Binder) -> Result<Self, BindError> {
        let dict = value
            .as_dict()
            .ok_or_else(|| BindError::type_mismatch("dict", value))?;
        dict.iter()
            .map(|(key, item)| {
                let key = std::str::from_utf8(key)
                    .map_err(|_| BindError::invalid("dictionary key is not valid UTF-8"))?;
                let item = T::from_value(item, binder).map_err(|e| e.in_field(key))?;
                Ok((key.to_owned(), item))
            })
            .collect()
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        let entries = self
            .iter()
            .map(|(key, item)| (Bytes::copy_from_slice(key.as_bytes()), item.to_value()))
            .collect();
        Value::Dict(Dict::from_map(entries))
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
