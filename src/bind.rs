//! Binding between bencode values and typed records.
//!
//! A record type declares a static table of [`Field`]s, one per wire key,
//! through the [`Record`] trait. The table drives both directions: binding a
//! decoded dictionary into the record and turning the record back into a
//! dictionary for encoding.
//!
//! Leaf conversions go through [`FromValue`] and [`ToValue`], implemented for
//! integers, flags, strings, raw bytes, lists and string-keyed maps. The
//! [`record_conversions!`](crate::record_conversions) macro makes a record
//! usable as a field of another record.
//!
//! # Missing fields
//!
//! A [`Binder`] is either strict (the default) or lenient. Strict binders
//! reject dictionaries that lack a required field; lenient binders leave the
//! field at its `Default` value. Optional fields default in both modes, and
//! undeclared keys are always ignored so newer producers can add keys freely.
//!
//! # Examples
//!
//! ```
//! use benbind::bind;
//! use benbind::metainfo::{Info, TorrentFile};
//!
//! let torrent = TorrentFile {
//!     announce: "http://tracker.example.com/announce".into(),
//!     info: Info {
//!         name: "a.iso".into(),
//!         piece_length: 16384,
//!         length: Some(123),
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let bytes = bind::to_bytes(&torrent);
//! let decoded: TorrentFile = bind::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded, torrent);
//! ```

mod binder;
mod convert;
mod descriptor;
mod error;

pub use binder::{BindMode, Binder};
pub use convert::{FromValue, ToValue};
pub use descriptor::{BindFn, Descriptor, Field, Record, UnbindFn};
pub use error::BindError;

use crate::bencode::{encode, Value};

/// Binds a dictionary to a record with a strict [`Binder`].
pub fn bind<T: Record>(value: &Value) -> Result<T, BindError> {
    Binder::strict().bind(value)
}

/// Converts a record into a dictionary value.
pub fn unbind<T: Record>(record: &T) -> Value {
    T::descriptor().unbind(record)
}

/// Decodes `data` and binds it with a strict [`Binder`].
pub fn from_bytes<T: FromValue>(data: &[u8]) -> Result<T, BindError> {
    Binder::strict().bind_bytes(data)
}

/// Encodes a value or record canonically.
pub fn to_bytes<T: ToValue + ?Sized>(record: &T) -> Vec<u8> {
    encode(&record.to_value())
}

#[cfg(test)]
mod tests;
