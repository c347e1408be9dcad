//! Bencode values, decoding and canonical encoding ([BEP-3]).
//!
//! A bencoded document is one value of four kinds:
//!
//! | Kind | Wire form | Decoded as |
//! |------|-----------|------------|
//! | Integer | `i-7e` | [`Value::Integer`] |
//! | String | `5:a.iso` | [`Value::Bytes`] (raw bytes, not necessarily UTF-8) |
//! | List | `li1e1:xe` | [`Value::List`] |
//! | Dictionary | `d1:ki1ee` | [`Value::Dict`], keyed by byte strings |
//!
//! The encoder always writes dictionary keys in ascending byte order, so
//! equal values produce identical bytes.
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use benbind::bencode::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Encoding bencode data
//!
//! Dictionary keys are always written in ascending byte order, so encoding
//! is canonical regardless of how a dictionary was assembled:
//!
//! ```
//! use benbind::bencode::{decode, encode};
//!
//! let value = decode(b"d3:fooi42e3:bar4:spame").unwrap();
//! assert_eq!(encode(&value), b"d3:bar4:spam3:fooi42ee");
//! ```
//!
//! ## Building complex structures
//!
//! ```
//! use benbind::bencode::{encode, Dict, Value};
//!
//! let info = Dict::from_pairs([
//!     ("name", Value::string("example.txt")),
//!     ("length", Value::Integer(1024)),
//!     ("piece length", Value::Integer(16384)),
//! ])
//! .unwrap();
//!
//! let torrent = Dict::from_pairs([
//!     ("info", Value::Dict(info)),
//!     ("announce", Value::string("http://tracker.example.com/announce")),
//! ])
//! .unwrap();
//!
//! let bytes = encode(&Value::Dict(torrent));
//! assert!(bytes.starts_with(b"d8:announce"));
//! ```
//!
//! # Error Handling
//!
//! Decoding rejects malformed input outright; there is no recovery mode.
//!
//! - [`BencodeError::UnexpectedEndOfInput`] - Input ended inside a token
//! - [`BencodeError::InvalidToken`] - A value starts with an unknown byte
//! - [`BencodeError::MalformedLength`] / [`BencodeError::MalformedInteger`] - Bad digits
//! - [`BencodeError::LeadingZero`] - Integer such as `i03e`
//! - [`BencodeError::NonStringKey`] / [`BencodeError::DuplicateKey`] - Bad dictionary
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded (see [`Decoder`])
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod plain;
mod value;

pub use decode::{decode, decode_at, Decoder};
pub use encode::{encode, encode_into};
pub use error::BencodeError;
pub use plain::Plain;
pub use value::{Dict, Value};
