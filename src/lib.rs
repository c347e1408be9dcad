//! benbind - bencode with typed records
//!
//! A strict bencode codec ([BEP-3]) and a descriptor-driven binder that maps
//! decoded dictionaries onto Rust structs and back.
//!
//! # Modules
//!
//! - [`bencode`] - Value tree, single-pass parser, canonical encoder
//! - [`bind`] - `FromValue`/`ToValue` conversions and record descriptors
//! - [`metainfo`] - Torrent metainfo records and info hashes
//! - [`constants`] - Default limits
//!
//! The codec performs no I/O: it turns byte buffers into values or records
//! and records or values into byte buffers. Every operation is synchronous
//! and holds no shared state, so independent calls may run concurrently.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod bencode;
pub mod bind;
pub mod constants;
pub mod metainfo;

pub use bencode::{decode, decode_at, encode, BencodeError, Decoder, Dict, Plain, Value};
pub use bind::{BindError, BindMode, Binder, Descriptor, Field, FromValue, Record, ToValue};
pub use metainfo::{FileEntry, Info, InfoHash, MetainfoError, TorrentFile};
