//! Torrent metainfo records ([BEP-3]).
//!
//! The types here are ordinary [`Record`](crate::bind::Record)s: each declares
//! a descriptor table mapping its fields to the wire keys of a `.torrent`
//! dictionary, and the generic binder does the rest.
//!
//! # Keys
//!
//! [`TorrentFile`] binds `announce` and `info`, which are required, plus the
//! optional `announce-list`, `comment`, `created by` and `creation date`.
//! [`Info`] requires `name`, `piece length` and `pieces`, and takes either a
//! single `length` or a `files` list of [`FileEntry`] records. Any other key
//! is skipped.
//!
//! The [`InfoHash`] identifies a torrent by the SHA-1 of its encoded `info`
//! dictionary.
//!
//! # Examples
//!
//! ```
//! use benbind::metainfo::{InfoHash, TorrentFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = b"d8:announce8:http://x7:comment2:hi4:infod6:lengthi123e\
//!              4:name5:a.iso12:piece lengthi16384e6:pieces0:ee";
//!
//! let torrent = TorrentFile::from_bytes(data)?;
//! assert_eq!(torrent.comment.as_deref(), Some("hi"));
//! assert_eq!(torrent.info.piece_length, 16384);
//!
//! // The hash of the published info dictionary
//! let published = InfoHash::from_torrent_bytes(data)?;
//! assert_eq!(published, torrent.info.info_hash());
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::{FileEntry, Info, TorrentFile};
