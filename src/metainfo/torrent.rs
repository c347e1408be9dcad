use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bind::{self, Binder, Field, Record, ToValue};
use crate::constants::SHA1_LEN;
use crate::{field, record_conversions};
use bytes::Bytes;

/// A parsed `.torrent` file.
///
/// # Examples
///
/// ```
/// use benbind::metainfo::TorrentFile;
///
/// let data = b"d8:announce8:http://x4:infod6:lengthi123e4:name5:a.iso\
///              12:piece lengthi16384e6:pieces0:ee";
/// let torrent = TorrentFile::from_bytes(data).unwrap();
///
/// assert_eq!(torrent.announce, "http://x");
/// assert_eq!(torrent.info.name, "a.iso");
/// assert_eq!(torrent.info.total_length(), 123);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TorrentFile {
    /// Primary tracker URL.
    pub announce: String,
    /// Multi-tier tracker list ([BEP-12](http://bittorrent.org/beps/bep_0012.html)).
    pub announce_list: Option<Vec<Vec<String>>>,
    /// Optional comment about the torrent.
    pub comment: Option<String>,
    /// Name/version of the program that created the torrent.
    pub created_by: Option<String>,
    /// Unix timestamp when the torrent was created.
    pub creation_date: Option<i64>,
    /// The info dictionary containing file and piece information.
    pub info: Info,
}

/// The info dictionary from a torrent file.
///
/// Single-file torrents carry `length`; multi-file torrents carry `files`.
/// The piece size is read from the BEP-3 key `piece length`, spelled with a
/// space; a `piece-length` key is treated as unknown and skipped.
///
/// Sizes are `i64`, the bencode integer type, so every record encodes back to
/// the value it was bound from. [`Info::validate`] rejects negative sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    /// Suggested name for the file or directory.
    pub name: String,
    /// Number of bytes per piece.
    pub piece_length: i64,
    /// Concatenated SHA-1 piece hashes.
    pub pieces: Bytes,
    pub length: Option<i64>,
    pub files: Option<Vec<FileEntry>>,
    pub private: Option<bool>,
}

/// A file within a multi-file torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileEntry {
    pub length: i64,
    /// Path components relative to the torrent's root directory.
    pub path: Vec<String>,
}

impl Record for TorrentFile {
    const NAME: &'static str = "torrent";
    const FIELDS: &'static [Field<Self>] = &[
        field!(TorrentFile, "announce" => announce),
        field!(TorrentFile, optional "announce-list" => announce_list),
        field!(TorrentFile, optional "comment" => comment),
        field!(TorrentFile, optional "created by" => created_by),
        field!(TorrentFile, optional "creation date" => creation_date),
        field!(TorrentFile, "info" => info),
    ];
}

impl Record for Info {
    const NAME: &'static str = "info";
    const FIELDS: &'static [Field<Self>] = &[
        field!(Info, "name" => name),
        field!(Info, "piece length" => piece_length),
        field!(Info, "pieces" => pieces),
        field!(Info, optional "length" => length),
        field!(Info, optional "files" => files),
        field!(Info, optional "private" => private),
    ];
}

impl Record for FileEntry {
    const NAME: &'static str = "file";
    const FIELDS: &'static [Field<Self>] = &[
        field!(FileEntry, "length" => length),
        field!(FileEntry, "path" => path),
    ];
}

record_conversions!(TorrentFile, Info, FileEntry);

impl TorrentFile {
    /// Parses a torrent file with a strict binder.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data is not valid bencode
    /// - Required fields are missing (announce, info, name, pieces, etc.)
    /// - The info dictionary is inconsistent (see [`Info::validate`])
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        Self::from_bytes_with(data, &Binder::strict())
    }

    /// Parses a torrent file with the given binder.
    pub fn from_bytes_with(data: &[u8], binder: &Binder) -> Result<Self, MetainfoError> {
        let torrent: TorrentFile = binder.bind_bytes(data)?;
        torrent.info.validate()?;
        Ok(torrent)
    }

    /// Encodes the torrent canonically.
    pub fn to_bytes(&self) -> Vec<u8> {
        bind::to_bytes(self)
    }

    /// Returns all tracker URLs from both `announce` and `announce-list`.
    ///
    /// The primary tracker comes first, followed by trackers from
    /// `announce-list`. Duplicates and empty URLs are removed.
    pub fn trackers(&self) -> Vec<String> {
        let mut trackers: Vec<String> = Vec::new();

        let tiers = self.announce_list.iter().flatten().flatten();
        for tracker in std::iter::once(&self.announce).chain(tiers) {
            if !tracker.is_empty() && !trackers.contains(tracker) {
                trackers.push(tracker.clone());
            }
        }

        trackers
    }
}

impl Info {
    /// Checks the invariants the record types cannot express.
    ///
    /// # Errors
    ///
    /// - `pieces` is not a whole number of SHA-1 hashes
    /// - `piece length`, `length` or a file length is negative
    /// - neither `length` nor `files` is present, or both are
    pub fn validate(&self) -> Result<(), MetainfoError> {
        if self.pieces.len() % SHA1_LEN != 0 {
            return Err(MetainfoError::InvalidField("pieces"));
        }
        if self.piece_length < 0 {
            return Err(MetainfoError::InvalidField("piece length"));
        }
        if self.length.is_some_and(|length| length < 0) {
            return Err(MetainfoError::InvalidField("length"));
        }
        if self.files.iter().flatten().any(|file| file.length < 0) {
            return Err(MetainfoError::InvalidField("files"));
        }

        match (&self.length, &self.files) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            (None, None) => Err(MetainfoError::MissingField("length or files")),
            (Some(_), Some(_)) => Err(MetainfoError::InvalidField("length and files")),
        }
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len() / SHA1_LEN
    }

    /// Returns the SHA-1 hash of piece `index`.
    pub fn piece_hash(&self, index: usize) -> Option<[u8; SHA1_LEN]> {
        let start = index.checked_mul(SHA1_LEN)?;
        let chunk = self.pieces.get(start..start.checked_add(SHA1_LEN)?)?;
        chunk.try_into().ok()
    }

    /// Total size of all files combined, saturating at `i64::MAX`.
    pub fn total_length(&self) -> i64 {
        match (&self.length, &self.files) {
            (Some(length), _) => *length,
            (None, Some(files)) => files
                .iter()
                .fold(0i64, |total, f| total.saturating_add(f.length)),
            (None, None) => 0,
        }
    }

    pub fn is_multi_file(&self) -> bool {
        self.files.is_some()
    }

    /// If true, clients should only use trackers in the metainfo (no DHT/PEX).
    pub fn is_private(&self) -> bool {
        self.private.unwrap_or(false)
    }

    /// Hashes this record's canonical encoding.
    ///
    /// Keys the record does not declare are not part of the result; use
    /// [`InfoHash::from_torrent_bytes`] to hash a file exactly as published.
    pub fn info_hash(&self) -> InfoHash {
        InfoHash::from_info_value(&self.to_value())
    }
}
