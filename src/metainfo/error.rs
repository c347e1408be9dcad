use thiserror::Error;

use crate::bencode::BencodeError;
use crate::bind::BindError;

/// Errors that can occur when reading torrent metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetainfoError {
    /// The torrent file contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// The dictionary does not fit the torrent record.
    #[error("bind error: {0}")]
    Bind(#[from] BindError),

    /// A required field is missing from the torrent file.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field has an invalid value.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// The info hash has an invalid length (must be 20 bytes).
    #[error("invalid info hash length")]
    InvalidInfoHashLength,
}
