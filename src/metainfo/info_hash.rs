use super::error::MetainfoError;
use crate::bencode::{decode, encode_into, Value};
use crate::constants::SHA1_LEN;
use sha1::{Digest, Sha1};
use std::fmt;

/// SHA-1 of the canonical encoding of a torrent's `info` dictionary.
///
/// Because the encoder always sorts dictionary keys, two info dictionaries
/// with the same entries hash identically however they were produced.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHash([u8; SHA1_LEN]);

impl InfoHash {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetainfoError> {
        let arr: [u8; SHA1_LEN] = bytes
            .try_into()
            .map_err(|_| MetainfoError::InvalidInfoHashLength)?;
        Ok(InfoHash(arr))
    }

    pub fn from_hex(s: &str) -> Result<Self, MetainfoError> {
        let bytes = hex_decode(s).ok_or(MetainfoError::InvalidInfoHashLength)?;
        Self::from_bytes(&bytes)
    }

    /// Hashes an already encoded info dictionary.
    pub fn from_info_bytes(raw_info: &[u8]) -> Self {
        InfoHash(Sha1::digest(raw_info).into())
    }

    /// Hashes an info value after re-encoding it canonically.
    pub fn from_info_value(info: &Value) -> Self {
        let mut raw = Vec::new();
        encode_into(info, &mut raw);
        Self::from_info_bytes(&raw)
    }

    /// Computes the info hash of a `.torrent` file.
    ///
    /// The hash covers every key of the `info` dictionary, including ones no
    /// record field declares.
    ///
    /// # Errors
    ///
    /// Fails if the data is not valid bencode or has no `info` dictionary.
    pub fn from_torrent_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        let info = value
            .get(b"info")
            .ok_or(MetainfoError::MissingField("info"))?;
        if info.as_dict().is_none() {
            return Err(MetainfoError::InvalidField("info"));
        }
        Ok(Self::from_info_value(info))
    }

    pub fn as_bytes(&self) -> &[u8; SHA1_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }
}

impl fmt::Debug for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfoHash({})", self.to_hex())
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", b);
        s
    })
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 || !s.is_ascii() {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
