//! Codec limits and defaults.
//!
//! These values apply unless a caller configures a [`Decoder`] or [`Binder`]
//! explicitly.
//!
//! [`Decoder`]: crate::bencode::Decoder
//! [`Binder`]: crate::bind::Binder

/// Maximum container nesting accepted by a default decoder.
///
/// Real `.torrent` files and tracker responses rarely nest deeper than four
/// or five levels; anything beyond this is treated as hostile input.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Size of a SHA-1 piece hash and of a v1 info hash, in bytes.
pub const SHA1_LEN: usize = 20;
