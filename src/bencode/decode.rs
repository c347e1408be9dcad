use super::error::BencodeError;
use super::value::{Dict, Value};
use crate::constants::DEFAULT_MAX_DEPTH;
use bytes::Bytes;

/// Decodes a single bencode value that must span the whole buffer.
///
/// Uses a [`Decoder`] with the default nesting limit.
///
/// # Errors
///
/// Returns the first error encountered; no partial value is produced. Bytes
/// left over after the value yield [`BencodeError::TrailingData`].
///
/// ```
/// use benbind::bencode::{decode, BencodeError, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
/// assert!(matches!(decode(b"i03e"), Err(BencodeError::LeadingZero { .. })));
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    Decoder::new().decode(data)
}

/// Decodes one value starting at `offset` and returns it together with the
/// offset of the first byte after it.
///
/// ```
/// use benbind::bencode::{decode_at, Value};
///
/// let data = b"i1e4:spam";
/// let (first, next) = decode_at(data, 0).unwrap();
/// assert_eq!(first, Value::Integer(1));
/// let (second, end) = decode_at(data, next).unwrap();
/// assert_eq!(second.as_str(), Some("spam"));
/// assert_eq!(end, data.len());
/// ```
pub fn decode_at(data: &[u8], offset: usize) -> Result<(Value, usize), BencodeError> {
    Decoder::new().decode_at(data, offset)
}

/// A configured bencode parser.
///
/// The only setting is the maximum container nesting depth. A top-level
/// integer or string has depth 0, and every list or dictionary adds one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// See [`decode`].
    pub fn decode(&self, data: &[u8]) -> Result<Value, BencodeError> {
        let (value, end) = self.decode_at(data, 0)?;

        if end != data.len() {
            return Err(BencodeError::TrailingData { offset: end });
        }

        Ok(value)
    }

    /// See [`decode_at`].
    pub fn decode_at(&self, data: &[u8], offset: usize) -> Result<(Value, usize), BencodeError> {
        let mut cursor = Cursor {
            data,
            pos: offset,
            max_depth: self.max_depth,
        };

        match cursor.value(0) {
            Ok(value) => Ok((value, cursor.pos)),
            Err(e) => {
                tracing::trace!(offset, error = %e, "bencode decode failed");
                Err(e)
            }
        }
    }
}

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    max_depth: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Result<u8, BencodeError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(BencodeError::UnexpectedEndOfInput { offset: self.pos })
    }

    fn value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        match self.peek()? {
            b'0'..=b'9' => self.bytes().map(Value::Bytes),
            b'i' => self.integer().map(Value::Integer),
            b'l' => self.list(depth),
            b'd' => self.dict(depth),
            byte => Err(BencodeError::InvalidToken {
                byte,
                offset: self.pos,
            }),
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, BencodeError> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(BencodeError::NestingTooDeep {
                max_depth: self.max_depth,
                offset: self.pos,
            });
        }
        Ok(depth)
    }

    fn bytes(&mut self) -> Result<Bytes, BencodeError> {
        let start = self.pos;
        let mut len: usize = 0;

        loop {
            match self.peek()? {
                b':' => break,
                c @ b'0'..=b'9' => {
                    len = len
                        .checked_mul(10)
                        .and_then(|l| l.checked_add(usize::from(c - b'0')))
                        .ok_or(BencodeError::MalformedLength { offset: start })?;
                    self.pos += 1;
                }
                _ => return Err(BencodeError::MalformedLength { offset: self.pos }),
            }
        }

        if self.pos == start {
            return Err(BencodeError::MalformedLength { offset: start });
        }

        self.pos += 1;

        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(BencodeError::UnexpectedEndOfInput {
                offset: self.data.len(),
            })?;

        let bytes = Bytes::copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;

        Ok(bytes)
    }

    fn integer(&mut self) -> Result<i64, BencodeError> {
        let start = self.pos;
        self.pos += 1;

        let negative = self.peek()? == b'-';
        if negative {
            self.pos += 1;
        }

        let digits_start = self.pos;
        let mut value: i64 = 0;

        loop {
            match self.peek()? {
                b'e' => break,
                c @ b'0'..=b'9' => {
                    if self.pos > digits_start && self.data[digits_start] == b'0' {
                        return Err(BencodeError::LeadingZero {
                            offset: digits_start,
                        });
                    }
                    // Accumulate towards the sign so i64::MIN is representable.
                    let digit = i64::from(c - b'0');
                    value = value
                        .checked_mul(10)
                        .and_then(|v| {
                            if negative {
                                v.checked_sub(digit)
                            } else {
                                v.checked_add(digit)
                            }
                        })
                        .ok_or(BencodeError::IntegerOverflow { offset: start })?;
                    self.pos += 1;
                }
                _ => return Err(BencodeError::MalformedInteger { offset: self.pos }),
            }
        }

        let digits = &self.data[digits_start..self.pos];
        if digits.is_empty() || (negative && digits == b"0") {
            return Err(BencodeError::MalformedInteger { offset: start });
        }

        self.pos += 1;
        Ok(value)
    }

    fn list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let depth = self.enter(depth)?;
        self.pos += 1;
        let mut list = Vec::new();

        while self.peek()? != b'e' {
            list.push(self.value(depth)?);
        }

        self.pos += 1;
        Ok(Value::List(list))
    }

    fn dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        let depth = self.enter(depth)?;
        self.pos += 1;
        let mut dict = Dict::new();

        loop {
            match self.peek()? {
                b'e' => break,
                b'0'..=b'9' => {}
                _ => return Err(BencodeError::NonStringKey { offset: self.pos }),
            }

            let key = self.bytes()?;
            let value = self.value(depth)?;
            dict.try_insert(key, value)?;
        }

        self.pos += 1;
        Ok(Value::Dict(dict))
    }
}
