use thiserror::Error;

/// Errors produced while decoding bencode or constructing values.
///
/// Every variant that originates in the parser records the byte offset at
/// which the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BencodeError {
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEndOfInput { offset: usize },

    #[error("invalid token {byte:#04x} at offset {offset}")]
    InvalidToken { byte: u8, offset: usize },

    #[error("malformed string length at offset {offset}")]
    MalformedLength { offset: usize },

    #[error("malformed integer at offset {offset}")]
    MalformedInteger { offset: usize },

    #[error("integer out of range at offset {offset}")]
    IntegerOverflow { offset: usize },

    #[error("integer with leading zero at offset {offset}")]
    LeadingZero { offset: usize },

    #[error("dictionary key at offset {offset} is not a string")]
    NonStringKey { offset: usize },

    #[error("duplicate dictionary key {}", String::from_utf8_lossy(.key))]
    DuplicateKey { key: Vec<u8> },

    #[error("string length mismatch: declared {declared}, actual {actual}")]
    StringLengthMismatch { declared: usize, actual: usize },

    #[error("nesting deeper than {max_depth} levels at offset {offset}")]
    NestingTooDeep { max_depth: usize, offset: usize },

    #[error("trailing data after value at offset {offset}")]
    TrailingData { offset: usize },
}

impl BencodeError {
    /// Returns `true` for errors caused by the token grammar itself, as
    /// opposed to structurally valid tokens that violate a semantic rule.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            BencodeError::UnexpectedEndOfInput { .. }
                | BencodeError::InvalidToken { .. }
                | BencodeError::MalformedLength { .. }
                | BencodeError::MalformedInteger { .. }
                | BencodeError::IntegerOverflow { .. }
                | BencodeError::NestingTooDeep { .. }
                | BencodeError::TrailingData { .. }
        )
    }
}
