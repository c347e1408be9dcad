use thiserror::Error;

use crate::bencode::{BencodeError, Value};

/// Errors that can occur when converting between values and records.
///
/// `path` locates the offending value inside the decoded tree, e.g.
/// `info.piece length` or `info.files[2].path`. An empty path refers to the
/// value handed to the binder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A value of the wrong bencode type was found.
    #[error("{}: expected {expected}, found {found}", location(.path))]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A required field is absent and the binder is strict.
    #[error("missing required field: {}", location(.path))]
    MissingRequiredField { path: String },

    /// The value has the right type but cannot be represented by the field.
    #[error("{}: {reason}", location(.path))]
    InvalidValue { path: String, reason: &'static str },

    /// The input was not valid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),
}

fn location(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

impl BindError {
    pub fn type_mismatch(expected: &'static str, found: &Value) -> Self {
        BindError::TypeMismatch {
            path: String::new(),
            expected,
            found: found.kind(),
        }
    }

    pub fn invalid(reason: &'static str) -> Self {
        BindError::InvalidValue {
            path: String::new(),
            reason,
        }
    }

    /// Location of the error, if it came from the binder itself.
    pub fn path(&self) -> Option<&str> {
        match self {
            BindError::TypeMismatch { path, .. }
            | BindError::MissingRequiredField { path }
            | BindError::InvalidValue { path, .. } => Some(path),
            BindError::Bencode(_) => None,
        }
    }

    pub(crate) fn in_field(self, key: &str) -> Self {
        self.nest(key)
    }

    pub(crate) fn in_index(self, index: usize) -> Self {
        self.nest(&format!("[{index}]"))
    }

    fn nest(mut self, segment: &str) -> Self {
        if let BindError::TypeMismatch { path, .. }
        | BindError::MissingRequiredField { path }
        | BindError::InvalidValue { path, .. } = &mut self
        {
            *path = if path.is_empty() {
                segment.to_owned()
            } else if path.starts_with('[') {
                format!("{segment}{path}")
            } else {
                format!("{segment}.{path}")
            };
        }
        self
    }
}
