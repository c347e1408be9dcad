use super::convert::FromValue;
use super::descriptor::{Descriptor, Record};
use super::error::BindError;
use crate::bencode::{Decoder, Value};

/// How a [`Binder`] treats required fields that are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BindMode {
    /// Absent required fields fail with [`BindError::MissingRequiredField`].
    #[default]
    Strict,
    /// Absent required fields keep the record's `Default` value.
    Lenient,
}

/// Converts decoded values into records according to their descriptors.
///
/// Fields marked optional never fail when absent, in either mode. Keys in
/// the input that no field declares are ignored.
///
/// ```
/// use benbind::bind::{BindError, Binder};
/// use benbind::metainfo::TorrentFile;
///
/// let data = b"d4:infod4:name5:a.iso12:piece lengthi16384e6:pieces0:ee";
///
/// let strict = Binder::strict().bind_bytes::<TorrentFile>(data);
/// assert!(matches!(strict, Err(BindError::MissingRequiredField { .. })));
///
/// let lenient: TorrentFile = Binder::lenient().bind_bytes(data).unwrap();
/// assert_eq!(lenient.announce, "");
/// assert_eq!(lenient.info.name, "a.iso");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binder {
    mode: BindMode,
    decoder: Decoder,
}

impl Binder {
    pub const fn new(mode: BindMode) -> Self {
        Self {
            mode,
            decoder: Decoder::new(),
        }
    }

    pub const fn strict() -> Self {
        Self::new(BindMode::Strict)
    }

    pub const fn lenient() -> Self {
        Self::new(BindMode::Lenient)
    }

    /// Replaces the decoder used by [`Binder::bind_bytes`].
    pub const fn with_decoder(mut self, decoder: Decoder) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn mode(&self) -> BindMode {
        self.mode
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Decodes `data` and converts the result.
    pub fn bind_bytes<T: FromValue>(&self, data: &[u8]) -> Result<T, BindError> {
        let value = self.decoder.decode(data)?;
        T::from_value(&value, self)
    }

    /// Binds a dictionary to a record using the record's own descriptor.
    pub fn bind<T: Record>(&self, value: &Value) -> Result<T, BindError> {
        self.bind_with(value, &T::descriptor())
    }

    /// Converts a record into a dictionary. The mode plays no part here.
    pub fn unbind<T: Record>(&self, record: &T) -> Value {
        T::descriptor().unbind(record)
    }

    /// Binds a dictionary using an explicit descriptor.
    ///
    /// # Errors
    ///
    /// - [`BindError::TypeMismatch`] if `value` is not a dictionary or a field
    ///   holds the wrong kind of value
    /// - [`BindError::MissingRequiredField`] in strict mode
    /// - [`BindError::InvalidValue`] if a field's converter rejects the value
    pub fn bind_with<T: Default + 'static>(
        &self,
        value: &Value,
        descriptor: &Descriptor<T>,
    ) -> Result<T, BindError> {
        let dict = value
            .as_dict()
            .ok_or_else(|| BindError::type_mismatch("dict", value))?;

        let mut record = T::default();

        for field in descriptor.fields() {
            match dict.get(field.key().as_bytes()) {
                Some(entry) => field.bind(&mut record, entry, self)?,
                None if field.is_required() => match self.mode {
                    BindMode::Strict => {
                        return Err(BindError::MissingRequiredField {
                            path: field.key().to_owned(),
                        })
                    }
                    BindMode::Lenient => tracing::debug!(
                        record = descriptor.name(),
                        field = field.key(),
                        "required field absent, keeping default"
                    ),
                },
                None => {}
            }
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            for key in dict.keys().filter(|key| descriptor.field(key).is_none()) {
                tracing::trace!(
                    record = descriptor.name(),
                    key = %String::from_utf8_lossy(key),
                    "ignoring undeclared key"
                );
            }
        }

        Ok(record)
    }
}
