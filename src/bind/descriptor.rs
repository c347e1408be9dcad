use super::binder::Binder;
use super::error::BindError;
use crate::bencode::{Dict, Value};

/// Populates one record field from its dictionary entry.
pub type BindFn<T> = fn(&mut T, &Value, &Binder) -> Result<(), BindError>;

/// Produces the dictionary entry for one record field, or `None` to omit it.
pub type UnbindFn<T> = fn(&T) -> Option<Value>;

/// One entry of a record's descriptor table: the wire key together with the
/// converters used in each direction.
///
/// Entries are normally written with the [`field!`](crate::field) macro.
pub struct Field<T> {
    key: &'static str,
    required: bool,
    bind: BindFn<T>,
    unbind: UnbindFn<T>,
}

impl<T> Field<T> {
    /// A field that strict binders refuse to default.
    pub const fn required(key: &'static str, bind: BindFn<T>, unbind: UnbindFn<T>) -> Self {
        Self {
            key,
            required: true,
            bind,
            unbind,
        }
    }

    /// A field whose absence always leaves the record's default in place.
    pub const fn optional(key: &'static str, bind: BindFn<T>, unbind: UnbindFn<T>) -> Self {
        Self {
            key,
            required: false,
            bind,
            unbind,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn bind(&self, record: &mut T, value: &Value, binder: &Binder) -> Result<(), BindError> {
        (self.bind)(record, value, binder).map_err(|e| e.in_field(self.key))
    }

    pub(crate) fn unbind(&self, record: &T) -> Option<Value> {
        (self.unbind)(record)
    }
}

/// The static table describing how a record type maps onto a bencode
/// dictionary. The same table drives decoding and encoding.
pub struct Descriptor<T: 'static> {
    name: &'static str,
    fields: &'static [Field<T>],
}

impl<T: 'static> Clone for Descriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Descriptor<T> {}

impl<T: 'static> std::fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field("keys", &self.fields.iter().map(Field::key).collect::<Vec<_>>())
            .finish()
    }
}

impl<T: 'static> Descriptor<T> {
    pub const fn new(name: &'static str, fields: &'static [Field<T>]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [Field<T>] {
        self.fields
    }

    /// Looks up the field declared for a wire key.
    pub fn field(&self, key: &[u8]) -> Option<&'static Field<T>> {
        self.fields.iter().find(|f| f.key.as_bytes() == key)
    }

    /// Converts a record into a dictionary keyed by the declared names.
    ///
    /// Fields whose converter yields `None` are left out. Entry order does
    /// not matter; the encoder sorts keys.
    pub fn unbind(&self, record: &T) -> Value {
        let mut dict = Dict::new();
        for field in self.fields {
            let Some(value) = field.unbind(record) else {
                continue;
            };
            if let Err(e) = dict.try_insert(field.key, value) {
                tracing::warn!(record = self.name, error = %e, "descriptor repeats a key, keeping the first");
            }
        }
        Value::Dict(dict)
    }
}

/// A record type with a static descriptor table.
///
/// ```
/// use benbind::bind::{self, Field, Record};
/// use benbind::{field, record_conversions};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Peer {
///     ip: String,
///     port: u32,
///     id: Option<String>,
/// }
///
/// impl Record for Peer {
///     const NAME: &'static str = "peer";
///     const FIELDS: &'static [Field<Self>] = &[
///         field!(Peer, "ip" => ip),
///         field!(Peer, "port" => port),
///         field!(Peer, optional "peer id" => id),
///     ];
/// }
///
/// record_conversions!(Peer);
///
/// let peer: Peer = bind::from_bytes(b"d2:ip9:127.0.0.14:porti6881ee").unwrap();
/// assert_eq!(peer.port, 6881);
/// assert_eq!(peer.id, None);
/// assert_eq!(bind::to_bytes(&peer), b"d2:ip9:127.0.0.14:porti6881ee");
/// ```
pub trait Record: Default + 'static {
    /// Name used in diagnostics.
    const NAME: &'static str;
    const FIELDS: &'static [Field<Self>];

    fn descriptor() -> Descriptor<Self> {
        Descriptor::new(Self::NAME, Self::FIELDS)
    }
}

/// Builds a [`Field`] entry for a named struct field.
///
/// `field!(Type, "key" => member)` declares a required field converted with
/// [`FromValue`](crate::bind::FromValue) / [`ToValue`](crate::bind::ToValue).
/// `field!(Type, optional "key" => member)` declares an `Option<_>` member
/// that is omitted from the encoding when `None`.
#[macro_export]
macro_rules! field {
    ($record:ty, optional $key:literal => $member:ident) => {
        $crate::bind::Field::<$record>::optional(
            $key,
            |record, value, binder| {
                record.$member = Some($crate::bind::FromValue::from_value(value, binder)?);
                Ok(())
            },
            |record| record.$member.as_ref().map($crate::bind::ToValue::to_value),
        )
    };
    ($record:ty, $key:literal => $member:ident) => {
        $crate::bind::Field::<$record>::required(
            $key,
            |record, value, binder| {
                record.$member = $crate::bind::FromValue::from_value(value, binder)?;
                Ok(())
            },
            |record| Some($crate::bind::ToValue::to_value(&record.$member)),
        )
    };
}

/// Implements [`FromValue`](crate::bind::FromValue) and
/// [`ToValue`](crate::bind::ToValue) for [`Record`] types through their
/// descriptors, so records can nest inside other records and lists.
#[macro_export]
macro_rules! record_conversions {
    ($($record:ty),+ $(,)?) => {$(
        impl $crate::bind::FromValue for $record {
            fn from_value(
                value: &$crate::bencode::Value,
                binder: &$crate::bind::Binder,
            ) -> ::std::result::Result<Self, $crate::bind::BindError> {
                binder.bind(value)
            }
        }

        impl $crate::bind::ToValue for $record {
            fn to_value(&self) -> $crate::bencode::Value {
                <$record as $crate::bind::Record>::descriptor().unbind(self)
            }
        }
    )+};
}
