use super::value::Value;
use bytes::BufMut;

/// Encodes a bencode value to a byte vector.
///
/// The output is always canonical:
/// - Integers: `i<number>e`, rendered from the integer itself
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` with keys in ascending byte order
///
/// Two dictionaries holding the same entries encode to identical bytes no
/// matter how they were built, so the output is suitable for content hashing.
///
/// ```
/// use benbind::bencode::{encode, Dict, Value};
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// let mut dict = Dict::new();
/// dict.try_insert("b", Value::Integer(2)).unwrap();
/// dict.try_insert("a", Value::Integer(1)).unwrap();
/// assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(value, &mut buf);
    buf
}

/// Appends the encoding of `value` to `buf`.
pub fn encode_into<B: BufMut>(value: &Value, buf: &mut B) {
    match value {
        Value::Integer(i) => {
            buf.put_u8(b'i');
            buf.put_slice(i.to_string().as_bytes());
            buf.put_u8(b'e');
        }
        Value::Bytes(b) => put_bytes(b, buf),
        Value::List(l) => {
            buf.put_u8(b'l');
            for item in l {
                encode_into(item, buf);
            }
            buf.put_u8(b'e');
        }
        Value::Dict(d) => {
            buf.put_u8(b'd');
            for (key, val) in d {
                put_bytes(key, buf);
                encode_into(val, buf);
            }
            buf.put_u8(b'e');
        }
    }
}

fn put_bytes<B: BufMut>(data: &[u8], buf: &mut B) {
    buf.put_slice(data.len().to_string().as_bytes());
    buf.put_u8(b':');
    buf.put_slice(data);
}
