use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;
use crate::bencode::{decode, BencodeError, Decoder, Dict, Value};
use crate::{field, record_conversions};

#[derive(Debug, Default, PartialEq)]
struct Track {
    title: String,
    seconds: u32,
}

#[derive(Debug, Default, PartialEq)]
struct Album {
    artist: String,
    year: i64,
    tracks: Vec<Track>,
    cover: Option<Bytes>,
    live: Option<bool>,
}

impl Record for Track {
    const NAME: &'static str = "track";
    const FIELDS: &'static [Field<Self>] = &[
        field!(Track, "title" => title),
        field!(Track, "seconds" => seconds),
    ];
}

impl Record for Album {
    const NAME: &'static str = "album";
    const FIELDS: &'static [Field<Self>] = &[
        field!(Album, "artist" => artist),
        field!(Album, "year" => year),
        field!(Album, "tracks" => tracks),
        field!(Album, optional "cover" => cover),
        field!(Album, optional "live" => live),
    ];
}

record_conversions!(Track, Album);

fn dict(pairs: Vec<(&'static str, Value)>) -> Value {
    Value::Dict(Dict::from_pairs(pairs).unwrap())
}

fn album_value() -> Value {
    dict(vec![
        ("artist", Value::string("Low")),
        ("year", Value::Integer(1994)),
        (
            "tracks",
            Value::List(vec![
                dict(vec![
                    ("title", Value::string("Words")),
                    ("seconds", Value::Integer(355)),
                ]),
                dict(vec![
                    ("title", Value::string("Cut")),
                    ("seconds", Value::Integer(210)),
                ]),
            ]),
        ),
    ])
}

#[test]
fn test_bind_nested_records() {
    let album: Album = bind(&album_value()).unwrap();
    assert_eq!(album.artist, "Low");
    assert_eq!(album.year, 1994);
    assert_eq!(album.tracks.len(), 2);
    assert_eq!(
        album.tracks[1],
        Track {
            title: "Cut".into(),
            seconds: 210
        }
    );
    assert_eq!(album.cover, None);
    assert_eq!(album.live, None);
}

#[test]
fn test_bind_ignores_unknown_keys() {
    let value = dict(vec![
        ("title", Value::string("Words")),
        ("seconds", Value::Integer(355)),
        ("bpm", Value::Integer(70)),
        ("extra", Value::List(vec![])),
    ]);
    let track: Track = bind(&value).unwrap();
    assert_eq!(track.title, "Words");
}

#[test]
fn test_strict_mode_rejects_missing_required_field() {
    let value = dict(vec![("title", Value::string("Words"))]);
    assert_eq!(
        Binder::strict().bind::<Track>(&value),
        Err(BindError::MissingRequiredField {
            path: "seconds".into()
        })
    );
}

#[test]
fn test_lenient_mode_defaults_missing_required_field() {
    let value = dict(vec![("title", Value::string("Words"))]);
    let track: Track = Binder::lenient().bind(&value).unwrap();
    assert_eq!(
        track,
        Track {
            title: "Words".into(),
            seconds: 0
        }
    );
}

#[test]
fn test_default_binder_is_strict() {
    assert_eq!(Binder::default().mode(), BindMode::Strict);
    assert_eq!(Binder::lenient().mode(), BindMode::Lenient);
}

#[test]
fn test_missing_field_path_is_nested() {
    let value = dict(vec![
        ("artist", Value::string("Low")),
        ("year", Value::Integer(1994)),
        (
            "tracks",
            Value::List(vec![
                dict(vec![
                    ("title", Value::string("Words")),
                    ("seconds", Value::Integer(1)),
                ]),
                dict(vec![("title", Value::string("Cut"))]),
            ]),
        ),
    ]);
    let err = bind::<Album>(&value).unwrap_err();
    assert_eq!(err.path(), Some("tracks[1].seconds"));
    assert_eq!(err.to_string(), "missing required field: tracks[1].seconds");
}

#[test]
fn test_type_mismatch() {
    let value = dict(vec![
        ("title", Value::Integer(5)),
        ("seconds", Value::Integer(1)),
    ]);
    assert_eq!(
        bind::<Track>(&value),
        Err(BindError::TypeMismatch {
            path: "title".into(),
            expected: "string",
            found: "integer"
        })
    );

    let not_a_dict = Value::List(vec![]);
    let err = bind::<Track>(&not_a_dict).unwrap_err();
    assert!(matches!(
        err,
        BindError::TypeMismatch {
            expected: "dict",
            found: "list",
            ..
        }
    ));
    assert_eq!(err.to_string(), "<root>: expected dict, found list");
}

#[test]
fn test_optional_field_type_mismatch_still_fails() {
    let mut value = album_value().into_dict().unwrap();
    value.try_insert("live", Value::string("yes")).unwrap();
    let err = bind::<Album>(&Value::Dict(value)).unwrap_err();
    assert_eq!(err.path(), Some("live"));
}

#[test]
fn test_unbind_omits_absent_optionals() {
    let album: Album = bind(&album_value()).unwrap();
    let value = unbind(&album);
    assert_eq!(value, album_value());
    assert!(value.get(b"cover").is_none());
    assert_eq!(Binder::lenient().unbind(&album), value);
}

#[test]
fn test_unbind_encodes_sorted_keys() {
    let track = Track {
        title: "Words".into(),
        seconds: 355,
    };
    // Declared order is title, seconds; the encoding sorts them.
    assert_eq!(to_bytes(&track), b"d7:secondsi355e5:title5:Wordse");
}

#[test]
fn test_record_roundtrip_through_bytes() {
    let album = Album {
        artist: "Low".into(),
        year: 1994,
        tracks: vec![Track {
            title: "Words".into(),
            seconds: 355,
        }],
        cover: Some(Bytes::from_static(&[0x89, b'P', b'N', b'G'])),
        live: Some(false),
    };
    let bytes = to_bytes(&album);
    let decoded: Album = from_bytes(&bytes).unwrap();
    assert_eq!(decoded, album);
}

#[test]
fn test_from_bytes_propagates_decode_errors() {
    assert_eq!(
        from_bytes::<Track>(b"d5:title"),
        Err(BindError::Bencode(BencodeError::UnexpectedEndOfInput {
            offset: 8
        }))
    );
}

#[test]
fn test_binder_uses_configured_decoder() {
    let binder = Binder::strict().with_decoder(Decoder::new().with_max_depth(1));
    assert_eq!(binder.decoder().max_depth(), 1);
    let err = binder.bind_bytes::<Album>(&to_bytes(&Album::default())).unwrap_err();
    assert!(matches!(
        err,
        BindError::Bencode(BencodeError::NestingTooDeep { .. })
    ));
}

#[test]
fn test_bind_with_alternate_descriptor() {
    const LEGACY: &[Field<Track>] = &[
        field!(Track, "name" => title),
        field!(Track, "length" => seconds),
    ];
    let descriptor = Descriptor::new("legacy track", LEGACY);
    let value = decode(b"d6:lengthi90e4:name5:Introe").unwrap();

    let track = Binder::strict().bind_with(&value, &descriptor).unwrap();
    assert_eq!(
        track,
        Track {
            title: "Intro".into(),
            seconds: 90
        }
    );
    assert_eq!(descriptor.unbind(&track), value);
    assert_eq!(descriptor.field(b"name").map(Field::key), Some("name"));
    assert!(descriptor.field(b"title").is_none());
}

#[test]
fn test_integer_conversions() {
    let binder = Binder::strict();
    assert_eq!(u32::from_value(&Value::Integer(7), &binder), Ok(7));
    assert!(matches!(
        u32::from_value(&Value::Integer(-1), &binder),
        Err(BindError::InvalidValue { .. })
    ));
    assert!(matches!(
        u32::from_value(&Value::Integer(1 << 40), &binder),
        Err(BindError::InvalidValue { .. })
    ));
    assert_eq!(i32::from_value(&Value::Integer(-3), &binder), Ok(-3));
    assert_eq!(u32::MAX.to_value(), Value::Integer(4_294_967_295));
    assert_eq!(i64::MAX.to_value(), Value::Integer(i64::MAX));
}

#[test]
fn test_flag_conversions() {
    let binder = Binder::strict();
    assert_eq!(bool::from_value(&Value::Integer(1), &binder), Ok(true));
    assert_eq!(bool::from_value(&Value::Integer(0), &binder), Ok(false));
    assert!(bool::from_value(&Value::Integer(2), &binder).is_err());
    assert_eq!(true.to_value(), Value::Integer(1));
}

#[test]
fn test_string_conversions() {
    let binder = Binder::strict();
    let raw = Value::Bytes(Bytes::from_static(b"\xff\xfe"));
    assert!(matches!(
        String::from_value(&raw, &binder),
        Err(BindError::InvalidValue { .. })
    ));
    assert_eq!(
        Bytes::from_value(&raw, &binder),
        Ok(Bytes::from_static(b"\xff\xfe"))
    );
    assert_eq!("abc".to_value(), Value::string("abc"));
}

#[test]
fn test_map_conversions() {
    let value = decode(b"d1:ai1e1:bi2ee").unwrap();
    let map: BTreeMap<String, i64> = BTreeMap::from_value(&value, &Binder::strict()).unwrap();
    assert_eq!(map["a"], 1);
    assert_eq!(map["b"], 2);
    assert_eq!(map.to_value(), value);

    let bad = decode(b"d1:a1:xe").unwrap();
    let err = BTreeMap::<String, i64>::from_value(&bad, &Binder::strict()).unwrap_err();
    assert_eq!(err.path(), Some("a"));
}

#[test]
fn test_list_element_error_path() {
    let value = decode(b"li1e3:twoe").unwrap();
    let err = Vec::<i64>::from_value(&value, &Binder::strict()).unwrap_err();
    assert_eq!(err.path(), Some("[1]"));
}
