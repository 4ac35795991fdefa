use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use serde_tson::{from_str, to_string, to_string_pretty, tson, Pattern, TsonValue};
use url::Url;

fn assert_roundtrip(value: &TsonValue) {
    let json = to_string(value).unwrap();
    let back = from_str(&json).unwrap();
    assert_eq!(&back, value, "serialized was: {}", json);
}

#[test]
fn test_primitives() {
    assert_roundtrip(&TsonValue::Null);
    assert_roundtrip(&TsonValue::from(true));
    assert_roundtrip(&TsonValue::from(false));
    assert_roundtrip(&TsonValue::from(42));
    assert_roundtrip(&TsonValue::from(-7i64));
    assert_roundtrip(&TsonValue::from(3.5));
    assert_roundtrip(&TsonValue::from("hello world"));
    assert_roundtrip(&TsonValue::from(""));
}

#[test]
fn test_bigint_roundtrip() {
    assert_roundtrip(&TsonValue::BigInt(BigInt::from(10)));
    assert_roundtrip(&TsonValue::BigInt(BigInt::from(-10)));
    assert_roundtrip(&TsonValue::BigInt(
        "123456789012345678901234567890".parse().unwrap(),
    ));
}

#[test]
fn test_date_roundtrip() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_roundtrip(&TsonValue::Date(dt));

    let with_millis = Utc
        .timestamp_millis_opt(1_700_000_000_123)
        .single()
        .unwrap();
    assert_roundtrip(&TsonValue::Date(with_millis));
}

#[test]
fn test_url_roundtrip() {
    assert_roundtrip(&TsonValue::Url(Url::parse("https://example.com/").unwrap()));
    assert_roundtrip(&TsonValue::Url(
        Url::parse("https://user@example.com:8443/path?q=1#frag").unwrap(),
    ));
}

#[test]
fn test_regex_roundtrip() {
    assert_roundtrip(&TsonValue::Regex(Pattern::new("a+b").unwrap()));
    assert_roundtrip(&TsonValue::Regex(
        Pattern::with_flags("^[0-9/]+$", "im").unwrap(),
    ));

    // The reconstructed pattern still matches.
    let json = to_string(&TsonValue::Regex(Pattern::with_flags("abc", "i").unwrap())).unwrap();
    let back = from_str(&json).unwrap();
    assert!(back.as_regex().unwrap().is_match("xxABCxx"));
}

#[test]
fn test_bytes_roundtrip_utf8_only() {
    assert_roundtrip(&TsonValue::Bytes(b"plain text".to_vec()));
    assert_roundtrip(&TsonValue::Bytes("snowman \u{2603}".as_bytes().to_vec()));
    assert_roundtrip(&TsonValue::Bytes(Vec::new()));
}

#[test]
fn test_buffer_decodes_as_bytes() {
    // The growable-view kind is not preserved across a round trip.
    let json = to_string(&TsonValue::Buffer(b"hi".to_vec())).unwrap();
    assert_eq!(json, "\"t!ArrayBuffer:hi\"");

    let back = from_str(&json).unwrap();
    assert_eq!(back, TsonValue::Bytes(b"hi".to_vec()));
}

#[test]
fn test_invalid_utf8_bytes_are_lossy() {
    let original = TsonValue::Bytes(vec![0xff, 0xfe, b'a']);
    let json = to_string(&original).unwrap();
    let back = from_str(&json).unwrap();

    // Invalid sequences were replaced, so the content differs but the
    // trailing valid text survives.
    assert_ne!(back, original);
    let bytes = back.as_bytes().unwrap();
    assert!(bytes.ends_with(b"a"));
}

#[test]
fn test_nested_structure() {
    let value = tson!({
        "order_id": 12345,
        "customer": {
            "id": (BigInt::from(10)),
            "name": "Alice",
            "homepage": (Url::parse("https://example.com/~alice").unwrap()),
            "since": (Utc.with_ymd_and_hms(2020, 6, 1, 12, 30, 0).unwrap())
        },
        "items": [
            { "sku": "WIDGET-001", "qty": 2 },
            { "sku": "GADGET-002", "qty": 1 }
        ],
        "total": 109.97,
        "note": null
    });

    assert_roundtrip(&value);
}

#[test]
fn test_exotics_inside_arrays() {
    let value = tson!([
        (BigInt::from(1)),
        "hello",
        [(Utc.timestamp_millis_opt(0).single().unwrap()), null],
        true
    ]);

    assert_roundtrip(&value);
}

#[test]
fn test_pretty_output_roundtrips() {
    let value = tson!({
        "a": (BigInt::from(99)),
        "b": [1, 2, 3]
    });

    let pretty = to_string_pretty(&value).unwrap();
    assert_eq!(from_str(&pretty).unwrap(), value);
}

#[test]
fn test_key_order_preserved() {
    let value = tson!({ "z": 1, "a": 2, "m": 3 });
    let json = to_string(&value).unwrap();
    assert_eq!(json, r#"{"z":1,"a":2,"m":3}"#);

    let back = from_str(&json).unwrap();
    let keys: Vec<_> = back.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_plain_json_untouched() {
    let json = r#"{"a":[1,2.5,"x"],"b":{"c":null,"d":false}}"#;
    let value = from_str(json).unwrap();
    assert_eq!(to_string(&value).unwrap(), json);
}
