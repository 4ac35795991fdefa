//! Property-based tests - pragmatic approach testing the transform laws
//! across generated value trees.
//!
//! These complement the integration tests by verifying the round-trip,
//! idempotence and structural-fidelity properties over a wide range of
//! inputs rather than hand-picked cases.

use chrono::{TimeZone, Utc};
use num_bigint::BigInt;
use proptest::prelude::*;
use serde_tson::{decode, encode, from_str, to_string, TsonMap, TsonValue};
use url::Url;

/// Strings guaranteed not to collide with any `t!<KindName>:` prefix.
fn safe_string() -> impl Strategy<Value = String> {
    "[a-z0-9 .:/-]{0,24}".prop_filter("no tag prefix", |s| !s.starts_with("t!"))
}

/// Tag-free leaves only.
fn json_leaf() -> impl Strategy<Value = TsonValue> {
    prop_oneof![
        Just(TsonValue::Null),
        any::<bool>().prop_map(TsonValue::from),
        any::<i64>().prop_map(TsonValue::from),
        // Finite floats with an exact JSON rendering.
        any::<i32>().prop_map(|n| TsonValue::from(n as f64 / 2.0)),
        safe_string().prop_map(TsonValue::from),
    ]
}

/// Exotic leaves, excluding the buffer view kind (its kind is not preserved
/// across a round trip) and non-UTF-8 buffer content (lossy by design).
fn exotic_leaf() -> impl Strategy<Value = TsonValue> {
    prop_oneof![
        any::<i128>().prop_map(|n| TsonValue::BigInt(BigInt::from(n))),
        (0i64..4_102_444_800_000).prop_map(|ms| {
            TsonValue::Date(Utc.timestamp_millis_opt(ms).single().unwrap())
        }),
        "[a-z]{1,8}(/[a-z0-9]{1,6}){0,3}".prop_map(|path| {
            TsonValue::Url(Url::parse(&format!("https://example.com/{}", path)).unwrap())
        }),
        "[a-z ]{0,16}".prop_map(|text| TsonValue::Bytes(text.into_bytes())),
    ]
}

fn tree_of(leaf: impl Strategy<Value = TsonValue> + 'static) -> impl Strategy<Value = TsonValue> {
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(TsonValue::Array),
            prop::collection::vec(("[a-z]{1,8}", inner), 0..6).prop_map(|entries| {
                TsonValue::Object(TsonMap::from_iter(entries))
            }),
        ]
    })
}

fn count_nodes(value: &TsonValue) -> usize {
    match value {
        TsonValue::Array(items) => 1 + items.iter().map(count_nodes).sum::<usize>(),
        TsonValue::Object(map) => 1 + map.values().map(count_nodes).sum::<usize>(),
        _ => 1,
    }
}

fn is_json_native(value: &TsonValue) -> bool {
    match value {
        TsonValue::Null
        | TsonValue::Bool(_)
        | TsonValue::Number(_)
        | TsonValue::String(_) => true,
        TsonValue::Array(items) => items.iter().all(is_json_native),
        TsonValue::Object(map) => map.values().all(is_json_native),
        _ => false,
    }
}

proptest! {
    // decode is the identity on trees containing no tagged strings.
    #[test]
    fn prop_decode_idempotent_on_untagged(value in tree_of(json_leaf())) {
        prop_assert_eq!(decode(value.clone()).unwrap(), value);
    }

    // encode is a deep copy on trees containing no exotic kinds.
    #[test]
    fn prop_encode_identity_on_native(value in tree_of(json_leaf())) {
        prop_assert_eq!(encode(&value), value);
    }

    // encode output is always expressible in plain JSON.
    #[test]
    fn prop_encode_output_is_json_native(value in tree_of(exotic_leaf())) {
        prop_assert!(is_json_native(&encode(&value)));
    }

    // Full round trip through JSON text restores supported trees exactly.
    #[test]
    fn prop_roundtrip(value in tree_of(prop_oneof![json_leaf(), exotic_leaf()])) {
        let json = to_string(&value).unwrap();
        let back = from_str(&json).unwrap();
        prop_assert_eq!(back, value);
    }

    // The in-memory pair agrees with the text pipeline.
    #[test]
    fn prop_decode_encode_matches_text_pipeline(
        value in tree_of(prop_oneof![json_leaf(), exotic_leaf()])
    ) {
        let via_memory = decode(encode(&value)).unwrap();
        let via_text = from_str(&to_string(&value).unwrap()).unwrap();
        prop_assert_eq!(via_memory, via_text);
    }

    // Encoding preserves sequence lengths and mapping key sets, so the
    // total node count never shrinks below the container skeleton.
    #[test]
    fn prop_structural_fidelity(value in tree_of(exotic_leaf())) {
        let encoded = encode(&value);
        fn skeleton_matches(a: &TsonValue, b: &TsonValue) -> bool {
            match (a, b) {
                (TsonValue::Array(x), TsonValue::Array(y)) => {
                    x.len() == y.len()
                        && x.iter().zip(y.iter()).all(|(a, b)| skeleton_matches(a, b))
                }
                (TsonValue::Object(x), TsonValue::Object(y)) => {
                    x.len() == y.len()
                        && x.keys().eq(y.keys())
                        && x.values().zip(y.values()).all(|(a, b)| skeleton_matches(a, b))
                }
                (TsonValue::Array(_) | TsonValue::Object(_), _) => false,
                // A non-container may have been rewritten to a string leaf.
                _ => true,
            }
        }
        prop_assert!(skeleton_matches(&value, &encoded));
        prop_assert!(count_nodes(&encoded) >= 1);
    }
}
