//! # serde_tson
//!
//! A tagged-string serialization layer (TSON) that carries rich runtime value
//! kinds through plain JSON.
//!
//! ## What is TSON?
//!
//! JSON natively supports only null, booleans, numbers, strings, arrays and
//! string-keyed objects. TSON closes the gap to a richer value set —
//! arbitrary-precision integers, timestamps, URLs, regular-expression
//! patterns and raw byte buffers — by rewriting each such value into a tagged
//! string of the form `t!<KindName>:<payload>` before the JSON serializer
//! runs, and reversing the substitution after deserialization. The output is
//! always valid JSON; no new syntax is introduced.
//!
//! ## Key Features
//!
//! - **Plain JSON wire format**: any JSON consumer can read TSON output;
//!   tagged values are ordinary strings
//! - **Fixed tag vocabulary**: `bigint`, `Date`, `URL`, `RegExp`,
//!   `Uint8Array`, `ArrayBuffer`
//! - **Rule-driven**: an ordered, immutable table of predicate/handler pairs;
//!   first match wins, and custom tables can extend the vocabulary
//! - **Pure and total**: `encode` never fails; `decode` fails fast only on
//!   malformed tag payloads
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_tson = "0.1"
//! ```
//!
//! ### Round-tripping exotic values
//!
//! ```rust
//! use serde_tson::{from_str, to_string, tson, TsonValue};
//! use num_bigint::BigInt;
//!
//! let value = tson!({
//!     "id": (BigInt::from(10)),
//!     "name": "Alice"
//! });
//!
//! let json = to_string(&value).unwrap();
//! assert_eq!(json, r#"{"id":"t!bigint:10","name":"Alice"}"#);
//!
//! let back = from_str(&json).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! ### The transform pair by itself
//!
//! `encode` and `decode` are the two independently useful entry points;
//! [`to_string`] and [`from_str`] only add the native JSON step.
//!
//! ```rust
//! use serde_tson::{decode, encode, TsonValue};
//! use url::Url;
//!
//! let value = TsonValue::Array(vec![
//!     TsonValue::from(1),
//!     TsonValue::from("hello"),
//!     TsonValue::Url(Url::parse("https://example.com/").unwrap()),
//! ]);
//!
//! let encoded = encode(&value);
//! assert_eq!(
//!     encoded.as_array().unwrap()[2],
//!     TsonValue::from("t!URL:https://example.com/"),
//! );
//! assert_eq!(decode(encoded).unwrap(), value);
//! ```
//!
//! ## Caveats
//!
//! - **No escaping**: a genuine user string that happens to start with a
//!   reserved prefix such as `t!bigint:` is indistinguishable from a tag and
//!   will be misinterpreted (or rejected) on decode.
//! - **Byte buffers are text-lossy**: buffer payloads are the bytes
//!   reinterpreted as UTF-8, so content that is not valid UTF-8 does not
//!   round-trip. A [`TsonValue::Buffer`] additionally comes back as
//!   [`TsonValue::Bytes`]; the view kind is not preserved.
//! - **Custom tables fail silently on uncovered kinds**: an exotic value no
//!   stringify rule claims is traversed as a generic mapping, yielding a
//!   structurally valid but semantically wrong encoding.

pub mod error;
pub mod macros;
pub mod map;
pub mod pattern;
pub mod rules;
pub mod transform;
pub mod value;

pub use error::{Error, Result};
pub use map::TsonMap;
pub use pattern::Pattern;
pub use rules::{ParseRule, RuleTable, StringifyRule};
pub use transform::Transformer;
pub use value::{Number, TsonValue};

use std::io;

/// Rewrites exotic values in a value tree into tagged strings.
///
/// Uses the built-in rule table; see [`Transformer`] for custom tables.
/// This function is total and never mutates its input.
///
/// # Examples
///
/// ```rust
/// use serde_tson::{encode, TsonValue};
/// use num_bigint::BigInt;
///
/// let encoded = encode(&TsonValue::BigInt(BigInt::from(10)));
/// assert_eq!(encoded, TsonValue::String("t!bigint:10".to_string()));
/// ```
#[must_use]
pub fn encode(value: &TsonValue) -> TsonValue {
    Transformer::new().encode(value)
}

/// Rewrites tagged strings in a generic value tree back into exotic values.
///
/// Uses the built-in rule table; see [`Transformer`] for custom tables.
///
/// # Examples
///
/// ```rust
/// use serde_tson::{decode, TsonValue};
/// use num_bigint::BigInt;
///
/// let decoded = decode(TsonValue::from("t!bigint:10")).unwrap();
/// assert_eq!(decoded, TsonValue::BigInt(BigInt::from(10)));
/// ```
///
/// # Errors
///
/// Returns an error if a string matching a tag prefix carries a payload the
/// target kind's constructor rejects.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(value: TsonValue) -> Result<TsonValue> {
    Transformer::new().decode(value)
}

/// Serializes a value tree to a JSON string, tagging exotic values.
///
/// Equivalent to encoding the tree and handing the result to the native JSON
/// serializer.
///
/// # Examples
///
/// ```rust
/// use serde_tson::{to_string, tson};
///
/// let json = to_string(&tson!({ "a": 1 })).unwrap();
/// assert_eq!(json, r#"{"a":1}"#);
/// ```
///
/// # Errors
///
/// Propagates native serializer errors unchanged.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &TsonValue) -> Result<String> {
    Transformer::new().to_string(value)
}

/// Serializes a value tree to a pretty-printed JSON string.
///
/// # Errors
///
/// Propagates native serializer errors unchanged.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty(value: &TsonValue) -> Result<String> {
    serde_json::to_string_pretty(&encode(value)).map_err(Error::json)
}

/// Deserializes a JSON string into a value tree, reconstructing exotic values.
///
/// # Examples
///
/// ```rust
/// use serde_tson::from_str;
/// use chrono::{TimeZone, Utc};
///
/// let value = from_str(r#"{"a":"t!Date:2024-01-01T00:00:00.000Z"}"#).unwrap();
/// let date = value.as_object().unwrap().get("a").unwrap();
/// assert_eq!(
///     date.as_date(),
///     Some(&Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
/// );
/// ```
///
/// # Errors
///
/// Propagates native deserializer errors and tag reconstruction failures.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<TsonValue> {
    Transformer::new().from_str(s)
}

/// Serializes a value tree as JSON to a writer, tagging exotic values.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, value: &TsonValue) -> Result<()>
where
    W: io::Write,
{
    let json = to_string(value)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserializes a value tree from an I/O stream of JSON.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid JSON, or a tag
/// payload cannot be reconstructed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<TsonValue>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserializes a value tree from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid JSON, or a
/// tag payload cannot be reconstructed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<TsonValue> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use num_bigint::BigInt;

    #[test]
    fn test_roundtrip_object_with_exotics() {
        let value = tson!({
            "id": (BigInt::from(10)),
            "when": (Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            "tags": ["a", "b"]
        });

        let json = to_string(&value).unwrap();
        let back = from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_pretty_printing() {
        let value = tson!({ "a": 1, "b": [true, null] });
        let json = to_string_pretty(&value).unwrap();
        assert!(json.contains('\n'));
        assert_eq!(from_str(&json).unwrap(), value);
    }

    #[test]
    fn test_writer_and_reader() {
        let value = tson!({ "a": (BigInt::from(-3)) });

        let mut buffer = Vec::new();
        to_writer(&mut buffer, &value).unwrap();
        assert_eq!(from_slice(&buffer).unwrap(), value);

        let cursor = std::io::Cursor::new(buffer);
        assert_eq!(from_reader(cursor).unwrap(), value);
    }

    #[test]
    fn test_malformed_json_propagates() {
        assert!(matches!(from_str("{not json"), Err(Error::Json(_))));
    }
}
