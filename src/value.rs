//! Dynamic value representation for TSON data.
//!
//! This module provides the [`TsonValue`] enum which represents any value the
//! tagging transform can carry: the six JSON-native kinds plus the fixed set
//! of exotic kinds (big integers, timestamps, URLs, patterns, byte buffers).
//!
//! ## Core Types
//!
//! - [`TsonValue`]: the closed value union the tree transformer walks
//! - [`Number`]: a JSON-native numeric value (integer or float)
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_tson::{TsonValue, Number};
//! use num_bigint::BigInt;
//!
//! // From primitives
//! let null = TsonValue::Null;
//! let boolean = TsonValue::from(true);
//! let number = TsonValue::from(42);
//! let text = TsonValue::from("hello");
//! let big = TsonValue::from(BigInt::from(10));
//!
//! // Using the tson! macro
//! use serde_tson::tson;
//! let obj = tson!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use serde_tson::TsonValue;
//!
//! let value = TsonValue::from(42);
//! assert!(value.is_number());
//! assert!(!value.is_string());
//!
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```
//!
//! ## Serde behavior
//!
//! `Serialize` maps JSON-native variants directly and renders exotic variants
//! as their tagged strings, so serializing an un-encoded tree agrees with
//! [`to_string`](crate::to_string) by construction. `Deserialize` only ever
//! produces the JSON-native variants; reconstructing exotic kinds from tagged
//! strings is [`decode`](crate::decode)'s job.

use crate::pattern::Pattern;
use crate::rules;
use crate::TsonMap;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// A dynamically-typed representation of any value TSON can carry.
///
/// The first six variants are the JSON-native kinds; the rest are the exotic
/// kinds the tagging transform encodes as `t!<KindName>:<payload>` strings.
/// After [`decode`](crate::decode) or JSON deserialization only JSON-native
/// variants appear in container positions unless a tag reconstructed one of
/// the exotic kinds.
///
/// # Examples
///
/// ```rust
/// use serde_tson::{TsonValue, Number};
///
/// let null = TsonValue::Null;
/// let num = TsonValue::Number(Number::Integer(42));
/// let text = TsonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<TsonValue>),
    Object(TsonMap),
    /// Arbitrary-precision integer, tagged as `t!bigint:`.
    BigInt(BigInt),
    /// UTC timestamp with millisecond precision, tagged as `t!Date:`.
    Date(DateTime<Utc>),
    /// Resource locator, tagged as `t!URL:`.
    Url(Url),
    /// Pattern matcher with flags, tagged as `t!RegExp:`.
    Regex(Pattern),
    /// Fixed-length byte buffer, tagged as `t!Uint8Array:`.
    Bytes(Vec<u8>),
    /// Growable-buffer view, tagged as `t!ArrayBuffer:`. Serializes like
    /// [`Bytes`](TsonValue::Bytes) and decodes back as `Bytes`; the kind is
    /// not preserved across a round trip.
    Buffer(Vec<u8>),
}

/// A JSON-native numeric value.
///
/// # Examples
///
/// ```rust
/// use serde_tson::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and floats with no fractional part
    /// that fit in i64 range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl TsonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, TsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, TsonValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, TsonValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, TsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, TsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, TsonValue::Object(_))
    }

    /// Returns `true` if the value is a big integer.
    #[inline]
    #[must_use]
    pub const fn is_bigint(&self) -> bool {
        matches!(self, TsonValue::BigInt(_))
    }

    /// Returns `true` if the value is a date.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, TsonValue::Date(_))
    }

    /// Returns `true` if the value is a URL.
    #[inline]
    #[must_use]
    pub const fn is_url(&self) -> bool {
        matches!(self, TsonValue::Url(_))
    }

    /// Returns `true` if the value is a pattern.
    #[inline]
    #[must_use]
    pub const fn is_regex(&self) -> bool {
        matches!(self, TsonValue::Regex(_))
    }

    /// Returns `true` if the value is a fixed-length byte buffer.
    #[inline]
    #[must_use]
    pub const fn is_bytes(&self) -> bool {
        matches!(self, TsonValue::Bytes(_))
    }

    /// Returns `true` if the value is a growable-buffer view.
    #[inline]
    #[must_use]
    pub const fn is_buffer(&self) -> bool {
        matches!(self, TsonValue::Buffer(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::TsonValue;
    ///
    /// assert_eq!(TsonValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(TsonValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TsonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as an `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<TsonValue>> {
        match self {
            TsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&TsonMap> {
        match self {
            TsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a big integer, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            TsonValue::BigInt(bi) => Some(bi),
            _ => None,
        }
    }

    /// If the value is a date, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            TsonValue::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is a URL, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            TsonValue::Url(url) => Some(url),
            _ => None,
        }
    }

    /// If the value is a pattern, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_regex(&self) -> Option<&Pattern> {
        match self {
            TsonValue::Regex(pattern) => Some(pattern),
            _ => None,
        }
    }

    /// If the value is either buffer kind, returns its bytes. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tson::TsonValue;
    ///
    /// let bytes = TsonValue::Bytes(vec![1, 2, 3]);
    /// let buffer = TsonValue::Buffer(vec![1, 2, 3]);
    /// assert_eq!(bytes.as_bytes(), Some(&[1u8, 2, 3][..]));
    /// assert_eq!(buffer.as_bytes(), Some(&[1u8, 2, 3][..]));
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TsonValue::Bytes(bytes) | TsonValue::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for TsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsonValue::Null => write!(f, "null"),
            TsonValue::Bool(b) => write!(f, "{}", b),
            TsonValue::Number(n) => write!(f, "{}", n),
            TsonValue::String(s) => write!(f, "{}", s),
            TsonValue::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            TsonValue::Object(_) => write!(f, "{{object}}"),
            TsonValue::BigInt(bi) => write!(f, "{}n", bi),
            TsonValue::Date(dt) => write!(f, "{}", rules::render_date(dt)),
            TsonValue::Url(url) => write!(f, "{}", url),
            TsonValue::Regex(pattern) => write!(f, "{}", pattern),
            TsonValue::Bytes(bytes) | TsonValue::Buffer(bytes) => {
                write!(f, "{}", String::from_utf8_lossy(bytes))
            }
        }
    }
}

impl Serialize for TsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TsonValue::Null => serializer.serialize_unit(),
            TsonValue::Bool(b) => serializer.serialize_bool(*b),
            TsonValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            TsonValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            TsonValue::String(s) => serializer.serialize_str(s),
            TsonValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            TsonValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            // Exotic kinds serialize as their tagged rendering, so that
            // serializing an un-encoded tree agrees with to_string.
            TsonValue::BigInt(bi) => serializer.serialize_str(&rules::tag_bigint(bi)),
            TsonValue::Date(dt) => serializer.serialize_str(&rules::tag_date(dt)),
            TsonValue::Url(url) => serializer.serialize_str(&rules::tag_url(url)),
            TsonValue::Regex(pattern) => serializer.serialize_str(&rules::tag_pattern(pattern)),
            TsonValue::Bytes(bytes) => serializer.serialize_str(&rules::tag_bytes(bytes)),
            TsonValue::Buffer(bytes) => serializer.serialize_str(&rules::tag_buffer(bytes)),
        }
    }
}

impl<'de> Deserialize<'de> for TsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct TsonValueVisitor;

        impl<'de> Visitor<'de> for TsonValueVisitor {
            type Value = TsonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(TsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(TsonValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(TsonValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(TsonValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(TsonValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(TsonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(TsonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(TsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(TsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(TsonValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = TsonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(TsonValue::Object(values))
            }
        }

        deserializer.deserialize_any(TsonValueVisitor)
    }
}

// TryFrom implementations for extracting values from TsonValue
impl TryFrom<TsonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: TsonValue) -> crate::Result<Self> {
        match value {
            TsonValue::Number(Number::Integer(i)) => Ok(i),
            TsonValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<TsonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: TsonValue) -> crate::Result<Self> {
        match value {
            TsonValue::Number(Number::Integer(i)) => Ok(i as f64),
            TsonValue::Number(Number::Float(f)) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<TsonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: TsonValue) -> crate::Result<Self> {
        match value {
            TsonValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<TsonValue> for String {
    type Error = crate::Error;

    fn try_from(value: TsonValue) -> crate::Result<Self> {
        match value {
            TsonValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

// From implementations for creating TsonValue from primitives
impl From<bool> for TsonValue {
    fn from(value: bool) -> Self {
        TsonValue::Bool(value)
    }
}

impl From<i8> for TsonValue {
    fn from(value: i8) -> Self {
        TsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for TsonValue {
    fn from(value: i16) -> Self {
        TsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for TsonValue {
    fn from(value: i32) -> Self {
        TsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for TsonValue {
    fn from(value: i64) -> Self {
        TsonValue::Number(Number::Integer(value))
    }
}

impl From<u8> for TsonValue {
    fn from(value: u8) -> Self {
        TsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for TsonValue {
    fn from(value: u16) -> Self {
        TsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for TsonValue {
    fn from(value: u32) -> Self {
        TsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for TsonValue {
    fn from(value: f32) -> Self {
        TsonValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for TsonValue {
    fn from(value: f64) -> Self {
        TsonValue::Number(Number::Float(value))
    }
}

impl From<String> for TsonValue {
    fn from(value: String) -> Self {
        TsonValue::String(value)
    }
}

impl From<&str> for TsonValue {
    fn from(value: &str) -> Self {
        TsonValue::String(value.to_string())
    }
}

impl From<Vec<TsonValue>> for TsonValue {
    fn from(value: Vec<TsonValue>) -> Self {
        TsonValue::Array(value)
    }
}

impl From<TsonMap> for TsonValue {
    fn from(value: TsonMap) -> Self {
        TsonValue::Object(value)
    }
}

impl From<BigInt> for TsonValue {
    fn from(value: BigInt) -> Self {
        TsonValue::BigInt(value)
    }
}

impl From<DateTime<Utc>> for TsonValue {
    fn from(value: DateTime<Utc>) -> Self {
        TsonValue::Date(value)
    }
}

impl From<Url> for TsonValue {
    fn from(value: Url) -> Self {
        TsonValue::Url(value)
    }
}

impl From<Pattern> for TsonValue {
    fn from(value: Pattern) -> Self {
        TsonValue::Regex(value)
    }
}

/// `Vec<u8>` converts to the fixed-length buffer kind. Use
/// [`TsonValue::Buffer`] directly for the growable-view kind.
impl From<Vec<u8>> for TsonValue {
    fn from(value: Vec<u8>) -> Self {
        TsonValue::Bytes(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tryfrom_i64() {
        let value = TsonValue::Number(Number::Integer(42));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = TsonValue::Number(Number::Float(42.0));
        let result: i64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42);

        let value = TsonValue::String("test".to_string());
        assert!(i64::try_from(value).is_err());
    }

    #[test]
    fn test_tryfrom_f64() {
        let value = TsonValue::Number(Number::Float(3.5));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 3.5);

        let value = TsonValue::Number(Number::Integer(42));
        let result: f64 = TryFrom::try_from(value).unwrap();
        assert_eq!(result, 42.0);
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(TsonValue::from(true), TsonValue::Bool(true));
        assert_eq!(
            TsonValue::from(42i32),
            TsonValue::Number(Number::Integer(42))
        );
        assert_eq!(
            TsonValue::from(3.5f64),
            TsonValue::Number(Number::Float(3.5))
        );
        assert_eq!(
            TsonValue::from("test"),
            TsonValue::String("test".to_string())
        );
    }

    #[test]
    fn test_from_exotics() {
        let value = TsonValue::from(BigInt::from(10));
        assert!(value.is_bigint());
        assert_eq!(value.as_bigint(), Some(&BigInt::from(10)));

        let url = Url::parse("https://example.com/").unwrap();
        let value = TsonValue::from(url.clone());
        assert_eq!(value.as_url(), Some(&url));

        let value = TsonValue::from(vec![1u8, 2, 3]);
        assert!(value.is_bytes());
        assert!(!value.is_buffer());
        assert_eq!(value.as_bytes(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn test_exotic_serialization_is_tagged() {
        let value = TsonValue::BigInt(BigInt::from(10));
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"t!bigint:10\"");

        let value = TsonValue::Buffer(b"hi".to_vec());
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, "\"t!ArrayBuffer:hi\"");
    }

    #[test]
    fn test_deserialize_is_generic() {
        let value: TsonValue = serde_json::from_str("\"t!bigint:10\"").unwrap();
        // Deserialization never reconstructs exotic kinds on its own.
        assert_eq!(value, TsonValue::String("t!bigint:10".to_string()));

        let value: TsonValue = serde_json::from_str("[1, 2.5, null, true]").unwrap();
        assert_eq!(
            value,
            TsonValue::Array(vec![
                TsonValue::Number(Number::Integer(1)),
                TsonValue::Number(Number::Float(2.5)),
                TsonValue::Null,
                TsonValue::Bool(true),
            ])
        );
    }

    #[test]
    fn test_const_is_methods() {
        const fn check_null(v: &TsonValue) -> bool {
            v.is_null()
        }

        let null_value = TsonValue::Null;
        assert!(check_null(&null_value));
    }
}
