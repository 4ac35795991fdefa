//! The tag rule table: ordered predicate/handler pairs driving the transform.
//!
//! Each exotic kind is carried through JSON as a tagged string of the form
//! `t!<KindName>:<payload>`. The payload runs to the end of the string and
//! may itself contain colons; only the leading prefix is significant.
//!
//! | Tag prefix | Kind | Payload |
//! |---|---|---|
//! | `t!bigint:` | big integer | decimal digits, optional leading `-` |
//! | `t!Date:` | timestamp | ISO-8601, millisecond precision, `Z` suffix |
//! | `t!URL:` | resource locator | canonical URL text |
//! | `t!RegExp:` | pattern | `/source/flags` |
//! | `t!Uint8Array:` | fixed-length buffer | bytes reinterpreted as UTF-8 (lossy) |
//! | `t!ArrayBuffer:` | growable-buffer view | same UTF-8 reinterpretation |
//!
//! Rules are evaluated in declaration order and the first matching predicate
//! wins, independent of specificity. The built-in prefixes cannot overlap,
//! but callers extending a table must place more specific prefixes before
//! less specific ones that could also match.
//!
//! ## Extending the table
//!
//! ```rust
//! use serde_tson::{RuleTable, Transformer, TsonValue};
//!
//! // Decode an application-specific tag on top of the built-ins.
//! let rules = RuleTable::builtin().with_parse_rule(
//!     |s| s.starts_with("t!upper:"),
//!     |s| Ok(TsonValue::String(s["t!upper:".len()..].to_uppercase())),
//! );
//! let transformer = Transformer::with_rules(rules);
//!
//! let decoded = transformer
//!     .decode(TsonValue::from("t!upper:quiet"))
//!     .unwrap();
//! assert_eq!(decoded, TsonValue::from("QUIET"));
//! ```

use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::value::TsonValue;
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use url::Url;

/// Tag prefix for arbitrary-precision integers.
pub const BIGINT_TAG: &str = "t!bigint:";
/// Tag prefix for timestamps.
pub const DATE_TAG: &str = "t!Date:";
/// Tag prefix for resource locators.
pub const URL_TAG: &str = "t!URL:";
/// Tag prefix for pattern matchers.
pub const REGEXP_TAG: &str = "t!RegExp:";
/// Tag prefix for fixed-length byte buffers.
pub const UINT8_ARRAY_TAG: &str = "t!Uint8Array:";
/// Tag prefix for growable-buffer views.
pub const ARRAY_BUFFER_TAG: &str = "t!ArrayBuffer:";

/// A rule applied on the encode path: a predicate over values and a handler
/// producing the tagged-string substitute for a matched value.
pub struct StringifyRule {
    matches: Box<dyn Fn(&TsonValue) -> bool + Send + Sync>,
    handler: Box<dyn Fn(&TsonValue) -> String + Send + Sync>,
}

impl StringifyRule {
    /// Creates a stringify rule from a predicate and handler pair.
    ///
    /// The handler is only ever invoked on values the predicate accepted.
    pub fn new<M, H>(matches: M, handler: H) -> Self
    where
        M: Fn(&TsonValue) -> bool + Send + Sync + 'static,
        H: Fn(&TsonValue) -> String + Send + Sync + 'static,
    {
        StringifyRule {
            matches: Box::new(matches),
            handler: Box::new(handler),
        }
    }

    /// Tests whether this rule applies to the value.
    #[must_use]
    pub fn matches(&self, value: &TsonValue) -> bool {
        (self.matches)(value)
    }

    /// Produces the tagged string for a matched value.
    #[must_use]
    pub fn apply(&self, value: &TsonValue) -> String {
        (self.handler)(value)
    }
}

/// A rule applied on the decode path: a predicate over string leaves and a
/// handler reconstructing the typed value from a matched tagged string.
pub struct ParseRule {
    matches: Box<dyn Fn(&str) -> bool + Send + Sync>,
    handler: Box<dyn Fn(&str) -> Result<TsonValue> + Send + Sync>,
}

impl ParseRule {
    /// Creates a parse rule from a predicate and handler pair.
    ///
    /// The handler receives the full tagged string, prefix included, and may
    /// fail; reconstruction failures propagate to the `decode` caller.
    pub fn new<M, H>(matches: M, handler: H) -> Self
    where
        M: Fn(&str) -> bool + Send + Sync + 'static,
        H: Fn(&str) -> Result<TsonValue> + Send + Sync + 'static,
    {
        ParseRule {
            matches: Box::new(matches),
            handler: Box::new(handler),
        }
    }

    /// Tests whether this rule applies to the string.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        (self.matches)(text)
    }

    /// Reconstructs the typed value from a matched tagged string.
    pub fn apply(&self, text: &str) -> Result<TsonValue> {
        (self.handler)(text)
    }
}

/// The ordered rule table a [`Transformer`](crate::Transformer) applies.
///
/// Immutable once constructed: rules are appended through the `with_*`
/// builders and evaluated strictly in that order. [`RuleTable::builtin`]
/// yields the six standard rules; [`RuleTable::empty`] starts from nothing.
pub struct RuleTable {
    stringify: Vec<StringifyRule>,
    parse: Vec<ParseRule>,
}

impl RuleTable {
    /// Creates a table with no rules at all.
    ///
    /// A transformer over an empty table is a structure-preserving deep copy
    /// on encode and the identity on decode.
    #[must_use]
    pub fn empty() -> Self {
        RuleTable {
            stringify: Vec::new(),
            parse: Vec::new(),
        }
    }

    /// Creates the standard rule table covering every built-in exotic kind.
    #[must_use]
    pub fn builtin() -> Self {
        RuleTable::empty()
            .with_stringify_rule(
                |v| matches!(v, TsonValue::BigInt(_)),
                |v| match v {
                    TsonValue::BigInt(bi) => tag_bigint(bi),
                    _ => String::new(),
                },
            )
            .with_stringify_rule(
                |v| matches!(v, TsonValue::Date(_)),
                |v| match v {
                    TsonValue::Date(dt) => tag_date(dt),
                    _ => String::new(),
                },
            )
            .with_stringify_rule(
                |v| matches!(v, TsonValue::Url(_)),
                |v| match v {
                    TsonValue::Url(url) => tag_url(url),
                    _ => String::new(),
                },
            )
            .with_stringify_rule(
                |v| matches!(v, TsonValue::Regex(_)),
                |v| match v {
                    TsonValue::Regex(pattern) => tag_pattern(pattern),
                    _ => String::new(),
                },
            )
            .with_stringify_rule(
                |v| matches!(v, TsonValue::Bytes(_)),
                |v| match v {
                    TsonValue::Bytes(bytes) => tag_bytes(bytes),
                    _ => String::new(),
                },
            )
            .with_stringify_rule(
                |v| matches!(v, TsonValue::Buffer(_)),
                |v| match v {
                    TsonValue::Buffer(bytes) => tag_buffer(bytes),
                    _ => String::new(),
                },
            )
            .with_parse_rule(
                |s| s.starts_with(BIGINT_TAG),
                |s| parse_bigint(payload(s, BIGINT_TAG)),
            )
            .with_parse_rule(
                |s| s.starts_with(DATE_TAG),
                |s| parse_date(payload(s, DATE_TAG)),
            )
            .with_parse_rule(
                |s| s.starts_with(URL_TAG),
                |s| parse_url(payload(s, URL_TAG)),
            )
            .with_parse_rule(
                |s| s.starts_with(REGEXP_TAG),
                |s| parse_pattern(payload(s, REGEXP_TAG)),
            )
            .with_parse_rule(
                |s| s.starts_with(UINT8_ARRAY_TAG),
                |s| Ok(parse_bytes(payload(s, UINT8_ARRAY_TAG))),
            )
            // The growable-view tag reconstructs the fixed-length kind; the
            // view kind does not survive a round trip.
            .with_parse_rule(
                |s| s.starts_with(ARRAY_BUFFER_TAG),
                |s| Ok(parse_bytes(payload(s, ARRAY_BUFFER_TAG))),
            )
    }

    /// Appends a stringify rule, evaluated after all rules added so far.
    #[must_use]
    pub fn with_stringify_rule<M, H>(mut self, matches: M, handler: H) -> Self
    where
        M: Fn(&TsonValue) -> bool + Send + Sync + 'static,
        H: Fn(&TsonValue) -> String + Send + Sync + 'static,
    {
        self.stringify.push(StringifyRule::new(matches, handler));
        self
    }

    /// Appends a parse rule, evaluated after all rules added so far.
    #[must_use]
    pub fn with_parse_rule<M, H>(mut self, matches: M, handler: H) -> Self
    where
        M: Fn(&str) -> bool + Send + Sync + 'static,
        H: Fn(&str) -> Result<TsonValue> + Send + Sync + 'static,
    {
        self.parse.push(ParseRule::new(matches, handler));
        self
    }

    /// The stringify rules, in evaluation order.
    #[must_use]
    pub fn stringify_rules(&self) -> &[StringifyRule] {
        &self.stringify
    }

    /// The parse rules, in evaluation order.
    #[must_use]
    pub fn parse_rules(&self) -> &[ParseRule] {
        &self.parse
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::builtin()
    }
}

fn payload<'a>(text: &'a str, tag: &str) -> &'a str {
    text.strip_prefix(tag).unwrap_or(text)
}

// Tag renderers, shared with TsonValue's Serialize impl so direct JSON
// serialization and the encode transform always agree.

pub(crate) fn render_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn tag_bigint(bi: &BigInt) -> String {
    format!("{}{}", BIGINT_TAG, bi)
}

pub(crate) fn tag_date(dt: &DateTime<Utc>) -> String {
    format!("{}{}", DATE_TAG, render_date(dt))
}

pub(crate) fn tag_url(url: &Url) -> String {
    format!("{}{}", URL_TAG, url)
}

pub(crate) fn tag_pattern(pattern: &Pattern) -> String {
    format!("{}{}", REGEXP_TAG, pattern)
}

// Lossy on purpose: bytes that are not valid UTF-8 are replaced and do not
// round-trip. Only text-representable buffer content survives.
pub(crate) fn tag_bytes(bytes: &[u8]) -> String {
    format!("{}{}", UINT8_ARRAY_TAG, String::from_utf8_lossy(bytes))
}

pub(crate) fn tag_buffer(bytes: &[u8]) -> String {
    format!("{}{}", ARRAY_BUFFER_TAG, String::from_utf8_lossy(bytes))
}

fn parse_bigint(payload: &str) -> Result<TsonValue> {
    payload
        .parse::<BigInt>()
        .map(TsonValue::BigInt)
        .map_err(|_| Error::invalid_bigint(payload))
}

fn parse_date(payload: &str) -> Result<TsonValue> {
    DateTime::parse_from_rfc3339(payload)
        .map(|dt| TsonValue::Date(dt.with_timezone(&Utc)))
        .map_err(|e| Error::invalid_date(payload, e))
}

fn parse_url(payload: &str) -> Result<TsonValue> {
    Url::parse(payload)
        .map(TsonValue::Url)
        .map_err(|e| Error::invalid_url(payload, e))
}

fn parse_pattern(payload: &str) -> Result<TsonValue> {
    payload.parse::<Pattern>().map(TsonValue::Regex)
}

fn parse_bytes(payload: &str) -> TsonValue {
    TsonValue::Bytes(payload.as_bytes().to_vec())
}
