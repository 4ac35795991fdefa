//! The tree transformer: recursive encode/decode walkers over value trees.
//!
//! [`Transformer`] owns a [`RuleTable`] and applies it depth-first across an
//! arbitrary [`TsonValue`] tree. On encode, exotic values are substituted by
//! tagged strings before the native JSON serializer runs; on decode, string
//! leaves matching a tag prefix are reconstructed into exotic values after
//! the native deserializer runs.
//!
//! The transformer holds no other state and never mutates or retains its
//! input, so a single instance is safe to share across threads.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tson::{Transformer, TsonValue};
//! use num_bigint::BigInt;
//!
//! let transformer = Transformer::new();
//!
//! let encoded = transformer.encode(&TsonValue::BigInt(BigInt::from(10)));
//! assert_eq!(encoded, TsonValue::String("t!bigint:10".to_string()));
//!
//! let decoded = transformer.decode(encoded).unwrap();
//! assert_eq!(decoded, TsonValue::BigInt(BigInt::from(10)));
//! ```

use crate::error::{Error, Result};
use crate::rules::RuleTable;
use crate::value::{Number, TsonValue};
use crate::TsonMap;

/// Applies a [`RuleTable`] across value trees.
///
/// [`Transformer::new`] uses the built-in rules; [`Transformer::with_rules`]
/// takes an explicitly constructed table, which is the only way to extend or
/// restrict the tag vocabulary — there is no global mutable rule list.
pub struct Transformer {
    rules: RuleTable,
}

impl Transformer {
    /// Creates a transformer over the built-in rule table.
    #[must_use]
    pub fn new() -> Self {
        Transformer {
            rules: RuleTable::builtin(),
        }
    }

    /// Creates a transformer over a custom rule table.
    ///
    /// Rules are evaluated in the table's order and the first match wins, so
    /// the caller controls precedence.
    #[must_use]
    pub fn with_rules(rules: RuleTable) -> Self {
        Transformer { rules }
    }

    /// Returns the rule table this transformer applies.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Rewrites exotic values into tagged strings, depth-first.
    ///
    /// Primitives pass through; arrays recurse element-wise; any other value
    /// is tested against the stringify rules in order, and the first match
    /// substitutes its tagged string without recursing further into that
    /// subtree. Unmatched objects traverse key-wise.
    ///
    /// This function is total. An exotic value left uncovered by a custom
    /// rule table falls through to generic mapping traversal, producing a
    /// structurally valid but semantically wrong encoding with no error:
    /// scalar-like kinds become an empty object, the buffer kinds an
    /// index-keyed object of byte numbers.
    #[must_use]
    pub fn encode(&self, value: &TsonValue) -> TsonValue {
        match value {
            TsonValue::Null
            | TsonValue::Bool(_)
            | TsonValue::Number(_)
            | TsonValue::String(_) => value.clone(),
            TsonValue::Array(items) => {
                TsonValue::Array(items.iter().map(|item| self.encode(item)).collect())
            }
            other => {
                for rule in self.rules.stringify_rules() {
                    if rule.matches(other) {
                        return TsonValue::String(rule.apply(other));
                    }
                }
                self.encode_as_mapping(other)
            }
        }
    }

    /// Generic mapping traversal for anything no stringify rule claimed.
    fn encode_as_mapping(&self, value: &TsonValue) -> TsonValue {
        match value {
            TsonValue::Object(map) => TsonValue::Object(
                map.iter()
                    .map(|(key, item)| (key.clone(), self.encode(item)))
                    .collect(),
            ),
            TsonValue::Bytes(bytes) | TsonValue::Buffer(bytes) => {
                // Enumerating a byte buffer's own keys yields its indices.
                TsonValue::Object(
                    bytes
                        .iter()
                        .enumerate()
                        .map(|(i, b)| (i.to_string(), TsonValue::Number(Number::from(*b))))
                        .collect(),
                )
            }
            // Scalar-like exotic kinds have no own keys to enumerate.
            _ => TsonValue::Object(TsonMap::new()),
        }
    }

    /// Rewrites tagged strings back into exotic values, depth-first.
    ///
    /// Arrays and objects recurse (keys are never transformed); every string
    /// leaf is tested against the parse rules in order, the first match
    /// reconstructing the typed value; anything else passes through.
    ///
    /// # Errors
    ///
    /// Propagates reconstruction failures for malformed tagged strings, e.g.
    /// a `t!Date:` payload the date parser rejects. A user string that
    /// happens to start with a reserved prefix is indistinguishable from a
    /// tag; there is no escaping mechanism.
    pub fn decode(&self, value: TsonValue) -> Result<TsonValue> {
        match value {
            TsonValue::Array(items) => Ok(TsonValue::Array(
                items
                    .into_iter()
                    .map(|item| self.decode(item))
                    .collect::<Result<_>>()?,
            )),
            TsonValue::Object(map) => Ok(TsonValue::Object(
                map.into_iter()
                    .map(|(key, item)| Ok((key, self.decode(item)?)))
                    .collect::<Result<_>>()?,
            )),
            TsonValue::String(s) => {
                for rule in self.rules.parse_rules() {
                    if rule.matches(&s) {
                        return rule.apply(&s);
                    }
                }
                Ok(TsonValue::String(s))
            }
            other => Ok(other),
        }
    }

    /// Serializes a value tree to JSON text through this transformer's rules.
    ///
    /// # Errors
    ///
    /// Propagates native serializer errors unchanged.
    pub fn to_string(&self, value: &TsonValue) -> Result<String> {
        serde_json::to_string(&self.encode(value)).map_err(Error::json)
    }

    /// Deserializes JSON text into a value tree through this transformer's rules.
    ///
    /// # Errors
    ///
    /// Propagates native deserializer errors and tag reconstruction failures.
    pub fn from_str(&self, text: &str) -> Result<TsonValue> {
        let raw: TsonValue = serde_json::from_str(text).map_err(Error::json)?;
        self.decode(raw)
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Transformer::new()
    }
}
